//! Pages
//!
//! Top-level page components for each route.

pub mod about;
pub mod create;
pub mod detail;
pub mod list;

pub use about::About;
pub use create::CreateAnecdote;
pub use detail::AnecdoteDetail;
pub use list::AnecdoteList;

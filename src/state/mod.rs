//! State Management
//!
//! The anecdote collection and notification state.

pub mod app_state;

pub use app_state::{provide_app_state, Anecdote, AnecdoteDraft, AppState, Notification};

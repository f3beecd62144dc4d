//! UI Components
//!
//! Chrome components shared by every view.

pub mod nav;
pub mod notification;

pub use nav::Menu;
pub use notification::Notification;

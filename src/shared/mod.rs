//! Shared state between the panel views
//!
//! Thread-safe application state plus the style-preset menu flag that the
//! parameters panel subscribes to.

pub mod menu;
pub mod state;

pub use menu::{MenuOpenStore, MenuWatcher};
pub use state::{QueueCommand, SharedAppState};

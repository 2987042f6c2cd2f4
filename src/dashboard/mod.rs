//! Panel UI Module
//!
//! The parameters panel and the collaborator views it assembles: queue
//! controls, prompt editor, settings accordions and the style-preset menu.

pub mod app;
pub mod components;
pub mod layout;
pub mod state;
pub mod theme;
pub mod views;

#[cfg(test)]
pub(crate) mod test_support;

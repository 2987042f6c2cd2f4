//! Reusable UI components for the panel

pub mod accordion;
pub mod param_slider;

pub use accordion::accordion;
pub use param_slider::{param_slider, SliderOptions};

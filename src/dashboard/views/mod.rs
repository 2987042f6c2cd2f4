//! Panel views

pub mod advanced_settings;
pub mod generation_settings;
pub mod parameters_panel;
pub mod prompts;
pub mod queue_controls;
pub mod queue_list;
pub mod style_preset_menu;
pub mod style_preset_trigger;
pub mod upscale_settings;

pub use advanced_settings::render_advanced_settings;
pub use generation_settings::render_generation_settings;
pub use parameters_panel::render_parameters_panel;
pub use prompts::render_prompts;
pub use queue_controls::render_queue_controls;
pub use queue_list::render_queue_list;
pub use style_preset_menu::render_style_preset_menu;
pub use style_preset_trigger::render_style_preset_trigger;
pub use upscale_settings::render_upscale_settings;

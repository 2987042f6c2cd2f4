//! Labeled parameter slider
//!
//! A slider row whose value can also be nudged with the mouse wheel while
//! hovered.

use egui::emath::Numeric;
use egui::{Response, RichText, Slider, Ui};
use std::ops::RangeInclusive;

use crate::dashboard::theme::ThemeColors;

/// Display and stepping options for [`param_slider`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SliderOptions<'a> {
    /// Step for dragging and for each wheel notch; 1/20th of the range if unset
    pub step: Option<f64>,
    pub suffix: Option<&'a str>,
    pub decimals: Option<usize>,
}

impl<'a> SliderOptions<'a> {
    pub fn step(step: f64) -> Self {
        Self {
            step: Some(step),
            ..Default::default()
        }
    }

    pub fn decimals(mut self, decimals: usize) -> Self {
        self.decimals = Some(decimals);
        self
    }

    pub fn suffix(mut self, suffix: &'a str) -> Self {
        self.suffix = Some(suffix);
        self
    }
}

/// Wheel step for a range: the explicit step, else 1/20th of the span,
/// never below 1 for integer values
pub fn wheel_step<Num: Numeric>(range: &RangeInclusive<Num>, step: Option<f64>) -> f64 {
    step.unwrap_or_else(|| {
        let span = (*range.end()).to_f64() - (*range.start()).to_f64();
        let auto = span / 20.0;
        if Num::INTEGRAL {
            auto.max(1.0)
        } else {
            auto
        }
    })
}

/// Apply one wheel notch to a value, clamped to the range
pub fn nudge<Num: Numeric>(value: Num, range: &RangeInclusive<Num>, step: f64, scroll_delta: f32) -> Num {
    if scroll_delta == 0.0 {
        return value;
    }
    let direction = if scroll_delta > 0.0 { 1.0 } else { -1.0 };
    let next = (value.to_f64() + direction * step)
        .clamp((*range.start()).to_f64(), (*range.end()).to_f64());
    Num::from_f64(next)
}

/// Render `label` followed by a slider for `value`
pub fn param_slider<Num: Numeric>(
    ui: &mut Ui,
    label: &str,
    value: &mut Num,
    range: RangeInclusive<Num>,
    options: SliderOptions<'_>,
) -> Response {
    ui.horizontal(|ui| {
        ui.label(RichText::new(label).color(ThemeColors::TEXT_SECONDARY));

        let step = wheel_step(&range, options.step);
        let mut slider = Slider::new(value, range.clone());
        if let Some(s) = options.step {
            slider = slider.step_by(s);
        }
        if let Some(s) = options.suffix {
            slider = slider.suffix(s);
        }
        if let Some(d) = options.decimals {
            slider = slider.fixed_decimals(d);
        }

        let mut response = ui.add(slider);

        if response.hovered() {
            let scroll_delta = ui.input(|i| i.raw_scroll_delta.y);
            let nudged = nudge(*value, &range, step, scroll_delta);
            if nudged != *value {
                *value = nudged;
                response.mark_changed();
                ui.ctx().request_repaint();
            }
        }

        response
    })
    .inner
}

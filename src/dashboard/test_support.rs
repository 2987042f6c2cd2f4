//! Headless egui driver for view tests

use egui::{Event, Modifiers, PointerButton, Pos2, Rect};

/// Runs views inside a central panel and feeds them synthetic input
pub struct UiHarness {
    pub ctx: egui::Context,
    screen: Rect,
    pending: Vec<Event>,
}

impl UiHarness {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            ctx: egui::Context::default(),
            screen: Rect::from_min_size(Pos2::ZERO, egui::vec2(width, height)),
            pending: Vec::new(),
        }
    }

    /// Queue an event for the next frame
    pub fn push(&mut self, event: Event) {
        self.pending.push(event);
    }

    /// Run one frame with the queued events
    pub fn frame<R>(&mut self, mut add_contents: impl FnMut(&mut egui::Ui) -> R) -> R {
        let input = egui::RawInput {
            screen_rect: Some(self.screen),
            events: std::mem::take(&mut self.pending),
            ..Default::default()
        };
        let mut output = None;
        let _ = self.ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                output = Some(add_contents(ui));
            });
        });
        output.expect("central panel was not shown")
    }

    /// Move, press and release the primary button at `pos` over three frames.
    /// Returns the output of the release frame.
    pub fn click<R>(&mut self, pos: Pos2, mut add_contents: impl FnMut(&mut egui::Ui) -> R) -> R {
        self.push(Event::PointerMoved(pos));
        self.frame(&mut add_contents);
        self.push(pointer_button(pos, true));
        self.frame(&mut add_contents);
        self.push(pointer_button(pos, false));
        self.frame(&mut add_contents)
    }

    /// Press and release `key` within the next frame
    pub fn press_key(&mut self, key: egui::Key) {
        for pressed in [true, false] {
            self.push(Event::Key {
                key,
                physical_key: None,
                pressed,
                repeat: false,
                modifiers: Modifiers::NONE,
            });
        }
    }

    /// Queue `notches` small wheel steps of `delta` points each
    pub fn scroll(&mut self, notches: usize, delta: f32) {
        for _ in 0..notches {
            self.push(Event::MouseWheel {
                unit: egui::MouseWheelUnit::Point,
                delta: egui::vec2(0.0, delta),
                modifiers: Modifiers::NONE,
            });
        }
    }

    /// Center of the widget `id` as laid out in the last frame
    pub fn center_of(&self, id: egui::Id) -> Pos2 {
        self.ctx
            .read_response(id)
            .map(|response| response.rect.center())
            .expect("widget was not laid out")
    }
}

fn pointer_button(pos: Pos2, pressed: bool) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::NONE,
    }
}

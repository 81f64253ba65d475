use fltk::{enums::Align, enums::Color, frame::Frame, prelude::*, window::Window};

use crate::screen::ScreenState;

/// Read-only detection metrics, toggled with Ctrl+Shift+D. Shows the
/// full published state so an operator can see why a layout was
/// chosen.
pub struct DebugOverlay {
    window: Window,
    body: Frame,
}

impl DebugOverlay {
    pub fn new() -> Self {
        let mut window = Window::default()
            .with_size(260, 150)
            .with_label("Screen Detection");
        window.set_color(Color::from_rgb(25, 25, 25));

        let mut body = Frame::default().with_pos(10, 10).with_size(240, 130);
        body.set_label_size(12);
        body.set_label_color(Color::from_rgb(220, 220, 220));
        body.set_align(Align::Inside | Align::Left | Align::Top);

        window.end();

        Self { window, body }
    }

    pub fn toggle(&mut self, parent: &Window, state: &ScreenState) {
        if self.window.shown() {
            self.window.hide();
        } else {
            self.update(state);
            self.window.set_pos(
                parent.x() + parent.w() - self.window.w() - 20,
                parent.y() + parent.h() - self.window.h() - 20,
            );
            self.window.show();
        }
    }

    /// Refresh the metrics text from a snapshot.
    pub fn update(&mut self, state: &ScreenState) {
        self.body.set_label(&format_state(state));
    }

    pub fn shown(&self) -> bool {
        self.window.shown()
    }
}

impl Default for DebugOverlay {
    fn default() -> Self {
        Self::new()
    }
}

fn format_state(state: &ScreenState) -> String {
    format!(
        "Resolution: {}x{} px\n\
         Pixel ratio: {:.2}x\n\
         DPI: {:.1}\n\
         Physical: {:.1}\" x {:.1}\"\n\
         Diagonal: {:.1}\"\n\
         Category: {}\n\
         Press Ctrl+Shift+D to hide",
        state.raw.pixel_width,
        state.raw.pixel_height,
        state.raw.device_pixel_ratio,
        state.estimate.scaled_dpi,
        state.estimate.physical_width,
        state.estimate.physical_height,
        state.adjusted_diagonal,
        state.effective_category,
    )
}

use std::rc::Rc;

use chrono::Local;
use fltk::{app::Sender, prelude::*, window::Window};
use tracing::{error, info};

use crate::data::SignageData;
use crate::screen::{DeviceCategory, ScreenStateHolder};
use crate::ui::clock::{format_clock, format_date, next_prayer_index};
use crate::ui::debug_overlay::DebugOverlay;
use crate::ui::layouts::{render_layout, LayoutTable, LayoutWidgets};
use crate::ui::override_panel::OverridePanel;

use super::messages::Message;

/// Main application coordinator. Owns the window, the detection
/// holder and the operator surfaces; the dispatch loop in `main`
/// calls one method per [`Message`].
pub struct AppState {
    pub window: Window,
    pub data: SignageData,
    pub holder: Rc<ScreenStateHolder>,
    pub layouts: LayoutTable,
    pub widgets: LayoutWidgets,
    pub override_panel: OverridePanel,
    pub debug_overlay: DebugOverlay,
    rendered_category: DeviceCategory,
    fullscreen: bool,
}

impl AppState {
    pub fn new(
        mut window: Window,
        data: SignageData,
        holder: Rc<ScreenStateHolder>,
        sender: &Sender<Message>,
    ) -> Self {
        let layouts = LayoutTable::default();
        let category = holder.current().effective_category;
        let widgets = render_layout(&mut window, &data, category, &layouts);
        info!(%category, "initial layout rendered");

        Self {
            window,
            data,
            holder,
            layouts,
            widgets,
            override_panel: OverridePanel::new(sender),
            debug_overlay: DebugOverlay::new(),
            rendered_category: category,
            fullscreen: false,
        }
    }

    /// Resize: run the full measurement cycle. Any category movement
    /// comes back through `ScreenStateChanged`.
    pub fn handle_resize(&self) {
        self.holder.refresh();
    }

    /// Periodic override-store re-read, converging with writes made
    /// by other views of this display. An open panel is re-synced
    /// here as well: a store write that lands on the already-computed
    /// category changes no snapshot, so no publish arrives.
    pub fn sync_override(&mut self) {
        self.holder.resolve_override();
        if self.override_panel.shown() {
            let state = self.holder.current();
            self.override_panel
                .sync(state.computed_category(), self.holder.overridden());
        }
    }

    /// A new `ScreenState` snapshot was published: refresh the
    /// dependent surfaces and re-render the layout if the effective
    /// category moved.
    pub fn on_state_changed(&mut self) {
        let state = self.holder.current();
        if self.debug_overlay.shown() {
            self.debug_overlay.update(&state);
        }
        if self.override_panel.shown() {
            self.override_panel
                .sync(state.computed_category(), self.holder.overridden());
        }
        if state.effective_category != self.rendered_category {
            info!(
                from = %self.rendered_category,
                to = %state.effective_category,
                "device category changed, re-rendering layout"
            );
            self.widgets = render_layout(
                &mut self.window,
                &self.data,
                state.effective_category,
                &self.layouts,
            );
            self.rendered_category = state.effective_category;
        }
    }

    pub fn set_override(&mut self, category: Option<DeviceCategory>) {
        if let Err(e) = self.holder.set_override(category) {
            error!(error = %e, "failed to persist screen size override");
        }
    }

    pub fn toggle_override_panel(&mut self) {
        let state = self.holder.current();
        self.override_panel
            .toggle(&self.window, state.computed_category(), self.holder.overridden());
    }

    pub fn toggle_debug_overlay(&mut self) {
        let state = self.holder.current();
        self.debug_overlay.toggle(&self.window, &state);
    }

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
        self.window.fullscreen(self.fullscreen);
    }

    /// Once a second: redraw the clock and date in place, and rebuild
    /// the layout when the next prayer to start has moved on so the
    /// highlighted table row follows the day.
    pub fn tick_clock(&mut self) {
        let now = Local::now();
        self.widgets.clock.set_label(&format_clock(now));
        self.widgets.date.set_label(&format_date(now));
        let next = next_prayer_index(now.time(), &self.data.today);
        if next != self.widgets.next_prayer {
            info!(?next, "next prayer changed, re-rendering layout");
            self.widgets = render_layout(
                &mut self.window,
                &self.data,
                self.rendered_category,
                &self.layouts,
            );
        }
    }
}

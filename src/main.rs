use std::rc::Rc;

use fltk::{
    app,
    enums::{Event, Key, Shortcut},
    prelude::*,
    window::Window,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use minbar::app::{AppState, Message};
use minbar::data::SignageData;
use minbar::screen::{FileOverrideStore, FltkMeasurementProvider, ScreenStateHolder};
use minbar::ui::theme;

const CLOCK_TICK_SECS: f64 = 1.0;
const OVERRIDE_SYNC_SECS: f64 = 2.0;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let fltk_app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let data = SignageData::load();

    let mut window = Window::new(100, 100, 1024, 600, "Minbar");
    window.set_label(&format!("{} - Minbar", data.metadata.name));
    window.set_xclass("Minbar");
    theme::apply_window_theme(&mut window);
    window.make_resizable(true);
    window.end();
    window.show();

    // Probe whichever screen the window landed on, not screen 0.
    let store = Rc::new(FileOverrideStore::at_default_path());
    let provider = Box::new(FltkMeasurementProvider::new(window.x(), window.y()));
    let holder = Rc::new(ScreenStateHolder::new(provider, store));

    // Every published snapshot funnels through the channel so layout
    // re-rendering happens on the dispatch loop, never mid-publish.
    let state_sender = sender.clone();
    holder.subscribe(move |_| state_sender.send(Message::ScreenStateChanged));

    let close_sender = sender.clone();
    window.set_callback(move |_| {
        if app::event() == Event::Close {
            close_sender.send(Message::Quit);
        }
    });

    let key_sender = sender.clone();
    window.handle(move |_, event| match event {
        Event::Resize => {
            key_sender.send(Message::ScreenResized);
            false
        }
        Event::KeyDown => {
            let chord = app::event_state().contains(Shortcut::Ctrl | Shortcut::Shift);
            if !chord {
                return false;
            }
            if app::event_key() == Key::from_char('z') {
                key_sender.send(Message::ToggleOverridePanel);
                true
            } else if app::event_key() == Key::from_char('d') {
                key_sender.send(Message::ToggleDebugOverlay);
                true
            } else if app::event_key() == Key::from_char('f') {
                key_sender.send(Message::ToggleFullscreen);
                true
            } else {
                false
            }
        }
        _ => false,
    });

    let mut state = AppState::new(window, data, holder.clone(), &sender);

    // First real measurement: the screen was probed before the window
    // existed, so re-run the cycle now that FLTK has laid out.
    holder.refresh();

    let tick_sender = sender.clone();
    app::add_timeout3(CLOCK_TICK_SECS, move |handle| {
        tick_sender.send(Message::ClockTick);
        app::repeat_timeout3(CLOCK_TICK_SECS, handle);
    });

    let sync_sender = sender.clone();
    app::add_timeout3(OVERRIDE_SYNC_SECS, move |handle| {
        sync_sender.send(Message::SyncOverride);
        app::repeat_timeout3(OVERRIDE_SYNC_SECS, handle);
    });

    info!("minbar started");

    while fltk_app.wait() {
        if let Some(message) = receiver.recv() {
            match message {
                Message::ScreenResized => state.handle_resize(),
                Message::ScreenStateChanged => state.on_state_changed(),
                Message::SyncOverride => state.sync_override(),
                Message::SetOverride(category) => state.set_override(category),
                Message::ToggleOverridePanel => state.toggle_override_panel(),
                Message::ToggleDebugOverlay => state.toggle_debug_overlay(),
                Message::ToggleFullscreen => state.toggle_fullscreen(),
                Message::ClockTick => state.tick_clock(),
                Message::Quit => {
                    fltk_app.quit();
                }
            }
        }
    }
}

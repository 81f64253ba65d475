use crate::screen::DeviceCategory;

/// All messages that can be sent through the FLTK channel.
/// Event handlers and timers send one of these; the dispatch loop in
/// main hands them to [`AppState`](crate::app::AppState).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    // Screen detection
    ScreenResized,
    ScreenStateChanged,
    SyncOverride,
    SetOverride(Option<DeviceCategory>),

    // Operator surfaces
    ToggleOverridePanel,
    ToggleDebugOverlay,
    ToggleFullscreen,

    // Signage
    ClockTick,

    Quit,
}

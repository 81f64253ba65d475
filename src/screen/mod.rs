//! Screen classification engine.
//!
//! Turns low-level pixel/DPI measurements into a coarse device
//! category that drives layout selection:
//!
//! measurement -> physical estimate -> snapping -> classification
//! -> override resolution -> published [`ScreenState`]
//!
//! The pipeline recomputes on every resize and every override change,
//! and always degrades to the `Medium` category rather than failing.

pub mod category;
pub mod estimate;
pub mod measure;
pub mod override_store;
pub mod state;

pub use category::{classify, DeviceCategory};
pub use estimate::{snap_diagonal, PhysicalEstimate, COMMON_PANEL_SIZES};
pub use measure::{
    DpiEstimate, FixedMeasurementProvider, FltkMeasurementProvider, MeasurementProvider,
    RawMeasurement, FALLBACK_DPI,
};
pub use override_store::{FileOverrideStore, MemoryOverrideStore, OverrideStore, OVERRIDE_KEY};
pub use state::{reduce, ScreenState, ScreenStateHolder};

use std::cell::Cell;
use std::rc::Rc;

/// DPI assumed when the platform cannot produce a usable reading.
pub const FALLBACK_DPI: f64 = 96.0;

/// Raw pixel dimensions and scaling factor as reported by the
/// platform. Produced fresh on every probe, never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RawMeasurement {
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub device_pixel_ratio: f64,
}

impl RawMeasurement {
    pub fn new(pixel_width: u32, pixel_height: u32, device_pixel_ratio: f64) -> Self {
        Self {
            pixel_width,
            pixel_height,
            // Ratios below 1 don't occur on real displays; a bogus
            // reading would inflate the physical estimate.
            device_pixel_ratio: if device_pixel_ratio.is_finite() && device_pixel_ratio >= 1.0 {
                device_pixel_ratio
            } else {
                1.0
            },
        }
    }

    /// True when the platform has not completed its first layout yet
    /// and reports zero-sized dimensions.
    pub fn is_empty(&self) -> bool {
        self.pixel_width == 0 || self.pixel_height == 0
    }
}

/// Base (unscaled) dots-per-inch estimate for the display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DpiEstimate {
    pub base_dpi: f64,
}

impl DpiEstimate {
    /// Wrap a probed reading, substituting [`FALLBACK_DPI`] for
    /// degenerate values so a zero-width probe can never produce a
    /// division by zero downstream.
    pub fn sanitized(probed: f64) -> Self {
        Self {
            base_dpi: if probed.is_finite() && probed > 0.0 {
                probed
            } else {
                FALLBACK_DPI
            },
        }
    }
}

impl Default for DpiEstimate {
    fn default() -> Self {
        Self {
            base_dpi: FALLBACK_DPI,
        }
    }
}

/// Capability for reading display metrics from the platform.
///
/// The estimator's arithmetic is pure; everything platform-facing
/// lives behind this trait so the pipeline can run against the FLTK
/// screen APIs in the app and against a fixed fake in tests.
pub trait MeasurementProvider {
    /// Current screen pixel dimensions and pixel ratio.
    fn measure(&self) -> RawMeasurement;

    /// Estimate the display's base DPI.
    fn probe_dpi(&self) -> DpiEstimate;
}

/// Provider backed by the FLTK screen APIs.
///
/// FLTK reports screen geometry in scaled units; multiplying by the
/// screen scale recovers raw pixels, and the scale doubles as the
/// device pixel ratio. Before the first window is shown FLTK may
/// report a zero-sized screen; that is passed through as-is and
/// handled by the reducer.
pub struct FltkMeasurementProvider {
    screen: i32,
}

impl FltkMeasurementProvider {
    /// Provider for the screen a window at the given position sits on.
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            screen: fltk::app::screen_num(x, y),
        }
    }
}

impl MeasurementProvider for FltkMeasurementProvider {
    fn measure(&self) -> RawMeasurement {
        let (_, _, w, h) = fltk::app::screen_xywh(self.screen);
        let scale = f64::from(fltk::app::screen_scale(self.screen));
        let ratio = if scale.is_finite() && scale >= 1.0 {
            scale
        } else {
            1.0
        };
        let to_px = |units: i32| -> u32 {
            if units <= 0 {
                0
            } else {
                (f64::from(units) * ratio).round() as u32
            }
        };
        RawMeasurement::new(to_px(w), to_px(h), ratio)
    }

    fn probe_dpi(&self) -> DpiEstimate {
        let (h_dpi, _) = fltk::app::screen_dpi(self.screen);
        DpiEstimate::sanitized(f64::from(h_dpi))
    }
}

/// Deterministic provider for tests and headless runs. Counts
/// `measure()` calls so tests can assert that override resolution
/// does not trigger a re-probe.
pub struct FixedMeasurementProvider {
    raw: RawMeasurement,
    dpi: DpiEstimate,
    measure_calls: Rc<Cell<u32>>,
}

impl FixedMeasurementProvider {
    pub fn new(pixel_width: u32, pixel_height: u32, device_pixel_ratio: f64, base_dpi: f64) -> Self {
        Self {
            raw: RawMeasurement::new(pixel_width, pixel_height, device_pixel_ratio),
            dpi: DpiEstimate::sanitized(base_dpi),
            measure_calls: Rc::new(Cell::new(0)),
        }
    }

    /// Handle to the probe counter, usable after the provider has
    /// been boxed into a holder.
    pub fn call_counter(&self) -> Rc<Cell<u32>> {
        self.measure_calls.clone()
    }

    pub fn measure_calls(&self) -> u32 {
        self.measure_calls.get()
    }
}

impl MeasurementProvider for FixedMeasurementProvider {
    fn measure(&self) -> RawMeasurement {
        self.measure_calls.set(self.measure_calls.get() + 1);
        self.raw
    }

    fn probe_dpi(&self) -> DpiEstimate {
        self.dpi
    }
}

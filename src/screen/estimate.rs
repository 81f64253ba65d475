use super::measure::{DpiEstimate, RawMeasurement};

/// Diagonals (inches) of panels commonly found in laptops and small
/// desktop monitors. Raw DPI-based estimation is systematically noisy
/// for OS-scaled displays; diagonals close to one of these values get
/// rounded to it.
pub const COMMON_PANEL_SIZES: [f64; 5] = [13.3, 14.0, 15.6, 16.0, 17.3];

/// Snapping only applies inside this range. TVs and signage panels
/// come in too many sizes to enumerate, so estimates outside the
/// laptop range are left untouched.
const SNAP_RANGE_INCHES: (f64, f64) = (10.0, 20.0);

/// Maximum relative distance to the nearest common size for snapping.
const SNAP_TOLERANCE: f64 = 0.25;

/// Physical dimensions estimated from a raw measurement.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PhysicalEstimate {
    pub scaled_dpi: f64,
    pub physical_width: f64,
    pub physical_height: f64,
    pub diagonal: f64,
}

impl PhysicalEstimate {
    /// Convert pixel dimensions to inches.
    ///
    /// An empty measurement (platform not laid out yet) yields a
    /// zeroed estimate rather than an error; the caller decides what
    /// a zero diagonal means.
    pub fn from_measurement(raw: RawMeasurement, dpi: DpiEstimate) -> Self {
        let scaled_dpi = dpi.base_dpi * raw.device_pixel_ratio;
        if raw.is_empty() || scaled_dpi <= 0.0 {
            return Self {
                scaled_dpi,
                ..Self::default()
            };
        }
        let physical_width = f64::from(raw.pixel_width) / scaled_dpi;
        let physical_height = f64::from(raw.pixel_height) / scaled_dpi;
        let diagonal = physical_width.hypot(physical_height);
        Self {
            scaled_dpi,
            physical_width,
            physical_height,
            diagonal,
        }
    }
}

/// Round a diagonal to the nearest common panel size, when it falls
/// in the laptop range and lands within tolerance of one.
pub fn snap_diagonal(diagonal: f64) -> f64 {
    let (lo, hi) = SNAP_RANGE_INCHES;
    if diagonal >= lo && diagonal < hi {
        snap_to(&COMMON_PANEL_SIZES, diagonal)
    } else {
        diagonal
    }
}

/// Snap against an explicit reference list: pick the entry nearest to
/// `diagonal` and replace the diagonal with it if the relative
/// distance is under tolerance.
fn snap_to(sizes: &[f64], diagonal: f64) -> f64 {
    let nearest = sizes.iter().copied().fold(f64::NAN, |best, size| {
        if best.is_nan() || (size - diagonal).abs() < (best - diagonal).abs() {
            size
        } else {
            best
        }
    });
    if nearest.is_nan() {
        return diagonal;
    }
    if ((diagonal - nearest) / nearest).abs() < SNAP_TOLERANCE {
        nearest
    } else {
        diagonal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn test_estimate_full_hd_no_scaling() {
        // 1920x1080 at ratio 1.0 and 96 DPI: a 20.0" x 11.25" panel.
        let raw = RawMeasurement::new(1920, 1080, 1.0);
        let est = PhysicalEstimate::from_measurement(raw, DpiEstimate::sanitized(96.0));
        assert_eq!(est.scaled_dpi, 96.0);
        assert!(close(est.physical_width, 20.0));
        assert!(close(est.physical_height, 11.25));
        assert!(close(est.diagonal, 22.94));
        // Outside the laptop range, so no snapping.
        assert_eq!(snap_diagonal(est.diagonal), est.diagonal);
    }

    #[test]
    fn test_estimate_scaled_laptop_snaps() {
        // 1920x1080 at ratio 1.25: scaled DPI 120, diagonal ~18.36",
        // within tolerance of the nearest reference panel (17.3").
        let raw = RawMeasurement::new(1920, 1080, 1.25);
        let est = PhysicalEstimate::from_measurement(raw, DpiEstimate::sanitized(96.0));
        assert_eq!(est.scaled_dpi, 120.0);
        assert!(close(est.diagonal, 18.36));
        assert_eq!(snap_diagonal(est.diagonal), 17.3);
    }

    #[test]
    fn test_estimate_empty_measurement_zeroed() {
        let est = PhysicalEstimate::from_measurement(
            RawMeasurement::new(0, 0, 1.0),
            DpiEstimate::sanitized(96.0),
        );
        assert_eq!(est.physical_width, 0.0);
        assert_eq!(est.physical_height, 0.0);
        assert_eq!(est.diagonal, 0.0);
    }

    #[test]
    fn test_snap_idempotent_on_reference_sizes() {
        for size in COMMON_PANEL_SIZES {
            assert_eq!(snap_diagonal(size), size);
        }
    }

    #[test]
    fn test_snap_tolerance_both_sides() {
        // 24% off the reference: snapped.
        assert_eq!(snap_to(&[15.6], 15.6 * 1.24), 15.6);
        // 30% off: left alone.
        assert_eq!(snap_to(&[15.6], 15.6 * 1.3), 15.6 * 1.3);
    }

    #[test]
    fn test_snap_picks_nearest_reference() {
        assert_eq!(snap_diagonal(13.5), 13.3);
        assert_eq!(snap_diagonal(15.4), 15.6);
        assert_eq!(snap_diagonal(16.9), 17.3);
    }

    #[test]
    fn test_snap_range_boundaries() {
        // Below 10" and at/above 20" the correction is disabled.
        assert_eq!(snap_diagonal(9.99), 9.99);
        assert_eq!(snap_diagonal(20.0), 20.0);
        assert_eq!(snap_diagonal(22.94), 22.94);
        // Just inside the range it applies.
        assert_eq!(snap_diagonal(10.5), 13.3);
    }

    #[test]
    fn test_snap_empty_reference_list() {
        assert_eq!(snap_to(&[], 15.0), 15.0);
    }
}

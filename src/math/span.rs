/// Returns `true` if the interval `[start, start + extent]` lies within `[0, limit]`.
///
/// Both ends are compared exactly; NaN never fits.
#[must_use]
pub fn fits_within(start: f64, extent: f64, limit: f64) -> bool {
    start >= 0.0 && start + extent <= limit
}

/// Position of an interval of length `extent` centred on `[0, limit]`.
#[must_use]
pub fn centered_start(limit: f64, extent: f64) -> f64 {
    (limit - extent) / 2.0
}

/// Normalizes an angle in degrees to `[0, 360)`.
#[must_use]
pub fn normalize_degrees(angle: f64) -> f64 {
    let normalized = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_fit_is_accepted() {
        assert!(fits_within(0.0, 3.0, 3.0));
        assert!(fits_within(3.2, 0.8, 4.0));
    }

    #[test]
    fn overhang_is_rejected() {
        assert!(!fits_within(-0.01, 1.0, 3.0));
        assert!(!fits_within(2.5, 1.0, 3.0));
    }

    #[test]
    fn sub_nanometre_overhang_is_rejected() {
        assert!(!fits_within(-5e-10, 1.0, 3.0));
        assert!(!fits_within(5.1 + 5e-10, 0.9, 6.0));
        assert!(!fits_within(f64::NAN, 1.0, 3.0));
    }

    #[test]
    fn centered_start_basic() {
        assert!((centered_start(6.0, 0.9) - 2.55).abs() < 1e-12);
    }

    #[test]
    fn normalize_degrees_wraps() {
        assert!((normalize_degrees(450.0) - 90.0).abs() < 1e-12);
        assert!((normalize_degrees(-90.0) - 270.0).abs() < 1e-12);
        assert!(normalize_degrees(360.0).abs() < 1e-12);
        assert!(normalize_degrees(-1e-20) < 360.0);
    }
}

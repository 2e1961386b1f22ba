//! Shared angle helpers.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Normalize an angle to [-180, 180) degrees.
pub fn normalize_to_pm180(deg: f64) -> f64 {
    let r = normalize_360(deg + 180.0);
    r - 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_wraps() {
        assert!((normalize_360(360.0) - 0.0).abs() < 1e-15);
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-15);
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
        assert!((normalize_360(-370.0) - 350.0).abs() < 1e-10);
    }

    #[test]
    fn pm180_range() {
        assert!((normalize_to_pm180(190.0) + 170.0).abs() < 1e-12);
        assert!((normalize_to_pm180(-190.0) - 170.0).abs() < 1e-12);
        assert!((normalize_to_pm180(10.0) - 10.0).abs() < 1e-12);
        assert!((normalize_to_pm180(359.5) + 0.5).abs() < 1e-12);
    }
}

//! Angle helpers shared across the crate.

/// Normalize degrees into [0, 360).
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs
    if r >= 360.0 { 0.0 } else { r }
}

/// Normalize degrees into [-180, 180).
pub fn normalize_to_pm180(deg: f64) -> f64 {
    normalize_360(deg + 180.0) - 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_negative() {
        assert!((normalize_360(-30.0) - 330.0).abs() < 1e-12);
    }

    #[test]
    fn tiny_negative_stays_in_range() {
        let r = normalize_360(-1e-17);
        assert!((0.0..360.0).contains(&r));
    }

    #[test]
    fn pm180_range() {
        assert!((normalize_to_pm180(350.0) + 10.0).abs() < 1e-12);
        assert!((normalize_to_pm180(190.0) + 170.0).abs() < 1e-12);
        assert!((normalize_to_pm180(10.0) - 10.0).abs() < 1e-12);
    }
}

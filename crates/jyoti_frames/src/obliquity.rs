//! Obliquity of the ecliptic.
//!
//! Mean obliquity from the IAU 2006 (P03) polynomial.

use crate::nutation::nutation_lon_obl_arcsec;

/// Mean obliquity at J2000.0, degrees (84381.406″).
pub const OBLIQUITY_J2000_DEG: f64 = 84_381.406 / 3600.0;

/// Mean obliquity of date in degrees, `t` in Julian centuries (TT) from J2000.0.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let arcsec = 84_381.406
        + t * (-46.836_769 + t * (-0.000_183_1 + t * (0.002_003_40 + t * (-0.000_000_576 - t * 0.000_000_043_4))));
    arcsec / 3600.0
}

/// True obliquity of date (mean + nutation in obliquity), degrees.
pub fn true_obliquity_deg(t: f64) -> f64 {
    let (_, deps) = nutation_lon_obl_arcsec(t);
    mean_obliquity_deg(t) + deps / 3600.0
}

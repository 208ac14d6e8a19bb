//! Scan-and-bisect root finding shared by the boundary searches.

use jyoti_vedic_base::normalize_to_pm180;

use crate::error::SearchError;

/// Sign change that is not a ±180° wrap of the angular difference.
pub(crate) fn is_genuine_crossing(f_a: f64, f_b: f64) -> bool {
    f_a * f_b < 0.0 && (f_a - f_b).abs() < 270.0
}

/// Step from `jd_start` by `step` days until `f` changes sign, then bisect.
///
/// `step` may be negative to search backward. Returns `None` when no
/// crossing is bracketed within `max_steps`.
pub(crate) fn find_zero_crossing(
    f: &dyn Fn(f64) -> Result<f64, SearchError>,
    jd_start: f64,
    step: f64,
    max_steps: usize,
    max_bisect: usize,
    tolerance_days: f64,
) -> Result<Option<f64>, SearchError> {
    let mut t_a = jd_start;
    let mut f_a = f(t_a)?;
    if f_a == 0.0 {
        return Ok(Some(t_a));
    }

    for _ in 0..max_steps {
        let t_b = t_a + step;
        let f_b = f(t_b)?;
        if f_b == 0.0 {
            return Ok(Some(t_b));
        }
        if is_genuine_crossing(f_a, f_b) {
            return bisect(f, t_a, f_a, t_b, max_bisect, tolerance_days).map(Some);
        }
        t_a = t_b;
        f_a = f_b;
    }
    Ok(None)
}

fn bisect(
    f: &dyn Fn(f64) -> Result<f64, SearchError>,
    mut t_a: f64,
    mut f_a: f64,
    mut t_b: f64,
    max_iter: usize,
    tolerance_days: f64,
) -> Result<f64, SearchError> {
    for _ in 0..max_iter {
        let t_mid = 0.5 * (t_a + t_b);
        let f_mid = f(t_mid)?;
        if f_a * f_mid <= 0.0 {
            t_b = t_mid;
        } else {
            t_a = t_mid;
            f_a = f_mid;
        }
        if (t_b - t_a).abs() < tolerance_days {
            break;
        }
    }
    Ok(0.5 * (t_a + t_b))
}

/// Instant at which the angle `f(t)` reaches `target_deg`, searching from
/// `jd_start` in steps of `step` days.
pub(crate) fn find_angle_boundary(
    f: &dyn Fn(f64) -> Result<f64, SearchError>,
    jd_start: f64,
    target_deg: f64,
    step: f64,
    max_steps: usize,
) -> Result<Option<f64>, SearchError> {
    let wrapped = |t: f64| -> Result<f64, SearchError> {
        let val = f(t)?;
        Ok(normalize_to_pm180(val - target_deg))
    };
    find_zero_crossing(&wrapped, jd_start, step, max_steps, 50, 1e-8)
}

//! Cartesian, ecliptic and equatorial coordinate conversions.

/// Spherical coordinates: longitude and latitude in degrees, distance in
/// the unit of the Cartesian input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoords {
    /// Longitude in [0, 360).
    pub lon_deg: f64,
    /// Latitude in [-90, 90].
    pub lat_deg: f64,
    pub distance: f64,
}

/// Convert `[x, y, z]` to spherical coordinates.
pub fn cartesian_to_spherical(xyz: &[f64; 3]) -> SphericalCoords {
    let [x, y, z] = *xyz;
    let r = (x * x + y * y + z * z).sqrt();
    if r == 0.0 {
        return SphericalCoords { lon_deg: 0.0, lat_deg: 0.0, distance: 0.0 };
    }
    SphericalCoords {
        lon_deg: y.atan2(x).to_degrees().rem_euclid(360.0),
        lat_deg: (z / r).asin().to_degrees(),
        distance: r,
    }
}

/// Convert spherical coordinates back to `[x, y, z]`.
pub fn spherical_to_cartesian(s: &SphericalCoords) -> [f64; 3] {
    let (lon, lat) = (s.lon_deg.to_radians(), s.lat_deg.to_radians());
    [
        s.distance * lat.cos() * lon.cos(),
        s.distance * lat.cos() * lon.sin(),
        s.distance * lat.sin(),
    ]
}

/// Ecliptic (λ, β) to equatorial (α, δ), all in degrees, α in [0, 360).
pub fn ecliptic_to_equatorial(lon_deg: f64, lat_deg: f64, obliquity_deg: f64) -> (f64, f64) {
    let (l, b, e) = (lon_deg.to_radians(), lat_deg.to_radians(), obliquity_deg.to_radians());
    let ra = (l.sin() * e.cos() - b.tan() * e.sin()).atan2(l.cos());
    let dec = (b.sin() * e.cos() + b.cos() * e.sin() * l.sin()).asin();
    (ra.to_degrees().rem_euclid(360.0), dec.to_degrees())
}

/// Equatorial (α, δ) to ecliptic (λ, β), all in degrees, λ in [0, 360).
pub fn equatorial_to_ecliptic(ra_deg: f64, dec_deg: f64, obliquity_deg: f64) -> (f64, f64) {
    let (a, d, e) = (ra_deg.to_radians(), dec_deg.to_radians(), obliquity_deg.to_radians());
    let lon = (a.sin() * e.cos() + d.tan() * e.sin()).atan2(a.cos());
    let lat = (d.sin() * e.cos() - d.cos() * e.sin() * a.sin()).asin();
    (lon.to_degrees().rem_euclid(360.0), lat.to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cartesian_roundtrip() {
        let s = cartesian_to_spherical(&[1.0, -2.0, 0.5]);
        let xyz = spherical_to_cartesian(&s);
        assert!((xyz[0] - 1.0).abs() < 1e-12);
        assert!((xyz[1] + 2.0).abs() < 1e-12);
        assert!((xyz[2] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn origin_is_zero() {
        let s = cartesian_to_spherical(&[0.0, 0.0, 0.0]);
        assert_eq!(s.distance, 0.0);
    }

    #[test]
    fn solstice_point_has_max_declination() {
        let (ra, dec) = ecliptic_to_equatorial(90.0, 0.0, 23.44);
        assert!((ra - 90.0).abs() < 1e-9);
        assert!((dec - 23.44).abs() < 1e-9);
    }

    #[test]
    fn meeus_example_13a_pollux() {
        // α = 116.328942°, δ = 28.026183°, ε = 23.4392911° → λ = 113.215630°, β = 6.684170°
        let (lon, lat) = equatorial_to_ecliptic(116.328_942, 28.026_183, 23.439_291_1);
        assert!((lon - 113.215_630).abs() < 1e-5, "λ = {lon}");
        assert!((lat - 6.684_170).abs() < 1e-5, "β = {lat}");
        let (ra, dec) = ecliptic_to_equatorial(lon, lat, 23.439_291_1);
        assert!((ra - 116.328_942).abs() < 1e-8);
        assert!((dec - 28.026_183).abs() < 1e-8);
    }
}

//! Reference-frame helpers for the jyoti engine.
//!
//! Positions leave the ephemeris referred to the mean ecliptic and equinox
//! of J2000. This crate carries them to the ecliptic of date, supplies the
//! obliquity and nutation needed for equatorial work, and converts between
//! Cartesian, ecliptic and equatorial coordinates.

pub mod nutation;
pub mod obliquity;
pub mod precession;
pub mod spherical;

pub use nutation::{fundamental_arguments, nutation_lon_obl_arcsec};
pub use obliquity::{OBLIQUITY_J2000_DEG, mean_obliquity_deg, true_obliquity_deg};
pub use precession::{
    general_precession_longitude_arcsec, general_precession_longitude_deg,
    j2000_to_date_longitude_deg,
};
pub use spherical::{
    SphericalCoords, cartesian_to_spherical, ecliptic_to_equatorial, equatorial_to_ecliptic,
    spherical_to_cartesian,
};

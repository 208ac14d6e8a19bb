//! Heliocentric positions from osculating-mean Keplerian elements.
//!
//! Elements and secular rates from Standish, "Keplerian Elements for
//! Approximate Positions of the Major Planets" (JPL), table 1, valid
//! 1800–2050 AD. Referred to the mean ecliptic and equinox of J2000.

use std::f64::consts::TAU;

/// Kilometres per astronomical unit (IAU 2012).
pub const AU_KM: f64 = 149_597_870.7;

/// Light travel time for one AU, in days.
pub const LIGHT_DAYS_PER_AU: f64 = 0.005_775_518_3;

/// Bodies with tabulated elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orbit {
    Mercury,
    Venus,
    EarthMoonBary,
    Mars,
    Jupiter,
    Saturn,
}

/// `[a, e, I, L, ϖ, Ω]` at J2000 followed by their rates per century.
/// Units: AU, -, degrees.
struct Elements {
    base: [f64; 6],
    rate: [f64; 6],
}

const fn elements(orbit: Orbit) -> Elements {
    match orbit {
        Orbit::Mercury => Elements {
            base: [0.387_099_27, 0.205_635_93, 7.004_979_02, 252.250_323_50, 77.457_796_28, 48.330_765_93],
            rate: [0.000_000_37, 0.000_019_06, -0.005_947_49, 149_472.674_111_75, 0.160_476_89, -0.125_340_81],
        },
        Orbit::Venus => Elements {
            base: [0.723_335_66, 0.006_776_72, 3.394_676_05, 181.979_099_50, 131.602_467_18, 76.679_842_55],
            rate: [0.000_003_90, -0.000_041_07, -0.000_788_90, 58_517.815_387_29, 0.002_683_29, -0.277_694_18],
        },
        Orbit::EarthMoonBary => Elements {
            base: [1.000_002_61, 0.016_711_23, -0.000_015_31, 100.464_571_66, 102.937_681_93, 0.0],
            rate: [0.000_005_62, -0.000_043_92, -0.012_946_68, 35_999.372_449_81, 0.323_273_64, 0.0],
        },
        Orbit::Mars => Elements {
            base: [1.523_710_34, 0.093_394_10, 1.849_691_42, -4.553_432_05, -23.943_629_59, 49.559_538_91],
            rate: [0.000_018_47, 0.000_078_82, -0.008_131_31, 19_140.302_684_99, 0.444_410_88, -0.292_573_43],
        },
        Orbit::Jupiter => Elements {
            base: [5.202_887_00, 0.048_386_24, 1.304_396_95, 34.396_440_51, 14.728_479_83, 100.473_909_09],
            rate: [-0.000_116_07, -0.000_132_53, -0.001_837_14, 3034.746_127_75, 0.212_526_68, 0.204_691_06],
        },
        Orbit::Saturn => Elements {
            base: [9.536_675_94, 0.053_861_79, 2.485_991_87, 49.954_244_23, 92.598_878_31, 113.662_424_48],
            rate: [-0.001_250_60, -0.000_509_91, 0.001_936_09, 1222.493_622_01, -0.418_972_16, -0.288_677_94],
        },
    }
}

/// Solve Kepler's equation `E − e sin E = M` (radians) by Newton iteration.
pub fn solve_kepler(mean_anomaly: f64, e: f64) -> f64 {
    let m = (mean_anomaly + std::f64::consts::PI).rem_euclid(TAU) - std::f64::consts::PI;
    let mut ecc_anom = m + e * m.sin();
    for _ in 0..30 {
        let delta = (m - (ecc_anom - e * ecc_anom.sin())) / (1.0 - e * ecc_anom.cos());
        ecc_anom += delta;
        if delta.abs() < 1e-14 {
            break;
        }
    }
    ecc_anom
}

/// Heliocentric ecliptic J2000 position in AU, `t` in Julian centuries (TT).
pub fn heliocentric_au(orbit: Orbit, t: f64) -> [f64; 3] {
    let el = elements(orbit);
    let v: [f64; 6] = std::array::from_fn(|i| el.base[i] + el.rate[i] * t);
    let [a, e, incl, mean_lon, peri_lon, node] = v;

    let omega = (peri_lon - node).to_radians();
    let node = node.to_radians();
    let incl = incl.to_radians();
    let ecc_anom = solve_kepler((mean_lon - peri_lon).to_radians(), e);

    let xp = a * (ecc_anom.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ecc_anom.sin();

    let (so, co) = omega.sin_cos();
    let (sn, cn) = node.sin_cos();
    let (si, ci) = incl.sin_cos();
    [
        (co * cn - so * sn * ci) * xp + (-so * cn - co * sn * ci) * yp,
        (co * sn + so * cn * ci) * xp + (-so * sn + co * cn * ci) * yp,
        (so * si) * xp + (co * si) * yp,
    ]
}

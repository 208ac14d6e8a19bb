//! Geocentric Moon from the principal terms of ELP-2000/82.
//!
//! Meeus, *Astronomical Algorithms* (2nd ed.), ch. 47. Tables 47.A and 47.B
//! are truncated to terms above 0.0004° in longitude and 0.001° in
//! latitude, leaving an error of roughly 10″ in longitude.
//! Output is referred to the mean ecliptic and equinox of date.

/// `[D, M, M', F, Σl, Σr]` with Σl in 1e-6 degree and Σr in metres.
const LON_DIST: [[f64; 6]; 52] = [
    [0.0, 0.0, 1.0, 0.0, 6_288_774.0, -20_905_355.0],
    [2.0, 0.0, -1.0, 0.0, 1_274_027.0, -3_699_111.0],
    [2.0, 0.0, 0.0, 0.0, 658_314.0, -2_955_968.0],
    [0.0, 0.0, 2.0, 0.0, 213_618.0, -569_925.0],
    [0.0, 1.0, 0.0, 0.0, -185_116.0, 48_888.0],
    [0.0, 0.0, 0.0, 2.0, -114_332.0, -3149.0],
    [2.0, 0.0, -2.0, 0.0, 58_793.0, 246_158.0],
    [2.0, -1.0, -1.0, 0.0, 57_066.0, -152_138.0],
    [2.0, 0.0, 1.0, 0.0, 53_322.0, -170_733.0],
    [2.0, -1.0, 0.0, 0.0, 45_758.0, -204_586.0],
    [0.0, 1.0, -1.0, 0.0, -40_923.0, -129_620.0],
    [1.0, 0.0, 0.0, 0.0, -34_720.0, 108_743.0],
    [0.0, 1.0, 1.0, 0.0, -30_383.0, 104_755.0],
    [2.0, 0.0, 0.0, -2.0, 15_327.0, 10_321.0],
    [0.0, 0.0, 1.0, 2.0, -12_528.0, 0.0],
    [0.0, 0.0, 1.0, -2.0, 10_980.0, 79_661.0],
    [4.0, 0.0, -1.0, 0.0, 10_675.0, -34_782.0],
    [0.0, 0.0, 3.0, 0.0, 10_034.0, -23_210.0],
    [4.0, 0.0, -2.0, 0.0, 8548.0, -21_636.0],
    [2.0, 1.0, -1.0, 0.0, -7888.0, 24_208.0],
    [2.0, 1.0, 0.0, 0.0, -6766.0, 30_824.0],
    [1.0, 0.0, -1.0, 0.0, -5163.0, -8379.0],
    [1.0, 1.0, 0.0, 0.0, 4987.0, -16_675.0],
    [2.0, -1.0, 1.0, 0.0, 4036.0, -12_831.0],
    [2.0, 0.0, 2.0, 0.0, 3994.0, -10_445.0],
    [4.0, 0.0, 0.0, 0.0, 3861.0, -11_650.0],
    [2.0, 0.0, -3.0, 0.0, 3665.0, 14_403.0],
    [0.0, 1.0, -2.0, 0.0, -2689.0, -7003.0],
    [2.0, 0.0, -1.0, 2.0, -2602.0, 0.0],
    [2.0, -1.0, -2.0, 0.0, 2390.0, 10_056.0],
    [1.0, 0.0, 1.0, 0.0, -2348.0, 6322.0],
    [2.0, -2.0, 0.0, 0.0, 2236.0, -9884.0],
    [0.0, 1.0, 2.0, 0.0, -2120.0, 5751.0],
    [0.0, 2.0, 0.0, 0.0, -2069.0, 0.0],
    [2.0, -2.0, -1.0, 0.0, 2048.0, -4950.0],
    [2.0, 0.0, 1.0, -2.0, -1773.0, 4130.0],
    [2.0, 0.0, 0.0, 2.0, -1595.0, 0.0],
    [4.0, -1.0, -1.0, 0.0, 1215.0, -3958.0],
    [0.0, 0.0, 2.0, 2.0, -1110.0, 0.0],
    [3.0, 0.0, -1.0, 0.0, -892.0, 3258.0],
    [2.0, 1.0, 1.0, 0.0, -810.0, 2616.0],
    [4.0, -1.0, -2.0, 0.0, 759.0, -1897.0],
    [0.0, 2.0, -1.0, 0.0, -713.0, -2117.0],
    [2.0, 2.0, -1.0, 0.0, -700.0, 2354.0],
    [2.0, 1.0, -2.0, 0.0, 691.0, 0.0],
    [2.0, -1.0, 0.0, -2.0, 596.0, 0.0],
    [4.0, 0.0, 1.0, 0.0, 549.0, -1423.0],
    [0.0, 0.0, 4.0, 0.0, 537.0, -1117.0],
    [4.0, -1.0, 0.0, 0.0, 520.0, -1571.0],
    [1.0, 0.0, -2.0, 0.0, -487.0, -1739.0],
    [2.0, 1.0, 0.0, -2.0, -399.0, 0.0],
    [0.0, 0.0, 2.0, -2.0, -381.0, -4421.0],
];

/// `[D, M, M', F, Σb]` with Σb in 1e-6 degree.
const LAT: [[f64; 5]; 30] = [
    [0.0, 0.0, 0.0, 1.0, 5_128_122.0],
    [0.0, 0.0, 1.0, 1.0, 280_602.0],
    [0.0, 0.0, 1.0, -1.0, 277_693.0],
    [2.0, 0.0, 0.0, -1.0, 173_237.0],
    [2.0, 0.0, -1.0, 1.0, 55_413.0],
    [2.0, 0.0, -1.0, -1.0, 46_271.0],
    [2.0, 0.0, 0.0, 1.0, 32_573.0],
    [0.0, 0.0, 2.0, 1.0, 17_198.0],
    [2.0, 0.0, 1.0, -1.0, 9266.0],
    [0.0, 0.0, 2.0, -1.0, 8822.0],
    [2.0, -1.0, 0.0, -1.0, 8216.0],
    [2.0, 0.0, -2.0, -1.0, 4324.0],
    [2.0, 0.0, 1.0, 1.0, 4200.0],
    [2.0, 1.0, 0.0, -1.0, -3359.0],
    [2.0, -1.0, -1.0, 1.0, 2463.0],
    [2.0, -1.0, 0.0, 1.0, 2211.0],
    [2.0, -1.0, -1.0, -1.0, 2065.0],
    [0.0, 1.0, -1.0, -1.0, -1870.0],
    [4.0, 0.0, -1.0, -1.0, 1828.0],
    [0.0, 1.0, 0.0, 1.0, -1794.0],
    [0.0, 0.0, 0.0, 3.0, -1749.0],
    [0.0, 1.0, -1.0, 1.0, -1565.0],
    [1.0, 0.0, 0.0, 1.0, -1491.0],
    [0.0, 1.0, 1.0, 1.0, -1475.0],
    [0.0, 1.0, 1.0, -1.0, -1410.0],
    [0.0, 1.0, 0.0, -1.0, -1344.0],
    [1.0, 0.0, 0.0, -1.0, -1335.0],
    [0.0, 0.0, 3.0, 1.0, 1107.0],
    [4.0, 0.0, 0.0, -1.0, 1021.0],
    [4.0, 0.0, -1.0, 1.0, 833.0],
];

/// Moon position referred to the equinox of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarPosition {
    pub lon_deg: f64,
    pub lat_deg: f64,
    pub distance_km: f64,
}

fn poly(c: [f64; 5], t: f64) -> f64 {
    c[0] + t * (c[1] + t * (c[2] + t * (c[3] + t * c[4])))
}

/// Geocentric Moon for `t` Julian centuries (TT) from J2000.0.
pub fn moon_of_date(t: f64) -> LunarPosition {
    let lp = poly([218.316_447_7, 481_267.881_234_21, -0.001_578_6, 1.0 / 538_841.0, -1.0 / 65_194_000.0], t);
    let d = poly([297.850_192_1, 445_267.111_403_4, -0.001_881_9, 1.0 / 545_868.0, -1.0 / 113_065_000.0], t);
    let m = poly([357.529_109_2, 35_999.050_290_9, -0.000_153_6, 1.0 / 24_490_000.0, 0.0], t);
    let mp = poly([134.963_396_4, 477_198.867_505_5, 0.008_741_4, 1.0 / 69_699.0, -1.0 / 14_712_000.0], t);
    let f = poly([93.272_095_0, 483_202.017_523_3, -0.003_653_9, -1.0 / 3_526_000.0, 1.0 / 863_310_000.0], t);

    let a1 = 119.75 + 131.849 * t;
    let a2 = 53.09 + 479_264.290 * t;
    let a3 = 313.45 + 481_266.484 * t;
    let ecc = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;

    let eccentricity_factor = |m_mult: f64| match m_mult.abs() as u8 {
        1 => ecc,
        2 => ecc * ecc,
        _ => 1.0,
    };
    let arg = |row: &[f64]| {
        (row[0] * d + row[1] * m + row[2] * mp + row[3] * f).to_radians()
    };

    let mut sum_l = 0.0;
    let mut sum_r = 0.0;
    for row in &LON_DIST {
        let a = arg(&row[..]);
        let k = eccentricity_factor(row[1]);
        sum_l += row[4] * k * a.sin();
        sum_r += row[5] * k * a.cos();
    }
    let mut sum_b = 0.0;
    for row in &LAT {
        sum_b += row[4] * eccentricity_factor(row[1]) * arg(&row[..]).sin();
    }

    let s = |deg: f64| deg.to_radians().sin();
    sum_l += 3958.0 * s(a1) + 1962.0 * s(lp - f) + 318.0 * s(a2);
    sum_b += -2235.0 * s(lp) + 382.0 * s(a3) + 175.0 * s(a1 - f) + 175.0 * s(a1 + f)
        + 127.0 * s(lp - mp)
        - 115.0 * s(lp + mp);

    LunarPosition {
        lon_deg: (lp + sum_l / 1e6).rem_euclid(360.0),
        lat_deg: sum_b / 1e6,
        distance_km: 385_000.56 + sum_r / 1000.0,
    }
}

/// Equatorial horizontal parallax of the Moon in degrees.
pub fn horizontal_parallax_deg(distance_km: f64) -> f64 {
    (6378.14 / distance_km).asin().to_degrees()
}

//! Delaunay fundamental arguments and a truncated nutation series.
//!
//! Fundamental arguments: IERS Conventions 2010, eq. 5.43.
//! Nutation: the 18 largest terms of the IAU 1980 series (Meeus table 22.A),
//! good to about 0.1″ in longitude.

use std::f64::consts::TAU;

const AS2RAD: f64 = TAU / 1_296_000.0;

/// Delaunay arguments `[l, l', F, D, Ω]` in radians, `t` in Julian centuries (TT).
///
/// - `l`: mean anomaly of the Moon
/// - `l'`: mean anomaly of the Sun
/// - `F`: Moon's mean argument of latitude
/// - `D`: mean elongation of the Moon from the Sun
/// - `Ω`: mean longitude of the Moon's ascending node
pub fn fundamental_arguments(t: f64) -> [f64; 5] {
    let poly = |c: [f64; 5]| (c[0] + t * (c[1] + t * (c[2] + t * (c[3] + t * c[4])))) * AS2RAD;
    [
        poly([485_868.249_036, 1_717_915_923.217_8, 31.879_2, 0.051_635, -0.000_244_70]),
        poly([1_287_104.793_05, 129_596_581.048_1, -0.553_2, 0.000_136, -0.000_011_49]),
        poly([335_779.526_232, 1_739_527_262.847_8, -12.751_2, -0.001_037, 0.000_004_17]),
        poly([1_072_260.703_69, 1_602_961_601.209_0, -6.370_6, 0.006_593, -0.000_031_69]),
        poly([450_160.398_036, -6_962_890.543_1, 7.472_2, 0.007_702, -0.000_059_39]),
    ]
}

/// `[n_l, n_l', n_F, n_D, n_Ω, ψ, ψ_t, ε, ε_t]`, amplitudes in 0.0001″.
const TERMS: [[f64; 9]; 18] = [
    [0.0, 0.0, 0.0, 0.0, 1.0, -171_996.0, -174.2, 92_025.0, 8.9],
    [0.0, 0.0, 2.0, -2.0, 2.0, -13_187.0, -1.6, 5736.0, -3.1],
    [0.0, 0.0, 2.0, 0.0, 2.0, -2274.0, -0.2, 977.0, -0.5],
    [0.0, 0.0, 0.0, 0.0, 2.0, 2062.0, 0.2, -895.0, 0.5],
    [0.0, 1.0, 0.0, 0.0, 0.0, 1426.0, -3.4, 54.0, -0.1],
    [1.0, 0.0, 0.0, 0.0, 0.0, 712.0, 0.1, -7.0, 0.0],
    [0.0, 1.0, 2.0, -2.0, 2.0, -517.0, 1.2, 224.0, -0.6],
    [0.0, 0.0, 2.0, 0.0, 1.0, -386.0, -0.4, 200.0, 0.0],
    [1.0, 0.0, 2.0, 0.0, 2.0, -301.0, 0.0, 129.0, -0.1],
    [0.0, -1.0, 2.0, -2.0, 2.0, 217.0, -0.5, -95.0, 0.3],
    [1.0, 0.0, 0.0, -2.0, 0.0, -158.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 2.0, -2.0, 1.0, 129.0, 0.1, -70.0, 0.0],
    [-1.0, 0.0, 2.0, 0.0, 2.0, 123.0, 0.0, -53.0, 0.0],
    [0.0, 0.0, 0.0, 2.0, 0.0, 63.0, 0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0, 0.0, 1.0, 63.0, 0.1, -33.0, 0.0],
    [-1.0, 0.0, 2.0, 2.0, 2.0, -59.0, 0.0, 26.0, 0.0],
    [-1.0, 0.0, 0.0, 0.0, 1.0, -58.0, -0.1, 32.0, 0.0],
    [1.0, 0.0, 2.0, 0.0, 1.0, -51.0, 0.0, 27.0, 0.0],
];

/// Nutation in longitude and obliquity `(Δψ, Δε)` in arcseconds.
pub fn nutation_lon_obl_arcsec(t: f64) -> (f64, f64) {
    let args = fundamental_arguments(t);
    let (mut dpsi, mut deps) = (0.0, 0.0);
    for row in &TERMS {
        let arg: f64 = row[..5].iter().zip(args.iter()).map(|(n, a)| n * a).sum();
        dpsi += (row[5] + row[6] * t) * arg.sin();
        deps += (row[7] + row[8] * t) * arg.cos();
    }
    (dpsi * 1e-4, deps * 1e-4)
}

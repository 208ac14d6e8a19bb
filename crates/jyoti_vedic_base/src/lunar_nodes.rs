//! Lunar node (Rahu/Ketu) longitudes.
//!
//! Mean node: the 5th Delaunay argument Ω (IERS Conventions 2010).
//! True node: mean plus the principal periodic corrections (Meeus ch. 47).
//! Both are referred to the mean ecliptic and equinox of date.

use jyoti_frames::fundamental_arguments;
use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// Which lunar node to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LunarNode {
    /// Ascending node.
    Rahu,
    /// Descending node, always Rahu + 180 deg.
    Ketu,
}

/// Mean or true node position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeMode {
    #[default]
    Mean,
    True,
}

impl std::str::FromStr for NodeMode {
    type Err = crate::error::VedicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mean" => Ok(Self::Mean),
            "true" => Ok(Self::True),
            _ => Err(crate::error::VedicError::InvalidInput("node mode must be mean or true")),
        }
    }
}

/// `[n_l, n_l', n_F, n_D, amplitude_deg]` for the true-node correction.
const TRUE_NODE_TERMS: [[f64; 5]; 5] = [
    [0.0, 0.0, -2.0, 2.0, -1.4979],
    [0.0, 1.0, 0.0, 0.0, -0.1500],
    [0.0, 0.0, 0.0, 2.0, -0.1226],
    [0.0, 0.0, 2.0, 0.0, 0.1176],
    [2.0, 0.0, -2.0, 0.0, -0.0801],
];

/// Mean Rahu longitude in degrees [0, 360), `t` in Julian centuries (TT).
pub fn mean_rahu_deg(t: f64) -> f64 {
    normalize_360(fundamental_arguments(t)[4].to_degrees())
}

/// Periodic correction from mean to true node, in degrees.
pub fn true_node_correction_deg(t: f64) -> f64 {
    let [l, lp, f, d, _] = fundamental_arguments(t);
    TRUE_NODE_TERMS
        .iter()
        .map(|c| c[4] * (c[0] * l + c[1] * lp + c[2] * f + c[3] * d).sin())
        .sum()
}

/// Ecliptic longitude of date of a lunar node.
pub fn lunar_node_deg(node: LunarNode, t: f64, mode: NodeMode) -> f64 {
    let rahu = match mode {
        NodeMode::Mean => mean_rahu_deg(t),
        NodeMode::True => normalize_360(mean_rahu_deg(t) + true_node_correction_deg(t)),
    };
    match node {
        LunarNode::Rahu => rahu,
        LunarNode::Ketu => normalize_360(rahu + 180.0),
    }
}

//! Graha dignity and natural friendship.
//!
//! Exaltation points, own signs and the naisargika (natural) friendship
//! table from BPHS. Nodes have no dignity and are neutral to everyone.

use serde::{Deserialize, Serialize};

use crate::graha::Graha;
use crate::rashi::Rashi;

// ---------------------------------------------------------------------------
// Exaltation
// ---------------------------------------------------------------------------

/// Deep-exaltation point as a sidereal longitude.
pub const fn exaltation_degree(graha: Graha) -> Option<f64> {
    match graha {
        Graha::Surya => Some(10.0),   // 10 Mesha
        Graha::Chandra => Some(33.0), // 3 Vrishabha
        Graha::Mangal => Some(298.0), // 28 Makara
        Graha::Buddh => Some(165.0),  // 15 Kanya
        Graha::Guru => Some(95.0),    // 5 Karka
        Graha::Shukra => Some(357.0), // 27 Meena
        Graha::Shani => Some(200.0),  // 20 Tula
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Sign of exaltation.
pub fn exaltation_rashi(graha: Graha) -> Option<Rashi> {
    exaltation_degree(graha).map(Rashi::from_longitude)
}

/// Sign of debilitation, opposite the exaltation sign.
pub fn debilitation_rashi(graha: Graha) -> Option<Rashi> {
    exaltation_rashi(graha).map(|r| r.nth(7))
}

// ---------------------------------------------------------------------------
// Own signs
// ---------------------------------------------------------------------------

pub const fn own_signs(graha: Graha) -> &'static [Rashi] {
    match graha {
        Graha::Surya => &[Rashi::Simha],
        Graha::Chandra => &[Rashi::Karka],
        Graha::Mangal => &[Rashi::Mesha, Rashi::Vrischika],
        Graha::Buddh => &[Rashi::Mithuna, Rashi::Kanya],
        Graha::Guru => &[Rashi::Dhanu, Rashi::Meena],
        Graha::Shukra => &[Rashi::Vrishabha, Rashi::Tula],
        Graha::Shani => &[Rashi::Makara, Rashi::Kumbha],
        Graha::Rahu | Graha::Ketu => &[],
    }
}

pub fn is_own_sign(graha: Graha, rashi: Rashi) -> bool {
    own_signs(graha).contains(&rashi)
}

pub fn is_exalted(graha: Graha, rashi: Rashi) -> bool {
    exaltation_rashi(graha) == Some(rashi)
}

// ---------------------------------------------------------------------------
// Natural friendship
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NaisargikaMaitri {
    Friend,
    Neutral,
    Enemy,
}

/// How `graha` regards `other` by nature. Not symmetric.
pub const fn naisargika_maitri(graha: Graha, other: Graha) -> NaisargikaMaitri {
    use Graha::*;
    use NaisargikaMaitri::*;

    match (graha, other) {
        (Rahu | Ketu, _) | (_, Rahu | Ketu) => Neutral,

        (Surya, Chandra | Mangal | Guru) => Friend,
        (Surya, Shukra | Shani) => Enemy,

        (Chandra, Surya | Buddh) => Friend,

        (Mangal, Surya | Chandra | Guru) => Friend,
        (Mangal, Buddh) => Enemy,

        (Buddh, Surya | Shukra) => Friend,
        (Buddh, Chandra) => Enemy,

        (Guru, Surya | Chandra | Mangal) => Friend,
        (Guru, Buddh | Shukra) => Enemy,

        (Shukra, Buddh | Shani) => Friend,
        (Shukra, Surya | Chandra) => Enemy,

        (Shani, Buddh | Shukra) => Friend,
        (Shani, Surya | Chandra | Mangal) => Enemy,

        _ => Neutral,
    }
}

/// Both grahas regard each other as friends.
pub const fn are_mutual_friends(a: Graha, b: Graha) -> bool {
    matches!(
        (naisargika_maitri(a, b), naisargika_maitri(b, a)),
        (NaisargikaMaitri::Friend, NaisargikaMaitri::Friend)
    )
}

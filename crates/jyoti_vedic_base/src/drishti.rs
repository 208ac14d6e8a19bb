//! Graha drishti by whole signs.
//!
//! Every graha aspects the 7th sign from itself. Mangal also aspects the
//! 4th and 8th, Guru the 5th and 9th, Shani the 3rd and 10th. Rahu and
//! Ketu are given the 7th only.

use crate::graha::Graha;
use crate::rashi::Rashi;

/// Sign counts (inclusive, own sign = 1) that `graha` aspects.
pub const fn aspected_houses(graha: Graha) -> &'static [u8] {
    match graha {
        Graha::Mangal => &[4, 7, 8],
        Graha::Guru => &[5, 7, 9],
        Graha::Shani => &[3, 7, 10],
        _ => &[7],
    }
}

/// Whether a graha in `from` casts a sign aspect on `target`.
pub fn aspects_rashi(graha: Graha, from: Rashi, target: Rashi) -> bool {
    aspected_houses(graha).contains(&from.count_to(target))
}

/// Whether a graha in `from` is conjunct or casts an aspect on `target`.
pub fn conjunct_or_aspects(graha: Graha, from: Rashi, target: Rashi) -> bool {
    from == target || aspects_rashi(graha, from, target)
}

//! Ashtakoot scoring examples and invariants.

use jyoti_vedic_base::ashtakoot::{ALL_KOOTAS, pada_rashi, yoni_points};
use jyoti_vedic_base::{
    CompatibilityLevel, CriticalDoshaKind, GunaInputs, MAX_GUNA_TOTAL, Nakshatra, Rashi, score,
};
use proptest::prelude::*;

fn moon(rashi: Rashi, nak: Nakshatra, pada: u8) -> GunaInputs {
    GunaInputs::new(rashi, nak, pada, false).unwrap()
}

/// Groom Moon in Ashwini (Mesha), bride Moon in Hasta (Kanya).
#[test]
fn ashwini_hasta_pair() {
    let groom = moon(Rashi::Mesha, Nakshatra::Ashwini, 2);
    let bride = moon(Rashi::Kanya, Nakshatra::Hasta, 1);
    let r = score(&groom, &bride);
    assert_eq!(r.gunas.varna, 1); // Kshatriya over Vaishya
    assert_eq!(r.gunas.vashya, 1); // Chatushpada / Manava
    assert_eq!(r.gunas.yoni, 0); // Horse / Buffalo
    assert_eq!(r.gunas.graha_maitri, 0); // Mangal / Buddh
    assert_eq!(r.gunas.gana, 6); // Deva / Deva
    assert_eq!(r.gunas.bhakoot, 0); // 6/8
    assert_eq!(r.gunas.nadi, 0); // Adi / Adi
    assert_eq!(r.total, r.gunas.total());
    let kinds: Vec<_> = r.critical_doshas.iter().map(|d| d.kind).collect();
    assert!(kinds.contains(&CriticalDoshaKind::Nadi));
    assert!(kinds.contains(&CriticalDoshaKind::Bhakoot));
    assert_eq!(r.level, CompatibilityLevel::from_total(r.total));
}

#[test]
fn gana_is_directional() {
    // Manushya groom with Deva bride 5; reversed 6
    let deva = moon(Rashi::Mesha, Nakshatra::Ashwini, 1);
    let manushya = moon(Rashi::Mesha, Nakshatra::Bharani, 1);
    assert_eq!(score(&manushya, &deva).gunas.gana, 5);
    assert_eq!(score(&deva, &manushya).gunas.gana, 6);
}

#[test]
fn result_serializes() {
    let a = moon(Rashi::Karka, Nakshatra::Pushya, 3);
    let b = moon(Rashi::Meena, Nakshatra::Revati, 4);
    let r = score(&a, &b);
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["total"], r.total);
    assert!(json["gunas"]["nadi"].is_number());
}

#[test]
fn sworn_enemies_are_the_only_yoni_zeros() {
    let zeros = (0..27u8)
        .flat_map(|a| (0..27u8).map(move |b| (a, b)))
        .filter(|&(a, b)| yoni_points(Nakshatra::from_index(a), Nakshatra::from_index(b)) == 0)
        .count();
    // 7 enemy pairs, two nakshatras per animal except Mongoose, both orders
    assert_eq!(zeros, 52);
    assert_eq!(yoni_points(Nakshatra::Magha, Nakshatra::Punarvasu), 0);
    assert_eq!(yoni_points(Nakshatra::Dhanishtha, Nakshatra::Revati), 0);
}

fn inputs() -> impl Strategy<Value = GunaInputs> {
    (0u8..27, 1u8..=4, any::<bool>()).prop_map(|(n, p, m)| {
        let nak = Nakshatra::from_index(n);
        GunaInputs::new(pada_rashi(nak, p), nak, p, m).unwrap()
    })
}

proptest! {
    #[test]
    fn factors_within_maxima(a in inputs(), b in inputs()) {
        let r = score(&a, &b);
        for k in ALL_KOOTAS {
            prop_assert!(r.gunas.get(k) <= k.max_points());
        }
        prop_assert!(r.total <= MAX_GUNA_TOTAL);
        prop_assert!((r.percentage - f64::from(r.total) / 36.0 * 100.0).abs() < 1e-9);
        prop_assert_eq!(r.level, CompatibilityLevel::from_total(r.total));
    }

    #[test]
    fn symmetric_factors_ignore_order(a in inputs(), b in inputs()) {
        let ab = score(&a, &b).gunas;
        let ba = score(&b, &a).gunas;
        prop_assert_eq!(ab.vashya, ba.vashya);
        prop_assert_eq!(ab.tara, ba.tara);
        prop_assert_eq!(ab.yoni, ba.yoni);
        prop_assert_eq!(ab.graha_maitri, ba.graha_maitri);
        prop_assert_eq!(ab.bhakoot, ba.bhakoot);
        prop_assert_eq!(ab.nadi, ba.nadi);
    }

    #[test]
    fn zero_nadi_and_bhakoot_always_listed(a in inputs(), b in inputs()) {
        let r = score(&a, &b);
        let has = |k| r.critical_doshas.iter().any(|d| d.kind == k);
        prop_assert_eq!(r.gunas.nadi == 0, has(CriticalDoshaKind::Nadi));
        prop_assert_eq!(r.gunas.bhakoot == 0, has(CriticalDoshaKind::Bhakoot));
        prop_assert_eq!(a.mangal_dosha != b.mangal_dosha, has(CriticalDoshaKind::Mangal));
    }
}

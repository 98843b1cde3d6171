//! Properties the fuzz setup relies on, checked against the full catalog.

use std::collections::HashSet;

use bqfuzz_corpus::{
    build_catalog, decode_f32s, verify_corpus, write_corpus, Catalog, Category, WriteOptions,
    DEFAULT_RNG_SEED, DIM, MIN_SEED_COUNT, SEED_SIZE,
};
use proptest as _;
use rand as _;
use rand_chacha as _;
use rand_distr as _;
use serde as _;
use thiserror as _;
use tracing as _;

fn default_catalog() -> Catalog {
    build_catalog(DEFAULT_RNG_SEED).expect("catalog builds")
}

fn decoded(catalog: &Catalog, name: &str) -> Vec<f32> {
    let seed = catalog
        .get(name)
        .unwrap_or_else(|| panic!("missing seed {name}"));
    decode_f32s(seed.payload()).expect("well-formed payload")
}

#[test]
fn test_catalog_is_large_enough() {
    let catalog = default_catalog();
    assert!(catalog.len() >= MIN_SEED_COUNT, "{} seeds", catalog.len());
    catalog
        .ensure_min_seeds(MIN_SEED_COUNT)
        .expect("adequate corpus");
    assert_eq!(catalog.len(), 109);
}

#[test]
fn test_names_unique_and_filesystem_safe() {
    let catalog = default_catalog();
    let names: HashSet<&str> = catalog.names().collect();
    assert_eq!(names.len(), catalog.len());
    for name in names {
        assert!(
            name.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
            "{name}"
        );
    }
}

#[test]
fn test_well_formed_payloads_have_exact_length() {
    let catalog = default_catalog();
    for seed in catalog.iter() {
        if seed.category().is_well_formed() {
            assert_eq!(seed.payload().len(), SEED_SIZE, "{}", seed.name());
        }
    }
    assert!(catalog.in_category(Category::Malformed).count() > 0);
}

#[test]
fn test_every_category_is_populated() {
    for (category, count) in default_catalog().category_counts() {
        assert!(count > 0, "{category} is empty");
    }
}

#[test]
fn test_generation_is_deterministic() {
    let a = default_catalog();
    let b = default_catalog();
    assert_eq!(a, b);
    for seed in a.in_category(Category::Random) {
        assert_eq!(
            Some(seed.payload()),
            b.get(seed.name()).map(|s| s.payload()),
            "{}",
            seed.name()
        );
    }
    assert_eq!(
        a.get("random_bytes").map(|s| s.payload()),
        b.get("random_bytes").map(|s| s.payload())
    );
}

#[test]
fn test_default_seed_output_is_pinned() {
    // Changes when the draw order, the PRNG or the float sampling changes.
    let catalog = default_catalog();
    let uniform = catalog.get("random_uniform_00").expect("seed present");
    assert_eq!(
        uniform.payload()[..16],
        [
            0x94, 0x6a, 0x2f, 0x3f, 0x40, 0x2f, 0xe6, 0x3c, 0x8c, 0x5d, 0x8c, 0x3e, 0xb8, 0xe9,
            0x37, 0xbe,
        ]
    );

    let vals = decoded(&catalog, "random_uniform_00");
    let bits: Vec<u32> = vals[..4].iter().map(|v| v.to_bits()).collect();
    assert_eq!(bits, [0x3f2f_6a94, 0x3ce6_2f40, 0x3e8c_5d8c, 0xbe37_e9b8]);
}

#[test]
fn test_all_zeros_is_positive_zero() {
    let vals = decoded(&default_catalog(), "all_zeros");
    assert_eq!(vals.len(), DIM);
    assert!(vals.iter().all(|v| v.to_bits() == 0));
}

#[test]
fn test_all_nan_is_nan_everywhere() {
    let vals = decoded(&default_catalog(), "all_nan");
    assert_eq!(vals.len(), DIM);
    for v in vals {
        let bits = v.to_bits();
        assert_eq!(bits & 0x7f80_0000, 0x7f80_0000);
        assert_ne!(bits & 0x007f_ffff, 0);
    }
}

#[test]
fn test_short_3071_is_not_padded() {
    let catalog = default_catalog();
    let seed = catalog.get("short_3071_bytes").expect("seed present");
    assert_eq!(seed.payload().len(), 3071);
    assert_eq!(seed.category(), Category::Malformed);
}

#[test]
fn test_single_bit_000() {
    let vals = decoded(&default_catalog(), "single_bit_000");
    assert_eq!(vals.len(), DIM);
    assert_eq!(vals[0], 1.0);
    assert!(vals[1..].iter().all(|v| *v == 0.0));
}

#[test]
fn test_alt_pos_neg() {
    let vals = decoded(&default_catalog(), "alt_pos_neg");
    for (i, v) in vals.iter().enumerate() {
        let expected = if i % 2 == 0 { 1.0 } else { -1.0 };
        assert_eq!(*v, expected, "index {i}");
    }
}

#[test]
fn test_random_bytes_has_seed_size() {
    let catalog = default_catalog();
    let seed = catalog.get("random_bytes").expect("seed present");
    assert_eq!(seed.payload().len(), SEED_SIZE);
}

#[test]
fn test_written_corpus_verifies_after_regeneration() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let report =
        write_corpus(&default_catalog(), tmp.path(), WriteOptions::default()).expect("write");
    assert_eq!(report.written, 109);

    let regenerated = default_catalog();
    let verify = verify_corpus(&regenerated, tmp.path()).expect("verify");
    assert!(verify.is_clean(), "{verify:?}");
    assert_eq!(verify.matched, regenerated.len());

    let other_seed = build_catalog(DEFAULT_RNG_SEED + 1).expect("catalog builds");
    let verify = verify_corpus(&other_seed, tmp.path()).expect("verify");
    assert!(verify.mismatched.contains(&"random_uniform_00".to_string()));
    assert!(!verify.mismatched.contains(&"all_ones".to_string()));
}

//! Vectors with every element identical.

use crate::{builder::SeedContext, catalog::Catalog, error::CorpusResult, seed::Category, vector};

/// Name and fill value of each constant seed.
const CONSTANTS: &[(&str, f32)] = &[
    ("all_zeros", 0.0),
    ("all_ones", 1.0),
    ("all_neg_ones", -1.0),
    ("all_tiny_pos", f32::MIN_POSITIVE),
    ("all_tiny_neg", -f32::MIN_POSITIVE),
    ("all_large_pos", f32::MAX),
    ("all_large_neg", f32::MIN),
];

pub fn populate(_ctx: &mut SeedContext, catalog: &mut Catalog) -> CorpusResult<()> {
    for &(name, value) in CONSTANTS {
        catalog.insert_vector(name, Category::Constant, &vector::splat(value))?;
    }
    Ok(())
}

//! Payloads that break the quantizer's length or value contract.
//!
//! None of these are padded or truncated to [`SEED_SIZE`]; the wrong length is
//! the point of the seed.

use rand::RngCore;

use crate::{
    builder::SeedContext,
    catalog::Catalog,
    constants::{BYTES_PER_FLOAT, SEED_SIZE},
    error::CorpusResult,
    seed::Category,
};

/// Zero-filled payload lengths and the name each is stored under.
const ZERO_FILLED: &[(&str, usize)] = &[
    ("short_1_byte", 1),
    ("short_100_bytes", 100),
    ("short_3068_bytes", SEED_SIZE - BYTES_PER_FLOAT),
    ("short_3071_bytes", SEED_SIZE - 1),
    ("long_3076_bytes", SEED_SIZE + BYTES_PER_FLOAT),
    ("long_4096_bytes", 4096),
    ("long_8192_bytes", 8192),
];

pub fn populate(ctx: &mut SeedContext, catalog: &mut Catalog) -> CorpusResult<()> {
    for &(name, len) in ZERO_FILLED {
        catalog.insert(name, Category::Malformed, vec![0u8; len])?;
    }

    // Correct length, but no guarantee the bytes form meaningful floats.
    let mut noise = vec![0u8; SEED_SIZE];
    ctx.rng().fill_bytes(&mut noise);
    catalog.insert("random_bytes", Category::Malformed, noise)?;

    Ok(())
}

//! Catalog construction from the seed family table.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::{
    catalog::Catalog,
    error::CorpusResult,
    families::{alternating, boundary, constant, malformed, random, special},
    seed::Category,
};

/// Populates a catalog with one category's seeds.
type PopulateFn = fn(&mut SeedContext, &mut Catalog) -> CorpusResult<()>;

/// Families in generation order.
///
/// Only `random` and `malformed` draw from the PRNG, so their relative order
/// fixes the draw sequence and must not change without changing every seed.
const FAMILIES: &[(Category, PopulateFn)] = &[
    (Category::Constant, constant::populate),
    (Category::Alternating, alternating::populate),
    (Category::Special, special::populate),
    (Category::Random, random::populate),
    (Category::Boundary, boundary::populate),
    (Category::Malformed, malformed::populate),
];

/// State shared across families during one generation run.
#[derive(Debug)]
pub struct SeedContext {
    rng: ChaCha20Rng,
}

impl SeedContext {
    pub fn new(rng_seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(rng_seed),
        }
    }

    /// The single PRNG stream every randomized family draws from.
    pub fn rng(&mut self) -> &mut ChaCha20Rng {
        &mut self.rng
    }
}

/// Builds the full seed catalog.
///
/// Two calls with the same `rng_seed` produce byte-identical payloads for every
/// name. The result is not checked against a minimum size; callers use
/// [`Catalog::ensure_min_seeds`] for that.
pub fn build_catalog(rng_seed: u64) -> CorpusResult<Catalog> {
    let mut ctx = SeedContext::new(rng_seed);
    let mut catalog = Catalog::new();

    for (category, populate) in FAMILIES {
        let before = catalog.len();
        populate(&mut ctx, &mut catalog)?;
        debug!(%category, added = catalog.len() - before, "populated seed family");
    }

    Ok(catalog)
}

//! Periodic patterns over the element index.

use crate::{builder::SeedContext, catalog::Catalog, error::CorpusResult, seed::Category, vector};

/// A square wave: `first` for the leading half of each period, `second` after.
struct Pattern {
    name: &'static str,
    period: usize,
    first: f32,
    second: f32,
}

impl Pattern {
    fn value_at(&self, i: usize) -> f32 {
        if i % self.period < self.period / 2 {
            self.first
        } else {
            self.second
        }
    }
}

const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "alt_pos_neg",
        period: 2,
        first: 1.0,
        second: -1.0,
    },
    Pattern {
        name: "alt_neg_pos",
        period: 2,
        first: -1.0,
        second: 1.0,
    },
    Pattern {
        name: "alt_pos_zero",
        period: 2,
        first: 1.0,
        second: 0.0,
    },
    Pattern {
        name: "alt_neg_zero",
        period: 2,
        first: -1.0,
        second: 0.0,
    },
    Pattern {
        name: "alt_4_pattern",
        period: 4,
        first: 1.0,
        second: -1.0,
    },
    Pattern {
        name: "alt_8_pattern",
        period: 8,
        first: 1.0,
        second: -1.0,
    },
];

pub fn populate(_ctx: &mut SeedContext, catalog: &mut Catalog) -> CorpusResult<()> {
    for p in PATTERNS {
        let vec = vector::from_fn(|i| p.value_at(i));
        catalog.insert_vector(p.name, Category::Alternating, &vec)?;
    }
    Ok(())
}

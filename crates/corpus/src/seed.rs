//! Named corpus entries.

use std::fmt;

use serde::Serialize;

use crate::constants::SEED_SIZE;

/// Seed family a payload belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Every element identical.
    Constant,
    /// Periodic sign/zero patterns.
    Alternating,
    /// NaN, infinities, signed zero and subnormals.
    Special,
    /// Draws from the shared seeded PRNG.
    Random,
    /// Single bits, byte-aligned blocks, gradients and steps.
    Boundary,
    /// Payloads of the wrong length or with unconstrained bytes.
    Malformed,
}

impl Category {
    /// All categories in generation order.
    pub const ALL: [Category; 6] = [
        Category::Constant,
        Category::Alternating,
        Category::Special,
        Category::Random,
        Category::Boundary,
        Category::Malformed,
    ];

    /// Stable lowercase label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Category::Constant => "constant",
            Category::Alternating => "alternating",
            Category::Special => "special",
            Category::Random => "random",
            Category::Boundary => "boundary",
            Category::Malformed => "malformed",
        }
    }

    /// Whether payloads in this category are always exactly [`SEED_SIZE`] bytes.
    pub fn is_well_formed(self) -> bool {
        !matches!(self, Category::Malformed)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A named payload destined for one corpus file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    name: String,
    category: Category,
    payload: Vec<u8>,
}

impl Seed {
    pub fn new(name: impl Into<String>, category: Category, payload: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            category,
            payload,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Whether the payload has the exact length the quantizer expects.
    pub fn has_expected_len(&self) -> bool {
        self.payload.len() == SEED_SIZE
    }
}

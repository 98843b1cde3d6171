//! The complete set of seeds produced by one generation run.

use std::collections::{btree_map, BTreeMap};

use crate::{
    encode::encode_vector,
    error::{CorpusError, CorpusResult},
    seed::{Category, Seed},
    vector::Vector,
};

/// Seeds keyed by unique name, iterated in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    seeds: BTreeMap<String, Seed>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a raw payload.
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::DuplicateSeed`] if the name is already taken; the
    /// existing entry is left untouched.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        category: Category,
        payload: Vec<u8>,
    ) -> CorpusResult<()> {
        let name = name.into();
        match self.seeds.entry(name) {
            btree_map::Entry::Occupied(e) => Err(CorpusError::DuplicateSeed(e.key().clone())),
            btree_map::Entry::Vacant(e) => {
                let seed = Seed::new(e.key().clone(), category, payload);
                e.insert(seed);
                Ok(())
            }
        }
    }

    /// Encodes and inserts a well-formed vector.
    pub fn insert_vector(
        &mut self,
        name: impl Into<String>,
        category: Category,
        vec: &Vector,
    ) -> CorpusResult<()> {
        self.insert(name, category, encode_vector(vec))
    }

    pub fn get(&self, name: &str) -> Option<&Seed> {
        self.seeds.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.seeds.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Seed> {
        self.seeds.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.seeds.keys().map(String::as_str)
    }

    /// Seeds belonging to `category`.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Seed> {
        self.iter().filter(move |s| s.category() == category)
    }

    /// Number of seeds per category, in [`Category::ALL`] order.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .iter()
            .map(|&c| (c, self.in_category(c).count()))
            .collect()
    }

    /// Sum of all payload lengths.
    pub fn total_bytes(&self) -> u64 {
        self.iter().map(|s| s.payload().len() as u64).sum()
    }

    /// Checks the corpus is large enough to bootstrap the fuzzer.
    pub fn ensure_min_seeds(&self, min: usize) -> CorpusResult<()> {
        if self.len() < min {
            return Err(CorpusError::InsufficientSeeds {
                count: self.len(),
                min,
            });
        }
        Ok(())
    }
}

//! Randomized distributions drawn from the shared PRNG.
//!
//! Every draw comes from [`SeedContext::rng`], in table order, so the payloads
//! are fully determined by the run's seed.

use std::ops::RangeInclusive;

use rand::Rng;
use rand_distr::{Normal, StandardNormal};

use crate::{builder::SeedContext, catalog::Catalog, error::CorpusResult, seed::Category, vector};

/// Number of `random_uniform_NN` seeds.
const UNIFORM_COUNT: usize = 20;

/// Number of `random_normal_NN` seeds.
const NORMAL_COUNT: usize = 10;

/// Zero percentages of the `sparse_NNpct` seeds.
const SPARSE_PCTS: RangeInclusive<u32> = 90..=99;

/// Number of `clustered_NN` seeds.
const CLUSTERED_COUNT: usize = 10;

/// Cluster centers are drawn uniformly from `[-CLUSTER_CENTER_BOUND, CLUSTER_CENTER_BOUND]`.
const CLUSTER_CENTER_BOUND: f32 = 0.5;

/// Spread of the first cluster; each following cluster widens by [`CLUSTER_SPREAD_STEP`].
const CLUSTER_BASE_SPREAD: f32 = 0.1;

const CLUSTER_SPREAD_STEP: f32 = 0.02;

pub fn populate(ctx: &mut SeedContext, catalog: &mut Catalog) -> CorpusResult<()> {
    let rng = ctx.rng();

    for i in 0..UNIFORM_COUNT {
        let vec = vector::from_fn(|_| rng.gen_range(-1.0f32..=1.0));
        catalog.insert_vector(format!("random_uniform_{i:02}"), Category::Random, &vec)?;
    }

    for i in 0..NORMAL_COUNT {
        let vec = vector::from_fn(|_| rng.sample::<f32, _>(StandardNormal));
        catalog.insert_vector(format!("random_normal_{i:02}"), Category::Random, &vec)?;
    }

    for pct in SPARSE_PCTS {
        let sparsity = f64::from(pct) / 100.0;
        let vec = vector::from_fn(|_| {
            if rng.gen::<f64>() > sparsity {
                rng.gen_range(-1.0f32..=1.0)
            } else {
                0.0
            }
        });
        catalog.insert_vector(format!("sparse_{pct:02}pct"), Category::Random, &vec)?;
    }

    for i in 0..CLUSTERED_COUNT {
        let center = rng.gen_range(-CLUSTER_CENTER_BOUND..=CLUSTER_CENTER_BOUND);
        let spread = CLUSTER_BASE_SPREAD + i as f32 * CLUSTER_SPREAD_STEP;
        let dist = Normal::new(center, spread)?;
        let vec = vector::from_fn(|_| rng.sample(dist));
        catalog.insert_vector(format!("clustered_{i:02}"), Category::Random, &vec)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{constants::DIM, encode::decode_f32s};

    fn randoms(seed: u64) -> Catalog {
        let mut catalog = Catalog::new();
        populate(&mut SeedContext::new(seed), &mut catalog).expect("populate");
        catalog
    }

    fn decoded(catalog: &Catalog, name: &str) -> Vec<f32> {
        decode_f32s(catalog.get(name).expect("seed present").payload()).expect("aligned")
    }

    #[test]
    fn test_family_sizes() {
        let catalog = randoms(42);
        assert_eq!(
            catalog.len(),
            UNIFORM_COUNT + NORMAL_COUNT + SPARSE_PCTS.count() + CLUSTERED_COUNT
        );
        assert!(catalog.contains("sparse_90pct"));
        assert!(catalog.contains("sparse_97pct"));
        assert!(catalog.contains("sparse_99pct"));
    }

    #[test]
    fn test_uniform_stays_in_range() {
        let catalog = randoms(42);
        for i in 0..UNIFORM_COUNT {
            let vals = decoded(&catalog, &format!("random_uniform_{i:02}"));
            assert!(vals.iter().all(|v| (-1.0..=1.0).contains(v)));
        }
    }

    #[test]
    fn test_sparse_is_mostly_zero() {
        let catalog = randoms(42);
        let vals = decoded(&catalog, "sparse_99pct");
        let zeros = vals.iter().filter(|v| **v == 0.0).count();
        // 99% expected; leave slack for sampling noise over 768 draws.
        assert!(zeros * 100 >= DIM * 95, "only {zeros} zeros");
        assert!(vals.iter().all(|v| (-1.0..=1.0).contains(v)));
    }

    #[test]
    fn test_clusters_are_finite_and_centered() {
        let catalog = randoms(42);
        for i in 0..CLUSTERED_COUNT {
            let vals = decoded(&catalog, &format!("clustered_{i:02}"));
            assert!(vals.iter().all(|v| v.is_finite()));
            let mean = vals.iter().sum::<f32>() / DIM as f32;
            // Center within 0.5, spread at most 0.28: the sample mean cannot stray far.
            assert!(mean.abs() < 0.6, "cluster {i} mean {mean}");
        }
    }

    #[test]
    fn test_same_seed_same_draws() {
        assert_eq!(randoms(9), randoms(9));
    }
}

//! Structural patterns aimed at bit-packing boundaries and sign transitions.

use crate::{
    builder::SeedContext,
    catalog::Catalog,
    constants::DIM,
    error::CorpusResult,
    seed::Category,
    vector::{self, Vector},
};

/// Indices that get a lone `1.0`: both ends, and either side of byte and half boundaries.
const SINGLE_BIT_INDICES: &[usize] = &[0, 7, 8, 15, 16, 383, 384, 767];

/// Output byte offsets whose eight source elements are set to `1.0`.
const BYTE_ALIGNED_OFFSETS: &[usize] = &[0, 1, 47, 48, 95];

/// Elements packed into one output byte.
const BITS_PER_BYTE: usize = 8;

/// Indices where the `-1 -> +1` step functions switch.
const STEP_POSITIONS: &[usize] = &[DIM / 4, DIM / 2, 3 * DIM / 4];

/// Values of the quarter-partitioned seeds, in order.
const QUARTER_VALUES: [f32; 4] = [1.0, -1.0, 0.5, -0.5];

/// Values of the third-partitioned seed, in order.
const THIRD_VALUES: [f32; 3] = [1.0, -1.0, 0.0];

/// Fixed-shape seeds that need no parameters beyond the index.
const SHAPES: &[(&str, fn(usize) -> f32)] = &[
    ("gradient_linear", |i| (i as f32 / DIM as f32) * 2.0 - 1.0),
    ("gradient_reverse", |i| 1.0 - (i as f32 / DIM as f32) * 2.0),
    ("half_pos_half_neg", |i| if i < DIM / 2 { 1.0 } else { -1.0 }),
    ("thirds_pattern", |i| THIRD_VALUES[partition(i, 3)]),
    ("quarters_pattern", |i| QUARTER_VALUES[partition(i, 4)]),
    ("quarters_cyclic", |i| QUARTER_VALUES[i % 4]),
    ("tiny_epsilon", |_| f32::EPSILON),
    ("tiny_neg_epsilon", |_| -f32::EPSILON),
    ("alternating_epsilon", |i| {
        if i % 2 == 0 {
            f32::EPSILON
        } else {
            -f32::EPSILON
        }
    }),
];

/// Which of `parts` contiguous, equal-width ranges index `i` falls in.
fn partition(i: usize, parts: usize) -> usize {
    (i * parts / DIM).min(parts - 1)
}

fn byte_block(offset: usize) -> Vector {
    let start = offset * BITS_PER_BYTE;
    vector::impulses(start..start + BITS_PER_BYTE, 1.0)
}

pub fn populate(_ctx: &mut SeedContext, catalog: &mut Catalog) -> CorpusResult<()> {
    for &idx in SINGLE_BIT_INDICES {
        let vec = vector::impulses([idx], 1.0);
        catalog.insert_vector(format!("single_bit_{idx:03}"), Category::Boundary, &vec)?;
    }

    for &offset in BYTE_ALIGNED_OFFSETS {
        catalog.insert_vector(
            format!("byte_aligned_{offset:02}"),
            Category::Boundary,
            &byte_block(offset),
        )?;
    }

    for &pos in STEP_POSITIONS {
        let vec = vector::from_fn(|i| if i < pos { -1.0 } else { 1.0 });
        catalog.insert_vector(format!("step_at_{pos:03}"), Category::Boundary, &vec)?;
    }

    for &(name, shape) in SHAPES {
        catalog.insert_vector(name, Category::Boundary, &vector::from_fn(shape))?;
    }

    Ok(())
}

//! Fixed-width quantizer input vectors.

use std::array;

use crate::constants::DIM;

/// One quantizer input: exactly [`DIM`] elements, any bit pattern allowed.
pub type Vector = [f32; DIM];

/// Builds a vector from a per-index rule.
pub fn from_fn(f: impl FnMut(usize) -> f32) -> Vector {
    array::from_fn(f)
}

/// Builds a vector with every element set to `value`.
pub fn splat(value: f32) -> Vector {
    [value; DIM]
}

/// Builds an all-zero vector with `value` at each index in `indices`.
pub fn impulses(indices: impl IntoIterator<Item = usize>, value: f32) -> Vector {
    let mut vec = splat(0.0);
    for idx in indices {
        if let Some(slot) = vec.get_mut(idx) {
            *slot = value;
        }
    }
    vec
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impulses_ignores_out_of_range() {
        let vec = impulses([0, DIM - 1, DIM, DIM + 7], 1.0);
        assert_eq!(vec[0], 1.0);
        assert_eq!(vec[DIM - 1], 1.0);
        assert_eq!(vec.iter().filter(|v| **v != 0.0).count(), 2);
    }
}

//! Input contract of the quantization fuzz target and generation defaults.

/// Number of `f32` elements in one quantizer input vector.
pub const DIM: usize = 768;

/// Encoded width of a single element.
pub const BYTES_PER_FLOAT: usize = 4;

/// Exact byte length of a well-formed payload.
pub const SEED_SIZE: usize = DIM * BYTES_PER_FLOAT;

/// Seed for the shared PRNG when none is configured.
pub const DEFAULT_RNG_SEED: u64 = 42;

/// Smallest corpus the fuzz setup accepts.
pub const MIN_SEED_COUNT: usize = 100;

/// Smallest positive subnormal `f32` (only the lowest mantissa bit set).
pub const MIN_POSITIVE_SUBNORMAL: f32 = f32::from_bits(0x0000_0001);

/// Largest subnormal `f32` (all mantissa bits set, exponent zero).
pub const MAX_SUBNORMAL: f32 = f32::from_bits(0x007f_ffff);

/// Signaling NaN with the lowest payload bit set.
pub const SIGNALING_NAN: f32 = f32::from_bits(0x7f80_0001);

/// Quiet NaN with the sign bit set.
pub const NEGATIVE_NAN: f32 = f32::from_bits(0xffc0_0000);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_size_matches_dim() {
        assert_eq!(SEED_SIZE, 3072);
    }

    #[test]
    fn test_boundary_constants_are_exact() {
        assert!(MIN_POSITIVE_SUBNORMAL.is_subnormal());
        assert!(MAX_SUBNORMAL.is_subnormal());
        assert!(MAX_SUBNORMAL < f32::MIN_POSITIVE);
        assert_eq!(f32::from_bits(MAX_SUBNORMAL.to_bits() + 1), f32::MIN_POSITIVE);
        assert!(SIGNALING_NAN.is_nan());
        assert!(NEGATIVE_NAN.is_nan());
        assert!(NEGATIVE_NAN.is_sign_negative());
    }
}

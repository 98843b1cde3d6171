//! Seed corpus generation for the binary quantization fuzz target.
//!
//! The quantizer consumes exactly [`SEED_SIZE`] bytes, read as [`DIM`] consecutive
//! little-endian `f32` values. This crate enumerates a fixed, named set of inputs
//! that exercise numeric edge cases (NaN, infinities, signed zero, subnormals),
//! bit-packing boundaries, realistic embedding-like distributions and malformed
//! lengths, and persists them as a corpus directory.
//!
//! Generation is deterministic: [`build_catalog`] with the same seed always yields
//! byte-identical payloads.

pub mod builder;
pub mod catalog;
pub mod constants;
pub mod encode;
pub mod error;
pub mod families;
pub mod seed;
pub mod vector;
pub mod writer;

pub use builder::{build_catalog, SeedContext};
pub use catalog::Catalog;
pub use constants::{BYTES_PER_FLOAT, DEFAULT_RNG_SEED, DIM, MIN_SEED_COUNT, SEED_SIZE};
pub use encode::{decode_f32s, encode_f32s, encode_vector};
pub use error::{CorpusError, CorpusResult};
pub use seed::{Category, Seed};
pub use vector::Vector;
pub use writer::{verify_corpus, write_corpus, VerifyReport, WriteOptions, WriteReport};

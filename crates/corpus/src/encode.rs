//! Bit-exact little-endian `f32` encoding.
//!
//! Values are copied through [`f32::to_bits`], so NaN payloads, signed zero,
//! infinities and subnormals survive unchanged. Nothing is normalized or clamped.

use crate::{
    constants::BYTES_PER_FLOAT,
    error::{CorpusError, CorpusResult},
    vector::Vector,
};

/// Concatenates the 4-byte little-endian representation of each value.
pub fn encode_f32s(values: &[f32]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(values.len() * BYTES_PER_FLOAT);
    for v in values {
        buf.extend_from_slice(&v.to_bits().to_le_bytes());
    }
    buf
}

/// Encodes a full quantizer input vector.
pub fn encode_vector(vec: &Vector) -> Vec<u8> {
    encode_f32s(vec)
}

/// Reinterprets `bytes` as consecutive little-endian `f32` values.
///
/// # Errors
///
/// Returns [`CorpusError::MisalignedPayload`] if the length is not a multiple of 4.
pub fn decode_f32s(bytes: &[u8]) -> CorpusResult<Vec<f32>> {
    if bytes.len() % BYTES_PER_FLOAT != 0 {
        return Err(CorpusError::MisalignedPayload { len: bytes.len() });
    }

    Ok(bytes
        .chunks_exact(BYTES_PER_FLOAT)
        .map(|chunk| {
            let mut raw = [0u8; BYTES_PER_FLOAT];
            raw.copy_from_slice(chunk);
            f32::from_bits(u32::from_le_bytes(raw))
        })
        .collect())
}

use thiserror::Error;

/// Errors from boundary decoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodingError {
    /// The input string does not start with `0x`.
    #[error("hex input must be 0x-prefixed")]
    MissingPrefix,
    /// The hex string does not encode exactly one 32-byte element.
    #[error("hex elements must be 66 characters, got {length}")]
    InvalidElementLength {
        /// Character length of the offending input.
        length: usize,
    },
    /// The input contains invalid hex digits.
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    /// A packed proof blob is not a whole number of 32-byte elements.
    #[error("packed proofs must be a multiple of 32 bytes, got {length} bytes")]
    InvalidProofLength {
        /// Byte length of the offending blob.
        length: usize,
    },
}

//! Boundary encoding for Merkle tree elements and proofs.
//!
//! The tree core works on raw 32-byte values; external callers exchange
//! `0x`-prefixed hex strings, and remote verifiers receive a proof as one
//! packed byte blob — the 32-byte elements concatenated in proof order.
//! This crate is the adapter between the two representations, plus
//! argument formatters for invoking a remote proof checker. None of this
//! is tree logic: decoding happens before values enter the core, encoding
//! after they leave it.

#![warn(missing_docs)]

mod error;

pub use error::EncodingError;
use merkle_proof_tree::{ELEMENT_SIZE, Element};

/// Character length of the `0x`-prefixed hex encoding of one element.
const ELEMENT_HEX_LEN: usize = 2 + 2 * ELEMENT_SIZE;

/// Decode a `0x`-prefixed 66-character hex string into an element.
pub fn parse_element(input: &str) -> Result<Element, EncodingError> {
    let digits = input
        .strip_prefix("0x")
        .ok_or(EncodingError::MissingPrefix)?;
    if input.len() != ELEMENT_HEX_LEN {
        return Err(EncodingError::InvalidElementLength {
            length: input.len(),
        });
    }
    let mut element = [0u8; ELEMENT_SIZE];
    hex::decode_to_slice(digits, &mut element)?;
    Ok(element)
}

/// Decode a batch of hex elements, discarding empty strings first.
///
/// Blank placeholders are a boundary convenience mirrored by tree
/// construction; dropping them here keeps the two in agreement.
pub fn parse_elements<'a, I>(inputs: I) -> Result<Vec<Element>, EncodingError>
where
    I: IntoIterator<Item = &'a str>,
{
    inputs
        .into_iter()
        .filter(|input| !input.is_empty())
        .map(parse_element)
        .collect()
}

/// Encode an element as a `0x`-prefixed hex string.
pub fn encode_element(element: &Element) -> String {
    format!("0x{}", hex::encode(element))
}

/// Pack a proof into a single byte blob: the elements concatenated in
/// proof order.
pub fn pack_proof(proof: &[Element]) -> Vec<u8> {
    let mut packed = Vec::with_capacity(proof.len() * ELEMENT_SIZE);
    for element in proof {
        packed.extend_from_slice(element);
    }
    packed
}

/// Pack a proof into a single `0x`-prefixed hex blob.
pub fn pack_proof_hex(proof: &[Element]) -> String {
    format!("0x{}", hex::encode(pack_proof(proof)))
}

/// Split a packed proof blob back into its elements.
pub fn unpack_proof(packed: &[u8]) -> Result<Vec<Element>, EncodingError> {
    if !packed.len().is_multiple_of(ELEMENT_SIZE) {
        return Err(EncodingError::InvalidProofLength {
            length: packed.len(),
        });
    }
    Ok(packed
        .chunks_exact(ELEMENT_SIZE)
        .map(|chunk| {
            let mut element = [0u8; ELEMENT_SIZE];
            element.copy_from_slice(chunk);
            element
        })
        .collect())
}

/// Decode a `0x`-prefixed hex proof blob into its elements.
pub fn unpack_proof_hex(input: &str) -> Result<Vec<Element>, EncodingError> {
    let digits = input
        .strip_prefix("0x")
        .ok_or(EncodingError::MissingPrefix)?;
    let packed = hex::decode(digits)?;
    unpack_proof(&packed)
}

/// Invoke a remote unordered-proof checker with boundary-encoded
/// arguments: the packed hex proof, the hex root, and the hex element.
///
/// A checker that decodes the arguments and runs the local
/// [`check_proof`](merkle_proof_tree::check_proof) with the same digest
/// accepts exactly when the local verifier does.
pub fn check_proof_with<F>(
    checker: F,
    proof: &[Element],
    root: &Element,
    element: &Element,
) -> bool
where
    F: FnOnce(&str, &str, &str) -> bool,
{
    checker(
        &pack_proof_hex(proof),
        &encode_element(root),
        &encode_element(element),
    )
}

/// Invoke a remote ordered-proof checker; the 1-based leaf index is passed
/// through alongside the encoded arguments.
pub fn check_proof_ordered_with<F>(
    checker: F,
    proof: &[Element],
    root: &Element,
    element: &Element,
    index: usize,
) -> bool
where
    F: FnOnce(&str, &str, &str, usize) -> bool,
{
    checker(
        &pack_proof_hex(proof),
        &encode_element(root),
        &encode_element(element),
        index,
    )
}

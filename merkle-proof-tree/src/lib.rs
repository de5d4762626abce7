//! Dual-mode binary Merkle tree with compact inclusion proofs, using Blake3.
//!
//! Builds a binary hash tree over 32-byte hash values, produces the sibling
//! hashes needed to recompute the root from one leaf, and verifies such
//! proofs against a known root.
//!
//! # Two strategies (`preserve_order` flag)
//!
//! 1. **Unordered** — the leaves are deduplicated and sorted, and each pair
//!    of pre-images is sorted before hashing, which allows verifying a
//!    proof without knowing the leaf position.
//! 2. **Ordered** — the order of the leaves and pre-image pairs is
//!    preserved (duplicates included), and a 1-based leaf index is required
//!    to verify the proof. Trees need not be padded to a power of two: an
//!    odd-sized layer promotes its last node unchanged, and verification
//!    reconstructs the pairing decisions from the proof length and the
//!    index alone.
//!
//! # Core types
//!
//! - [`MerkleTree`] — layered tree (build, root, proof extraction).
//! - [`check_proof`] / [`check_proof_ordered`] — the two verifiers.
//! - [`merkle_root`] — one-shot root computation.
//!
//! Everything here is a pure function over immutable values: no I/O, no
//! shared state, no mutation after construction.

#![warn(missing_docs)]

mod error;
pub(crate) mod hash;
/// Index arithmetic shared by proof extraction and ordered verification.
pub(crate) mod helper;
mod proof;
mod tree;
mod verify;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::MerkleTreeError;
pub use hash::{ELEMENT_SIZE, Element, combine_hashes};
pub use tree::{MerkleTree, merkle_root};
pub use verify::{check_proof, check_proof_ordered};

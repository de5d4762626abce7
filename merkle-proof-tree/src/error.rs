use thiserror::Error;

/// Errors from Merkle tree construction and proof extraction.
///
/// All failures are synchronous and local: a failed call returns no partial
/// tree and nothing is retried. Verification never errors — it returns
/// `false` for any proof/root/element combination that does not check out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MerkleTreeError {
    /// An input element was not exactly 32 bytes. Construction is
    /// all-or-nothing, so one bad element aborts the whole call.
    #[error("elements must be 32 byte values, got {length} bytes")]
    InvalidElementSize {
        /// Byte length of the offending element.
        length: usize,
    },
    /// The requested element is not present in the tree's leaf set.
    #[error("element not found in merkle tree")]
    ElementNotFound,
    /// The claimed element does not equal the stored leaf at the claimed
    /// 1-based index (or the index is out of range).
    #[error("element does not match leaf at index {index} in tree")]
    IndexMismatch {
        /// The claimed 1-based leaf index.
        index: usize,
    },
}

//! Sibling hash combination using Blake3.
//!
//! The digest is the one process-wide configuration constant of the crate:
//! construction, extraction, and verification all combine hashes through
//! [`combine_hashes`], never through ad-hoc hashing.

/// Length in bytes of every tree element.
pub const ELEMENT_SIZE: usize = 32;

/// A 32-byte hash value stored in the tree. Compared by byte value.
pub type Element = [u8; ELEMENT_SIZE];

/// Combine two sibling hashes into their parent hash.
///
/// An absent operand promotes the present one unchanged — this is how the
/// unpaired leftover node of an odd-sized layer moves up without rehashing.
/// With both present, the pre-images are concatenated in argument order
/// when `preserve_order` is set, or sorted ascending by byte value first
/// when it is not, so that
/// `combine_hashes(a, b, false) == combine_hashes(b, a, false)`.
///
/// Callers guarantee at least one operand is present.
pub fn combine_hashes(
    first: Option<&Element>,
    second: Option<&Element>,
    preserve_order: bool,
) -> Element {
    match (first, second) {
        (Some(first), None) => *first,
        (None, Some(second)) => *second,
        (Some(first), Some(second)) => {
            let (left, right) = if preserve_order || first <= second {
                (first, second)
            } else {
                (second, first)
            };
            let mut input = [0u8; 2 * ELEMENT_SIZE];
            input[..ELEMENT_SIZE].copy_from_slice(left);
            input[ELEMENT_SIZE..].copy_from_slice(right);
            *blake3::hash(&input).as_bytes()
        }
        (None, None) => unreachable!("combine_hashes called without operands"),
    }
}

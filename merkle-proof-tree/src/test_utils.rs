//! Test helpers: deterministic elements and expected-hash computation.

use crate::hash::{ELEMENT_SIZE, Element};

/// Element filled with a single repeated byte.
pub(crate) fn filled(byte: u8) -> Element {
    [byte; ELEMENT_SIZE]
}

/// Blake3 of arbitrary bytes, as an element.
pub(crate) fn hashed(data: impl AsRef<[u8]>) -> Element {
    *blake3::hash(data.as_ref()).as_bytes()
}

/// Distinct elements `hashed(0), hashed(1), ...` for test trees.
pub(crate) fn distinct_elements(count: usize) -> Vec<Element> {
    (0..count as u32)
        .map(|i| hashed(i.to_le_bytes()))
        .collect()
}

/// Expected parent hash with pre-images in the given order.
pub(crate) fn merge_ordered(left: &Element, right: &Element) -> Element {
    let mut input = [0u8; 2 * ELEMENT_SIZE];
    input[..ELEMENT_SIZE].copy_from_slice(left);
    input[ELEMENT_SIZE..].copy_from_slice(right);
    *blake3::hash(&input).as_bytes()
}

/// Expected parent hash with pre-images sorted ascending first.
pub(crate) fn merge_sorted(a: &Element, b: &Element) -> Element {
    if a <= b {
        merge_ordered(a, b)
    } else {
        merge_ordered(b, a)
    }
}

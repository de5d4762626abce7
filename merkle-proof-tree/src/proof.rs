//! Proof extraction: locating a leaf and collecting its sibling hashes.

use crate::{
    hash::Element,
    helper::{half_floor, sibling_index},
};

/// First index whose element equals `element` by byte value.
pub(crate) fn locate_index(element: &Element, elements: &[Element]) -> Option<usize> {
    elements.iter().position(|candidate| candidate == element)
}

/// Collect the sibling hashes along the path from leaf `index` to the root.
///
/// Walks every layer except the root layer, descending the index with
/// floor division. A layer contributes nothing when the node has no
/// sibling there (the promoted leftover of an odd-sized layer), so the
/// proof can be shorter than the number of layers minus one.
pub(crate) fn extract_proof(mut index: usize, layers: &[Vec<Element>]) -> Vec<Element> {
    let mut proof = Vec::new();
    for layer in &layers[..layers.len() - 1] {
        if let Some(sibling) = layer.get(sibling_index(index)) {
            proof.push(*sibling);
        }
        index = half_floor(index);
    }
    proof
}

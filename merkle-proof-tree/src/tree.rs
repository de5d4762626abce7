//! Tree construction and layer derivation.

use crate::{
    error::MerkleTreeError,
    hash::{Element, combine_hashes},
    proof::{extract_proof, locate_index},
};

/// A binary Merkle tree over 32-byte hash values.
///
/// The tree is a sequence of layers: `layers[0]` holds the processed leaf
/// elements, every layer above holds the combined hashes of consecutive
/// pairs below it, and the last layer holds the single root. A layer of
/// length L produces a layer of length `ceil(L / 2)`: the final element of
/// an odd-sized layer has no pair and is promoted unchanged.
///
/// Immutable once built. A changed input requires a new tree.
#[derive(Debug, Clone)]
pub struct MerkleTree {
    elements: Vec<Element>,
    preserve_order: bool,
    layers: Vec<Vec<Element>>,
}

impl MerkleTree {
    /// Build a tree from raw byte elements.
    ///
    /// Empty input slices are discarded before validation, a convenience
    /// for boundary callers that pass blank placeholders. Every remaining
    /// element must be exactly 32 bytes or construction fails whole.
    ///
    /// With `preserve_order` unset the leaves are deduplicated and sorted
    /// ascending by byte value, making the root independent of input order
    /// and proofs verifiable without an index. With it set, the input
    /// sequence is kept exactly — duplicates included — and proofs are
    /// bound to a leaf position.
    pub fn new<E: AsRef<[u8]>>(
        elements: &[E],
        preserve_order: bool,
    ) -> Result<Self, MerkleTreeError> {
        let mut leaves = Vec::with_capacity(elements.len());
        for element in elements {
            let bytes = element.as_ref();
            if bytes.is_empty() {
                continue;
            }
            let leaf: Element = bytes
                .try_into()
                .map_err(|_| MerkleTreeError::InvalidElementSize {
                    length: bytes.len(),
                })?;
            leaves.push(leaf);
        }

        if !preserve_order {
            leaves.sort_unstable();
            leaves.dedup();
        }

        let layers = build_layers(&leaves, preserve_order);

        Ok(Self {
            elements: leaves,
            preserve_order,
            layers,
        })
    }

    /// The root hash, or `None` for a tree built from zero usable elements.
    pub fn root(&self) -> Option<Element> {
        self.layers.last().and_then(|layer| layer.first()).copied()
    }

    /// The leaf elements as stored: deduplicated and sorted in unordered
    /// mode, verbatim input in ordered mode.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Whether this tree preserves input order.
    pub fn preserve_order(&self) -> bool {
        self.preserve_order
    }

    /// All layers, leaf layer first, root layer last.
    pub fn layers(&self) -> &[Vec<Element>] {
        &self.layers
    }

    /// Inclusion proof for `element`, located by byte-value equality.
    ///
    /// Returns the sibling hashes in leaf-to-root order, or
    /// [`MerkleTreeError::ElementNotFound`] when no leaf equals `element`.
    pub fn proof(&self, element: &Element) -> Result<Vec<Element>, MerkleTreeError> {
        let index =
            locate_index(element, &self.elements).ok_or(MerkleTreeError::ElementNotFound)?;
        Ok(extract_proof(index, &self.layers))
    }

    /// Inclusion proof for the leaf at a 1-based `index`.
    ///
    /// The claimed element must equal the stored leaf at that index; the
    /// explicit index disambiguates between duplicate leaves in ordered
    /// mode. Fails with [`MerkleTreeError::IndexMismatch`] otherwise.
    pub fn proof_ordered(
        &self,
        element: &Element,
        index: usize,
    ) -> Result<Vec<Element>, MerkleTreeError> {
        let stored = index.checked_sub(1).and_then(|i| self.elements.get(i));
        if stored != Some(element) {
            return Err(MerkleTreeError::IndexMismatch { index });
        }
        Ok(extract_proof(index - 1, &self.layers))
    }
}

/// Compute the Merkle root of `elements` without keeping the tree around.
pub fn merkle_root<E: AsRef<[u8]>>(
    elements: &[E],
    preserve_order: bool,
) -> Result<Option<Element>, MerkleTreeError> {
    Ok(MerkleTree::new(elements, preserve_order)?.root())
}

/// Derive all layers bottom-up from the processed leaves.
///
/// Zero leaves produce a single empty layer and therefore no root.
fn build_layers(leaves: &[Element], preserve_order: bool) -> Vec<Vec<Element>> {
    let mut layers = vec![leaves.to_vec()];
    while layers[layers.len() - 1].len() > 1 {
        let next = next_layer(&layers[layers.len() - 1], preserve_order);
        layers.push(next);
    }
    layers
}

/// Combine consecutive pairs of a layer into the layer above it.
fn next_layer(layer: &[Element], preserve_order: bool) -> Vec<Element> {
    layer
        .chunks(2)
        .map(|pair| combine_hashes(Some(&pair[0]), pair.get(1), preserve_order))
        .collect()
}

//! Proof verification: the commutative fold and the index-tracking fold.
//!
//! Both verifiers are one-shot pure reductions of a proof plus a starting
//! element down to a recomputed root. They never error and never panic —
//! any malformed, truncated, or adversarial input simply fails to
//! reproduce the root and yields `false`.

use crate::{
    hash::{Element, combine_hashes},
    helper::{half_round_up, level_capacity},
};

/// Verify an unordered-mode proof.
///
/// Folds the proof into `element` left-to-right with the commutative
/// combiner; sibling left/right identity is irrelevant, so no index is
/// needed. Returns whether the recomputed root equals `root`.
pub fn check_proof(proof: &[Element], root: &Element, element: &Element) -> bool {
    let computed = proof.iter().fold(*element, |running, sibling| {
        combine_hashes(Some(&running), Some(sibling), false)
    });
    computed == *root
}

/// Verify an ordered-mode proof for the leaf at a 1-based `index`.
///
/// Reconstructs, from only the proof length and the index, the same
/// left/right pairing decisions made while building a possibly unbalanced
/// tree — the tree shape itself is never transmitted.
///
/// When an odd-sized layer promotes its last node, no proof element is
/// consumed at that level, which leaves `index` referring to a lower layer
/// than the one the next proof element belongs to. The inner loop
/// resynchronizes: while the index is odd and larger than a subtree of the
/// remaining levels could hold, it is halved (round-half-up) to its
/// position one layer up. An even index then means the proof element sat
/// on the left of the pair, an odd index on the right.
pub fn check_proof_ordered(
    proof: &[Element],
    root: &Element,
    element: &Element,
    index: usize,
) -> bool {
    let mut running = *element;
    let mut index = index;

    for (consumed, sibling) in proof.iter().enumerate() {
        let remaining = proof.len() - consumed;

        while index % 2 == 1
            && level_capacity(remaining).is_some_and(|capacity| index > capacity)
        {
            index = half_round_up(index);
        }

        running = if index % 2 == 0 {
            combine_hashes(Some(sibling), Some(&running), true)
        } else {
            combine_hashes(Some(&running), Some(sibling), true)
        };
        index = half_round_up(index);
    }

    running == *root
}

//! Proof verification for the fixed Merkle tree.
//!
//! Pure function, no tree access. Replays the hash combinations from the
//! candidate data up to the root and compares against the expected root.

use log::trace;

use crate::{
    Hash, MerkleHasher, NodeAddress, proof::MerkleProof,
    tree::{MAX_HEIGHT, MIN_HEIGHT},
};

impl MerkleProof {
    /// Check that `data` sits at this proof's leaf in the tree with `root`.
    ///
    /// Never errors: a wrong sibling count, an out-of-range leaf index,
    /// forged data or a stale root all yield `false`.
    #[must_use = "Must use the result of the proof verification"]
    pub fn verify<H: MerkleHasher, const HEIGHT: usize>(&self, root: &Hash, data: &[u8]) -> bool {
        if !(MIN_HEIGHT..=MAX_HEIGHT).contains(&HEIGHT) || self.siblings.len() != HEIGHT {
            trace!(
                "proof has {} siblings, expected {}",
                self.siblings.len(),
                HEIGHT
            );
            return false;
        }
        if self.leaf_index >= 1u64 << HEIGHT {
            trace!("proof leaf index {} beyond capacity", self.leaf_index);
            return false;
        }

        let path = NodeAddress::path_from_leaf_to_root(HEIGHT as u8, self.leaf_index);
        let computed = path
            .zip(&self.siblings)
            .fold(H::hash_leaf(data), |current, (address, sibling)| {
                if address.is_left_child() {
                    H::hash_children(&current, sibling)
                } else {
                    H::hash_children(sibling, &current)
                }
            });

        if &computed != root {
            trace!(
                "root mismatch for leaf {}: expected {}, got {}",
                self.leaf_index,
                hex::encode(root),
                hex::encode(computed)
            );
            return false;
        }
        true
    }
}

/// Free-function form of [`MerkleProof::verify`].
#[must_use = "Must use the result of the proof verification"]
pub fn verify_proof<H: MerkleHasher, const HEIGHT: usize>(
    root: &Hash,
    proof: &MerkleProof,
    data: &[u8],
) -> bool {
    proof.verify::<H, HEIGHT>(root, data)
}

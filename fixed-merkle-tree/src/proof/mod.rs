//! Inclusion proof generation for the fixed Merkle tree.
//!
//! A `MerkleProof` proves that one leaf slot holds the hash of some data,
//! authenticated against the tree's root hash. It is a snapshot: appending
//! to the tree afterwards changes the root and the proof no longer
//! verifies against it.

use bincode::{Decode, Encode};
use log::debug;

use crate::{FixedMerkleError, FixedMerkleTree, Hash, MerkleHasher, NodeAddress};


/// Upper bound on decoded sibling counts, above any supported height.
pub(crate) const MAX_PROOF_SIBLINGS: usize = 64;

/// Encoded size of the fixed-width header (`leaf_index`, sibling count).
const HEADER_LEN: usize = 16;

/// An inclusion proof for a single leaf.
///
/// Fields are `pub(crate)` so proofs only come from
/// [`generate`](MerkleProof::generate) or
/// [`decode_from_slice`](MerkleProof::decode_from_slice).
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct MerkleProof {
    /// Index of the proved leaf. Its bit at each level tells the verifier
    /// whether the running hash is the left or right child.
    pub(crate) leaf_index: u64,
    /// Sibling hashes ordered leaf to root.
    pub(crate) siblings: Vec<Hash>,
}

impl MerkleProof {
    /// Generate a proof for leaf `leaf_index` of `tree`.
    ///
    /// Fails if the tree is empty or the leaf has not been appended yet.
    pub fn generate<H: MerkleHasher, const HEIGHT: usize>(
        tree: &FixedMerkleTree<H, HEIGHT>,
        leaf_index: u64,
    ) -> Result<Self, FixedMerkleError> {
        if tree.is_empty() {
            return Err(FixedMerkleError::TreeEmpty);
        }
        if leaf_index >= tree.len() {
            return Err(FixedMerkleError::IndexOutOfRange {
                index: leaf_index,
                len: tree.len(),
            });
        }

        let siblings: Vec<Hash> = NodeAddress::path_from_leaf_to_root(tree.height(), leaf_index)
            .map(|address| tree.node_hash(address.sibling()))
            .collect();

        debug!(
            "generated proof for leaf {} with {} siblings",
            leaf_index,
            siblings.len()
        );
        Ok(MerkleProof {
            leaf_index,
            siblings,
        })
    }

    /// Index of the proved leaf.
    pub fn leaf_index(&self) -> u64 {
        self.leaf_index
    }

    /// Sibling hashes, ordered from the leaf's sibling up to the root's
    /// child.
    pub fn siblings(&self) -> &[Hash] {
        &self.siblings
    }

    /// Encoded length in bytes.
    pub fn encoded_len(&self) -> usize {
        HEADER_LEN + self.siblings.len() * 32
    }

    /// Encode to the canonical fixed-width form:
    /// `leaf_index (u64 BE) | count (u64 BE) | count * 32 bytes`.
    pub fn encode_to_vec(&self) -> Result<Vec<u8>, FixedMerkleError> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_fixed_int_encoding();
        bincode::encode_to_vec(self, config)
            .map_err(|e| FixedMerkleError::InvalidProof(format!("encode error: {}", e)))
    }

    /// Decode from the canonical form.
    ///
    /// Rejects trailing bytes and more than 64 siblings.
    pub fn decode_from_slice(bytes: &[u8]) -> Result<Self, FixedMerkleError> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_fixed_int_encoding()
            .with_limit::<{ HEADER_LEN + MAX_PROOF_SIBLINGS * 32 }>();
        let (proof, read): (Self, usize) = bincode::decode_from_slice(bytes, config)
            .map_err(|e| FixedMerkleError::InvalidProof(format!("decode error: {}", e)))?;
        if read != bytes.len() {
            return Err(FixedMerkleError::InvalidProof(format!(
                "{} trailing bytes after proof",
                bytes.len() - read
            )));
        }
        if proof.siblings.len() > MAX_PROOF_SIBLINGS {
            return Err(FixedMerkleError::InvalidProof(format!(
                "proof has {} siblings (max {})",
                proof.siblings.len(),
                MAX_PROOF_SIBLINGS
            )));
        }
        Ok(proof)
    }
}

impl<H: MerkleHasher, const HEIGHT: usize> FixedMerkleTree<H, HEIGHT> {
    /// Generate an inclusion proof for leaf `leaf_index`.
    ///
    /// See [`MerkleProof::generate`].
    pub fn generate_proof(&self, leaf_index: u64) -> Result<MerkleProof, FixedMerkleError> {
        MerkleProof::generate(self, leaf_index)
    }
}

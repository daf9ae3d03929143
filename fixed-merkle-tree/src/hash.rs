//! Leaf and parent hashing.
//!
//! Hash domain separation:
//! - Leaf nodes:     `H(0x00 || data)`
//! - Internal nodes: `H(0x01 || left_hash || right_hash)`
//!
//! Children are concatenated in order, so swapping two siblings changes the
//! parent hash.

use std::marker::PhantomData;

use digest::{Digest, consts::U32};

use crate::NodeAddress;

/// A 32-byte node hash, the canonical width for roots and proof elements.
pub type Hash = [u8; 32];

/// Domain tag prepended to leaf hash inputs.
pub(crate) const LEAF_DOMAIN_TAG: u8 = 0x00;
/// Domain tag prepended to internal node hash inputs.
pub(crate) const INTERNAL_DOMAIN_TAG: u8 = 0x01;

/// One-way hash strategy used by the tree and the proof verifier.
pub trait MerkleHasher {
    /// Placeholder stored in leaf slots that have not been filled yet.
    const EMPTY_LEAF: Hash = [0u8; 32];

    /// Hash the raw bytes of an appended item.
    fn hash_leaf(data: &[u8]) -> Hash;

    /// Hash a parent from its ordered children.
    fn hash_children(left: &Hash, right: &Hash) -> Hash;
}

/// Blake3 with `0x00`/`0x01` domain tags. The default hasher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Blake3Hasher;

impl MerkleHasher for Blake3Hasher {
    fn hash_leaf(data: &[u8]) -> Hash {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&[LEAF_DOMAIN_TAG]);
        hasher.update(data);
        *hasher.finalize().as_bytes()
    }

    fn hash_children(left: &Hash, right: &Hash) -> Hash {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&[INTERNAL_DOMAIN_TAG]);
        hasher.update(left);
        hasher.update(right);
        *hasher.finalize().as_bytes()
    }
}

/// The same domain-separated scheme over any 32-byte RustCrypto digest,
/// e.g. `DigestHasher<sha2::Sha256>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DigestHasher<D>(PhantomData<D>);

impl<D> MerkleHasher for DigestHasher<D>
where
    D: Digest<OutputSize = U32>,
{
    fn hash_leaf(data: &[u8]) -> Hash {
        let mut hasher = D::new();
        hasher.update([LEAF_DOMAIN_TAG]);
        hasher.update(data);
        finalize_digest(hasher)
    }

    fn hash_children(left: &Hash, right: &Hash) -> Hash {
        let mut hasher = D::new();
        hasher.update([INTERNAL_DOMAIN_TAG]);
        hasher.update(left);
        hasher.update(right);
        finalize_digest(hasher)
    }
}

fn finalize_digest<D: Digest<OutputSize = U32>>(hasher: D) -> Hash {
    let mut out = [0u8; 32];
    out.copy_from_slice(&hasher.finalize());
    out
}

/// Hash of the node at `address` in a tree of `height` whose bottom level is
/// `leaves`.
///
/// Leaves return their stored value; internal nodes combine their two
/// children recursively. Leaf indexes past the end of `leaves` read as the
/// sentinel.
pub(crate) fn node_hash<H: MerkleHasher>(address: NodeAddress, height: u8, leaves: &[Hash]) -> Hash {
    if address.is_leaf(height) {
        return leaves
            .get(address.index() as usize)
            .copied()
            .unwrap_or(H::EMPTY_LEAF);
    }

    let left_hash = node_hash::<H>(address.left_child(), height, leaves);
    let right_hash = node_hash::<H>(address.right_child(), height, leaves);
    H::hash_children(&left_hash, &right_hash)
}

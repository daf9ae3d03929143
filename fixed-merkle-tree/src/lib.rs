//! Fixed-capacity binary Merkle tree using pluggable hashing.
//!
//! A complete binary tree of height `h` with `2^h` leaf slots, filled
//! left to right by appending content hashes. Internal nodes are never
//! stored; the root hash is recomputed from the leaf array after every
//! append and cached:
//!
//! `leaf = H(0x00 || data)`, `parent = H(0x01 || left || right)`
//!
//! Unfilled leaf slots hold the hasher's sentinel value (`[0; 32]` unless
//! the hasher overrides it), so a partially filled tree needs no special
//! casing.
//!
//! An inclusion proof for leaf `i` is the list of `h` sibling hashes on
//! the path from the leaf up to the root's child. Verification is pure:
//! it needs only the root hash, the proof and the candidate data.

#![warn(missing_docs)]

mod address;
mod error;
pub(crate) mod hash;
pub(crate) mod proof;
pub(crate) mod tree;
mod verify;

#[cfg(test)]
pub(crate) mod test_utils;

pub use address::NodeAddress;
pub use error::FixedMerkleError;
pub use hash::{Blake3Hasher, DigestHasher, Hash, MerkleHasher};
pub use proof::MerkleProof;
pub use tree::{DEFAULT_HEIGHT, FixedMerkleTree, MAX_HEIGHT, MIN_HEIGHT, MerkleTree};
pub use verify::verify_proof;

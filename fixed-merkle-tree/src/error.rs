use thiserror::Error;

/// Errors from fixed Merkle tree operations.
///
/// All variants describe caller input; the tree is left unchanged when one
/// is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixedMerkleError {
    /// Append on a tree whose every leaf slot is filled.
    #[error("tree is full (capacity {capacity})")]
    TreeFull {
        /// Number of leaf slots in the tree.
        capacity: u64,
    },
    /// Root or proof requested from a tree with no leaves.
    #[error("tree is empty")]
    TreeEmpty,
    /// Proof requested for a leaf that has not been appended yet.
    #[error("leaf index {index} is out of range (len={len})")]
    IndexOutOfRange {
        /// Requested leaf index.
        index: u64,
        /// Number of leaves appended so far.
        len: u64,
    },
    /// Proof bytes could not be decoded.
    #[error("invalid proof: {0}")]
    InvalidProof(String),
}

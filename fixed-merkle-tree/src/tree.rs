use std::{fmt, marker::PhantomData};

use log::debug;

use crate::{
    FixedMerkleError, NodeAddress,
    hash::{Blake3Hasher, Hash, MerkleHasher, node_hash},
};

/// Smallest supported tree height.
pub const MIN_HEIGHT: usize = 1;
/// Largest supported tree height (65536 leaves).
pub const MAX_HEIGHT: usize = 16;
/// Height of [`MerkleTree`]: 32 leaves.
pub const DEFAULT_HEIGHT: usize = 5;

/// Blake3 tree with [`DEFAULT_HEIGHT`].
pub type MerkleTree = FixedMerkleTree<Blake3Hasher, DEFAULT_HEIGHT>;

/// An append-only binary Merkle tree with `2^HEIGHT` leaf slots.
///
/// Only leaf hashes are kept (the original data is not). Leaves are filled
/// left to right; the root hash is recomputed from the full leaf array on
/// every append, which is O(capacity), and cached.
///
/// Not safe for concurrent mutation: callers must serialize `append` with
/// any other access to the same tree.
#[derive(Clone)]
pub struct FixedMerkleTree<H, const HEIGHT: usize> {
    leaves: Box<[Hash]>,
    len: u64,
    root_hash: Hash,
    _hasher: PhantomData<H>,
}

impl<H: MerkleHasher, const HEIGHT: usize> FixedMerkleTree<H, HEIGHT> {
    /// Rejects unsupported heights when the tree type is instantiated.
    const VALID_HEIGHT: () = assert!(
        HEIGHT >= MIN_HEIGHT && HEIGHT <= MAX_HEIGHT,
        "tree height must be between 1 and 16"
    );

    /// Number of leaf slots.
    pub const CAPACITY: usize = 1 << HEIGHT;

    /// Create an empty tree with every leaf slot set to the sentinel.
    pub fn new() -> Self {
        let () = Self::VALID_HEIGHT;

        let leaves = vec![H::EMPTY_LEAF; Self::CAPACITY].into_boxed_slice();
        let root_hash = node_hash::<H>(NodeAddress::ROOT, HEIGHT as u8, &leaves);
        Self {
            leaves,
            len: 0,
            root_hash,
            _hasher: PhantomData,
        }
    }

    /// Maximum number of leaves this tree can hold.
    pub fn capacity(&self) -> u64 {
        Self::CAPACITY as u64
    }

    /// Height of the tree (edges from any leaf to the root).
    pub fn height(&self) -> u8 {
        HEIGHT as u8
    }

    /// Number of leaves appended so far.
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Whether no leaf has been appended.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether every leaf slot is filled.
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Hash `data` into the next free leaf slot.
    ///
    /// Returns the new root hash. On error the tree is unchanged.
    pub fn append(&mut self, data: &[u8]) -> Result<Hash, FixedMerkleError> {
        if self.is_full() {
            return Err(FixedMerkleError::TreeFull {
                capacity: self.capacity(),
            });
        }

        let position = self.len;
        self.leaves[position as usize] = H::hash_leaf(data);
        self.len += 1;
        self.root_hash = self.node_hash(NodeAddress::ROOT);

        debug!(
            "appended leaf {} ({}/{}), root {}",
            position,
            self.len,
            self.capacity(),
            hex::encode(self.root_hash)
        );
        Ok(self.root_hash)
    }

    /// The cached root hash.
    pub fn root_hash(&self) -> Result<Hash, FixedMerkleError> {
        if self.is_empty() {
            return Err(FixedMerkleError::TreeEmpty);
        }
        Ok(self.root_hash)
    }

    /// Stored hash of leaf `index`, or `None` if it has not been appended.
    pub fn leaf_hash(&self, index: u64) -> Option<Hash> {
        if index >= self.len {
            return None;
        }
        self.leaves.get(index as usize).copied()
    }

    /// Hash of any node, computed from the current leaves.
    pub(crate) fn node_hash(&self, address: NodeAddress) -> Hash {
        node_hash::<H>(address, HEIGHT as u8, &self.leaves)
    }
}

impl<H: MerkleHasher, const HEIGHT: usize> Default for FixedMerkleTree<H, HEIGHT> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H, const HEIGHT: usize> fmt::Debug for FixedMerkleTree<H, HEIGHT> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedMerkleTree")
            .field("height", &HEIGHT)
            .field("len", &self.len)
            .field("root_hash", &hex::encode(self.root_hash))
            .finish()
    }
}

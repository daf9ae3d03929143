//! Test hashers: a fast non-cryptographic one and a deliberately weak one.

use std::{collections::hash_map::DefaultHasher, hash::Hasher};

use crate::{Hash, MerkleHasher};

/// SipHash from `std`, widened to 32 bytes by hashing four lanes.
///
/// Not collision resistant; only for exercising the tree with a hasher
/// other than Blake3.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct StdHasher;

fn sip_wide(tag: u8, parts: &[&[u8]]) -> Hash {
    let mut out = [0u8; 32];
    for (lane, chunk) in out.chunks_exact_mut(8).enumerate() {
        let mut hasher = DefaultHasher::new();
        hasher.write(&[tag, lane as u8]);
        for part in parts {
            hasher.write(part);
        }
        chunk.copy_from_slice(&hasher.finish().to_be_bytes());
    }
    out
}

impl MerkleHasher for StdHasher {
    fn hash_leaf(data: &[u8]) -> Hash {
        sip_wide(0, &[data])
    }

    fn hash_children(left: &Hash, right: &Hash) -> Hash {
        sip_wide(1, &[left, right])
    }
}

/// Combines children with a byte-wise sum before hashing, so
/// `hash_children(a, b) == hash_children(b, a)`.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct CommutativeHasher;

impl MerkleHasher for CommutativeHasher {
    fn hash_leaf(data: &[u8]) -> Hash {
        *blake3::hash(data).as_bytes()
    }

    fn hash_children(left: &Hash, right: &Hash) -> Hash {
        let mut sum = [0u8; 32];
        for (i, byte) in sum.iter_mut().enumerate() {
            *byte = left[i].wrapping_add(right[i]);
        }
        *blake3::hash(&sum).as_bytes()
    }
}

/// Leaf payloads `"data 0"`, `"data 1"`, ...
pub(crate) fn numbered_data(count: usize) -> Vec<Vec<u8>> {
    (0..count)
        .map(|i| format!("data {}", i).into_bytes())
        .collect()
}

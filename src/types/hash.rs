//! 32-byte Keccak-256 hash type with zero-allocation operations.

use sha3::{Digest, Keccak256};
use std::fmt;

/// Keccak-256 hash length in bytes.
pub const HASH_LEN: usize = 32;

/// Fixed-size 32-byte digest.
///
/// This type is `Copy` for performance - digests are passed frequently during
/// signature recovery and should live on the stack to avoid heap allocations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hash(pub [u8; HASH_LEN]);

impl Hash {
    /// Creates a zero-valued hash (all bytes are 0x00).
    pub fn zero() -> Hash {
        Hash([0u8; HASH_LEN])
    }

    /// Returns the hash as a byte slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Creates a hash from a byte slice.
    ///
    /// Returns `None` if the slice is not exactly 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Option<Hash> {
        let array: [u8; HASH_LEN] = bytes.try_into().ok()?;
        Some(Hash(array))
    }

    /// Creates a new Keccak-256 hash builder for incremental hashing.
    ///
    /// Use this for streaming data or when computing hashes over multiple
    /// inputs without intermediate allocations.
    pub fn keccak() -> HashBuilder {
        HashBuilder::new()
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// Incremental Keccak-256 hash builder.
///
/// Allows feeding data in chunks and finalizing to produce a [`Hash`].
pub struct HashBuilder {
    hasher: Keccak256,
}

impl HashBuilder {
    /// Creates a new hash builder with empty state.
    pub fn new() -> Self {
        Self {
            hasher: Keccak256::new(),
        }
    }

    /// Feeds data into the hash computation.
    pub fn update(&mut self, data: &[u8]) {
        self.hasher.update(data);
    }

    /// Consumes the builder and returns the final hash.
    pub fn finalize(self) -> Hash {
        Hash(self.hasher.finalize().into())
    }
}

impl Default for HashBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keccak_of_empty_input_matches_known_vector() {
        let hash = Hash::keccak().finalize();
        assert_eq!(
            format!("{}", hash),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn incremental_updates_match_single_update() {
        let mut a = Hash::keccak();
        a.update(b"istanbul");
        a.update(b" extra");
        let mut b = Hash::keccak();
        b.update(b"istanbul extra");
        assert_eq!(a.finalize(), b.finalize());
    }

    #[test]
    fn from_slice_requires_exact_width() {
        assert!(Hash::from_slice(&[0u8; 32]).is_some());
        assert!(Hash::from_slice(&[0u8; 31]).is_none());
        assert!(Hash::from_slice(&[0u8; 33]).is_none());
    }

    #[test]
    fn zero_is_all_zero_bytes() {
        assert!(Hash::zero().as_slice().iter().all(|&b| b == 0));
    }
}

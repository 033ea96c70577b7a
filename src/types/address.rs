//! 20-byte account addresses derived from public keys.

use std::fmt;

/// Address length in bytes.
pub const ADDRESS_SIZE: usize = 20;

/// Fixed-size 20-byte address identifying an account.
///
/// Derived from secp256k1 public keys via Keccak-256, taking the last 20
/// bytes. This type is `Copy` for efficient passing in validation and
/// lookup operations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(pub [u8; ADDRESS_SIZE]);

impl Address {
    /// Creates a zero-valued address (all bytes are 0x00).
    pub fn zero() -> Address {
        Address([0u8; ADDRESS_SIZE])
    }

    /// Returns the address as a byte slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Creates an address from a byte slice.
    ///
    /// Returns `None` if the slice is not exactly 20 bytes.
    pub fn from_slice(bytes: &[u8]) -> Option<Address> {
        let array: [u8; ADDRESS_SIZE] = bytes.try_into().ok()?;
        Some(Address(array))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_prefixed_lowercase_hex() {
        let mut bytes = [0u8; ADDRESS_SIZE];
        bytes[0] = 0xab;
        bytes[19] = 0x01;
        let addr = Address(bytes);
        assert_eq!(
            format!("{}", addr),
            "0xab00000000000000000000000000000000000001"
        );
    }

    #[test]
    fn from_slice_requires_exact_width() {
        assert!(Address::from_slice(&[0u8; 20]).is_some());
        assert!(Address::from_slice(&[0u8; 19]).is_none());
        assert!(Address::from_slice(&[0u8; 21]).is_none());
        assert!(Address::from_slice(&[]).is_none());
    }

    #[test]
    fn zero_is_all_zero_bytes() {
        assert!(Address::zero().as_slice().iter().all(|&b| b == 0));
    }
}

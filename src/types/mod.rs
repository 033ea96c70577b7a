//! Core type definitions.
//!
//! - `Address`: fixed-size 20-byte account identifiers
//! - `Hash`: fixed-size 32-byte Keccak-256 digests

pub mod address;
pub mod hash;

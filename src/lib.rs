//! Proposer extraction for IBFT proof-of-authority block headers.
//!
//! The header `extraData` field carries a 32-byte vanity prefix followed by
//! an RLP list `[validators, seal, committedSeals]`. This crate decodes that
//! structure and recovers the proposer's address from the 65-byte seal
//! signature over the block digest.

pub mod consensus;
pub mod crypto;
pub mod rlp;
pub mod types;
pub mod utils;

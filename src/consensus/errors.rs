//! Error types for extra-data decoding and seal recovery.

use crate::rlp::DecodeError;
use thiserror::Error;

/// Errors that can occur while decoding the header `extraData` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExtraError {
    /// Extension field shorter than the mandatory 32-byte vanity prefix.
    #[error("wrong extra size: {got} bytes, need at least the 32-byte vanity prefix")]
    ExtraDataTooShort { got: usize },
    /// RLP decoder ran out of bytes reading a declared length or payload.
    #[error("rlp input truncated")]
    TruncatedInput,
    /// Top-level list carries fewer elements than the format requires.
    #[error("incorrect number of extra-data elements: expected {expected}, got {got}")]
    MalformedExtra { expected: usize, got: usize },
    /// A validator entry is not exactly 20 bytes.
    #[error("validator entry is {got} bytes, expected 20")]
    InvalidValidator { got: usize },
    /// A field decoded as a list where a byte string was required, or vice
    /// versa.
    #[error("unexpected rlp shape for {field}")]
    UnexpectedShape { field: &'static str },
}

impl From<DecodeError> for ExtraError {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::TruncatedInput => ExtraError::TruncatedInput,
        }
    }
}

/// Errors that can occur while recovering the proposer from a seal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RecoveryError {
    /// Seal is not exactly 65 bytes (64-byte signature + recovery id).
    #[error("invalid seal length: {got} bytes, expected 65")]
    InvalidSealLength { got: usize },
    /// Curve recovery failed: non-canonical r/s, bad recovery id, or no
    /// recoverable point.
    #[error("signature recovery failed")]
    InvalidSignature,
}

/// Error for the combined decode-then-recover pipeline.
///
/// Wraps each stage's error exactly one level deep so callers can still tell
/// a decode failure from a recovery failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SignerError {
    #[error(transparent)]
    Extra(#[from] ExtraError),
    #[error(transparent)]
    Recovery(#[from] RecoveryError),
}

//! IBFT consensus metadata: extra-data decoding and proposer extraction.

pub mod errors;
pub mod extra;

use crate::crypto::recover::recover_signer;
use crate::types::address::Address;
use crate::types::hash::Hash;
use errors::SignerError;
use extra::IbftExtra;

/// Extracts the proposer address from a header's `extraData` field.
///
/// Decodes the extension field, then recovers the signer of the seal against
/// the caller-supplied digest. Each stage's error is propagated with its
/// kind intact so decode failures stay distinguishable from recovery
/// failures.
pub fn signer_of(extra_data: &[u8], digest: &Hash) -> Result<Address, SignerError> {
    let extra = IbftExtra::decode(extra_data)?;
    Ok(recover_signer(&extra.seal, digest)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consensus::errors::{ExtraError, RecoveryError};
    use crate::consensus::extra::EXTRA_VANITY;
    use crate::crypto::recover::address_of;
    use k256::ecdsa::SigningKey;

    fn signed_extra(key: &SigningKey, digest: &Hash) -> Vec<u8> {
        let (signature, recovery_id) = key.sign_prehash_recoverable(digest.as_slice()).unwrap();
        let mut seal = signature.to_bytes().to_vec();
        seal.push(recovery_id.to_byte());

        let extra = IbftExtra {
            validators: vec![address_of(key.verifying_key())],
            seal,
            committed_seals: vec![],
        };
        extra.to_extra_bytes(&[0u8; EXTRA_VANITY])
    }

    #[test]
    fn extracts_proposer_end_to_end() {
        let mut bytes = [0u8; 32];
        bytes[31] = 1;
        let key = SigningKey::from_slice(&bytes).unwrap();
        let digest = Hash([0x11; 32]);

        let raw = signed_extra(&key, &digest);
        let signer = signer_of(&raw, &digest).unwrap();
        assert_eq!(signer, address_of(key.verifying_key()));
    }

    #[test]
    fn decode_failures_keep_their_kind() {
        let digest = Hash::zero();
        assert_eq!(
            signer_of(&[0u8; 16], &digest),
            Err(SignerError::Extra(ExtraError::ExtraDataTooShort {
                got: 16
            }))
        );
    }

    #[test]
    fn recovery_failures_keep_their_kind() {
        let extra = IbftExtra {
            validators: vec![],
            seal: vec![0x22; 64],
            committed_seals: vec![],
        };
        let raw = extra.to_extra_bytes(&[0u8; EXTRA_VANITY]);
        assert_eq!(
            signer_of(&raw, &Hash::zero()),
            Err(SignerError::Recovery(RecoveryError::InvalidSealLength {
                got: 64
            }))
        );
    }
}

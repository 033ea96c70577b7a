//! Public key recovery from IBFT seal signatures.

use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};

use crate::consensus::errors::RecoveryError;
use crate::types::address::{Address, ADDRESS_SIZE};
use crate::types::hash::{Hash, HASH_LEN};

/// Number of bytes in a seal: 64-byte `r || s` signature plus one recovery
/// id byte.
pub const SEAL_LEN: usize = 65;

/// Recovers the address that produced `seal` over `digest`.
///
/// The seal is interpreted as `(r: 32 bytes, s: 32 bytes, recovery_id: 1
/// byte)`. No validator-set membership check is performed; the returned
/// address is whatever the curve math yields.
pub fn recover_signer(seal: &[u8], digest: &Hash) -> Result<Address, RecoveryError> {
    if seal.len() != SEAL_LEN {
        return Err(RecoveryError::InvalidSealLength { got: seal.len() });
    }

    let signature =
        Signature::from_slice(&seal[..64]).map_err(|_| RecoveryError::InvalidSignature)?;
    let recovery_id =
        RecoveryId::from_byte(seal[64]).ok_or(RecoveryError::InvalidSignature)?;
    let key = VerifyingKey::recover_from_prehash(digest.as_slice(), &signature, recovery_id)
        .map_err(|_| RecoveryError::InvalidSignature)?;

    Ok(address_of(&key))
}

/// Derives the 20-byte address of a public key.
///
/// Address derivation: Keccak-256 over the uncompressed point bytes without
/// the leading format byte, keeping the last 20 bytes.
pub fn address_of(key: &VerifyingKey) -> Address {
    let point = key.to_encoded_point(false);

    let mut hasher = Hash::keccak();
    hasher.update(&point.as_bytes()[1..]);
    let digest = hasher.finalize();

    let mut addr = [0u8; ADDRESS_SIZE];
    addr.copy_from_slice(&digest.as_slice()[HASH_LEN - ADDRESS_SIZE..]);
    Address(addr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use k256::ecdsa::SigningKey;

    /// secp256k1 private key 0x...01; its address is a well-known vector.
    fn known_key() -> SigningKey {
        let mut bytes = [0u8; 32];
        bytes[31] = 1;
        SigningKey::from_slice(&bytes).unwrap()
    }

    fn seal_over(key: &SigningKey, digest: &Hash) -> Vec<u8> {
        let (signature, recovery_id) = key.sign_prehash_recoverable(digest.as_slice()).unwrap();
        let mut seal = signature.to_bytes().to_vec();
        seal.push(recovery_id.to_byte());
        seal
    }

    #[test]
    fn recovers_known_key_address() {
        let key = known_key();
        let digest = Hash([0x42; 32]);
        let seal = seal_over(&key, &digest);

        let addr = recover_signer(&seal, &digest).unwrap();
        assert_eq!(addr, address_of(key.verifying_key()));
        assert_eq!(
            format!("{}", addr),
            "0x7e5f4552091a69125d5dfcb7b8c2659029395bdf"
        );
    }

    #[test]
    fn wrong_seal_lengths_are_rejected() {
        let digest = Hash::zero();
        for len in [0usize, 1, 64, 66, 130] {
            assert_eq!(
                recover_signer(&vec![0u8; len], &digest),
                Err(RecoveryError::InvalidSealLength { got: len })
            );
        }
    }

    #[test]
    fn all_zero_seal_is_not_a_signature() {
        assert_eq!(
            recover_signer(&[0u8; 65], &Hash::zero()),
            Err(RecoveryError::InvalidSignature)
        );
    }

    #[test]
    fn out_of_range_recovery_id_is_rejected() {
        let key = known_key();
        let digest = Hash([0x42; 32]);
        let mut seal = seal_over(&key, &digest);
        // Legacy Ethereum v values (27/28) are not accepted here.
        seal[64] = 27;
        assert_eq!(
            recover_signer(&seal, &digest),
            Err(RecoveryError::InvalidSignature)
        );
    }

    #[test]
    fn different_digest_recovers_a_different_address() {
        let key = known_key();
        let digest = Hash([0x42; 32]);
        let seal = seal_over(&key, &digest);

        let other = Hash([0x43; 32]);
        let recovered = recover_signer(&seal, &other).unwrap();
        assert_ne!(recovered, address_of(key.verifying_key()));
    }
}

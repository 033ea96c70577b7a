//! Decoding of the IBFT `extraData` header field.
//!
//! Layout: 32 bytes of proposer-chosen vanity, then an RLP list of at least
//! three elements:
//!
//! ```text
//! [ [validator, ...], seal, [committed_seal, ...] ]
//! ```
//!
//! Elements past the third are ignored so future format revisions can append
//! fields without breaking older decoders.

use crate::consensus::errors::ExtraError;
use crate::rlp::Item;
use crate::types::address::Address;

/// Number of extra-data bytes reserved for proposer vanity.
pub const EXTRA_VANITY: usize = 32;

/// Number of extra-data elements the RLP structure must carry.
const EXTRA_ELEMENTS: usize = 3;

/// The decoded consensus portion of a header's `extraData` field.
///
/// Constructed once per decode call and holds no references into the input;
/// decoding is pure and deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IbftExtra {
    /// Authorized proposer set at the time the block was produced. Order is
    /// significant (round-robin proposer selection keys off it).
    pub validators: Vec<Address>,
    /// The proposing validator's signature over the block digest.
    pub seal: Vec<u8>,
    /// Signatures from validators who committed to the block.
    pub committed_seals: Vec<Vec<u8>>,
}

impl IbftExtra {
    /// Decodes the raw `extraData` field of a header.
    ///
    /// The first [`EXTRA_VANITY`] bytes are discarded; the remainder must be
    /// an RLP list with the shape documented at the module level. The seal
    /// length is not checked here - only the consumer that needs exactly 65
    /// bytes rejects other lengths.
    pub fn decode(raw: &[u8]) -> Result<IbftExtra, ExtraError> {
        if raw.len() < EXTRA_VANITY {
            return Err(ExtraError::ExtraDataTooShort { got: raw.len() });
        }

        let mut input = &raw[EXTRA_VANITY..];
        let top = Item::decode(&mut input)?;
        let elems = top
            .as_list()
            .ok_or(ExtraError::UnexpectedShape { field: "extra" })?;
        if elems.len() < EXTRA_ELEMENTS {
            return Err(ExtraError::MalformedExtra {
                expected: EXTRA_ELEMENTS,
                got: elems.len(),
            });
        }

        let validators = elems[0]
            .as_list()
            .ok_or(ExtraError::UnexpectedShape { field: "validators" })?
            .iter()
            .map(|entry| {
                let bytes = entry
                    .as_bytes()
                    .ok_or(ExtraError::UnexpectedShape { field: "validator" })?;
                Address::from_slice(bytes)
                    .ok_or(ExtraError::InvalidValidator { got: bytes.len() })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let seal = elems[1]
            .as_bytes()
            .ok_or(ExtraError::UnexpectedShape { field: "seal" })?
            .to_vec();

        let committed_seals = elems[2]
            .as_list()
            .ok_or(ExtraError::UnexpectedShape {
                field: "committed seals",
            })?
            .iter()
            .map(|entry| {
                entry
                    .as_bytes()
                    .map(<[u8]>::to_vec)
                    .ok_or(ExtraError::UnexpectedShape {
                        field: "committed seal",
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(IbftExtra {
            validators,
            seal,
            committed_seals,
        })
    }

    /// Encodes this structure back into a full `extraData` field with the
    /// given vanity prefix.
    pub fn to_extra_bytes(&self, vanity: &[u8; EXTRA_VANITY]) -> Vec<u8> {
        let validators: Vec<Item> = self
            .validators
            .iter()
            .map(|v| Item::Bytes(v.as_slice()))
            .collect();
        let committed: Vec<Item> = self
            .committed_seals
            .iter()
            .map(|s| Item::Bytes(s))
            .collect();
        let top = Item::List(vec![
            Item::List(validators),
            Item::Bytes(&self.seal),
            Item::List(committed),
        ]);

        let mut out = Vec::with_capacity(EXTRA_VANITY + 4);
        out.extend_from_slice(vanity);
        top.encode(&mut out);
        out
    }
}

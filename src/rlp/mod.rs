//! Minimal RLP (recursive length prefix) decoding and encoding.
//!
//! Decoded items borrow from the input buffer; no byte is copied until a
//! caller asks for an owned value. Declared lengths are checked against the
//! remaining input before any payload is read, so a hostile length prefix
//! can never drive an allocation.
//!
//! # Wire format
//!
//! - `0x00..=0x7f`: a single byte encoding itself
//! - `0x80..=0xb7`: byte string of `prefix - 0x80` bytes
//! - `0xb8..=0xbf`: byte string whose length occupies `prefix - 0xb7`
//!   big-endian bytes
//! - `0xc0..=0xf7`: list with a `prefix - 0xc0` byte payload
//! - `0xf8..=0xff`: list whose payload length occupies `prefix - 0xf7`
//!   big-endian bytes

use thiserror::Error;

/// Errors that can occur during RLP decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Input ended before a declared length or payload could be read.
    #[error("rlp input truncated")]
    TruncatedInput,
}

/// A single decoded RLP item, borrowing from the input buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item<'a> {
    /// A byte string, including the single-byte encoding for values < 0x80.
    Bytes(&'a [u8]),
    /// A list of nested items.
    List(Vec<Item<'a>>),
}

/// Reads exactly `n` bytes from the input, advancing the slice.
fn read_bytes<'a>(input: &mut &'a [u8], n: usize) -> Result<&'a [u8], DecodeError> {
    if input.len() < n {
        return Err(DecodeError::TruncatedInput);
    }
    let (bytes, rest) = input.split_at(n);
    *input = rest;
    Ok(bytes)
}

/// Reads an `n`-byte big-endian length, advancing the slice.
///
/// A length that does not fit `usize` cannot fit the input either, so it is
/// reported as truncation.
fn read_be_length(input: &mut &[u8], n: usize) -> Result<usize, DecodeError> {
    let bytes = read_bytes(input, n)?;
    let mut len: u64 = 0;
    for &b in bytes {
        len = (len << 8) | u64::from(b);
    }
    usize::try_from(len).map_err(|_| DecodeError::TruncatedInput)
}

/// Decodes a list payload into its elements, consuming it entirely.
fn decode_list(mut payload: &[u8]) -> Result<Item<'_>, DecodeError> {
    let mut items = Vec::new();
    while !payload.is_empty() {
        items.push(Item::decode(&mut payload)?);
    }
    Ok(Item::List(items))
}

impl<'a> Item<'a> {
    /// Decodes one item from the input, advancing the slice past it.
    ///
    /// Trailing bytes after the item are left in place for the caller.
    pub fn decode(input: &mut &'a [u8]) -> Result<Item<'a>, DecodeError> {
        let prefix = *input.first().ok_or(DecodeError::TruncatedInput)?;
        match prefix {
            0x00..=0x7f => Ok(Item::Bytes(read_bytes(input, 1)?)),
            0x80..=0xb7 => {
                *input = &input[1..];
                Ok(Item::Bytes(read_bytes(input, (prefix - 0x80) as usize)?))
            }
            0xb8..=0xbf => {
                *input = &input[1..];
                let len = read_be_length(input, (prefix - 0xb7) as usize)?;
                Ok(Item::Bytes(read_bytes(input, len)?))
            }
            0xc0..=0xf7 => {
                *input = &input[1..];
                decode_list(read_bytes(input, (prefix - 0xc0) as usize)?)
            }
            0xf8..=0xff => {
                *input = &input[1..];
                let len = read_be_length(input, (prefix - 0xf7) as usize)?;
                decode_list(read_bytes(input, len)?)
            }
        }
    }

    /// Returns the byte string contents, or `None` for a list.
    pub fn as_bytes(&self) -> Option<&'a [u8]> {
        match self {
            Item::Bytes(bytes) => Some(bytes),
            Item::List(_) => None,
        }
    }

    /// Returns the list elements, or `None` for a byte string.
    pub fn as_list(&self) -> Option<&[Item<'a>]> {
        match self {
            Item::Bytes(_) => None,
            Item::List(items) => Some(items),
        }
    }

    /// Appends the canonical encoding of this item to `out`.
    pub fn encode(&self, out: &mut Vec<u8>) {
        match self {
            Item::Bytes(bytes) => encode_bytes(bytes, out),
            Item::List(items) => {
                let mut payload = Vec::new();
                for item in items {
                    item.encode(&mut payload);
                }
                write_length(payload.len(), 0xc0, out);
                out.extend_from_slice(&payload);
            }
        }
    }

    /// Serializes to a new byte buffer.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.encode(&mut out);
        out
    }
}

/// Appends the canonical encoding of a byte string to `out`.
pub fn encode_bytes(data: &[u8], out: &mut Vec<u8>) {
    if data.len() == 1 && data[0] < 0x80 {
        out.push(data[0]);
    } else {
        write_length(data.len(), 0x80, out);
        out.extend_from_slice(data);
    }
}

/// Writes a short or long length prefix with the given base (0x80 or 0xc0).
fn write_length(len: usize, base: u8, out: &mut Vec<u8>) {
    if len <= 55 {
        out.push(base + len as u8);
    } else {
        let be = (len as u64).to_be_bytes();
        let skip = be.iter().take_while(|&&b| b == 0).count();
        out.push(base + 55 + (be.len() - skip) as u8);
        out.extend_from_slice(&be[skip..]);
    }
}

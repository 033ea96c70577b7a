//! Proposer extraction CLI for IBFT block headers.
//!
//! Takes a single JSON argument describing a block header and prints the
//! address that signed its seal.
//!
//! # Usage
//! ```text
//! ibft-signer '{"hash": "0x...", "extraData": "0x..."}'
//! ```
//!
//! # Fields
//! - `hash`: 0x-hex 32-byte digest the seal was computed over
//! - `extraData`: 0x-hex header extension field (vanity + RLP structure)

use ibft_signer::consensus::signer_of;
use ibft_signer::error;
use ibft_signer::types::hash::Hash;
use serde::Deserialize;
use std::env;
use std::process;

/// The two mandatory header fields supplied by the caller.
///
/// Deliberately typed instead of a loose JSON map: a missing or non-string
/// field is a descriptive parse error, not a crash.
#[derive(Debug, Deserialize)]
struct HeaderPayload {
    hash: String,
    #[serde(rename = "extraData")]
    extra_data: String,
}

/// Parses a 0x-prefixed hex string, left-padding odd-length input with one
/// zero nibble.
fn parse_hex(field: &str, value: &str) -> Result<Vec<u8>, String> {
    let stripped = value.strip_prefix("0x").unwrap_or(value);
    let padded;
    let stripped = if stripped.len() % 2 == 1 {
        padded = format!("0{}", stripped);
        &padded
    } else {
        stripped
    };
    hex::decode(stripped).map_err(|err| format!("invalid hex in '{}': {}", field, err))
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage(&args[0]);
        process::exit(if args.len() < 2 { 1 } else { 0 });
    }

    let payload: HeaderPayload = match serde_json::from_str(&args[1]) {
        Ok(payload) => payload,
        Err(err) => {
            error!("invalid header payload: {}", err);
            process::exit(1);
        }
    };

    let digest_bytes = match parse_hex("hash", &payload.hash) {
        Ok(bytes) => bytes,
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    };
    let digest = match Hash::from_slice(&digest_bytes) {
        Some(digest) => digest,
        None => {
            error!("'hash' must be 32 bytes, got {}", digest_bytes.len());
            process::exit(1);
        }
    };

    let extra_data = match parse_hex("extraData", &payload.extra_data) {
        Ok(bytes) => bytes,
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    };

    match signer_of(&extra_data, &digest) {
        Ok(signer) => println!("{}", signer),
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    }
}

fn print_usage(bin: &str) {
    eprintln!("Usage: {} <header-json>", bin);
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  header-json   JSON object with 'hash' and 'extraData' hex fields");
    eprintln!();
    eprintln!("Example:");
    eprintln!("  {} '{{\"hash\": \"0x63746963...\", \"extraData\": \"0x0000...\"}}'", bin);
}

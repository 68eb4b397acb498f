//! Identity loading: derive a keypair signer from locally stored secret
//! material.
//!
//! Two on-disk formats are accepted:
//! - a JSON array of 64 bytes (`solana-keygen` keypair file)
//! - a base58 string of the same 64 bytes (wallet export)

use std::fs;
use std::path::Path;

use solana_keypair::Keypair;
use solana_signer::Signer;

use crate::error::{MintError, MintResult};

/// Secret key length: 32-byte seed followed by the 32-byte public key.
pub const SECRET_KEY_LENGTH: usize = 64;

/// Derive a keypair from raw secret key bytes.
///
/// The bytes must be exactly [`SECRET_KEY_LENGTH`] long and the trailing
/// public half must match the seed.
pub fn load_keypair_bytes(bytes: &[u8]) -> MintResult<Keypair> {
    if bytes.len() != SECRET_KEY_LENGTH {
        return Err(MintError::Format(format!(
            "secret key must be {} bytes, got {}",
            SECRET_KEY_LENGTH,
            bytes.len()
        )));
    }
    Keypair::try_from(bytes).map_err(|e| MintError::Format(e.to_string()))
}

/// Parse secret key material from the text contents of a key file.
pub fn parse_secret(text: &str) -> MintResult<Keypair> {
    let text = text.trim();

    if text.starts_with('[') {
        let bytes: Vec<u8> = serde_json::from_str(text)
            .map_err(|e| MintError::Format(format!("invalid key file JSON: {}", e)))?;
        return load_keypair_bytes(&bytes);
    }

    let bytes = bs58::decode(text)
        .into_vec()
        .map_err(|e| MintError::Format(format!("invalid base58 secret: {}", e)))?;
    load_keypair_bytes(&bytes)
}

/// Read and parse a key file. Read once at startup; any failure is fatal.
pub fn read_keypair_file(path: impl AsRef<Path>) -> MintResult<Keypair> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let keypair = parse_secret(&text)?;
    tracing::debug!("Loaded identity {} from {}", keypair.pubkey(), path.display());
    Ok(keypair)
}

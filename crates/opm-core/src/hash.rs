//! # Content Hash — Release Payload Addressing
//!
//! Defines `ContentHash`, the content-addressing identifier carried by
//! every Version. The hash names the release payload; the registry stores
//! only the hash, never the payload itself.
//!
//! ## Invariant
//!
//! A `ContentHash` is always a well-formed lowercase SHA-256 hex string.
//! Malformed hashes are rejected at construction, so downstream code never
//! needs to re-validate.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::RegistryError;

/// Hex length of a SHA-256 digest.
const SHA256_HEX_LEN: usize = 64;

/// A SHA-256 content hash in lowercase hex form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentHash(String);

impl ContentHash {
    /// Compute the hash of a release payload.
    pub fn compute(payload: &[u8]) -> Self {
        let digest = Sha256::digest(payload);
        let mut hex = String::with_capacity(SHA256_HEX_LEN);
        for byte in digest {
            hex.push_str(&format!("{byte:02x}"));
        }
        Self(hex)
    }

    /// Parse a caller-supplied hash string.
    ///
    /// # Errors
    ///
    /// Returns a validation error unless the input is exactly 64 lowercase
    /// hex characters.
    pub fn parse(s: &str) -> Result<Self, RegistryError> {
        if s.len() != SHA256_HEX_LEN
            || !s.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
        {
            return Err(RegistryError::validation(format!(
                "content_hash must be {SHA256_HEX_LEN} lowercase hex characters, got: {s:?}"
            )));
        }
        Ok(Self(s.to_string()))
    }

    /// The hex representation.
    pub fn as_hex(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

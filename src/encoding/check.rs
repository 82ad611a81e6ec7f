//! Base58Check: a versioned payload protected by a 4-byte checksum.

use thiserror::Error;

use crate::crypto::hash;

use super::base58::{Base58, Base58Error};

/// Checksum width in bytes: the leading slice of a double SHA-256.
const CHECKSUM_LEN: usize = 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Base58CheckError {
    #[error(transparent)]
    Base58(#[from] Base58Error),
    /// Trailing checksum disagrees with the recomputed one.
    #[error("checksum mismatch")]
    ChecksumMismatch,
    /// Too few decoded bytes to hold a version byte and checksum.
    #[error("decoded input too short: {length} bytes")]
    TooShort { length: usize },
}

/// Encoder/decoder for checksummed, versioned Base58 payloads.
#[derive(Debug, Clone, Default)]
pub struct Base58Check {
    base58: Base58,
}

impl Base58Check {
    pub fn new() -> Self {
        Self {
            base58: Base58::new(),
        }
    }

    /// Encodes `version || payload || checksum`, where the checksum is
    /// the first four bytes of `double_sha256(version || payload)`.
    pub fn encode(&self, version: u8, payload: &[u8]) -> String {
        let mut data = Vec::with_capacity(1 + payload.len() + CHECKSUM_LEN);
        data.push(version);
        data.extend_from_slice(payload);
        let checksum = hash::double_sha256(&data);
        data.extend_from_slice(&checksum[..CHECKSUM_LEN]);
        self.base58.encode(&data)
    }

    /// Decodes `text`, validates the checksum, and returns the version
    /// byte and payload.
    ///
    /// Corrupted or truncated input is reported, never auto-corrected.
    pub fn decode(&self, text: &str) -> Result<(u8, Vec<u8>), Base58CheckError> {
        let data = self.base58.decode(text)?;
        if data.len() < 1 + CHECKSUM_LEN {
            return Err(Base58CheckError::TooShort { length: data.len() });
        }
        let (body, checksum) = data.split_at(data.len() - CHECKSUM_LEN);
        let expected = hash::double_sha256(body);
        if checksum != &expected[..CHECKSUM_LEN] {
            return Err(Base58CheckError::ChecksumMismatch);
        }
        Ok((body[0], body[1..].to_vec()))
    }
}

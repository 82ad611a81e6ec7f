//! Address derivation and round-trip decoding.

use std::fmt;

use thiserror::Error;

use crate::config::Network;
use crate::crypto::hash;
use crate::crypto::PublicKey;
use crate::encoding::{Base58Check, Base58CheckError};

/// Length of the public key fingerprint carried in an address.
const PUBKEY_HASH_LEN: usize = 20;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error(transparent)]
    Check(#[from] Base58CheckError),
    /// Decoded payload is not a 20-byte public key hash.
    #[error("unexpected payload length: {length} bytes")]
    BadPayloadLength { length: usize },
}

/// A Base58Check address: one version byte plus the 20-byte public key
/// hash, protected by a 4-byte checksum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    text: String,
}

impl Address {
    /// Derives the address of `public` on `network` from its compressed
    /// serialization.
    pub fn from_public_key(public: &PublicKey, network: Network) -> Self {
        Self::from_pubkey_hash(hash::hash160(&public.to_compressed()), network)
    }

    /// Same derivation over the uncompressed serialization.
    ///
    /// The two forms hash differently, so the same key has two distinct
    /// valid addresses.
    pub fn from_uncompressed(public: &PublicKey, network: Network) -> Self {
        Self::from_pubkey_hash(hash::hash160(&public.to_uncompressed()), network)
    }

    /// Encodes a raw public key hash on `network`.
    pub fn from_pubkey_hash(pubkey_hash: [u8; PUBKEY_HASH_LEN], network: Network) -> Self {
        let text = Base58Check::new().encode(network.version_byte(), &pubkey_hash);
        Self { text }
    }

    /// Decodes an address back to its version byte and public key hash.
    pub fn decode(text: &str) -> Result<(u8, [u8; PUBKEY_HASH_LEN]), AddressError> {
        let (version, payload) = Base58Check::new().decode(text)?;
        let pubkey_hash: [u8; PUBKEY_HASH_LEN] = payload
            .as_slice()
            .try_into()
            .map_err(|_| AddressError::BadPayloadLength {
                length: payload.len(),
            })?;
        Ok((version, pubkey_hash))
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

//! ECDSA signing and verification over SHA-256 message digests.

use secp256k1::{ecdsa, Message, Secp256k1};
use thiserror::Error;

use super::hash;
use super::keypair::{PrivateKey, PublicKey};

#[derive(Debug, Error)]
pub enum SignatureError {
    /// Signature bytes could not be parsed as DER.
    #[error("malformed signature: not valid DER")]
    MalformedSignature,
}

/// A DER-encoded ECDSA signature: two length-prefixed big integers, r and s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    inner: ecdsa::Signature,
}

impl Signature {
    /// Parses a signature from DER bytes.
    pub fn from_der(bytes: &[u8]) -> Result<Self, SignatureError> {
        ecdsa::Signature::from_der(bytes)
            .map(|inner| Self { inner })
            .map_err(|_| SignatureError::MalformedSignature)
    }

    /// Parses a signature from hex-encoded DER.
    pub fn from_hex(text: &str) -> Result<Self, SignatureError> {
        let raw = hex::decode(text.trim()).map_err(|_| SignatureError::MalformedSignature)?;
        Self::from_der(&raw)
    }

    /// Serializes to DER bytes.
    pub fn to_der(&self) -> Vec<u8> {
        self.inner.serialize_der().to_vec()
    }

    /// Serializes to hex-encoded DER.
    pub fn to_hex(&self) -> String {
        hex::encode(self.inner.serialize_der())
    }
}

/// Signs `message` with `private`.
///
/// The message is hashed with SHA-256 and the digest signed with
/// deterministic (RFC 6979) nonces, so equal inputs produce equal
/// signatures.
pub fn sign(private: &PrivateKey, message: &[u8]) -> Signature {
    let secp = Secp256k1::new();
    let digest = Message::from_digest(hash::sha256(message));
    Signature {
        inner: secp.sign_ecdsa(&digest, private.secret()),
    }
}

/// Verifies `signature` over `message` against `public`.
///
/// A signature that parses but does not match yields `false`, not an
/// error.
pub fn verify(public: &PublicKey, message: &[u8], signature: &Signature) -> bool {
    let secp = Secp256k1::new();
    let digest = Message::from_digest(hash::sha256(message));
    secp.verify_ecdsa(&digest, &signature.inner, public.point())
        .is_ok()
}

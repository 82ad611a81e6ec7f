//! Private key generation and public key derivation.

use std::fmt;

use rand::rngs::OsRng;
use rand::RngCore;
use secp256k1::{Secp256k1, SecretKey};
use thiserror::Error;

/// Order of the secp256k1 group, big-endian.
///
/// Valid private scalars lie strictly between 1 and this value.
const CURVE_ORDER: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFE, 0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36,
    0x41, 0x41,
];

#[derive(Debug, Error)]
pub enum KeyError {
    /// Scalar outside `(1, n)`, or key bytes that do not describe a curve
    /// point.
    #[error("invalid key: scalar or point outside the valid range")]
    InvalidKey,
    /// The OS random source failed. Key generation aborts rather than fall
    /// back to weaker randomness.
    #[error("entropy source failure: {0}")]
    EntropyFailure(#[source] rand::Error),
}

/// Checks `1 < scalar < n` on big-endian bytes.
fn scalar_in_range(bytes: &[u8; 32]) -> bool {
    if bytes.as_slice() >= CURVE_ORDER.as_slice() {
        return false;
    }
    // Reject 0 and 1.
    !(bytes[..31].iter().all(|&b| b == 0) && bytes[31] <= 1)
}

/// A secp256k1 private scalar in `(1, n)`.
#[derive(Clone)]
pub struct PrivateKey {
    inner: SecretKey,
}

impl PrivateKey {
    /// Generates a new private key by rejection sampling from the OS
    /// random source.
    ///
    /// Out-of-range candidates are discarded and redrawn. The loop has no
    /// iteration cap; rejection is astronomically unlikely, so the
    /// expected number of draws is one.
    pub fn generate() -> Result<Self, KeyError> {
        let mut candidate = [0u8; 32];
        loop {
            OsRng
                .try_fill_bytes(&mut candidate)
                .map_err(KeyError::EntropyFailure)?;
            if scalar_in_range(&candidate) {
                return Self::from_bytes(&candidate);
            }
        }
    }

    /// Builds a private key from raw big-endian bytes.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, KeyError> {
        if !scalar_in_range(bytes) {
            return Err(KeyError::InvalidKey);
        }
        let inner = SecretKey::from_slice(bytes).map_err(|_| KeyError::InvalidKey)?;
        Ok(Self { inner })
    }

    /// Parses a private key from its hex encoding.
    pub fn from_hex(text: &str) -> Result<Self, KeyError> {
        let raw = hex::decode(text.trim()).map_err(|_| KeyError::InvalidKey)?;
        let bytes: [u8; 32] = raw.as_slice().try_into().map_err(|_| KeyError::InvalidKey)?;
        Self::from_bytes(&bytes)
    }

    /// Returns the scalar as 32 big-endian bytes.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.inner.secret_bytes()
    }

    /// Returns the scalar as a hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Derives the matching public key by multiplying the curve base
    /// point by this scalar.
    pub fn public_key(&self) -> PublicKey {
        let secp = Secp256k1::new();
        PublicKey {
            inner: secp256k1::PublicKey::from_secret_key(&secp, &self.inner),
        }
    }

    pub(crate) fn secret(&self) -> &SecretKey {
        &self.inner
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The scalar itself never reaches debug output.
        write!(f, "PrivateKey(<secret>)")
    }
}

/// A point on secp256k1 derived from exactly one private key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicKey {
    inner: secp256k1::PublicKey,
}

impl PublicKey {
    /// Parses a public key from its SEC1 serialization, compressed or
    /// uncompressed.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, KeyError> {
        secp256k1::PublicKey::from_slice(bytes)
            .map(|inner| Self { inner })
            .map_err(|_| KeyError::InvalidKey)
    }

    /// Parses a public key from its hex encoding.
    pub fn from_hex(text: &str) -> Result<Self, KeyError> {
        let raw = hex::decode(text.trim()).map_err(|_| KeyError::InvalidKey)?;
        Self::from_slice(&raw)
    }

    /// The 65-byte form: `0x04` prefix, then X and Y as 32 big-endian
    /// bytes each.
    ///
    /// Fixed-width output keeps the mandatory zero padding when a
    /// coordinate has leading zero bytes.
    #[inline]
    pub fn to_uncompressed(&self) -> [u8; 65] {
        self.inner.serialize_uncompressed()
    }

    /// The 33-byte form: X prefixed with `0x02` for even Y, `0x03` for
    /// odd Y.
    pub fn to_compressed(&self) -> [u8; 33] {
        let full = self.to_uncompressed();
        let mut out = [0u8; 33];
        out[0] = if full[64] & 1 == 0 { 0x02 } else { 0x03 };
        out[1..].copy_from_slice(&full[1..33]);
        out
    }

    /// Returns the compressed form as a hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_compressed())
    }

    pub(crate) fn point(&self) -> &secp256k1::PublicKey {
        &self.inner
    }
}

/// A private key together with its derived public key.
#[derive(Debug, Clone)]
pub struct Keypair {
    private: PrivateKey,
    public: PublicKey,
}

impl Keypair {
    /// Generates a fresh keypair.
    pub fn generate() -> Result<Self, KeyError> {
        Ok(Self::from_private(PrivateKey::generate()?))
    }

    /// Derives the public half from an existing private key.
    pub fn from_private(private: PrivateKey) -> Self {
        let public = private.public_key();
        Self { private, public }
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Private key from the classic address-derivation walkthrough.
    const VECTOR_PRIV: &str = "18e14a7b6a307f426a94f8114701e7c8e774e7f9a47e2c2035db29a206321725";
    const VECTOR_PUB_COMPRESSED: &str =
        "0250863ad64a87ae8a2fe83c1af1a8403cb53f53e486d8511dad8a04887e5b2352";
    const VECTOR_PUB_UNCOMPRESSED: &str =
        "0450863ad64a87ae8a2fe83c1af1a8403cb53f53e486d8511dad8a04887e5b2352\
         2cd470243453a299fa9e77237716103abc11a1df38855ed6f2ee187e9c582ba6";

    #[test]
    fn test_generated_key_in_range() {
        let key = PrivateKey::generate().unwrap();
        assert!(scalar_in_range(&key.to_bytes()));
    }

    #[test]
    fn test_generated_keys_differ() {
        let a = PrivateKey::generate().unwrap();
        let b = PrivateKey::generate().unwrap();
        assert_ne!(a.to_bytes(), b.to_bytes());
    }

    #[test]
    fn test_rejects_zero_and_one() {
        let zero = [0u8; 32];
        assert!(PrivateKey::from_bytes(&zero).is_err());

        let mut one = [0u8; 32];
        one[31] = 1;
        assert!(PrivateKey::from_bytes(&one).is_err());
    }

    #[test]
    fn test_rejects_order_and_above() {
        assert!(PrivateKey::from_bytes(&CURVE_ORDER).is_err());
        assert!(PrivateKey::from_bytes(&[0xFF; 32]).is_err());
    }

    #[test]
    fn test_accepts_range_boundaries() {
        let mut two = [0u8; 32];
        two[31] = 2;
        assert!(PrivateKey::from_bytes(&two).is_ok());

        let mut order_minus_one = CURVE_ORDER;
        order_minus_one[31] -= 1;
        assert!(PrivateKey::from_bytes(&order_minus_one).is_ok());
    }

    #[test]
    fn test_derive_known_public_key() {
        let private = PrivateKey::from_hex(VECTOR_PRIV).unwrap();
        let public = private.public_key();
        assert_eq!(hex::encode(public.to_compressed()), VECTOR_PUB_COMPRESSED);
        assert_eq!(hex::encode(public.to_uncompressed()), VECTOR_PUB_UNCOMPRESSED);
    }

    #[test]
    fn test_compression_matches_library() {
        let private = PrivateKey::generate().unwrap();
        let public = private.public_key();
        // Parity-prefix logic must agree with the curve library's own
        // compressed serialization.
        assert_eq!(public.to_compressed(), public.point().serialize());
    }

    #[test]
    fn test_uncompressed_prefix_and_length() {
        let private = PrivateKey::from_hex(VECTOR_PRIV).unwrap();
        let bytes = private.public_key().to_uncompressed();
        assert_eq!(bytes.len(), 65);
        assert_eq!(bytes[0], 0x04);
    }

    #[test]
    fn test_public_key_round_trip() {
        let private = PrivateKey::from_hex(VECTOR_PRIV).unwrap();
        let public = private.public_key();
        assert_eq!(
            PublicKey::from_slice(&public.to_compressed()).unwrap(),
            public
        );
        assert_eq!(
            PublicKey::from_slice(&public.to_uncompressed()).unwrap(),
            public
        );
    }

    #[test]
    fn test_rejects_malformed_public_key() {
        assert!(PublicKey::from_slice(&[0u8; 33]).is_err());
        assert!(PublicKey::from_slice(b"not a key").is_err());
    }

    #[test]
    fn test_private_key_hex_round_trip() {
        let private = PrivateKey::from_hex(VECTOR_PRIV).unwrap();
        assert_eq!(private.to_hex(), VECTOR_PRIV);
    }

    #[test]
    fn test_debug_hides_secret() {
        let private = PrivateKey::from_hex(VECTOR_PRIV).unwrap();
        let printed = format!("{:?}", private);
        assert!(!printed.contains("18e14a7b"));
    }
}

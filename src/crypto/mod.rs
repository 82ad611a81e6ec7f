//! Cryptographic operations for key and signature handling.
//!
//! This module provides:
//! - Rejection-sampled private key generation over secp256k1
//! - Public key derivation with compressed and uncompressed forms
//! - The SHA-256 / RIPEMD-160 hash pipelines behind addresses
//! - DER-encoded ECDSA signatures over SHA-256 message digests

pub mod hash;
mod keypair;
mod signing;

pub use keypair::{KeyError, Keypair, PrivateKey, PublicKey};
pub use signing::{sign, verify, Signature, SignatureError};

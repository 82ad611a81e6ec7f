//! # coinkey
//!
//! Bitcoin-style account identity toolkit: private key generation, public
//! key derivation, Base58Check addresses, and ECDSA message signatures.
//!
//! ## Architecture
//!
//! - `crypto`: Key generation, hash pipelines, and signatures
//! - `encoding`: Base58 and Base58Check codecs
//! - `address`: Address derivation and round-trip decoding
//! - `keystore`: On-disk keypair storage
//! - `config`: Network selection and the CLI surface

pub mod address;
pub mod config;
pub mod crypto;
pub mod encoding;
pub mod keystore;

pub use address::{Address, AddressError};
pub use config::Network;
pub use crypto::{KeyError, Keypair, PrivateKey, PublicKey, Signature, SignatureError};
pub use encoding::{Base58, Base58Check, Base58CheckError, Base58Error};
pub use keystore::{KeyStore, StoreError};

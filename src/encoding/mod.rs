//! Text encodings for key material.
//!
//! This module provides:
//! - `Base58`: big-integer text encoding with leading-zero preservation
//! - `Base58Check`: Base58 plus a version byte and 4-byte checksum

mod base58;
mod check;

pub use base58::{Base58, Base58Error};
pub use check::{Base58Check, Base58CheckError};

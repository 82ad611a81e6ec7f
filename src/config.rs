//! Runtime configuration: network selection and the command-line surface.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};

/// Network whose version byte is embedded in generated addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Network {
    #[default]
    Main,
    Test,
}

impl Network {
    /// The Base58Check version byte for this network.
    pub const fn version_byte(self) -> u8 {
        match self {
            Network::Main => 0x00,
            Network::Test => 0x6F,
        }
    }

    /// Maps a decoded version byte back to its network, if recognized.
    pub const fn from_version_byte(byte: u8) -> Option<Self> {
        match byte {
            0x00 => Some(Network::Main),
            0x6F => Some(Network::Test),
            _ => None,
        }
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "main" | "mainnet" => Ok(Network::Main),
            "test" | "testnet" => Ok(Network::Test),
            _ => Err(format!("Unknown network: {}", s)),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Main => write!(f, "main"),
            Network::Test => write!(f, "test"),
        }
    }
}

/// Bitcoin-style key, address, and signature toolkit
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the key files
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,

    /// Base filename for the key slots (<base> and <base>.pub)
    #[arg(short, long, default_value = "key")]
    pub key: String,

    /// Network version byte to embed in addresses: main or test
    #[arg(short, long, default_value = "main")]
    pub network: Network,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a new keypair and store it
    Generate {
        /// Overwrite existing key files
        #[arg(long, default_value = "false")]
        force: bool,
    },
    /// Show the address of the stored public key
    Address {
        /// Derive from the uncompressed public key form
        #[arg(short, long, default_value = "false")]
        uncompressed: bool,
    },
    /// Sign a message with the stored private key
    Sign {
        /// Message to sign (UTF-8 text)
        #[arg(short, long)]
        message: String,
    },
    /// Verify a signature against the stored public key
    Verify {
        /// Message that was signed
        #[arg(short, long)]
        message: String,
        /// Hex-encoded DER signature
        #[arg(short, long)]
        signature: String,
    },
}

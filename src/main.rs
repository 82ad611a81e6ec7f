//! Key and address toolkit CLI
//!
//! Usage:
//!   coinkey generate                    # New keypair in ./key and ./key.pub
//!   coinkey address                     # Address of the stored key
//!   coinkey -n test address             # Same, with the testnet version byte
//!   coinkey sign -m "hello"             # Hex DER signature over the message
//!   coinkey verify -m "hello" -s <hex>  # Check a signature

use std::process;

use clap::Parser;

use coinkey::config::{Cli, Command};
use coinkey::crypto::{sign, verify};
use coinkey::{Address, Keypair, KeyStore, Signature};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let store = KeyStore::new(&cli.dir, &cli.key);

    match cli.command {
        Command::Generate { force } => {
            if store.exists() && !force {
                return Err(format!(
                    "key files already exist in {} (use --force to overwrite)",
                    cli.dir.display()
                )
                .into());
            }
            let keypair = Keypair::generate()?;
            store.save(&keypair)?;
            let address = Address::from_public_key(keypair.public_key(), cli.network);
            println!("Generated new keypair");
            println!("Private key: {}", store.private_path().display());
            println!("Public key:  {}", store.public_path().display());
            println!("Network:     {}", cli.network);
            println!("Address:     {}", address);
        }
        Command::Address { uncompressed } => {
            let public = store.load_public()?;
            let address = if uncompressed {
                Address::from_uncompressed(&public, cli.network)
            } else {
                Address::from_public_key(&public, cli.network)
            };
            println!("{}", address);
        }
        Command::Sign { message } => {
            let private = store.load_private()?;
            let signature = sign(&private, message.as_bytes());
            println!("{}", signature.to_hex());
        }
        Command::Verify { message, signature } => {
            let public = store.load_public()?;
            let signature = Signature::from_hex(&signature)?;
            if verify(&public, message.as_bytes(), &signature) {
                println!("Signature OK");
            } else {
                println!("Signature INVALID");
                process::exit(1);
            }
        }
    }

    Ok(())
}

//! On-disk keypair storage: two independent hex-encoded slots.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::crypto::{KeyError, Keypair, PrivateKey, PublicKey};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("key store I/O failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored key is not valid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    #[error(transparent)]
    Key(#[from] KeyError),
}

/// Filesystem store holding one keypair as two separately readable and
/// writable slots: `<base>` for the private key and `<base>.pub` for the
/// public key, both hex encoded.
#[derive(Debug, Clone)]
pub struct KeyStore {
    dir: PathBuf,
    base: String,
}

impl KeyStore {
    pub fn new(dir: impl Into<PathBuf>, base: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            base: base.into(),
        }
    }

    /// Path of the private key slot.
    pub fn private_path(&self) -> PathBuf {
        self.dir.join(&self.base)
    }

    /// Path of the public key slot.
    pub fn public_path(&self) -> PathBuf {
        self.dir.join(format!("{}.pub", self.base))
    }

    /// Whether either slot already exists on disk.
    pub fn exists(&self) -> bool {
        self.private_path().exists() || self.public_path().exists()
    }

    /// Persists both halves of `keypair`.
    ///
    /// Each slot is written to a temporary sibling and renamed into
    /// place, so a concurrent reader never observes a partially written
    /// key.
    pub fn save(&self, keypair: &Keypair) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        write_atomic(&self.private_path(), &keypair.private_key().to_hex())?;
        write_atomic(&self.public_path(), &keypair.public_key().to_hex())?;
        Ok(())
    }

    /// Loads the private key slot.
    pub fn load_private(&self) -> Result<PrivateKey, StoreError> {
        let text = fs::read_to_string(self.private_path())?;
        let raw = hex::decode(text.trim())?;
        let bytes: [u8; 32] = raw.as_slice().try_into().map_err(|_| KeyError::InvalidKey)?;
        Ok(PrivateKey::from_bytes(&bytes)?)
    }

    /// Loads the public key slot.
    pub fn load_public(&self) -> Result<PublicKey, StoreError> {
        let text = fs::read_to_string(self.public_path())?;
        let raw = hex::decode(text.trim())?;
        Ok(PublicKey::from_slice(&raw)?)
    }

    /// Rebuilds the keypair from the private slot.
    ///
    /// The public key is re-derived rather than trusted from its file, so
    /// the pair cannot drift apart.
    pub fn load(&self) -> Result<Keypair, StoreError> {
        Ok(Keypair::from_private(self.load_private()?))
    }
}

fn write_atomic(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut tmp = OsString::from(path.as_os_str());
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    fs::write(&tmp, format!("{}\n", contents))?;
    fs::rename(&tmp, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(tag: &str) -> KeyStore {
        let dir = std::env::temp_dir().join(format!("coinkey-{}-{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        KeyStore::new(dir, "key")
    }

    fn cleanup(store: &KeyStore) {
        let _ = fs::remove_dir_all(&store.dir);
    }

    #[test]
    fn test_save_load_round_trip() {
        let store = temp_store("roundtrip");
        let keypair = Keypair::generate().unwrap();
        store.save(&keypair).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(
            loaded.private_key().to_bytes(),
            keypair.private_key().to_bytes()
        );
        assert_eq!(loaded.public_key(), keypair.public_key());
        assert_eq!(store.load_public().unwrap(), *keypair.public_key());
        cleanup(&store);
    }

    #[test]
    fn test_slots_are_separate_files() {
        let store = temp_store("slots");
        let keypair = Keypair::generate().unwrap();
        store.save(&keypair).unwrap();

        assert_ne!(store.private_path(), store.public_path());
        let private_text = fs::read_to_string(store.private_path()).unwrap();
        let public_text = fs::read_to_string(store.public_path()).unwrap();
        assert_eq!(private_text.trim(), keypair.private_key().to_hex());
        assert_eq!(public_text.trim(), keypair.public_key().to_hex());
        cleanup(&store);
    }

    #[test]
    fn test_exists_tracks_slots() {
        let store = temp_store("exists");
        assert!(!store.exists());
        store.save(&Keypair::generate().unwrap()).unwrap();
        assert!(store.exists());
        cleanup(&store);
    }

    #[test]
    fn test_no_leftover_temp_files() {
        let store = temp_store("tmpfiles");
        store.save(&Keypair::generate().unwrap()).unwrap();
        let leftovers: Vec<_> = fs::read_dir(&store.dir)
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
        cleanup(&store);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let store = temp_store("missing");
        assert!(matches!(store.load_private(), Err(StoreError::Io(_))));
        assert!(matches!(store.load_public(), Err(StoreError::Io(_))));
    }

    #[test]
    fn test_corrupt_hex_is_rejected() {
        let store = temp_store("corrupt");
        fs::create_dir_all(&store.dir).unwrap();
        fs::write(store.private_path(), "not hex at all").unwrap();
        assert!(matches!(
            store.load_private(),
            Err(StoreError::InvalidHex(_))
        ));
        cleanup(&store);
    }

    #[test]
    fn test_out_of_range_key_is_rejected() {
        let store = temp_store("range");
        fs::create_dir_all(&store.dir).unwrap();
        fs::write(store.private_path(), "00".repeat(32)).unwrap();
        assert!(matches!(store.load_private(), Err(StoreError::Key(_))));
        cleanup(&store);
    }
}

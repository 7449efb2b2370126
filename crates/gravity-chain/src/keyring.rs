//! Key store for the node operator's signing keys.
//!
//! Keys are referenced by name and carry a custody kind: `local` keys hold
//! a mnemonic from which a secp256k1 signing key is derived on the fly,
//! while `offline` and `multisig` keys only record an address. The gentx
//! pipeline branches on the custody kind exactly once; a key without local
//! key material can never produce a signature here.

pub mod errors;
mod secp256k1_key_pair;

pub use secp256k1_key_pair::{standard_hd_path, Secp256k1KeyPair};

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use errors::Error;

use crate::types::address::{AccountId, ACCOUNT_PREFIX};

pub const KEYSTORE_DISK_FOLDER: &str = "keyring-test";
pub const KEYSTORE_FILE_EXTENSION: &str = "json";

/// Standard derivation path for account keys (Cosmos coin type 118).
pub const DEFAULT_HD_PATH: &str = "m/44'/118'/0'/0/0";

/// How the private key material behind a key entry is held.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustodyKind {
    /// Key material is stored locally; the key can sign.
    Local,
    /// Key material is held elsewhere; only the address is known.
    Offline,
    /// The address belongs to a multi-signature account.
    Multisig,
}

/// On-disk representation of a key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyFile {
    pub name: String,
    pub r#type: CustodyKind,
    /// Bech32 account address.
    pub address: String,
    /// Hex-encoded compressed secp256k1 public key, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pubkey: Option<String>,
    /// BIP-39 mnemonic; present for local keys only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mnemonic: Option<String>,
}

/// In-memory view of a key, with the signing key pair derived for local
/// custody.
#[derive(Clone, Debug)]
pub struct KeyEntry {
    pub name: String,
    /// Bech32 account address.
    pub account: String,
    /// Raw 20-byte address.
    pub address: AccountId,
    pub custody: CustodyKind,
    /// Present for local custody only.
    pub key_pair: Option<Secp256k1KeyPair>,
}

impl TryFrom<KeyFile> for KeyEntry {
    type Error = Error;

    fn try_from(key_file: KeyFile) -> Result<Self, Self::Error> {
        let address =
            AccountId::from_bech32(ACCOUNT_PREFIX, &key_file.address).map_err(Error::address)?;

        let key_pair = match key_file.r#type {
            CustodyKind::Local => {
                let mnemonic = key_file
                    .mnemonic
                    .as_deref()
                    .ok_or_else(|| Error::missing_mnemonic(key_file.name.clone()))?;

                let hd_path = standard_hd_path(DEFAULT_HD_PATH)?;
                let key_pair = Secp256k1KeyPair::from_mnemonic(mnemonic, &hd_path)?;

                // The derived address must match the recorded one, otherwise
                // the key file is corrupted or was edited by hand.
                if key_pair.address() != address {
                    let derived = key_pair.address().account().map_err(Error::address)?;
                    return Err(Error::address_mismatch(key_file.address.clone(), derived));
                }

                Some(key_pair)
            }
            CustodyKind::Offline | CustodyKind::Multisig => None,
        };

        Ok(KeyEntry {
            name: key_file.name,
            account: key_file.address,
            address,
            custody: key_file.r#type,
            key_pair,
        })
    }
}

pub trait KeyStore {
    fn get(&self, name: &str) -> Result<KeyFile, Error>;
    fn insert(&mut self, key_file: KeyFile) -> Result<(), Error>;
    fn keys(&self) -> Result<Vec<KeyFile>, Error>;
}

/// Ephemeral in-memory store, mostly useful in tests.
#[derive(Clone, Debug, Default)]
pub struct Memory {
    keys: BTreeMap<String, KeyFile>,
}

impl KeyStore for Memory {
    fn get(&self, name: &str) -> Result<KeyFile, Error> {
        self.keys
            .get(name)
            .cloned()
            .ok_or_else(|| Error::key_not_found(name.to_string()))
    }

    fn insert(&mut self, key_file: KeyFile) -> Result<(), Error> {
        if self.keys.contains_key(&key_file.name) {
            return Err(Error::existing_key(key_file.name));
        }

        self.keys.insert(key_file.name.clone(), key_file);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<KeyFile>, Error> {
        Ok(self.keys.values().cloned().collect())
    }
}

/// Disk-backed store: one JSON file per key under the keyring folder.
#[derive(Clone, Debug)]
pub struct Test {
    store: PathBuf,
}

impl Test {
    pub fn new(store: PathBuf) -> Self {
        Self { store }
    }

    fn key_file_path(&self, name: &str) -> PathBuf {
        let mut filename = self.store.join(name);
        filename.set_extension(KEYSTORE_FILE_EXTENSION);
        filename
    }
}

impl KeyStore for Test {
    fn get(&self, name: &str) -> Result<KeyFile, Error> {
        let filename = self.key_file_path(name);

        if !filename.as_path().exists() {
            return Err(Error::key_not_found(name.to_string()));
        }

        let file = File::open(&filename)
            .map_err(|e| Error::key_store_io(filename.display().to_string(), e))?;

        serde_json::from_reader(file)
            .map_err(|e| Error::key_file_decode(filename.display().to_string(), e))
    }

    fn insert(&mut self, key_file: KeyFile) -> Result<(), Error> {
        let filename = self.key_file_path(&key_file.name);

        if filename.as_path().exists() {
            return Err(Error::existing_key(key_file.name));
        }

        let json = serde_json::to_string_pretty(&key_file).map_err(Error::key_file_encode)?;

        fs::write(&filename, json)
            .map_err(|e| Error::key_store_io(filename.display().to_string(), e))?;

        restrict_permissions(&filename)
    }

    fn keys(&self) -> Result<Vec<KeyFile>, Error> {
        let entries = fs::read_dir(&self.store)
            .map_err(|e| Error::key_store_io(self.store.display().to_string(), e))?;

        let mut keys = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|e| Error::key_store_io(self.store.display().to_string(), e))?
                .path();

            if path.extension().and_then(|e| e.to_str()) != Some(KEYSTORE_FILE_EXTENSION) {
                continue;
            }

            let file =
                File::open(&path).map_err(|e| Error::key_store_io(path.display().to_string(), e))?;

            let key_file = serde_json::from_reader(file)
                .map_err(|e| Error::key_file_decode(path.display().to_string(), e))?;

            keys.push(key_file);
        }

        Ok(keys)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Store {
    Memory,
    Test,
}

#[derive(Clone, Debug)]
pub enum KeyRing {
    Memory(Memory),
    Test(Test),
}

impl KeyRing {
    pub fn new(store: Store, keys_folder: &Path) -> Result<Self, Error> {
        match store {
            Store::Memory => Ok(Self::Memory(Memory::default())),

            Store::Test => {
                fs::create_dir_all(keys_folder)
                    .map_err(|e| Error::key_store_io(keys_folder.display().to_string(), e))?;

                restrict_dir_permissions(keys_folder)?;

                Ok(Self::Test(Test::new(keys_folder.to_path_buf())))
            }
        }
    }

    pub fn get_key(&self, name: &str) -> Result<KeyEntry, Error> {
        let key_file = match self {
            KeyRing::Memory(m) => m.get(name),
            KeyRing::Test(d) => d.get(name),
        }?;

        KeyEntry::try_from(key_file)
    }

    pub fn add_key(&mut self, key_file: KeyFile) -> Result<(), Error> {
        // Reject key files that cannot produce a consistent entry before
        // they reach the store.
        KeyEntry::try_from(key_file.clone())?;

        match self {
            KeyRing::Memory(m) => m.insert(key_file),
            KeyRing::Test(d) => d.insert(key_file),
        }
    }

    pub fn keys(&self) -> Result<Vec<(String, KeyEntry)>, Error> {
        let key_files = match self {
            KeyRing::Memory(m) => m.keys(),
            KeyRing::Test(d) => d.keys(),
        }?;

        key_files
            .into_iter()
            .map(|kf| {
                let name = kf.name.clone();
                KeyEntry::try_from(kf).map(|entry| (name, entry))
            })
            .collect()
    }

    /// Sign a message with the named key.
    ///
    /// Fails for keys whose custody kind carries no local key material.
    pub fn sign_msg(&self, name: &str, message: &[u8]) -> Result<Vec<u8>, Error> {
        let key = self.get_key(name)?;

        match key.key_pair {
            Some(key_pair) => key_pair.sign(message),
            None => Err(Error::cannot_sign(name.to_string())),
        }
    }

    /// Build a local-custody key file from a mnemonic.
    pub fn local_key_from_mnemonic(name: &str, mnemonic: &str) -> Result<KeyFile, Error> {
        let hd_path = standard_hd_path(DEFAULT_HD_PATH)?;
        let key_pair = Secp256k1KeyPair::from_mnemonic(mnemonic, &hd_path)?;
        let address = key_pair.address().account().map_err(Error::address)?;

        Ok(KeyFile {
            name: name.to_string(),
            r#type: CustodyKind::Local,
            address,
            pubkey: Some(hex::encode(key_pair.public_key_bytes())),
            mnemonic: Some(mnemonic.to_string()),
        })
    }

    /// Build an address-only key file with the given custody kind.
    pub fn address_only_key(
        name: &str,
        custody: CustodyKind,
        address: &str,
    ) -> Result<KeyFile, Error> {
        // Validates prefix, checksum and length.
        AccountId::from_bech32(ACCOUNT_PREFIX, address).map_err(Error::address)?;

        Ok(KeyFile {
            name: name.to_string(),
            r#type: custody,
            address: address.to_string(),
            pubkey: None,
            mnemonic: None,
        })
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<(), Error> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
        .map_err(|e| Error::key_store_io(path.display().to_string(), e))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<(), Error> {
    Ok(())
}

#[cfg(unix)]
fn restrict_dir_permissions(path: &Path) -> Result<(), Error> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o700))
        .map_err(|e| Error::key_store_io(path.display().to_string(), e))
}

#[cfg(not(unix))]
fn restrict_dir_permissions(_path: &Path) -> Result<(), Error> {
    Ok(())
}

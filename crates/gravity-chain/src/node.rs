//! Node identity files: `node_key.json` and `priv_validator_key.json`.
//!
//! Both files follow the Tendermint on-disk format, so a node initialized
//! by this tooling is indistinguishable from one initialized by the
//! consensus engine itself. Generation is an explicit idempotent "ensure"
//! operation: an existing file is read back, a missing one is created and
//! persisted. Re-running never regenerates.

use std::fs;
use std::path::Path;

use ed25519_dalek::{PublicKey, SecretKey};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::config::HomeLayout;
use crate::error::Error;

pub const ED25519_PUB_KEY_TYPE: &str = "tendermint/PubKeyEd25519";
pub const ED25519_PRIV_KEY_TYPE: &str = "tendermint/PrivKeyEd25519";

/// Length of a node ID: 20 bytes, hex encoded.
pub const NODE_ID_LENGTH: usize = 20;

/// An amino-typed key as stored in the Tendermint key files.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedKey {
    pub r#type: String,
    /// Base64-encoded key material.
    pub value: String,
}

/// On-disk representation of `node_key.json`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NodeKeyFile {
    pub priv_key: TypedKey,
}

/// On-disk representation of `priv_validator_key.json`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PrivValidatorKeyFile {
    /// Uppercase hex consensus address.
    pub address: String,
    pub pub_key: TypedKey,
    pub priv_key: TypedKey,
}

/// The node identity derived from the two key files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeIdentity {
    /// Lowercase hex node ID derived from the p2p key.
    pub node_id: String,
    /// The validator's ed25519 consensus public key.
    pub consensus_pubkey: [u8; 32],
}

/// Ensure both identity files exist, creating them if necessary, and
/// return the derived identity.
pub fn init_node_identity(home: &HomeLayout) -> Result<NodeIdentity, Error> {
    let node_id = ensure_node_key(&home.node_key_file())?;
    let consensus_pubkey = ensure_priv_validator_key(&home.priv_validator_key_file())?;

    Ok(NodeIdentity {
        node_id,
        consensus_pubkey,
    })
}

/// Ensure `node_key.json` exists and return the node ID.
pub fn ensure_node_key(path: &Path) -> Result<String, Error> {
    let public = match read_key_file::<NodeKeyFile>(path)? {
        Some(file) => keypair_public(path, &file.priv_key)?,
        None => {
            let (secret, public) = generate_keypair(path)?;

            let file = NodeKeyFile {
                priv_key: TypedKey {
                    r#type: ED25519_PRIV_KEY_TYPE.to_string(),
                    value: encode_keypair(&secret, &public),
                },
            };

            write_key_file(path, &file)?;
            debug!(path = %path.display(), "generated node key");
            public
        }
    };

    Ok(node_id(&public))
}

/// Ensure `priv_validator_key.json` exists and return the consensus
/// public key.
pub fn ensure_priv_validator_key(path: &Path) -> Result<[u8; 32], Error> {
    let public = match read_key_file::<PrivValidatorKeyFile>(path)? {
        Some(file) => keypair_public(path, &file.priv_key)?,
        None => {
            let (secret, public) = generate_keypair(path)?;

            let file = PrivValidatorKeyFile {
                address: hex::encode_upper(address_bytes(&public)),
                pub_key: TypedKey {
                    r#type: ED25519_PUB_KEY_TYPE.to_string(),
                    value: base64::encode(public.as_bytes()),
                },
                priv_key: TypedKey {
                    r#type: ED25519_PRIV_KEY_TYPE.to_string(),
                    value: encode_keypair(&secret, &public),
                },
            };

            write_key_file(path, &file)?;
            debug!(path = %path.display(), "generated private validator key");
            public
        }
    };

    Ok(public.to_bytes())
}

/// The node ID: lowercase hex of the first 20 bytes of the SHA-256 of the
/// ed25519 public key.
pub fn node_id(public: &PublicKey) -> String {
    hex::encode(address_bytes(public))
}

fn address_bytes(public: &PublicKey) -> [u8; NODE_ID_LENGTH] {
    let digest = Sha256::digest(public.as_bytes());

    let mut bytes = [0u8; NODE_ID_LENGTH];
    bytes.copy_from_slice(&digest[..NODE_ID_LENGTH]);
    bytes
}

fn generate_keypair(path: &Path) -> Result<(SecretKey, PublicKey), Error> {
    let mut seed = [0u8; 32];
    OsRng.fill_bytes(&mut seed);

    let secret = SecretKey::from_bytes(&seed).map_err(|e| {
        Error::node_identity_format(path.display().to_string(), e.to_string())
    })?;
    let public = PublicKey::from(&secret);

    Ok((secret, public))
}

/// Tendermint stores the 64-byte `secret || public` concatenation.
fn encode_keypair(secret: &SecretKey, public: &PublicKey) -> String {
    let mut bytes = Vec::with_capacity(64);
    bytes.extend_from_slice(secret.as_bytes());
    bytes.extend_from_slice(public.as_bytes());
    base64::encode(bytes)
}

fn keypair_public(path: &Path, key: &TypedKey) -> Result<PublicKey, Error> {
    if key.r#type != ED25519_PRIV_KEY_TYPE {
        return Err(Error::node_identity_format(
            path.display().to_string(),
            format!("unsupported key type '{}'", key.r#type),
        ));
    }

    let bytes = base64::decode(&key.value).map_err(|e| {
        Error::node_identity_format(path.display().to_string(), e.to_string())
    })?;

    if bytes.len() != 64 {
        return Err(Error::node_identity_format(
            path.display().to_string(),
            format!("key is {} bytes long, expected 64", bytes.len()),
        ));
    }

    let secret = SecretKey::from_bytes(&bytes[..32]).map_err(|e| {
        Error::node_identity_format(path.display().to_string(), e.to_string())
    })?;

    // Recompute the public half rather than trusting the tail of the file.
    Ok(PublicKey::from(&secret))
}

fn read_key_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>, Error> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path)
        .map_err(|e| Error::node_identity_init(path.display().to_string(), e))?;

    let file = serde_json::from_str(&contents)
        .map_err(|e| Error::node_identity_decode(path.display().to_string(), e))?;

    Ok(Some(file))
}

fn write_key_file<T: Serialize>(path: &Path, file: &T) -> Result<(), Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| Error::node_identity_init(parent.display().to_string(), e))?;
    }

    let json = serde_json::to_string_pretty(file)
        .map_err(|e| Error::node_identity_encode(path.display().to_string(), e))?;

    fs::write(path, json).map_err(|e| Error::node_identity_init(path.display().to_string(), e))?;

    restrict_permissions(path)
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<(), Error> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
        .map_err(|e| Error::node_identity_init(path.display().to_string(), e))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<(), Error> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_home() -> (tempfile::TempDir, HomeLayout) {
        let dir = tempfile::tempdir().unwrap();
        let home = HomeLayout::new(dir.path().to_path_buf());
        (dir, home)
    }

    #[test]
    fn generates_both_identity_files() {
        let (_dir, home) = temp_home();

        let identity = init_node_identity(&home).unwrap();

        assert!(home.node_key_file().exists());
        assert!(home.priv_validator_key_file().exists());
        assert_eq!(identity.node_id.len(), NODE_ID_LENGTH * 2);
        assert!(identity.node_id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn ensure_is_idempotent() {
        let (_dir, home) = temp_home();

        let first = init_node_identity(&home).unwrap();
        let second = init_node_identity(&home).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn rejects_truncated_key_material() {
        let (_dir, home) = temp_home();
        let path: PathBuf = home.node_key_file();

        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let file = NodeKeyFile {
            priv_key: TypedKey {
                r#type: ED25519_PRIV_KEY_TYPE.to_string(),
                value: base64::encode([0u8; 12]),
            },
        };
        fs::write(&path, serde_json::to_string(&file).unwrap()).unwrap();

        assert!(ensure_node_key(&path).is_err());
    }
}

//! Layout of the node's home directory.
//!
//! Everything the gentx pipeline reads or writes lives under a single
//! home directory, `~/.gravity` by default:
//!
//! ```text
//! {home}/config/genesis.json
//! {home}/config/node_key.json
//! {home}/config/priv_validator_key.json
//! {home}/config/gentx/gentx-{node_id}.json
//! {home}/keyring-test/{key_name}.json
//! ```

use std::path::{Path, PathBuf};

use crate::keyring::KEYSTORE_DISK_FOLDER;

/// Default home folder, relative to the user's home directory.
pub const DEFAULT_HOME_FOLDER: &str = ".gravity";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HomeLayout {
    root: PathBuf,
}

impl HomeLayout {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// The default home directory (`~/.gravity`), if the user's home
    /// directory can be determined.
    pub fn default_root() -> Option<PathBuf> {
        dirs_next::home_dir().map(|home| home.join(DEFAULT_HOME_FOLDER))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_dir(&self) -> PathBuf {
        self.root.join("config")
    }

    pub fn genesis_file(&self) -> PathBuf {
        self.config_dir().join("genesis.json")
    }

    pub fn node_key_file(&self) -> PathBuf {
        self.config_dir().join("node_key.json")
    }

    pub fn priv_validator_key_file(&self) -> PathBuf {
        self.config_dir().join("priv_validator_key.json")
    }

    pub fn gentx_dir(&self) -> PathBuf {
        self.config_dir().join("gentx")
    }

    pub fn keyring_dir(&self) -> PathBuf {
        self.root.join(KEYSTORE_DISK_FOLDER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_hang_off_the_root() {
        let home = HomeLayout::new(PathBuf::from("/tmp/validator"));

        assert_eq!(
            home.genesis_file(),
            PathBuf::from("/tmp/validator/config/genesis.json")
        );
        assert_eq!(
            home.gentx_dir(),
            PathBuf::from("/tmp/validator/config/gentx")
        );
        assert_eq!(
            home.keyring_dir(),
            PathBuf::from("/tmp/validator/keyring-test")
        );
    }
}

use std::path::PathBuf;

use abscissa_core::{clap::Parser, Command, Runnable};

use gravity_chain::config::HomeLayout;
use gravity_chain::keyring::{CustodyKind, KeyFile, KeyRing, Store};

use crate::conclude::Output;

#[derive(Clone, Command, Debug, Parser, PartialEq, Eq)]
pub struct KeysAddCmd {
    #[clap(
        value_name = "NAME",
        required = true,
        help = "Name under which the key is stored"
    )]
    name: String,

    #[clap(
        long = "mnemonic",
        value_name = "MNEMONIC",
        help = "BIP-39 mnemonic the local signing key is derived from"
    )]
    mnemonic: Option<String>,

    #[clap(
        long = "offline",
        help = "Record an offline key; only its address is stored",
        conflicts_with = "mnemonic",
        requires = "address"
    )]
    offline: bool,

    #[clap(
        long = "multisig",
        help = "Record a multisig key; only its address is stored",
        conflicts_with_all = &["mnemonic", "offline"],
        requires = "address"
    )]
    multisig: bool,

    #[clap(
        long = "address",
        value_name = "ADDRESS",
        help = "Bech32 account address, for --offline and --multisig keys"
    )]
    address: Option<String>,

    #[clap(
        long = "home",
        value_name = "HOME",
        help = "The application home directory"
    )]
    home: Option<PathBuf>,
}

impl KeysAddCmd {
    fn key_file(&self) -> Result<KeyFile, String> {
        if self.offline || self.multisig {
            let custody = if self.offline {
                CustodyKind::Offline
            } else {
                CustodyKind::Multisig
            };

            let address = self
                .address
                .as_deref()
                .ok_or_else(|| "missing --address".to_string())?;

            KeyRing::address_only_key(&self.name, custody, address).map_err(|e| e.to_string())
        } else {
            let mnemonic = self
                .mnemonic
                .as_deref()
                .ok_or_else(|| "missing --mnemonic for a local key".to_string())?;

            KeyRing::local_key_from_mnemonic(&self.name, mnemonic).map_err(|e| e.to_string())
        }
    }

    fn home(&self) -> Result<HomeLayout, String> {
        let root = match &self.home {
            Some(home) => home.clone(),
            None => HomeLayout::default_root()
                .ok_or_else(|| "cannot determine the home directory; use --home".to_string())?,
        };

        Ok(HomeLayout::new(root))
    }
}

impl Runnable for KeysAddCmd {
    fn run(&self) {
        let home = match self.home() {
            Err(err) => Output::error(err).exit(),
            Ok(home) => home,
        };

        let key_file = match self.key_file() {
            Err(err) => Output::error(err).exit(),
            Ok(key_file) => key_file,
        };

        let mut keyring = match KeyRing::new(Store::Test, &home.keyring_dir()) {
            Err(e) => Output::error(format!("{}", e)).exit(),
            Ok(keyring) => keyring,
        };

        let account = key_file.address.clone();
        match keyring.add_key(key_file) {
            Ok(()) => Output::success_msg(format!("Added key '{}' ({})", self.name, account)).exit(),
            Err(e) => Output::error(format!("{}", e)).exit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::KeysAddCmd;

    use abscissa_core::clap::Parser;

    #[test]
    fn offline_requires_an_address() {
        assert!(KeysAddCmd::try_parse_from(["add", "warden", "--offline"]).is_err());

        let cmd = KeysAddCmd::parse_from([
            "add",
            "warden",
            "--offline",
            "--address",
            "cosmos1ahx7f8wyertuus9r20284ej0asrs085case3kn",
        ]);
        assert!(cmd.offline);
        assert!(!cmd.multisig);
    }

    #[test]
    fn custody_flags_are_mutually_exclusive() {
        assert!(KeysAddCmd::try_parse_from([
            "add",
            "warden",
            "--offline",
            "--multisig",
            "--address",
            "cosmos1ahx7f8wyertuus9r20284ej0asrs085case3kn",
        ])
        .is_err());
    }
}

use core::fmt::Write;
use std::collections::BTreeMap;
use std::path::PathBuf;

use abscissa_core::{clap::Parser, Command, Runnable};

use gravity_chain::config::HomeLayout;
use gravity_chain::keyring::{KeyRing, Store};

use crate::conclude::{json, Output};

#[derive(Clone, Command, Debug, Parser, PartialEq, Eq)]
pub struct KeysListCmd {
    #[clap(
        long = "home",
        value_name = "HOME",
        help = "The application home directory"
    )]
    home: Option<PathBuf>,
}

impl Runnable for KeysListCmd {
    fn run(&self) {
        let root = match &self.home {
            Some(home) => home.clone(),
            None => match HomeLayout::default_root() {
                Some(root) => root,
                None => Output::error("cannot determine the home directory; use --home").exit(),
            },
        };

        let home = HomeLayout::new(root);

        let keyring = match KeyRing::new(Store::Test, &home.keyring_dir()) {
            Err(e) => Output::error(format!("{}", e)).exit(),
            Ok(keyring) => keyring,
        };

        match keyring.keys() {
            Ok(keys) if json() => {
                let keys = keys
                    .into_iter()
                    .map(|(name, key)| (name, key.account))
                    .collect::<BTreeMap<_, _>>();
                Output::success(keys).exit()
            }
            Ok(keys) => {
                let mut msg = String::new();
                for (name, key) in keys {
                    let _ = write!(msg, "\n- {} ({})", name, key.account);
                }
                Output::success_msg(msg).exit()
            }
            Err(e) => Output::error(format!("{}", e)).exit(),
        }
    }
}

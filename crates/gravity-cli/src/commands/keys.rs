//! `keys` subcommand

use abscissa_core::{clap::Parser, Command, Runnable};

mod add;
mod list;

use self::{add::KeysAddCmd, list::KeysListCmd};

/// `keys` subcommand
#[derive(Command, Debug, Parser, Runnable)]
pub enum KeysCmd {
    /// Add a key to the keyring
    Add(KeysAddCmd),

    /// List all keys in the keyring
    List(KeysListCmd),
}

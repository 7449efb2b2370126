//! Cli Subcommands
//!
//! This is where you specify the subcommands of your application.

use abscissa_core::{clap::Parser, Command, Runnable};

use self::{gentx::GenTxCmd, keys::KeysCmd};

mod gentx;
mod keys;

/// Cli Subcommands
#[derive(Command, Debug, Parser, Runnable)]
pub enum CliCmd {
    /// The `gentx` subcommand
    #[clap(
        about = "Generate a genesis tx carrying a self delegation and orchestrator key delegation"
    )]
    Gentx(GenTxCmd),

    /// The `keys` subcommand
    #[clap(subcommand, about = "Manage keys in the node's keyring")]
    Keys(KeysCmd),
}

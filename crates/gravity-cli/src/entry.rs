//! Definition of the entrypoint for the Gravity CLI.

use std::path::PathBuf;
use std::process;

use abscissa_core::{clap::Parser, Command, Configurable, Runnable};
use clap::CommandFactory;

use crate::commands::CliCmd;
use crate::config::Config;

/// Entry point for the Gravity CLI.
#[derive(Command, Debug, Parser)]
#[clap(author, about, version)]
pub struct EntryPoint {
    /// Toggle JSON output mode one verbosity setting
    #[clap(long = "json", help = "Enable JSON output")]
    pub json: bool,

    /// Subcommand to execute.
    ///
    /// The `command` option will delegate option parsing to the command type,
    /// starting at the first free argument.
    #[clap(subcommand)]
    pub command: Option<CliCmd>,
}

impl Runnable for EntryPoint {
    fn run(&self) {
        match &self.command {
            Some(cmd) => cmd.run(),
            None => {
                EntryPoint::command().print_help().unwrap();
                process::exit(0);
            }
        }
    }
}

impl Configurable<Config> for EntryPoint {
    /// No configuration file: everything comes from flags and the node
    /// home directory.
    fn config_path(&self) -> Option<PathBuf> {
        None
    }
}

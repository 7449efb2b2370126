//! Main entry point for Cli

#![deny(warnings, missing_docs, trivial_casts, unused_qualifications)]
#![forbid(unsafe_code)]

use gravity_cli::application::APPLICATION;

fn main() {
    abscissa_core::boot(&APPLICATION);
}

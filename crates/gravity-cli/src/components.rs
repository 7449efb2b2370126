//! Various components for internal use by the application.

use std::io;

use abscissa_core::{Component, FrameworkError};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

type StdWriter = fn() -> io::Stderr;

/// Abscissa component for initializing the `tracing` subsystem.
///
/// Logs go to stderr so that stdout stays reserved for command output,
/// in particular the unsigned transaction emitted for offline keys. The
/// filter is taken from `RUST_LOG` when set, falling back to the default
/// log level.
#[derive(Component, Debug)]
pub struct Tracing {}

impl Tracing {
    /// Creates a new [`Tracing`] component
    #[allow(trivial_casts)]
    pub fn new(default_level: &str) -> Result<Self, FrameworkError> {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

        FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(io::stderr as StdWriter)
            .with_ansi(false)
            .finish()
            .init();

        Ok(Self {})
    }
}

//! Cli Config
//!
//! The CLI reads everything it needs from its arguments and the node home
//! directory; this configuration only carries global knobs.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// All valid log levels, as defined in tracing.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

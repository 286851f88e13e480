//! Configuration error types.
//!
//! The simulation itself never fails: every transition is a total function of
//! the current state and input. Errors only exist where the game meets the
//! outside world, i.e. when loading a [`Config`](crate::Config).

use thiserror::Error;

/// Errors raised while loading or validating a [`Config`](crate::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config '{path}': {source}")]
    Io {
        /// Path that was being read.
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not a valid JSON config.
    #[error("failed to parse config '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A value parsed fine but is outside the range the simulation supports.
    #[error("invalid config value for '{field}': {reason}")]
    Invalid {
        /// Name of the offending field.
        field: &'static str,
        /// Human-readable description of the constraint.
        reason: String,
    },
}

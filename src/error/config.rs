//! Configuration error types.

use thiserror::Error;

/// Configuration could not be read from the environment.
///
/// These are permanent failures: the process refuses to start rather than
/// running half-configured.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing environment variable {name}")]
    MissingVar { name: &'static str },

    /// An environment variable is set but could not be parsed.
    #[error("invalid value for environment variable {name}: {reason}")]
    InvalidVar { name: &'static str, reason: String },
}

//! Error types for loading and validating [`LifeConfig`](crate::LifeConfig).

use std::num::ParseIntError;

/// Errors that can occur while building a configuration.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A size or rate was zero.
    #[error("{name} must be positive")]
    NotPositive { name: &'static str },

    /// The window does not divide into whole cells.
    #[error("window {name} ({size}px) must be a multiple of the cell size ({cell_size}px)")]
    NotMultiple {
        name: &'static str,
        size: u32,
        cell_size: u32,
    },

    /// An environment variable could not be parsed.
    #[error("invalid {key}={value:?}: {source}")]
    Invalid {
        key: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

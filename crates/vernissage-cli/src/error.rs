//! Error types for the Vernissage CLI.

use std::io;

use thiserror::Error;

use vernissage::VernissageError;

/// Errors surfaced by the CLI front end.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse manifest {path}: {err}")]
    Manifest {
        path: String,
        #[source]
        err: toml::de::Error,
    },

    #[error("failed to parse config {path}: {err}")]
    Config {
        path: String,
        #[source]
        err: toml::de::Error,
    },

    #[error("failed to serialize layout: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Gallery(#[from] VernissageError),
}

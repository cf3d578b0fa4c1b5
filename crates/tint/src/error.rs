//! CLI error types.

use std::path::PathBuf;

use tint_config::ConfigError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{}: {message}", .path.display())]
    Catalog {
        /// Catalog file that could not be used.
        path: PathBuf,
        message: String,
    },

    #[error("{0}")]
    Validation(String),
}

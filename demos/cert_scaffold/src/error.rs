//! Error types for the `cert-scaffold` demo.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while generating scaffolding.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// An explicitly requested configuration file does not exist.
    #[error("configuration file '{0}' not found")]
    MissingConfig(Utf8PathBuf),
    /// Configuration, description or rendering failed.
    #[error(transparent)]
    Generate(#[from] modelgen::ModelgenError),
    /// Writing the summary failed.
    #[error("failed to write summary: {0}")]
    Output(#[from] std::io::Error),
}

/// Result alias for the demo.
pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;

//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`
//! ([`CatalogError`], [`RecommendError`], [`ConfigError`]), while the CLI
//! uses `anyhow` for convenient error propagation.
//!
//! Note that the recommendation entry point itself never returns an error;
//! these types surface only from the surrounding tooling (seed files, config,
//! argument validation).
//!
//! [`CatalogError`]: crate::catalog::CatalogError
//! [`RecommendError`]: crate::recommend::domain::RecommendError
//! [`ConfigError`]: crate::config::ConfigError

use std::path::PathBuf;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Seed track file is unusable
    #[error("Invalid seed file {path}: {message}")]
    InvalidSeed { path: PathBuf, message: String },

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create an invalid seed error.
    pub fn invalid_seed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::InvalidSeed {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Io(e).context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, serde_json::Error> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Json(e).context(ctx))
    }
}

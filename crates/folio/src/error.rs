//! Error types for Folio operations.
//!
//! [`FolioError`] covers every failure of the diagram and publication
//! workflows.

use std::{io, ops::Range, path::PathBuf};

use thiserror::Error;

use folio_text::TextError;

/// The main error type for Folio operations.
///
/// # Diagnostic Variants
///
/// The `Description` and `Config` variants keep the TOML source and the
/// byte span of the offending value, so callers can render a labeled
/// excerpt.
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid diagram description: {message}")]
    Description {
        message: String,
        src: String,
        span: Option<Range<usize>>,
    },

    #[error("invalid configuration in {}: {message}", .path.display())]
    Config {
        path: PathBuf,
        message: String,
        src: String,
        span: Option<Range<usize>>,
    },

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Export error: {0}")]
    Export(#[from] crate::export::Error),

    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("no chapter headers found in {}", .0.display())]
    NoChapters(PathBuf),

    #[error(transparent)]
    Text(#[from] TextError),
}

impl FolioError {
    /// Creates a `Description` error from a TOML deserialization failure.
    pub fn new_description_error(err: &toml::de::Error, src: impl Into<String>) -> Self {
        Self::Description {
            message: err.message().to_string(),
            src: src.into(),
            span: err.span(),
        }
    }

    /// Creates a `Config` error for the configuration file at `path`.
    pub fn new_config_error(
        path: impl Into<PathBuf>,
        err: &toml::de::Error,
        src: impl Into<String>,
    ) -> Self {
        Self::Config {
            path: path.into(),
            message: err.message().to_string(),
            src: src.into(),
            span: err.span(),
        }
    }
}

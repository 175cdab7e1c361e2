//! Error type for the text tools.

use thiserror::Error;

/// Errors produced while transforming document text.
#[derive(Debug, Error)]
pub enum TextError {
    /// The document contains no `# Chapter N:` header.
    #[error("no chapter headers found")]
    NoChapters,

    /// A normalizer rule pattern failed to compile.
    #[error("invalid rule pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, TextError>;

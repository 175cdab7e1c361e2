//! File-level workflows over a publications tree.
//!
//! A publications root holds one directory per publication. Each directory
//! is a Quarto project: a manifest (`_quarto.yml`), an `index.qmd` and,
//! for papers, chapter sources such as `1_introduction.qmd`. File names come
//! from [`PublicationsConfig`](crate::config::PublicationsConfig).
//!
//! - [`previews`] - MDX previews for the website
//! - [`split`] - Splitting a single-file book into chapter files
//!
//! The text transformations live in `folio_text`; this module only reads
//! and writes files around them.

pub mod previews;
pub mod split;

use std::{fs, io, path::Path};

use log::trace;

use crate::error::FolioError;

/// Reads a UTF-8 file, turning a missing file into [`FolioError::NotFound`].
fn read_source(path: &Path) -> Result<String, FolioError> {
    match fs::read_to_string(path) {
        Ok(content) => {
            trace!(path:? = path, bytes = content.len(); "Read source");
            Ok(content)
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            Err(FolioError::NotFound(path.to_path_buf()))
        }
        Err(err) => Err(FolioError::Io(err)),
    }
}

/// Reads a file that may legitimately be absent.
fn read_optional(path: &Path) -> Result<Option<String>, FolioError> {
    match read_source(path) {
        Ok(content) => Ok(Some(content)),
        Err(FolioError::NotFound(_)) => Ok(None),
        Err(err) => Err(err),
    }
}

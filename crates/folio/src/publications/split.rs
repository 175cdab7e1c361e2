//! Splitting a single-file book into chapter files.
//!
//! The whole split is planned in memory first; files are only written once
//! planning succeeded, in this order: chapter files, the reduced index, the
//! manifest.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{info, warn};

use folio_text::{TextError, chapters::plan_split, manifest::rewrite_manifest};

use super::{read_optional, read_source};
use crate::{config::PublicationsConfig, error::FolioError};

/// What a successful split wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitReport {
    /// Chapter files, in book order.
    pub chapters: Vec<PathBuf>,
    pub index: PathBuf,
    /// The manifest, when the book has one.
    pub manifest: Option<PathBuf>,
}

/// Splits the book in `book_dir` into one file per chapter.
///
/// # Errors
///
/// - [`FolioError::NotFound`] when the directory or its index is missing.
/// - [`FolioError::NoChapters`] when the index has no chapter header; nothing
///   is written in that case.
/// - [`FolioError::Io`] when reading or writing fails.
pub fn split_book(book_dir: &Path, config: &PublicationsConfig) -> Result<SplitReport, FolioError> {
    if !book_dir.is_dir() {
        return Err(FolioError::NotFound(book_dir.to_path_buf()));
    }
    info!(book:? = book_dir; "Splitting book");

    let index_path = book_dir.join(config.index_file());
    let text = read_source(&index_path)?;
    let split = plan_split(&text).map_err(|err| match err {
        TextError::NoChapters => FolioError::NoChapters(book_dir.to_path_buf()),
        other => FolioError::Text(other),
    })?;

    let manifest_path = book_dir.join(config.manifest_file());
    let manifest = read_optional(&manifest_path)?;

    let mut chapters = Vec::with_capacity(split.chapters.len());
    for chapter in &split.chapters {
        let path = book_dir.join(&chapter.filename);
        fs::write(&path, &chapter.content)?;
        info!(path:? = path; "Chapter written");
        chapters.push(path);
    }

    fs::write(&index_path, &split.index)?;
    info!(path:? = index_path; "Index updated");

    let manifest = match manifest {
        Some(manifest) => {
            fs::write(&manifest_path, rewrite_manifest(&manifest, &split.filenames()))?;
            info!(path:? = manifest_path; "Manifest updated");
            Some(manifest_path)
        }
        None => {
            warn!(path:? = manifest_path; "No manifest, chapter list not updated");
            None
        }
    };

    Ok(SplitReport {
        chapters,
        index: index_path,
        manifest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_book_dir() {
        let root = tempfile::tempdir().unwrap();
        let missing = root.path().join("book");
        assert!(matches!(
            split_book(&missing, &PublicationsConfig::default()),
            Err(FolioError::NotFound(path)) if path == missing
        ));
    }

    #[test]
    fn test_missing_index() {
        let root = tempfile::tempdir().unwrap();
        assert!(matches!(
            split_book(root.path(), &PublicationsConfig::default()),
            Err(FolioError::NotFound(path)) if path.ends_with("index.qmd")
        ));
    }

    #[test]
    fn test_without_manifest() {
        let root = tempfile::tempdir().unwrap();
        fs::write(
            root.path().join("index.qmd"),
            "Front.\n\n# Chapter 1: Only\n\nBody.\n",
        )
        .unwrap();

        let report = split_book(root.path(), &PublicationsConfig::default()).unwrap();
        assert_eq!(report.chapters, vec![root.path().join("1_only.qmd")]);
        assert!(report.manifest.is_none());
        assert!(!root.path().join("_quarto.yml").exists());
    }
}

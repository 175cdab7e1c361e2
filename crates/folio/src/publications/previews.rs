//! MDX preview generation.
//!
//! For every publication the abstract and introduction (or, for books, the
//! table of contents) are extracted, cleaned of Quarto-only markup and
//! written next to the sources as `preview.mdx`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info, warn};

use folio_text::preview::{PreviewKind, build_preview};

use super::{read_optional, read_source};
use crate::{config::PublicationsConfig, error::FolioError};

/// Result of processing one publication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewOutcome {
    /// A preview file was written.
    Generated { path: PathBuf, kind: PreviewKind },
    /// Nothing was written.
    Skipped { reason: String },
}

/// Counts of a batch run over a publications root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreviewSummary {
    pub generated: usize,
    pub skipped: usize,
}

/// Generates the preview for the publication in `pub_dir`.
///
/// A missing index or an index without anything to preview is a skip, not
/// an error.
///
/// # Errors
///
/// Returns [`FolioError::Io`] when a source exists but cannot be read, or
/// the preview cannot be written.
pub fn generate_preview(
    pub_dir: &Path,
    config: &PublicationsConfig,
) -> Result<PreviewOutcome, FolioError> {
    let index = match read_source(&pub_dir.join(config.index_file())) {
        Ok(index) => index,
        Err(FolioError::NotFound(path)) => {
            warn!(path:? = path; "Skipping publication without index");
            return Ok(PreviewOutcome::Skipped {
                reason: format!("no {} found", config.index_file()),
            });
        }
        Err(err) => return Err(err),
    };
    let introduction = read_optional(&pub_dir.join(config.introduction_file()))?;
    debug!(has_introduction_file = introduction.is_some(); "Sources read");

    let Some(preview) = build_preview(&index, introduction.as_deref()) else {
        warn!(dir:? = pub_dir; "Skipping publication without preview content");
        return Ok(PreviewOutcome::Skipped {
            reason: "could not extract preview content".to_string(),
        });
    };

    let path = pub_dir.join(config.preview_file());
    fs::write(&path, &preview.content)?;
    info!(path:? = path, kind:? = preview.kind; "Preview generated");

    Ok(PreviewOutcome::Generated {
        path,
        kind: preview.kind,
    })
}

/// Returns `true` if `dir` is a publication: a directory that is not on the
/// skip list and holds the manifest file.
fn is_publication(dir: &Path, config: &PublicationsConfig) -> bool {
    let Some(name) = dir.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    dir.is_dir() && !config.is_skipped(name) && dir.join(config.manifest_file()).is_file()
}

/// Generates previews for every publication under `root`, in name order.
///
/// Failures of single publications are logged and counted as skipped.
///
/// # Errors
///
/// Returns [`FolioError::NotFound`] when `root` does not exist and
/// [`FolioError::Io`] when it cannot be listed.
pub fn generate_all(root: &Path, config: &PublicationsConfig) -> Result<PreviewSummary, FolioError> {
    if !root.is_dir() {
        return Err(FolioError::NotFound(root.to_path_buf()));
    }
    info!(root:? = root; "Generating previews");

    let mut dirs = fs::read_dir(root)?
        .map(|entry| entry.map(|entry| entry.path()))
        .collect::<Result<Vec<_>, _>>()?;
    dirs.sort();

    let mut summary = PreviewSummary::default();
    for dir in dirs.iter().filter(|dir| is_publication(dir, config)) {
        info!(publication:? = dir.file_name(); "Processing");
        match generate_preview(dir, config) {
            Ok(PreviewOutcome::Generated { .. }) => summary.generated += 1,
            Ok(PreviewOutcome::Skipped { .. }) => summary.skipped += 1,
            Err(err) => {
                warn!(publication:? = dir.file_name(), err:% = err; "Preview failed");
                summary.skipped += 1;
            }
        }
    }

    info!(generated = summary.generated, skipped = summary.skipped; "Previews done");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAPER_INDEX: &str = "---\ntitle: Paper\n---\n\n# Abstract {.unnumbered}\n\nHello world.\n\n# Introduction\n\nInline intro.\n";

    fn publication(root: &Path, name: &str, index: Option<&str>) -> PathBuf {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("_quarto.yml"), "project:\n  type: book\n").unwrap();
        if let Some(index) = index {
            fs::write(dir.join("index.qmd"), index).unwrap();
        }
        dir
    }

    #[test]
    fn test_generate_preview_for_paper() {
        let root = tempfile::tempdir().unwrap();
        let dir = publication(root.path(), "paper", Some(PAPER_INDEX));

        let outcome = generate_preview(&dir, &PublicationsConfig::default()).unwrap();
        let PreviewOutcome::Generated { path, kind } = outcome else {
            panic!("expected a generated preview");
        };
        assert_eq!(kind, PreviewKind::Paper);
        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "## Abstract\n\nHello world.\n\n---\n\n## Introduction\n\nInline intro."
        );
    }

    #[test]
    fn test_introduction_file_wins() {
        let root = tempfile::tempdir().unwrap();
        let dir = publication(root.path(), "paper", Some(PAPER_INDEX));
        fs::write(
            dir.join("1_introduction.qmd"),
            "# Introduction\n\nFrom the chapter file.\n\n# Background\n\nMore.\n",
        )
        .unwrap();

        generate_preview(&dir, &PublicationsConfig::default()).unwrap();
        let written = fs::read_to_string(dir.join("preview.mdx")).unwrap();
        assert!(written.ends_with("## Introduction\n\nFrom the chapter file."));
    }

    #[test]
    fn test_missing_index_is_skipped() {
        let root = tempfile::tempdir().unwrap();
        let dir = publication(root.path(), "empty", None);

        let outcome = generate_preview(&dir, &PublicationsConfig::default()).unwrap();
        assert!(matches!(outcome, PreviewOutcome::Skipped { .. }));
        assert!(!dir.join("preview.mdx").exists());
    }

    #[test]
    fn test_generate_all_counts_and_filters() {
        let root = tempfile::tempdir().unwrap();
        publication(root.path(), "a_paper", Some(PAPER_INDEX));
        publication(
            root.path(),
            "b_book",
            Some("# Table of Contents\n\n1. Foundations\n2. Practice\n"),
        );
        publication(root.path(), "c_nothing", Some("Just prose.\n"));
        publication(root.path(), "pdf", Some(PAPER_INDEX));

        // Not a publication: no manifest
        let stray = root.path().join("notes");
        fs::create_dir_all(&stray).unwrap();
        fs::write(stray.join("index.qmd"), PAPER_INDEX).unwrap();
        fs::write(root.path().join("README.md"), "readme").unwrap();

        let summary = generate_all(root.path(), &PublicationsConfig::default()).unwrap();
        assert_eq!(
            summary,
            PreviewSummary {
                generated: 2,
                skipped: 1
            }
        );
        assert!(!root.path().join("pdf/preview.mdx").exists());
        assert!(!stray.join("preview.mdx").exists());

        let book = fs::read_to_string(root.path().join("b_book/preview.mdx")).unwrap();
        assert!(book.starts_with("## Table of Contents"));
    }

    #[test]
    fn test_generate_all_missing_root() {
        let root = tempfile::tempdir().unwrap();
        let missing = root.path().join("nope");
        assert!(matches!(
            generate_all(&missing, &PublicationsConfig::default()),
            Err(FolioError::NotFound(_))
        ));
    }
}

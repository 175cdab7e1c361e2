//! Quarto project manifest (`_quarto.yml`) chapter list rewriting.
//!
//! The manifest is patched textually rather than parsed, so comments and
//! formatting elsewhere in the file survive untouched.

use std::sync::LazyLock;

use log::{debug, warn};
use regex::{NoExpand, Regex};

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static CHAPTERS_ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"  chapters:\s*\n\s*- index\.qmd").expect("valid regex"));

/// Replaces the `chapters:` list head (`- index.qmd`) with the index followed
/// by `filenames`. The manifest is returned unchanged when it has no such list.
///
/// ```
/// use folio_text::manifest::rewrite_manifest;
///
/// let manifest = "book:\n  title: Demo\n  chapters:\n    - index.qmd\n";
/// assert_eq!(
///     rewrite_manifest(manifest, &["1_intro.qmd", "2_more.qmd"]),
///     "book:\n  title: Demo\n  chapters:\n    - index.qmd\n    - 1_intro.qmd\n    - 2_more.qmd\n"
/// );
/// ```
pub fn rewrite_manifest<S: AsRef<str>>(manifest: &str, filenames: &[S]) -> String {
    if !CHAPTERS_ANCHOR.is_match(manifest) {
        warn!("Manifest has no `chapters:` list starting with index.qmd, leaving it unchanged");
        return manifest.to_string();
    }

    let mut replacement = String::from("  chapters:\n    - index.qmd");
    for filename in filenames {
        replacement.push_str("\n    - ");
        replacement.push_str(filename.as_ref());
    }
    debug!(chapters = filenames.len(); "Rewriting manifest chapter list");

    CHAPTERS_ANCHOR
        .replace_all(manifest, NoExpand(&replacement))
        .into_owned()
}

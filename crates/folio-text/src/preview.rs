//! Preview document assembly.
//!
//! Papers get a preview made of their abstract and introduction. Books,
//! which usually have neither, fall back to their table of contents with a
//! pointer to the full PDF.

use log::debug;

use crate::{normalize::normalize, section::extract_section};

const PART_SEPARATOR: &str = "\n\n---\n\n";

const BOOK_FOOTER: &str = "*Download the full book PDF to explore these topics in depth.*";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewKind {
    /// Abstract and/or introduction.
    Paper,
    /// Table of contents.
    Book,
}

/// An assembled MDX preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub kind: PreviewKind,
    pub content: String,
}

/// Extracts a section, treating an empty body like a missing one.
fn non_empty_section(text: &str, title: &str) -> Option<String> {
    extract_section(text, title).filter(|body| !body.is_empty())
}

/// Builds the preview for a publication.
///
/// The abstract always comes from `index`. The introduction comes from
/// `introduction` when that document is given (even if it lacks the
/// section), otherwise from `index`. When neither part exists the
/// `Table of Contents` section of `index` is used; `None` means there was
/// nothing to preview.
///
/// ```
/// use folio_text::preview::{build_preview, PreviewKind};
///
/// let index = "# Abstract\n\nHello world.\n\n# Introduction\n\nThis is the intro.\n";
/// let preview = build_preview(index, None).unwrap();
/// assert_eq!(preview.kind, PreviewKind::Paper);
/// assert_eq!(
///     preview.content,
///     "## Abstract\n\nHello world.\n\n---\n\n## Introduction\n\nThis is the intro."
/// );
/// ```
pub fn build_preview(index: &str, introduction: Option<&str>) -> Option<Preview> {
    let abstract_text = non_empty_section(index, "Abstract");
    let intro_text = non_empty_section(introduction.unwrap_or(index), "Introduction");
    debug!(
        has_abstract = abstract_text.is_some(),
        has_introduction = intro_text.is_some();
        "Extracted preview sections"
    );

    if abstract_text.is_none() && intro_text.is_none() {
        let toc = non_empty_section(index, "Table of Contents")?;
        let content = format!(
            "## Table of Contents\n\n{}{PART_SEPARATOR}{BOOK_FOOTER}",
            normalize(&toc)
        );
        return Some(Preview {
            kind: PreviewKind::Book,
            content,
        });
    }

    let parts: Vec<String> = [("Abstract", abstract_text), ("Introduction", intro_text)]
        .into_iter()
        .filter_map(|(heading, body)| body.map(|body| format!("## {heading}\n\n{}", normalize(&body))))
        .collect();

    Some(Preview {
        kind: PreviewKind::Paper,
        content: parts.join(PART_SEPARATOR),
    })
}

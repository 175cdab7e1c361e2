//! Section scanning over line sequences.
//!
//! A section starts at a header whose title matches (case-insensitively) and
//! runs up to, but excluding, the next header of equal or shallower depth, or
//! to the end of the document. Only the first matching header counts.

use log::trace;

use crate::header::{AtxHeaders, HeaderSyntax};

/// Location of a section within a line sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    /// Index of the header line.
    pub header: usize,
    /// Depth of the header.
    pub depth: usize,
    /// Exclusive end line index of the section body.
    pub end: usize,
}

impl SectionSpan {
    /// Line range of the body, excluding the header line.
    pub fn body(&self) -> std::ops::Range<usize> {
        self.header + 1..self.end
    }
}

/// Finds the first section titled `title`.
pub fn find_section(lines: &[&str], title: &str, syntax: &impl HeaderSyntax) -> Option<SectionSpan> {
    let (header, depth) = lines.iter().enumerate().find_map(|(index, line)| {
        syntax
            .parse_header(line)
            .filter(|header| header.has_title(title))
            .map(|header| (index, header.depth()))
    })?;

    let end = next_boundary(lines, header + 1, depth, syntax);
    trace!(title, header, depth, end; "Section located");
    Some(SectionSpan { header, depth, end })
}

/// Returns the index of the first line at or after `from` that closes a
/// section opened at `depth`, or `lines.len()` when there is none.
pub fn next_boundary(
    lines: &[&str],
    from: usize,
    depth: usize,
    syntax: &impl HeaderSyntax,
) -> usize {
    lines
        .iter()
        .enumerate()
        .skip(from)
        .find(|(_, line)| syntax.is_boundary(line, depth))
        .map_or(lines.len(), |(index, _)| index)
}

/// Extracts the trimmed body of the first section titled `title`, using
/// `#`-style headers.
///
/// ```
/// use folio_text::section::extract_section;
///
/// let doc = "# Abstract\n\nHello world.\n\n# Introduction\n\nThis is the intro.\n";
/// assert_eq!(extract_section(doc, "abstract").as_deref(), Some("Hello world."));
/// assert_eq!(extract_section(doc, "Introduction").as_deref(), Some("This is the intro."));
/// assert_eq!(extract_section(doc, "Methods"), None);
/// ```
pub fn extract_section(text: &str, title: &str) -> Option<String> {
    extract_section_with(text, title, &AtxHeaders)
}

/// Like [`extract_section`], with an explicit header dialect.
pub fn extract_section_with(
    text: &str,
    title: &str,
    syntax: &impl HeaderSyntax,
) -> Option<String> {
    let lines: Vec<&str> = text.split('\n').collect();
    let span = find_section(&lines, title, syntax)?;
    Some(lines[span.body()].join("\n").trim().to_string())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const PAPER: &str = "\
---
title: Fire Risk
---

# Abstract {.unnumbered}

We model risk.

## Key findings

- one
- two

# Introduction

Wildfires are costly.

### Scope

Regional.

## Background

History.
";

    #[test]
    fn test_section_stops_at_same_depth() {
        assert_eq!(
            extract_section(PAPER, "Abstract").as_deref(),
            Some("We model risk.\n\n## Key findings\n\n- one\n- two")
        );
    }

    #[test]
    fn test_section_stops_at_shallower_depth() {
        assert_eq!(
            extract_section(PAPER, "Key Findings").as_deref(),
            Some("- one\n- two")
        );
    }

    #[test]
    fn test_section_runs_to_end_of_document() {
        assert_eq!(extract_section(PAPER, "background").as_deref(), Some("History."));
    }

    #[test]
    fn test_deeper_headers_stay_inside() {
        let intro = extract_section(PAPER, "Introduction").unwrap();
        assert!(intro.contains("### Scope"));
        assert!(intro.contains("## Background"));
    }

    #[test]
    fn test_first_occurrence_wins() {
        let doc = "# Notes\nfirst\n# Notes\nsecond";
        assert_eq!(extract_section(doc, "Notes").as_deref(), Some("first"));
    }

    #[test]
    fn test_empty_section() {
        let doc = "# Abstract\n\n# Introduction\nText";
        assert_eq!(extract_section(doc, "Abstract").as_deref(), Some(""));
    }

    #[test]
    fn test_find_section_span() {
        let lines: Vec<&str> = PAPER.split('\n').collect();
        let span = find_section(&lines, "abstract", &AtxHeaders).unwrap();
        assert_eq!(span.header, 4);
        assert_eq!(span.depth, 1);
        assert_eq!(lines[span.end], "# Introduction");
    }

    #[test]
    fn test_next_boundary_defaults_to_len() {
        let lines = ["# A", "## B", "text"];
        assert_eq!(next_boundary(&lines, 1, 1, &AtxHeaders), 3);
        assert_eq!(next_boundary(&lines, 1, 2, &AtxHeaders), 1);
    }

    proptest! {
        #[test]
        fn extraction_is_idempotent(
            before in "[a-z ]{0,20}",
            body in proptest::collection::vec("[a-zA-Z .,]{0,30}", 0..6),
            after in "[a-z ]{0,20}",
        ) {
            let doc = format!("{before}\n# Summary\n{}\n# Next\n{after}", body.join("\n"));
            let first = extract_section(&doc, "Summary").unwrap();
            let again = extract_section(&doc, "Summary").unwrap();
            prop_assert_eq!(&first, &again);

            // Re-wrapping the extracted body yields the same body
            let rewrapped = format!("# Summary\n{first}\n");
            prop_assert_eq!(extract_section(&rewrapped, "Summary").unwrap(), first);
        }
    }
}

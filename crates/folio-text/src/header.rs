//! Header dialects.
//!
//! Section scanning only needs to know, for a single line, whether it is a
//! header and at what depth. That knowledge lives behind [`HeaderSyntax`], so
//! scanning in [`section`](crate::section) works for any markup dialect that
//! can answer the question. [`AtxHeaders`] implements the `#`-prefixed
//! dialect used by Markdown and Quarto sources.

use winnow::{
    Parser as _,
    ascii::space1,
    error::{ContextError, ErrMode},
    token::{rest, take_while},
};

type IResult<O> = std::result::Result<O, ErrMode<ContextError>>;

/// A parsed header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header<'a> {
    depth: usize,
    title: &'a str,
    attributes: Option<&'a str>,
}

impl<'a> Header<'a> {
    pub fn new(depth: usize, title: &'a str, attributes: Option<&'a str>) -> Self {
        Self {
            depth,
            title,
            attributes,
        }
    }

    /// Nesting depth, 1 for top-level headers.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Header text with any trailing attribute block removed.
    pub fn title(&self) -> &'a str {
        self.title
    }

    /// Contents of a trailing `{...}` attribute block, without the braces.
    pub fn attributes(&self) -> Option<&'a str> {
        self.attributes
    }

    /// Case-insensitive comparison of the title against `title`.
    pub fn has_title(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.trim().to_lowercase()
    }
}

/// Recognizes header lines of a markup dialect.
pub trait HeaderSyntax {
    /// Parses `line` as a header, returning `None` for ordinary lines.
    fn parse_header<'a>(&self, line: &'a str) -> Option<Header<'a>>;

    /// Returns `true` if `line` ends a section that was opened at `depth`.
    ///
    /// The default treats every header of equal or shallower depth whose
    /// title starts with a word character as a boundary.
    fn is_boundary(&self, line: &str, depth: usize) -> bool {
        self.parse_header(line).is_some_and(|header| {
            header.depth() <= depth
                && header
                    .title()
                    .chars()
                    .next()
                    .is_some_and(|c| c.is_alphanumeric() || c == '_')
        })
    }
}

/// ATX-style headers: one or more `#`, whitespace, then the title, optionally
/// followed by a Quarto attribute block such as `{.unnumbered}` or `{#sec-intro}`.
///
/// ```
/// use folio_text::header::{AtxHeaders, HeaderSyntax};
///
/// let header = AtxHeaders.parse_header("## Introduction {#sec-intro}").unwrap();
/// assert_eq!(header.depth(), 2);
/// assert_eq!(header.title(), "Introduction");
/// assert_eq!(header.attributes(), Some("#sec-intro"));
///
/// assert!(AtxHeaders.parse_header("#hashtag").is_none());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AtxHeaders;

impl HeaderSyntax for AtxHeaders {
    fn parse_header<'a>(&self, line: &'a str) -> Option<Header<'a>> {
        let mut input = line.trim_end_matches('\r');
        let (depth, text) = atx_header.parse_next(&mut input).ok()?;
        let (title, attributes) = split_attributes(text);
        Some(Header::new(depth, title, attributes))
    }
}

/// `#`+ marks, mandatory whitespace, then the remainder of the line.
fn atx_header<'a>(input: &mut &'a str) -> IResult<(usize, &'a str)> {
    (take_while(1.., '#'), space1, rest)
        .map(|(marks, _, text): (&str, &str, &str)| (marks.len(), text))
        .parse_next(input)
}

/// Splits a trailing `{...}` block (no nested braces) off a header text.
fn split_attributes(text: &str) -> (&str, Option<&str>) {
    let text = text.trim_end();
    let Some(inner) = text.strip_suffix('}') else {
        return (text.trim(), None);
    };
    match inner.rfind('{') {
        Some(open) if !inner[open + 1..].contains('}') => {
            (inner[..open].trim(), Some(&inner[open + 1..]))
        }
        _ => (text.trim(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_depths() {
        assert_eq!(AtxHeaders.parse_header("# Abstract").unwrap().depth(), 1);
        assert_eq!(AtxHeaders.parse_header("### Deep").unwrap().depth(), 3);
    }

    #[test]
    fn test_parse_requires_whitespace_after_marks() {
        assert!(AtxHeaders.parse_header("#Abstract").is_none());
        assert!(AtxHeaders.parse_header("plain text").is_none());
        assert!(AtxHeaders.parse_header("").is_none());
        assert!(AtxHeaders.parse_header(" # indented").is_none());
    }

    #[test]
    fn test_parse_splits_attributes() {
        let header = AtxHeaders.parse_header("# Abstract {.unnumbered}  ").unwrap();
        assert_eq!(header.title(), "Abstract");
        assert_eq!(header.attributes(), Some(".unnumbered"));

        let header = AtxHeaders.parse_header("# Sets {a} and {b}").unwrap();
        assert_eq!(header.title(), "Sets {a} and");
        assert_eq!(header.attributes(), Some("b"));
    }

    #[test]
    fn test_parse_trims_carriage_return() {
        let header = AtxHeaders.parse_header("## Introduction\r").unwrap();
        assert_eq!(header.title(), "Introduction");
    }

    #[test]
    fn test_has_title_ignores_case() {
        let header = AtxHeaders.parse_header("## TABLE of contents").unwrap();
        assert!(header.has_title("Table of Contents"));
        assert!(!header.has_title("Contents"));
    }

    #[test]
    fn test_is_boundary() {
        assert!(AtxHeaders.is_boundary("# Next", 1));
        assert!(AtxHeaders.is_boundary("# Next", 2));
        assert!(!AtxHeaders.is_boundary("## Sub", 1));
        assert!(!AtxHeaders.is_boundary("# {.unlisted}", 1));
        assert!(!AtxHeaders.is_boundary("# - bullet", 1));
        assert!(!AtxHeaders.is_boundary("text", 3));
    }
}

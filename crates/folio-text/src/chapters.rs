//! Splitting a monolithic book into per-chapter documents.
//!
//! Chapters start at lines of the form `# Chapter N: Title` and run to the
//! next chapter header or the end of the book. Everything before the first
//! chapter is front matter (title block, cover image, table of contents).
//!
//! [`plan_split`] computes every output in memory; nothing here touches the
//! filesystem, so callers can write all files or none.

use std::sync::LazyLock;

use log::{debug, info};
use regex::Regex;

use crate::error::{Result, TextError};

/// Heading that separates the front matter prose from the table of contents.
pub const TOC_HEADING: &str = "## Table of Contents";

/// Maximum length, in characters, of the title part of a chapter slug.
pub const SLUG_MAX_CHARS: usize = 50;

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static CHAPTER_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^# Chapter (\d+):\s*(.*)$").expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static COVER_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[Book Cover\]\([^)]+\)\s*\n*").expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SLUG_NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SLUG_SPACE_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-\s]+").expect("valid regex"));

/// A chapter located in a book, as a half-open line range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterSpan {
    /// Chapter number as written in the header.
    pub number: String,
    /// Title text after the colon.
    pub title: String,
    /// Line index of the header.
    pub start: usize,
    /// Exclusive end line index.
    pub end: usize,
}

impl ChapterSpan {
    /// Output file stem, e.g. `1_building_intuition`.
    pub fn slug(&self) -> String {
        slugify(&self.number, &self.title)
    }
}

/// One chapter document to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterFile {
    pub filename: String,
    pub content: String,
}

/// Every output of a book split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookSplit {
    /// Replacement content for the book's index document.
    pub index: String,
    /// Chapter documents in book order.
    pub chapters: Vec<ChapterFile>,
}

impl BookSplit {
    pub fn filenames(&self) -> Vec<&str> {
        self.chapters.iter().map(|c| c.filename.as_str()).collect()
    }
}

fn parse_chapter_header(line: &str) -> Option<(String, String)> {
    let line = line.trim_end_matches('\r');
    CHAPTER_HEADER
        .captures(line)
        .map(|caps| (caps[1].to_string(), caps[2].trim().to_string()))
}

/// Locates all chapters, in document order.
pub fn find_chapters(text: &str) -> Vec<ChapterSpan> {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut chapters: Vec<ChapterSpan> = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        if let Some((number, title)) = parse_chapter_header(line) {
            if let Some(previous) = chapters.last_mut() {
                previous.end = index;
            }
            chapters.push(ChapterSpan {
                number,
                title,
                start: index,
                end: lines.len(),
            });
        }
    }

    chapters
}

fn slugify(number: &str, title: &str) -> String {
    let lowered = title.to_lowercase();
    let cleaned = SLUG_NON_WORD.replace_all(&lowered, "");
    let cleaned = SLUG_SPACE_DASH.replace_all(&cleaned, "_");
    let truncated: String = cleaned.chars().take(SLUG_MAX_CHARS).collect();

    if truncated.is_empty() {
        format!("{number}_chapter")
    } else {
        format!("{number}_{truncated}")
    }
}

/// Derives a file stem from a chapter header line.
///
/// ```
/// use folio_text::chapters::chapter_slug;
///
/// assert_eq!(
///     chapter_slug("# Chapter 3: Graphs, Trees & Paths").as_deref(),
///     Some("3_graphs_trees_paths")
/// );
/// assert_eq!(chapter_slug("# Appendix"), None);
/// ```
pub fn chapter_slug(header_line: &str) -> Option<String> {
    parse_chapter_header(header_line).map(|(number, title)| slugify(&number, &title))
}

/// Text before the first chapter header, trimmed. A book without chapters is
/// all front matter.
pub fn front_matter(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    match lines.iter().position(|line| parse_chapter_header(line).is_some()) {
        Some(first) => lines[..first].join("\n").trim().to_string(),
        None => text.to_string(),
    }
}

/// Removes the `![Book Cover](...)` image reference and the blank lines after it.
pub fn strip_cover_image(text: &str) -> String {
    COVER_IMAGE.replace_all(text, "").into_owned()
}

/// Builds the reduced index: the front matter prose under an unnumbered
/// `Abstract` heading, followed by the table of contents.
fn reduced_index(front: &str) -> String {
    let (prose, toc) = match front.find(TOC_HEADING) {
        Some(at) => (front[..at].trim(), front[at..].trim()),
        None => (front.trim(), ""),
    };

    let mut index = String::from("# Abstract {.unnumbered}\n\n");
    index.push_str(prose);
    if !toc.is_empty() {
        index.push_str("\n\n");
        index.push_str(toc);
    }
    index.push('\n');
    index
}

/// Plans the split of a book into chapters.
///
/// Fails with [`TextError::NoChapters`] when the book has no chapter header.
pub fn plan_split(text: &str) -> Result<BookSplit> {
    let spans = find_chapters(text);
    if spans.is_empty() {
        return Err(TextError::NoChapters);
    }
    info!(chapters = spans.len(); "Found chapters");

    let front = strip_cover_image(&front_matter(text));
    let index = reduced_index(&front);

    let lines: Vec<&str> = text.split('\n').collect();
    let chapters = spans
        .iter()
        .map(|span| {
            let filename = format!("{}.qmd", span.slug());
            debug!(filename, start = span.start, end = span.end; "Planned chapter");
            ChapterFile {
                filename,
                content: lines[span.start..span.end].join("\n").trim().to_string(),
            }
        })
        .collect();

    Ok(BookSplit { index, chapters })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOOK: &str = "\
# Mathematical Awakening

![Book Cover](images/cover.png)

A journey through ideas.

## Table of Contents

1. Foo Bar
2. Baz

# Chapter 1: Foo Bar

Foo body text.

## Section 1.1

More foo.

# Chapter 2: Baz

Baz body text.
";

    #[test]
    fn test_find_chapters() {
        let chapters = find_chapters(BOOK);
        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[0].number, "1");
        assert_eq!(chapters[0].title, "Foo Bar");
        assert_eq!(chapters[0].end, chapters[1].start);
        assert_eq!(chapters[1].end, BOOK.split('\n').count());
    }

    #[test]
    fn test_chapter_header_must_be_top_level() {
        assert!(find_chapters("## Chapter 1: Nested\n#  Chapter 2: Spaced").is_empty());
        assert!(find_chapters("# Chapter one: Words").is_empty());
    }

    #[test]
    fn test_slug_rules() {
        assert_eq!(chapter_slug("# Chapter 1: Foo Bar").unwrap(), "1_foo_bar");
        assert_eq!(
            chapter_slug("# Chapter 12: Self-Attention -- A Primer").unwrap(),
            "12_self_attention_a_primer"
        );
        assert_eq!(chapter_slug("# Chapter 4:\r").unwrap(), "4_chapter");
        assert_eq!(chapter_slug("# Chapter 5: ???").unwrap(), "5_chapter");
    }

    #[test]
    fn test_slug_is_truncated() {
        let long = format!("# Chapter 7: {}", "word ".repeat(30));
        let slug = chapter_slug(&long).unwrap();
        assert_eq!(slug.chars().count(), "7_".len() + SLUG_MAX_CHARS);
    }

    #[test]
    fn test_front_matter_and_cover() {
        let front = strip_cover_image(&front_matter(BOOK));
        assert!(!front.contains("Book Cover"));
        assert!(front.starts_with("# Mathematical Awakening\n\nA journey"));
        assert!(front.ends_with("2. Baz"));
    }

    #[test]
    fn test_front_matter_without_chapters() {
        assert_eq!(front_matter("just text"), "just text");
    }

    #[test]
    fn test_plan_split_two_chapters() {
        let split = plan_split(BOOK).unwrap();
        assert_eq!(split.filenames(), vec!["1_foo_bar.qmd", "2_baz.qmd"]);

        let first = &split.chapters[0].content;
        assert!(first.starts_with("# Chapter 1: Foo Bar"));
        assert!(first.contains("More foo."));
        assert!(!first.contains("Baz body"));

        let second = &split.chapters[1].content;
        assert_eq!(second, "# Chapter 2: Baz\n\nBaz body text.");

        assert!(!split.index.contains("Foo body"));
        assert!(!split.index.contains("Baz body"));
    }

    #[test]
    fn test_reduced_index_layout() {
        let split = plan_split(BOOK).unwrap();
        assert_eq!(
            split.index,
            "# Abstract {.unnumbered}\n\n\
             # Mathematical Awakening\n\nA journey through ideas.\n\n\
             ## Table of Contents\n\n1. Foo Bar\n2. Baz\n"
        );
    }

    #[test]
    fn test_plan_split_without_chapters() {
        assert!(matches!(
            plan_split("# Title\n\nNo chapters here."),
            Err(TextError::NoChapters)
        ));
    }
}

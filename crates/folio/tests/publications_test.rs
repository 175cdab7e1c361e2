use std::{fs, path::Path};

use folio::{
    FolioError,
    config::PublicationsConfig,
    publications::{
        previews::{PreviewSummary, generate_all},
        split::split_book,
    },
};

const BOOK: &str = "\
# Mathematical Awakening

![Book Cover](images/cover.png)

A journey through ideas.

## Table of Contents

1. Foo Bar
2. Baz

# Chapter 1: Foo Bar

Foo body text.

# Chapter 2: Baz

Baz body text.
";

const MANIFEST: &str = "\
project:
  type: book

book:
  title: Mathematical Awakening
  chapters:
    - index.qmd

format:
  html: default
";

fn write(dir: &Path, name: &str, content: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn test_split_book_writes_chapters_index_and_manifest() {
    let root = tempfile::tempdir().unwrap();
    let book = root.path().join("awakening");
    write(&book, "index.qmd", BOOK);
    write(&book, "_quarto.yml", MANIFEST);

    let report = split_book(&book, &PublicationsConfig::default()).unwrap();
    assert_eq!(
        report.chapters,
        vec![book.join("1_foo_bar.qmd"), book.join("2_baz.qmd")]
    );
    assert_eq!(report.manifest, Some(book.join("_quarto.yml")));

    assert_eq!(
        fs::read_to_string(book.join("1_foo_bar.qmd")).unwrap(),
        "# Chapter 1: Foo Bar\n\nFoo body text."
    );
    assert_eq!(
        fs::read_to_string(book.join("2_baz.qmd")).unwrap(),
        "# Chapter 2: Baz\n\nBaz body text."
    );

    let index = fs::read_to_string(book.join("index.qmd")).unwrap();
    assert!(index.starts_with("# Abstract {.unnumbered}\n\n"));
    assert!(index.contains("A journey through ideas."));
    assert!(index.contains("## Table of Contents"));
    assert!(!index.contains("Book Cover"));
    assert!(!index.contains("Chapter 1"));

    let manifest = fs::read_to_string(book.join("_quarto.yml")).unwrap();
    assert!(manifest.contains("    - index.qmd\n    - 1_foo_bar.qmd\n    - 2_baz.qmd\n"));
    assert!(manifest.ends_with("format:\n  html: default\n"));
}

#[test]
fn test_split_without_chapters_writes_nothing() {
    let root = tempfile::tempdir().unwrap();
    let book = root.path().join("essay");
    write(&book, "index.qmd", "# Essay\n\nNo chapters here.\n");
    write(&book, "_quarto.yml", MANIFEST);

    let err = split_book(&book, &PublicationsConfig::default()).unwrap_err();
    assert!(matches!(err, FolioError::NoChapters(ref path) if *path == book));

    assert_eq!(
        fs::read_to_string(book.join("index.qmd")).unwrap(),
        "# Essay\n\nNo chapters here.\n"
    );
    assert_eq!(fs::read_to_string(book.join("_quarto.yml")).unwrap(), MANIFEST);
    assert_eq!(fs::read_dir(&book).unwrap().count(), 2);
}

#[test]
fn test_split_output_feeds_previews() {
    let root = tempfile::tempdir().unwrap();
    let book = root.path().join("awakening");
    write(&book, "index.qmd", BOOK);
    write(&book, "_quarto.yml", MANIFEST);
    split_book(&book, &PublicationsConfig::default()).unwrap();

    let summary = generate_all(root.path(), &PublicationsConfig::default()).unwrap();
    assert_eq!(
        summary,
        PreviewSummary {
            generated: 1,
            skipped: 0
        }
    );

    // The title heading closes the abstract, so the table of contents is used
    let preview = fs::read_to_string(book.join("preview.mdx")).unwrap();
    assert!(preview.starts_with("## Table of Contents\n\n1. Foo Bar\n2. Baz"));
    assert!(preview.ends_with("*Download the full book PDF to explore these topics in depth.*"));
}

#[test]
fn test_paper_preview_with_abstract_and_introduction() {
    let root = tempfile::tempdir().unwrap();
    let paper = root.path().join("paper");
    write(
        &paper,
        "index.qmd",
        "---\ntitle: \"Paper\"\n---\n\n# Abstract {.unnumbered}\n\nWe study *folios*.\n\n# Results\n\nLater.\n",
    );
    write(&paper, "_quarto.yml", MANIFEST);
    write(
        &paper,
        "1_introduction.qmd",
        "# Introduction\n\nFolios are everywhere.\n",
    );

    let mut config = PublicationsConfig::default();
    config.set_root(root.path());
    let summary = generate_all(config.root(), &config).unwrap();
    assert_eq!(summary.generated, 1);

    assert_eq!(
        fs::read_to_string(paper.join("preview.mdx")).unwrap(),
        "## Abstract\n\nWe study *folios*.\n\n---\n\n## Introduction\n\nFolios are everywhere."
    );
}

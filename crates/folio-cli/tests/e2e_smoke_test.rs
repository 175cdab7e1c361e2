use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use folio_cli::{Args, Command, run};

/// Collects all .toml files from a directory
fn collect_toml_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml")
            })
            .collect()
    } else {
        Vec::new()
    };

    files.sort();
    files
}

/// Demo descriptions live at the workspace root, not in the crate
fn demos_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

fn args(command: Command) -> Args {
    Args {
        command,
        config: None,
        log_level: "off".to_string(),
    }
}

fn diagram_args(input: &Path, output: PathBuf) -> Args {
    args(Command::Diagram {
        input: input.to_path_buf(),
        output,
    })
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let valid_demos = collect_toml_files(demos_path());

    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let output_path = temp_dir.path().join(format!(
            "{}.svg",
            demo_path.file_stem().unwrap().to_string_lossy()
        ));

        match run(&diagram_args(demo_path, output_path.clone())) {
            Ok(()) => {
                let svg = fs::read_to_string(&output_path).unwrap();
                assert!(svg.contains("<svg"), "{} wrote no SVG", demo_path.display());
            }
            Err(e) => failed_demos.push((demo_path.clone(), e)),
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo(s) failed unexpectedly", failed_demos.len());
    }

    println!("✅ All {} valid demos passed", valid_demos.len());
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let error_demos = collect_toml_files(demos_path().join("errors"));

    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_path = temp_dir.path().join(format!(
            "error_{}.svg",
            demo_path.file_stem().unwrap().to_string_lossy()
        ));

        if run(&diagram_args(demo_path, output_path.clone())).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
        assert!(!output_path.exists(), "{} left output behind", demo_path.display());
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!("✅ All {} error demos failed as expected", error_demos.len());
}

#[cfg(feature = "raster")]
#[test]
fn e2e_png_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("review_flow.png");

    run(&diagram_args(
        &demos_path().join("review_flow.toml"),
        output_path.clone(),
    ))
    .unwrap();

    let bytes = fs::read(&output_path).unwrap();
    assert_eq!(&bytes[1..4], b"PNG");
}

#[test]
fn e2e_split_then_preview() {
    let root = tempdir().expect("Failed to create temp directory");
    let book = root.path().join("awakening");
    fs::create_dir_all(&book).unwrap();
    fs::write(
        book.join("index.qmd"),
        "Prologue.\n\n## Table of Contents\n\n1. Foo Bar\n2. Baz\n\n\
         # Chapter 1: Foo Bar\n\nFoo.\n\n# Chapter 2: Baz\n\nBaz.\n",
    )
    .unwrap();
    fs::write(
        book.join("_quarto.yml"),
        "project:\n  type: book\nbook:\n  chapters:\n    - index.qmd\n",
    )
    .unwrap();

    run(&args(Command::Split {
        book: PathBuf::from("awakening"),
        root: Some(root.path().to_path_buf()),
    }))
    .unwrap();
    assert!(book.join("1_foo_bar.qmd").is_file());
    assert!(book.join("2_baz.qmd").is_file());

    run(&args(Command::Preview {
        root: Some(root.path().to_path_buf()),
    }))
    .unwrap();
    // The reduced index puts the prologue under an Abstract heading
    let preview = fs::read_to_string(book.join("preview.mdx")).unwrap();
    assert!(preview.starts_with("## Abstract\n\nPrologue."));
    assert!(preview.contains("1. Foo Bar\n2. Baz"));
}

#[test]
fn e2e_split_missing_book_fails() {
    let root = tempdir().expect("Failed to create temp directory");
    let result = run(&args(Command::Split {
        book: PathBuf::from("missing"),
        root: Some(root.path().to_path_buf()),
    }));
    assert!(result.is_err());
}

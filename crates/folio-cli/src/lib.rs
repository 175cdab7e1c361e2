//! CLI logic for the Folio publication tool.
//!
//! Each [`Command`] maps onto one library workflow: preview generation,
//! book splitting or diagram rendering.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Command};

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;

use folio::{
    DiagramRenderer, FolioError,
    config::{AppConfig, PublicationsConfig},
    publications::{previews, split},
};

/// Run the Folio CLI application
///
/// Loads the configuration and dispatches to the selected command.
/// Summaries are printed to stdout; progress goes to the log.
///
/// # Errors
///
/// Returns `FolioError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Missing publications, books or chapter headers
/// - Diagram description, layout and rendering errors
pub fn run(args: &Args) -> Result<(), FolioError> {
    let app_config = config::load_config(args.config.as_ref())?;

    match &args.command {
        Command::Preview { root } => {
            let publications = with_root(app_config.publications(), root.as_deref());
            run_preview(&publications)
        }
        Command::Split { book, root } => {
            let publications = with_root(app_config.publications(), root.as_deref());
            run_split(&publications, book)
        }
        Command::Diagram { input, output } => run_diagram(&app_config, input, output),
    }
}

/// Returns the publications configuration with `root` overriding the
/// configured root.
fn with_root(config: &PublicationsConfig, root: Option<&Path>) -> PublicationsConfig {
    let mut config = config.clone();
    if let Some(root) = root {
        config.set_root(root);
    }
    config
}

fn run_preview(config: &PublicationsConfig) -> Result<(), FolioError> {
    info!(root:? = config.root(); "Generating previews");
    let summary = previews::generate_all(config.root(), config)?;

    println!(
        "Generated {} preview(s), skipped {}",
        summary.generated, summary.skipped
    );
    Ok(())
}

fn run_split(config: &PublicationsConfig, book: &Path) -> Result<(), FolioError> {
    let book_dir: PathBuf = config.root().join(book);
    let report = split::split_book(&book_dir, config)?;

    println!("Split {} into {} chapter(s):", book_dir.display(), report.chapters.len());
    for chapter in &report.chapters {
        println!("  {}", chapter.display());
    }
    if report.manifest.is_none() {
        println!("No {} found, chapter list not updated", config.manifest_file());
    }
    Ok(())
}

fn run_diagram(config: &AppConfig, input: &Path, output: &Path) -> Result<(), FolioError> {
    info!(
        input_path:? = input,
        output_path:? = output;
        "Processing diagram"
    );

    let source = fs::read_to_string(input)?;
    let renderer = DiagramRenderer::new(config.diagram().clone());
    let diagram = renderer.parse(&source)?;
    renderer.render_to_file(&diagram, output)?;

    info!(output_file:? = output; "Diagram exported successfully");
    Ok(())
}

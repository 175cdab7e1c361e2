//! Command-line argument definitions for the Folio CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Global arguments select the configuration file and the
//! logging verbosity; the [`Command`] picks the workflow to run.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command-line arguments for the Folio publication tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate MDX previews for every publication under a root directory
    Preview {
        /// Publications root; defaults to the configured root
        root: Option<PathBuf>,
    },

    /// Split a single-file book into one file per chapter
    Split {
        /// Book directory, relative to the publications root
        book: PathBuf,

        /// Publications root; defaults to the configured root
        #[arg(long)]
        root: Option<PathBuf>,
    },

    /// Render a TOML diagram description to SVG or PNG
    Diagram {
        /// Path to the diagram description
        input: PathBuf,

        /// Output file; a `.png` extension selects PNG output
        #[arg(short, long, default_value = "out.svg")]
        output: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagram_defaults() {
        let args = Args::parse_from(["folio", "diagram", "pipeline.toml"]);
        assert_eq!(args.log_level, "info");
        assert!(args.config.is_none());
        let Command::Diagram { input, output } = args.command else {
            panic!("expected the diagram command");
        };
        assert_eq!(input, PathBuf::from("pipeline.toml"));
        assert_eq!(output, PathBuf::from("out.svg"));
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let args = Args::parse_from([
            "folio",
            "split",
            "awakening",
            "--root",
            "pubs",
            "--log-level",
            "debug",
            "-c",
            "folio.toml",
        ]);
        assert_eq!(args.log_level, "debug");
        assert_eq!(args.config.as_deref(), Some("folio.toml"));
        assert!(matches!(
            args.command,
            Command::Split { ref book, root: Some(ref root) }
                if book == &PathBuf::from("awakening") && root == &PathBuf::from("pubs")
        ));
    }

    #[test]
    fn test_preview_root_is_optional() {
        let args = Args::parse_from(["folio", "preview"]);
        assert!(matches!(args.command, Command::Preview { root: None }));
    }
}

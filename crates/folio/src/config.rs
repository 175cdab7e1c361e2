//! Configuration types for Folio.
//!
//! All types implement [`serde::Deserialize`] and every field has a default,
//! so a partial (or empty) configuration file is valid.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`DiagramConfig`] - Rendering options shared by all diagram kinds.
//! - [`PublicationsConfig`] - Where publications live and which files they use.
//!
//! # Example
//!
//! ```
//! # use folio::config::AppConfig;
//! let config: AppConfig = toml::from_str(
//!     r#"
//!     [diagram]
//!     width = 900
//!
//!     [publications]
//!     root = "public/publications"
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.diagram().width(), 900);
//! assert_eq!(config.diagram().font_family(), "Helvetica");
//! assert_eq!(config.publications().index_file(), "index.qmd");
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use folio_core::color::Color;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Diagram rendering section.
    #[serde(default)]
    diagram: DiagramConfig,

    /// Publication tooling section.
    #[serde(default)]
    publications: PublicationsConfig,
}

impl AppConfig {
    pub fn new(diagram: DiagramConfig, publications: PublicationsConfig) -> Self {
        Self {
            diagram,
            publications,
        }
    }

    pub fn diagram(&self) -> &DiagramConfig {
        &self.diagram
    }

    pub fn publications(&self) -> &PublicationsConfig {
        &self.publications
    }
}

/// Rendering options shared by every diagram kind.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    /// Font family used for every label.
    font_family: String,

    /// Page background color as a color string; white when unset.
    background_color: Option<String>,

    /// Output width in pixels. The height comes from the diagram kind.
    width: u32,

    /// Pixels per SVG unit when writing PNG output.
    png_scale: f32,
}

impl DiagramConfig {
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    pub fn png_scale(&self) -> f32 {
        self.png_scale
    }

    /// Returns the parsed background [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string is not a valid color.
    pub fn background_color(&self) -> Result<Color, String> {
        match &self.background_color {
            Some(color) => Color::resolve(color)
                .map_err(|err| format!("Invalid background color in config: {err}")),
            None => Color::new("white"),
        }
    }
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            font_family: "Helvetica".to_string(),
            background_color: None,
            width: 700,
            png_scale: 1.0,
        }
    }
}

/// Layout of a publications tree.
///
/// Each publication is a directory under [`root`](Self::root) holding a
/// Quarto project (the manifest file) and its sources.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PublicationsConfig {
    root: PathBuf,
    skip: Vec<String>,
    index_file: String,
    introduction_file: String,
    preview_file: String,
    manifest_file: String,
}

impl PublicationsConfig {
    /// Directory containing one subdirectory per publication.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn set_root(&mut self, root: impl Into<PathBuf>) {
        self.root = root.into();
    }

    /// Returns `true` if a directory with this name is never a publication.
    pub fn is_skipped(&self, name: &str) -> bool {
        self.skip.iter().any(|skip| skip == name)
    }

    pub fn index_file(&self) -> &str {
        &self.index_file
    }

    pub fn introduction_file(&self) -> &str {
        &self.introduction_file
    }

    pub fn preview_file(&self) -> &str {
        &self.preview_file
    }

    pub fn manifest_file(&self) -> &str {
        &self.manifest_file
    }
}

impl Default for PublicationsConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("publications"),
            skip: vec![
                "pdf".to_string(),
                "__pycache__".to_string(),
                "node_modules".to_string(),
            ],
            index_file: "index.qmd".to_string(),
            introduction_file: "1_introduction.qmd".to_string(),
            preview_file: "preview.mdx".to_string(),
            manifest_file: "_quarto.yml".to_string(),
        }
    }
}

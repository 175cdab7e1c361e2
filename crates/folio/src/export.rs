//! Export of laid-out scenes.
//!
//! This module provides the [`Exporter`] trait implemented by every output
//! backend. It is the last stage of the diagram pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Diagram description
//!     ↓ layout
//! Scene
//!     ↓ export (this module)
//! Output file
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] - SVG documents through [`svg::SvgBuilder`] and [`svg::Svg`]
//! - [`raster`] - PNG images rasterized from the SVG output (`raster` feature)
//!
//! # Error Handling
//!
//! Export operations return [`Error`], which converts into
//! [`FolioError::Export`](crate::FolioError::Export) at the crate boundary.

#[cfg(feature = "raster")]
pub mod raster;
pub mod svg;

use std::path::Path;

use thiserror::Error;

use crate::layout::Scene;

/// Abstraction over diagram output backends.
pub trait Exporter {
    /// Writes `scene` to `path` in the backend's format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the scene cannot be converted, or
    /// [`Error::Io`] if writing the output fails.
    fn export_scene(&mut self, scene: &Scene, path: &Path) -> Result<(), Error>;
}

/// File format chosen for an output path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
}

impl OutputFormat {
    /// Picks the format from the file extension.
    ///
    /// `.png` (any case) selects PNG when rasterization is compiled in;
    /// everything else is SVG.
    pub fn from_path(path: &Path) -> Self {
        let is_png = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
        if is_png && cfg!(feature = "raster") {
            Self::Png
        } else {
            Self::Svg
        }
    }
}

/// Errors that can occur during diagram export.
#[derive(Debug, Error)]
pub enum Error {
    /// A rendering or conversion failure described by the message.
    #[error("Render error: {0}")]
    Render(String),

    /// An I/O error encountered while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Rasterizing the SVG output failed.
    #[cfg(feature = "raster")]
    #[error("Raster error: {0}")]
    Raster(#[from] raster::RasterError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(OutputFormat::from_path(Path::new("out.svg")), OutputFormat::Svg);
        assert_eq!(OutputFormat::from_path(Path::new("figure")), OutputFormat::Svg);
        assert_eq!(OutputFormat::from_path(Path::new("dir.png/out.svg")), OutputFormat::Svg);

        let expected = if cfg!(feature = "raster") {
            OutputFormat::Png
        } else {
            OutputFormat::Svg
        };
        assert_eq!(OutputFormat::from_path(Path::new("figure.PNG")), expected);
    }
}

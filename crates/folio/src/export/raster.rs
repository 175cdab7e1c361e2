//! PNG output rasterized from rendered SVG.

use std::{fs, path::Path};

use log::{debug, info};
use thiserror::Error;

use super::{Exporter, svg::Svg};
use crate::layout::Scene;

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("PNG scale must be a positive number, got {0}")]
    InvalidScale(f32),
    #[error("failed to parse SVG: {0}")]
    SvgParse(String),
    #[error("failed to allocate a {width}x{height} pixmap")]
    PixmapAlloc { width: u32, height: u32 },
    #[error("failed to encode PNG: {0}")]
    PngEncode(String),
}

/// Rasterizes an SVG document to PNG bytes, `scale` pixels per SVG unit.
///
/// # Errors
///
/// Returns a [`RasterError`] if `scale` is not a positive finite number, the
/// SVG does not parse, the pixmap cannot be allocated or encoding fails.
pub fn svg_to_png(svg: &str, scale: f32) -> Result<Vec<u8>, RasterError> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(RasterError::InvalidScale(scale));
    }

    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree =
        usvg::Tree::from_str(svg, &options).map_err(|err| RasterError::SvgParse(err.to_string()))?;

    let size = tree.size();
    let width = (size.width() * scale).ceil().max(1.0) as u32;
    let height = (size.height() * scale).ceil().max(1.0) as u32;
    debug!(width, height; "Allocating pixmap");

    let mut pixmap =
        tiny_skia::Pixmap::new(width, height).ok_or(RasterError::PixmapAlloc { width, height })?;
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    pixmap
        .encode_png()
        .map_err(|err| RasterError::PngEncode(err.to_string()))
}

/// PNG exporter wrapping the SVG renderer.
#[derive(Debug)]
pub struct Png {
    svg: Svg,
    scale: f32,
}

impl Png {
    pub fn new(svg: Svg, scale: f32) -> Self {
        Self { svg, scale }
    }

    /// Renders a scene to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError`] when rasterization fails.
    pub fn render_scene(&mut self, scene: &Scene) -> Result<Vec<u8>, RasterError> {
        let document = self.svg.render_scene(scene);
        svg_to_png(&document.to_string(), self.scale)
    }
}

impl Exporter for Png {
    fn export_scene(&mut self, scene: &Scene, path: &Path) -> Result<(), super::Error> {
        let bytes = self.render_scene(scene)?;
        info!(path:? = path, bytes = bytes.len(); "Writing PNG file");
        fs::write(path, bytes)?;
        Ok(())
    }
}

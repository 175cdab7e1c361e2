//! Folio - schematic diagrams and Quarto publication tooling.
//!
//! Two families of tools live here:
//!
//! - **Diagrams**: small declarative descriptions ([`model::Diagram`]) laid
//!   out into a [`layout::Scene`] and exported as SVG or PNG through
//!   [`DiagramRenderer`].
//! - **Publications**: preview generation and book splitting over a tree of
//!   Quarto projects ([`publications`]).

pub mod config;
pub mod export;
pub mod layout;
pub mod model;
pub mod publications;

mod error;

pub use folio_core::{color, draw, geometry};
pub use folio_text as text;

pub use error::FolioError;

use std::path::Path;

use log::{debug, info, trace};
use serde::Deserialize;
use toml::Spanned;

use config::DiagramConfig;
use export::{Exporter, OutputFormat, svg::SvgBuilder};
use layout::Scene;
use model::{BoxesDiagram, ClusterDiagram, Diagram, FlowDiagram, NetworkDiagram};

/// The `kind` key of a description, read ahead of the body.
#[derive(Deserialize)]
struct DescriptionKind {
    kind: Spanned<String>,
}

/// Entry point for parsing, laying out and rendering diagrams.
///
/// # Examples
///
/// ```rust
/// use folio::{DiagramRenderer, config::DiagramConfig};
///
/// let source = r#"
///     kind = "flow"
///     title = "Pipeline"
///
///     [[stages]]
///     name = "Input"
///     description = "Raw coordinates"
///     color = "blue"
/// "#;
///
/// let renderer = DiagramRenderer::new(DiagramConfig::default());
/// let diagram = renderer.parse(source).expect("Failed to parse");
/// let svg = renderer.render_svg(&diagram).expect("Failed to render");
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Debug, Default)]
pub struct DiagramRenderer {
    config: DiagramConfig,
}

impl DiagramRenderer {
    pub fn new(config: DiagramConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    /// Parses a TOML diagram description.
    ///
    /// The `kind` key is read first and the document is then deserialized
    /// straight into that kind, so errors point at the offending value.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Description`] carrying the source and the span
    /// of the offending value.
    pub fn parse(&self, source: &str) -> Result<Diagram, FolioError> {
        info!("Parsing diagram description");
        let to_error = |err: toml::de::Error| FolioError::new_description_error(&err, source);

        let tag: DescriptionKind = toml::from_str(source).map_err(to_error)?;
        let diagram = match tag.kind.get_ref().as_str() {
            "boxes" => Diagram::Boxes(toml::from_str::<BoxesDiagram>(source).map_err(to_error)?),
            "flow" => Diagram::Flow(toml::from_str::<FlowDiagram>(source).map_err(to_error)?),
            "network" => {
                Diagram::Network(toml::from_str::<NetworkDiagram>(source).map_err(to_error)?)
            }
            "clusters" => {
                Diagram::Clusters(toml::from_str::<ClusterDiagram>(source).map_err(to_error)?)
            }
            other => {
                return Err(FolioError::Description {
                    message: format!(
                        "unknown diagram kind `{other}`, expected boxes, flow, network or clusters"
                    ),
                    src: source.to_string(),
                    span: Some(tag.kind.span()),
                });
            }
        };

        debug!(kind = diagram.kind_name(); "Description parsed");
        trace!(diagram:?; "Parsed diagram");
        Ok(diagram)
    }

    /// Lays out a diagram without rendering it.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Layout`] when the diagram cannot be laid out.
    pub fn layout(&self, diagram: &Diagram) -> Result<Scene, FolioError> {
        layout::layout(diagram)
    }

    /// Renders a diagram to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError`] for layout or rendering errors.
    pub fn render_svg(&self, diagram: &Diagram) -> Result<String, FolioError> {
        let scene = self.layout(diagram)?;
        let mut svg = SvgBuilder::new().with_config(&self.config).build()?;
        let svg_string = svg.render_scene(&scene).to_string();

        info!(bytes = svg_string.len(); "SVG rendered successfully");
        Ok(svg_string)
    }

    /// Renders a diagram to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError`] for layout, rendering or rasterization errors.
    #[cfg(feature = "raster")]
    pub fn render_png(&self, diagram: &Diagram) -> Result<Vec<u8>, FolioError> {
        let scene = self.layout(diagram)?;
        let svg = SvgBuilder::new().with_config(&self.config).build()?;
        let bytes = export::raster::Png::new(svg, self.config.png_scale())
            .render_scene(&scene)
            .map_err(export::Error::from)?;

        info!(bytes = bytes.len(); "PNG rendered successfully");
        Ok(bytes)
    }

    /// Renders a diagram into `path`, as PNG when the path ends in `.png`
    /// and as SVG otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError`] for layout, rendering or I/O errors.
    pub fn render_to_file(&self, diagram: &Diagram, path: &Path) -> Result<(), FolioError> {
        let scene = self.layout(diagram)?;
        let svg = SvgBuilder::new().with_config(&self.config).build()?;
        let format = OutputFormat::from_path(path);
        debug!(format:? = format; "Output format selected");

        let mut exporter: Box<dyn Exporter> = match format {
            #[cfg(feature = "raster")]
            OutputFormat::Png => Box::new(export::raster::Png::new(svg, self.config.png_scale())),
            _ => Box::new(svg),
        };
        exporter.export_scene(&scene, path)?;
        Ok(())
    }
}

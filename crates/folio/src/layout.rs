//! Layout engines for diagram descriptions.
//!
//! Each diagram kind has its own engine that turns a description from
//! [`crate::model`] into a [`Scene`]: boxes, labels and connectors placed in
//! diagram units. Layout is pure; nothing here touches pixels or files.
//!
//! # Pipeline Position
//!
//! ```text
//! Diagram description
//!     ↓ layout (this module)
//! Scene
//!     ↓ export
//! SVG / PNG
//! ```
//!
//! # Submodules
//!
//! - [`scene`] - The laid-out diagram and its diagram-to-pixel mapping
//! - `boxes`, `flow` - Left-to-right stage diagrams
//! - `network` - Free node placement with border-to-border arrows
//! - `cluster` - Free placement of groups listing their members

mod boxes;
mod cluster;
mod flow;
mod network;
pub mod scene;
mod wrap;

pub use boxes::layout_boxes;
pub use cluster::layout_clusters;
pub use flow::layout_flow;
pub use network::layout_network;
pub use scene::{Frame, Scene, SceneBox, SceneConnector, SceneLabel, Viewport};
pub use wrap::wrap_text;

use log::{debug, info};

use folio_core::color::Color;

use crate::{error::FolioError, model::Diagram};

/// Text color inside colored boxes.
const BOX_TEXT_COLOR: &str = "white";

/// Color of box outlines.
const BOX_BORDER_COLOR: &str = "white";

/// Color of connector glyphs and arrows.
const CONNECTOR_COLOR: &str = "#888";

/// Lays out a diagram of any kind.
///
/// # Errors
///
/// Returns [`FolioError::Layout`] when the diagram has nothing to draw, when
/// a color does not parse, or when options produce an empty visible area.
pub fn layout(diagram: &Diagram) -> Result<Scene, FolioError> {
    info!(kind = diagram.kind_name(); "Laying out diagram");

    let scene = match diagram {
        Diagram::Boxes(boxes) => layout_boxes(boxes),
        Diagram::Flow(flow) => layout_flow(flow),
        Diagram::Network(network) => layout_network(network),
        Diagram::Clusters(clusters) => layout_clusters(clusters),
    }?;

    debug!(
        boxes = scene.boxes().len(),
        connectors = scene.connectors().len(),
        labels = scene.labels().len() + scene.annotations().len();
        "Scene built"
    );
    Ok(scene)
}

/// Resolves a color from a description, naming its owner on failure.
fn resolve_color(spec: &str, owner: &str) -> Result<Color, FolioError> {
    Color::resolve(spec).map_err(|err| FolioError::Layout(format!("{owner}: {err}")))
}

/// Parses one of the fixed colors used by the engines.
fn fixed_color(css: &str) -> Result<Color, FolioError> {
    Color::new(css).map_err(FolioError::Layout)
}

/// Rounds a scaled font size to whole pixels, never below one.
fn scaled_font_size(base: f32, scale: f32) -> u16 {
    (base * scale).round().clamp(1.0, f32::from(u16::MAX)) as u16
}

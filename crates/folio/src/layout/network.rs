//! Network diagrams: freely placed nodes joined by labeled arrows.
//!
//! Arrows run from border to border rather than center to center. Each end
//! is found by walking from a node center toward the other node until the
//! ray leaves the node rectangle, then stepping a little further so the
//! arrow head stays clear of the box. Edge labels sit beside the middle of
//! the arrow, always pushed upward.

use std::collections::HashMap;

use log::debug;

use folio_core::{
    draw::{StrokeDefinition, StrokeStyle},
    geometry::{Bounds, Point, border_exit},
};

use super::{
    BOX_BORDER_COLOR, BOX_TEXT_COLOR, CONNECTOR_COLOR, fixed_color, resolve_color,
    scene::{Frame, LabelBackground, LabelStyle, Scene, SceneBox, SceneConnector, SceneLabel},
};
use crate::{
    error::FolioError,
    model::{Connection, NODE_HALF_HEIGHT, NetworkDiagram, Node},
};

const CONNECTOR_ALPHA: f32 = 0.7;
const CONNECTOR_WIDTH: f32 = 2.5;
const NODE_BORDER_WIDTH: f32 = 2.0;
const NODE_FONT_SIZE: u16 = 11;
const LABEL_COLOR: &str = "#333";
const LABEL_BORDER_COLOR: &str = "#bbb";
const LABEL_PADDING: f32 = 4.0;
const X_MARGIN: f32 = 1.5;
const Y_MARGIN: f32 = 0.8;

fn node_bounds(node: &Node) -> Bounds {
    Bounds::new_from_half_extents(Point::new(node.x, node.y), node.half_width(), NODE_HALF_HEIGHT)
}

/// Start and end of an arrow between two boxes.
///
/// Both ends sit `clearance` outside the box borders along the line joining
/// the centers. Boxes sharing a center yield that center for both ends.
pub(crate) fn edge_endpoints(from: Bounds, to: Bounds, clearance: f32) -> (Point, Point) {
    let (from_center, to_center) = (from.center(), to.center());
    match to_center.sub_point(from_center).normalize() {
        Some(direction) => (
            border_exit(from, direction, clearance),
            border_exit(to, direction.scale(-1.0), clearance),
        ),
        None => (from_center, to_center),
    }
}

/// Anchor of an edge label: the arrow midpoint moved `offset` along the
/// normal of the arrow that points upward.
pub(crate) fn label_position(start: Point, end: Point, offset: f32) -> Point {
    let normal = end
        .sub_point(start)
        .normalize()
        .map_or(Point::new(0.0, 1.0), Point::perpendicular);
    let sign = if normal.y() >= 0.0 { 1.0 } else { -1.0 };
    start.midpoint(end).add_point(normal.scale(offset * sign))
}

fn connector_stroke(connection: &Connection) -> Result<StrokeDefinition, FolioError> {
    let color = fixed_color(CONNECTOR_COLOR)?.with_alpha(CONNECTOR_ALPHA);
    let mut stroke = StrokeDefinition::solid(color, CONNECTOR_WIDTH);
    if let Some(style) = &connection.style {
        let style = style.parse::<StrokeStyle>().map_err(|err| {
            FolioError::Layout(format!(
                "connection `{}` -> `{}`: {err}",
                connection.from, connection.to
            ))
        })?;
        stroke.set_style(style);
    }
    Ok(stroke)
}

/// Lays out a network diagram.
///
/// Connections naming an unknown node are dropped.
///
/// # Errors
///
/// Returns [`FolioError::Layout`] for a network without nodes, an unknown
/// color or line style, or options producing an empty visible area.
pub fn layout_network(diagram: &NetworkDiagram) -> Result<Scene, FolioError> {
    let options = &diagram.options;
    if diagram.nodes.is_empty() {
        return Err(FolioError::Layout("network diagram has no nodes".to_string()));
    }

    let (mut min, mut max) = (
        Point::new(f32::INFINITY, f32::INFINITY),
        Point::new(f32::NEG_INFINITY, f32::NEG_INFINITY),
    );
    for node in &diagram.nodes {
        min = Point::new(min.x().min(node.x), min.y().min(node.y));
        max = Point::new(max.x().max(node.x), max.y().max(node.y));
    }
    let frame = Frame::new(
        (min.x() - X_MARGIN, max.x() + X_MARGIN),
        (min.y() - Y_MARGIN, max.y() + Y_MARGIN),
        options.height,
    )?;
    let mut scene = Scene::new(diagram.title.clone(), frame);

    let nodes: HashMap<&str, &Node> = diagram
        .nodes
        .iter()
        .map(|node| (node.id.as_str(), node))
        .collect();

    let label_style = LabelStyle::new(options.label_font_size, fixed_color(LABEL_COLOR)?)
        .italic()
        .with_background(LabelBackground {
            fill: fixed_color("white")?,
            border: StrokeDefinition::solid(fixed_color(LABEL_BORDER_COLOR)?, 1.0),
            padding: LABEL_PADDING,
        });

    for connection in &diagram.connections {
        let (Some(from), Some(to)) = (
            nodes.get(connection.from.as_str()),
            nodes.get(connection.to.as_str()),
        ) else {
            debug!(from = connection.from, to = connection.to; "Dropping connection to unknown node");
            continue;
        };

        let (start, end) = edge_endpoints(
            node_bounds(from),
            node_bounds(to),
            options.arrow_clearance,
        );
        scene.push_connector(SceneConnector {
            from: start,
            to: end,
            stroke: connector_stroke(connection)?,
        });

        if let Some(label) = connection.label.as_deref().filter(|label| !label.is_empty()) {
            scene.push_annotation(SceneLabel::new(
                label_position(start, end, options.label_offset),
                label,
                label_style.clone(),
            ));
        }
        debug!(from = connection.from, to = connection.to; "Connection placed");
    }

    let border = StrokeDefinition::solid(fixed_color(BOX_BORDER_COLOR)?, NODE_BORDER_WIDTH);
    let name_style = LabelStyle::new(NODE_FONT_SIZE, fixed_color(BOX_TEXT_COLOR)?).bold();
    for node in &diagram.nodes {
        scene.push_box(SceneBox {
            bounds: node_bounds(node),
            fill: resolve_color(&node.color, &format!("node `{}`", node.id))?,
            border: border.clone(),
            opacity: 1.0,
        });
        scene.push_label(SceneLabel::new(
            Point::new(node.x, node.y),
            node.name.clone(),
            name_style.clone(),
        ));
    }

    Ok(scene)
}

//! Straight connector arrows and their SVG marker definitions.

use std::collections::BTreeMap;

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{SvgNode, StrokeDefinition},
    geometry::Point,
};

/// A straight arrow with a head at its destination end.
#[derive(Debug, Clone)]
pub struct Arrow<'a> {
    stroke: &'a StrokeDefinition,
}

impl<'a> Arrow<'a> {
    pub fn new(stroke: &'a StrokeDefinition) -> Self {
        Self { stroke }
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        self.stroke
    }

    fn render_to_svg(&self, source: Point, destination: Point) -> SvgNode {
        let path = svg_element::Path::new()
            .set("d", create_path_data_from_points(source, destination))
            .set("fill", "none");

        let path = crate::apply_stroke!(path, self.stroke)
            .set("marker-end", format!("url(#{})", marker_id(self.stroke.color())));

        Box::new(path)
    }
}

/// Renders arrows and remembers which head markers they reference.
///
/// Markers are keyed by color, so every distinct arrow color yields exactly
/// one `<marker>` in [`ArrowDrawer::draw_marker_definitions`].
#[derive(Debug, Default)]
pub struct ArrowDrawer {
    heads: BTreeMap<String, Color>,
}

impl ArrowDrawer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws an arrow from `source` to `destination` and registers its marker.
    pub fn draw_arrow(&mut self, arrow: &Arrow, source: Point, destination: Point) -> SvgNode {
        let color = arrow.stroke().color();
        self.heads.insert(marker_id(color), color);
        arrow.render_to_svg(source, destination)
    }

    /// Returns `true` if no arrow has been drawn yet.
    pub fn is_empty(&self) -> bool {
        self.heads.is_empty()
    }

    /// Generates a `<defs>` element holding one marker per registered color.
    pub fn draw_marker_definitions(&self) -> SvgNode {
        let mut defs = svg_element::Definitions::new();
        for (id, color) in &self.heads {
            defs = defs.add(create_arrow_head(id, *color));
        }
        Box::new(defs)
    }
}

/// Creates a straight path data string between two points.
pub fn create_path_data_from_points(start: Point, end: Point) -> String {
    format!("M {} {} L {} {}", start.x(), start.y(), end.x(), end.y())
}

fn marker_id(color: Color) -> String {
    format!("arrow-head-{}", color.to_id_safe_string())
}

fn create_arrow_head(id: &str, color: Color) -> svg_element::Marker {
    svg_element::Marker::new()
        .set("id", id)
        .set("viewBox", "0 0 10 10")
        .set("refX", 9)
        .set("refY", 5)
        .set("markerWidth", 5)
        .set("markerHeight", 5)
        .set("orient", "auto")
        .add(
            svg_element::Path::new()
                .set("d", "M 0 0 L 10 5 L 0 10 z")
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha()),
        )
}

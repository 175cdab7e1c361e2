//! Stroke and line-style definitions.
//!
//! - [`StrokeDefinition`]: color, width and line pattern of an outline or connector
//! - [`StrokeStyle`]: the line pattern (solid, dashed, dotted)
//! - [`apply_stroke!`](crate::apply_stroke!): applies all stroke attributes to an SVG element
//!
//! ```
//! use folio_core::color::Color;
//! use folio_core::draw::{StrokeDefinition, StrokeStyle};
//! use svg::node::element as svg_element;
//!
//! let mut stroke = StrokeDefinition::solid(Color::new("#888").unwrap(), 2.5);
//! stroke.set_style(StrokeStyle::Dashed);
//!
//! let line = folio_core::apply_stroke!(svg_element::Line::new(), &stroke);
//! assert!(line.to_string().contains("stroke-dasharray"));
//! ```

use std::str::FromStr;

use crate::color::Color;

/// Line pattern of a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrokeStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl FromStr for StrokeStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solid" => Ok(Self::Solid),
            "dashed" | "dash" => Ok(Self::Dashed),
            "dotted" | "dot" => Ok(Self::Dotted),
            other => Err(format!("unknown stroke style `{other}`")),
        }
    }
}

impl StrokeStyle {
    /// Returns the `stroke-dasharray` value, or `None` for solid lines.
    pub fn to_svg_value(self) -> Option<&'static str> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("6,4"),
            Self::Dotted => Some("2,3"),
        }
    }
}

/// Visual properties of a stroked outline or line.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
}

impl StrokeDefinition {
    /// Creates a solid stroke.
    pub fn solid(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
        }
    }

    /// Creates a dashed stroke.
    pub fn dashed(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Dashed,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    pub fn set_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::solid(Color::default(), 1.0)
    }
}

/// Applies a [`StrokeDefinition`] to an SVG element.
///
/// Sets `stroke`, `stroke-opacity` (from the color alpha), `stroke-width`
/// and, for patterned strokes, `stroke-dasharray`.
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width());

        if let Some(dasharray) = $stroke.style().to_svg_value() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}

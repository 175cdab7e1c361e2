//! Laid-out diagrams.
//!
//! A [`Scene`] holds everything to draw, in diagram units with y growing
//! upward. It carries no pixel information besides the output height; the
//! exporter maps it onto a canvas through a [`Viewport`].

use folio_core::{
    color::Color,
    draw::{FontSlant, FontWeight, StrokeDefinition, TextAnchor},
    geometry::{Bounds, Insets, Point},
};

use crate::error::FolioError;

/// Space around the plot area, in pixels: room for the title on top.
pub const MARGINS: Insets = Insets::new(45.0, 10.0, 10.0, 10.0);

/// Visible data ranges and pixel height of a diagram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    x_range: (f32, f32),
    y_range: (f32, f32),
    height: u32,
}

impl Frame {
    /// Creates a frame, rejecting empty or inverted ranges.
    pub fn new(x_range: (f32, f32), y_range: (f32, f32), height: u32) -> Result<Self, FolioError> {
        let valid = |(min, max): (f32, f32)| min.is_finite() && max.is_finite() && max > min;
        if !valid(x_range) || !valid(y_range) {
            return Err(FolioError::Layout(format!(
                "empty visible range: x {x_range:?}, y {y_range:?}"
            )));
        }
        if height == 0 {
            return Err(FolioError::Layout("output height must be positive".to_string()));
        }
        Ok(Self {
            x_range,
            y_range,
            height,
        })
    }

    pub fn x_range(&self) -> (f32, f32) {
        self.x_range
    }

    pub fn y_range(&self) -> (f32, f32) {
        self.y_range
    }

    /// Output height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Maps this frame onto a canvas `width` pixels wide with the given margins.
    pub fn viewport(&self, width: f32, margins: Insets) -> Viewport {
        let plot_width = (width - margins.horizontal_sum()).max(1.0);
        let plot_height = (self.height as f32 - margins.vertical_sum()).max(1.0);
        Viewport {
            frame: *self,
            width,
            margins,
            scale_x: plot_width / (self.x_range.1 - self.x_range.0),
            scale_y: plot_height / (self.y_range.1 - self.y_range.0),
        }
    }
}

/// Diagram-to-pixel mapping. Pixel y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    frame: Frame,
    width: f32,
    margins: Insets,
    scale_x: f32,
    scale_y: f32,
}

impl Viewport {
    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.frame.height as f32
    }

    pub fn margins(&self) -> Insets {
        self.margins
    }

    /// Converts a point in diagram units to pixels.
    pub fn to_pixels(&self, point: Point) -> Point {
        Point::new(
            self.margins.left() + (point.x() - self.frame.x_range.0) * self.scale_x,
            self.margins.top() + (self.frame.y_range.1 - point.y()) * self.scale_y,
        )
    }

    /// Converts bounds in diagram units to pixel bounds.
    pub fn bounds_to_pixels(&self, bounds: Bounds) -> Bounds {
        let a = self.to_pixels(Point::new(bounds.min_x(), bounds.min_y()));
        let b = self.to_pixels(Point::new(bounds.max_x(), bounds.max_y()));
        Bounds::new_from_ranges(a.x().min(b.x()), a.x().max(b.x()), a.y().min(b.y()), a.y().max(b.y()))
    }
}

/// A filled, outlined rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneBox {
    pub bounds: Bounds,
    pub fill: Color,
    pub border: StrokeDefinition,
    pub opacity: f32,
}

/// Framed background behind a label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelBackground {
    pub fill: Color,
    pub border: StrokeDefinition,
    /// Pixels between text and frame.
    pub padding: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelStyle {
    /// Font size in pixels.
    pub font_size: u16,
    pub weight: FontWeight,
    pub slant: FontSlant,
    pub color: Color,
    pub anchor: TextAnchor,
    pub background: Option<LabelBackground>,
}

impl LabelStyle {
    /// Plain, centered text.
    pub fn new(font_size: u16, color: Color) -> Self {
        Self {
            font_size,
            weight: FontWeight::Normal,
            slant: FontSlant::Normal,
            color,
            anchor: TextAnchor::Middle,
            background: None,
        }
    }

    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    pub fn italic(mut self) -> Self {
        self.slant = FontSlant::Italic;
        self
    }

    /// Anchors the text at its left edge instead of its center.
    pub fn left_aligned(mut self) -> Self {
        self.anchor = TextAnchor::Start;
        self
    }

    pub fn with_background(mut self, background: LabelBackground) -> Self {
        self.background = Some(background);
        self
    }
}

/// Text placed at an anchor point; vertically centered on it.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLabel {
    pub position: Point,
    /// Content; `\n` separates lines.
    pub text: String,
    pub style: LabelStyle,
}

impl SceneLabel {
    pub fn new(position: Point, text: impl Into<String>, style: LabelStyle) -> Self {
        Self {
            position,
            text: text.into(),
            style,
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }
}

/// A straight arrow with its head at `to`.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConnector {
    pub from: Point,
    pub to: Point,
    pub stroke: StrokeDefinition,
}

/// Title text style shared by all diagram kinds.
pub const TITLE_FONT_SIZE: u16 = 13;

/// A fully laid-out diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    title: String,
    frame: Frame,
    boxes: Vec<SceneBox>,
    connectors: Vec<SceneConnector>,
    labels: Vec<SceneLabel>,
    annotations: Vec<SceneLabel>,
}

impl Scene {
    pub fn new(title: impl Into<String>, frame: Frame) -> Self {
        Self {
            title: title.into(),
            frame,
            boxes: Vec::new(),
            connectors: Vec::new(),
            labels: Vec::new(),
            annotations: Vec::new(),
        }
    }

    pub fn push_box(&mut self, scene_box: SceneBox) {
        self.boxes.push(scene_box);
    }

    pub fn push_connector(&mut self, connector: SceneConnector) {
        self.connectors.push(connector);
    }

    /// Adds a label drawn above the boxes.
    pub fn push_label(&mut self, label: SceneLabel) {
        self.labels.push(label);
    }

    /// Adds a label drawn above everything else, such as an edge label.
    pub fn push_annotation(&mut self, label: SceneLabel) {
        self.annotations.push(label);
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    pub fn boxes(&self) -> &[SceneBox] {
        &self.boxes
    }

    pub fn connectors(&self) -> &[SceneConnector] {
        &self.connectors
    }

    pub fn labels(&self) -> &[SceneLabel] {
        &self.labels
    }

    pub fn annotations(&self) -> &[SceneLabel] {
        &self.annotations
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_frame_rejects_empty_ranges() {
        assert!(Frame::new((0.0, 0.0), (0.0, 1.0), 100).is_err());
        assert!(Frame::new((1.0, 0.0), (0.0, 1.0), 100).is_err());
        assert!(Frame::new((0.0, 1.0), (0.0, f32::NAN), 100).is_err());
        assert!(Frame::new((0.0, 1.0), (0.0, 1.0), 0).is_err());
        assert!(Frame::new((0.0, 1.0), (0.0, 1.0), 100).is_ok());
    }

    #[test]
    fn test_viewport_maps_corners() {
        let frame = Frame::new((0.0, 10.0), (0.0, 5.0), 255).unwrap();
        let viewport = frame.viewport(700.0, MARGINS);

        let top_left = viewport.to_pixels(Point::new(0.0, 5.0));
        assert_approx_eq!(f32, top_left.x(), 10.0);
        assert_approx_eq!(f32, top_left.y(), 45.0);

        let bottom_right = viewport.to_pixels(Point::new(10.0, 0.0));
        assert_approx_eq!(f32, bottom_right.x(), 690.0);
        assert_approx_eq!(f32, bottom_right.y(), 245.0);
    }

    #[test]
    fn test_bounds_to_pixels_flips_y() {
        let frame = Frame::new((0.0, 4.0), (0.0, 4.0), 455).unwrap();
        let viewport = frame.viewport(420.0, MARGINS);
        let bounds = viewport.bounds_to_pixels(Bounds::new_from_ranges(1.0, 2.0, 3.0, 4.0));

        assert_approx_eq!(f32, bounds.min_x(), 110.0);
        assert_approx_eq!(f32, bounds.max_x(), 210.0);
        assert_approx_eq!(f32, bounds.min_y(), 45.0);
        assert_approx_eq!(f32, bounds.max_y(), 145.0);
    }
}

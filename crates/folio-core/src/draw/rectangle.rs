use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::{Point, Size},
};

/// Fill and outline of a box.
#[derive(Debug, Clone, PartialEq)]
pub struct RectangleDefinition {
    fill_color: Option<Color>,
    stroke: Option<StrokeDefinition>,
    opacity: f32,
}

impl RectangleDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fill_color(&mut self, color: Option<Color>) {
        self.fill_color = color;
    }

    pub fn set_stroke(&mut self, stroke: Option<StrokeDefinition>) {
        self.stroke = stroke;
    }

    /// Sets the opacity of the whole shape, fill and outline alike.
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    pub fn fill_color(&self) -> Option<Color> {
        self.fill_color
    }

    pub fn stroke(&self) -> Option<&StrokeDefinition> {
        self.stroke.as_ref()
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }
}

impl Default for RectangleDefinition {
    fn default() -> Self {
        Self {
            fill_color: None,
            stroke: None,
            opacity: 1.0,
        }
    }
}

/// A rectangle of a given size, drawn centered on its position.
#[derive(Debug, Clone)]
pub struct Rectangle<'a> {
    definition: &'a RectangleDefinition,
    size: Size,
}

impl<'a> Rectangle<'a> {
    pub fn new(definition: &'a RectangleDefinition, size: Size) -> Self {
        Self { definition, size }
    }
}

impl Drawable for Rectangle<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let min_point = position.to_bounds(self.size).min_point();

        let mut rect = svg_element::Rectangle::new()
            .set("x", min_point.x())
            .set("y", min_point.y())
            .set("width", self.size.width())
            .set("height", self.size.height());

        rect = match self.definition.fill_color() {
            Some(fill) => rect
                .set("fill", fill.to_string())
                .set("fill-opacity", fill.alpha()),
            None => rect.set("fill", "none"),
        };

        if let Some(stroke) = self.definition.stroke() {
            rect = crate::apply_stroke!(rect, stroke);
        }

        if self.definition.opacity() < 1.0 {
            rect = rect.set("opacity", self.definition.opacity());
        }

        output.add_to_layer(RenderLayer::Content, Box::new(rect));
        output
    }

    fn size(&self) -> Size {
        self.size
    }
}

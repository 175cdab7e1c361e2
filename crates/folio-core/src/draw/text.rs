//! Text rendering definitions for diagram labels.
//!
//! - [`TextDefinition`] - Reusable text style (font, weight, slant, anchor,
//!   colors, optional framed background)
//! - [`Text`] - A renderable text element combining content with a [`TextDefinition`]
//!
//! Content may span several lines (`\n` separated). A [`Text`] is positioned
//! by its anchor point: horizontally the point is the center of the block
//! ([`TextAnchor::Middle`]) or its left edge ([`TextAnchor::Start`]),
//! vertically it is always the middle of the block.
//!
//! ```
//! # use folio_core::draw::{Drawable, Text, TextDefinition, FontWeight};
//! # use folio_core::geometry::Point;
//! let mut style = TextDefinition::new();
//! style.set_font_size(13);
//! style.set_weight(FontWeight::Bold);
//!
//! let text = Text::new(&style, "Ingest\nNormalize");
//! assert!(text.size().height() > 0.0);
//! assert!(!text.render_to_layers(Point::new(100.0, 50.0)).is_empty());
//! ```

use std::sync::{Mutex, OnceLock, PoisonError};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Style, Weight};
use log::{debug, info};
use svg::{node::Text as SvgText, node::element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::{Bounds, Insets, Point, Size},
};

/// Line height as a multiple of the font size.
const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// Average glyph advance as a multiple of the font size, used when no font
/// could shape the text.
const FALLBACK_ADVANCE_FACTOR: f32 = 0.55;

static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    fn to_svg_value(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontSlant {
    #[default]
    Normal,
    Italic,
}

impl FontSlant {
    fn to_svg_value(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Italic => "italic",
        }
    }
}

/// Horizontal alignment of a text block relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    #[default]
    Middle,
    Start,
}

impl TextAnchor {
    fn to_svg_value(self) -> &'static str {
        match self {
            Self::Middle => "middle",
            Self::Start => "start",
        }
    }
}

/// Style of a text element.
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    weight: FontWeight,
    slant: FontSlant,
    anchor: TextAnchor,
    color: Option<Color>,
    background_color: Option<Color>,
    border: Option<StrokeDefinition>,
    padding: Insets,
}

impl TextDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Sets the font size in pixels.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    pub fn set_weight(&mut self, weight: FontWeight) {
        self.weight = weight;
    }

    pub fn set_slant(&mut self, slant: FontSlant) {
        self.slant = slant;
    }

    pub fn set_anchor(&mut self, anchor: TextAnchor) {
        self.anchor = anchor;
    }

    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    /// Sets the fill of the box drawn behind the text. Padding only takes
    /// effect when a background is set.
    pub fn set_background_color(&mut self, color: Option<Color>) {
        self.background_color = color;
    }

    /// Sets the outline of the background box.
    pub fn set_border(&mut self, border: Option<StrokeDefinition>) {
        self.border = border;
    }

    pub fn set_padding(&mut self, padding: Insets) {
        self.padding = padding;
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    pub fn slant(&self) -> FontSlant {
        self.slant
    }

    pub fn anchor(&self) -> TextAnchor {
        self.anchor
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn background_color(&self) -> Option<Color> {
        self.background_color
    }

    pub fn border(&self) -> Option<&StrokeDefinition> {
        self.border.as_ref()
    }

    pub fn padding(&self) -> Insets {
        self.padding
    }

    fn line_height(&self) -> f32 {
        f32::from(self.font_size) * LINE_HEIGHT_FACTOR
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "Helvetica".to_string(),
            font_size: 12,
            weight: FontWeight::default(),
            slant: FontSlant::default(),
            anchor: TextAnchor::default(),
            color: None,
            background_color: None,
            border: None,
            padding: Insets::default(),
        }
    }
}

/// A piece of text ready to be drawn with a [`TextDefinition`].
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: &'a str,
}

impl<'a> Text<'a> {
    pub fn new(definition: &'a TextDefinition, content: &'a str) -> Self {
        Self {
            definition,
            content,
        }
    }

    pub fn content(&self) -> &str {
        self.content
    }

    /// Measured size of the glyphs, without padding.
    pub fn content_size(&self) -> Size {
        TEXT_MANAGER
            .get_or_init(TextManager::new)
            .calculate_text_size(self.content, self.definition)
    }

    /// Bounds of the text block (without padding) when drawn at `position`.
    fn content_bounds(&self, position: Point) -> Bounds {
        let size = self.content_size();
        let center = match self.definition.anchor() {
            TextAnchor::Middle => position,
            TextAnchor::Start => Point::new(position.x() + size.width() / 2.0, position.y()),
        };
        Bounds::new_from_center(center, size)
    }
}

impl Drawable for Text<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let definition = self.definition;

        let lines: Vec<&str> = self.content.lines().collect();
        if lines.is_empty() {
            return output;
        }

        let line_height = definition.line_height();
        let total_height = line_height * lines.len() as f32;
        // First tspan advances by one line, so start one line above the block
        let y_offset = -(total_height + line_height) / 2.0;

        let mut rendered_text = svg_element::Text::new("")
            .set("x", position.x())
            .set("y", position.y() + y_offset)
            .set("text-anchor", definition.anchor().to_svg_value())
            .set("dominant-baseline", "central")
            .set("font-family", definition.font_family())
            .set("font-size", definition.font_size());

        if definition.weight() != FontWeight::Normal {
            rendered_text = rendered_text.set("font-weight", definition.weight().to_svg_value());
        }
        if definition.slant() != FontSlant::Normal {
            rendered_text = rendered_text.set("font-style", definition.slant().to_svg_value());
        }
        if let Some(color) = definition.color() {
            rendered_text = rendered_text
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
        }

        for line in lines {
            let tspan = svg_element::TSpan::new("")
                .set("x", position.x())
                .set("dy", line_height)
                .add(SvgText::new(line));
            rendered_text = rendered_text.add(tspan);
        }

        if let Some(bg_color) = definition.background_color() {
            let bg_bounds = self
                .content_bounds(position)
                .add_padding(definition.padding());
            let bg_min_point = bg_bounds.min_point();

            let mut bg = svg_element::Rectangle::new()
                .set("x", bg_min_point.x())
                .set("y", bg_min_point.y())
                .set("width", bg_bounds.width())
                .set("height", bg_bounds.height())
                .set("fill", bg_color.to_string())
                .set("fill-opacity", bg_color.alpha());
            if let Some(border) = definition.border() {
                bg = crate::apply_stroke!(bg, border);
            }

            // Keeps the box directly under its own text, above everything else
            output.add_to_layer(RenderLayer::Annotation, Box::new(bg));
            output.add_to_layer(RenderLayer::Annotation, Box::new(rendered_text));
        } else {
            output.add_to_layer(RenderLayer::Text, Box::new(rendered_text));
        }

        output
    }

    fn size(&self) -> Size {
        let size = self.content_size();
        if self.definition.background_color().is_some() {
            size.add_padding(self.definition.padding())
        } else {
            size
        }
    }
}

struct TextManager {
    font_system: Mutex<FontSystem>,
}

impl TextManager {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }

    fn calculate_text_size(&self, text: &str, text_def: &TextDefinition) -> Size {
        let line_count = text.lines().count();
        if line_count == 0 {
            return Size::default();
        }

        let mut font_system = self
            .font_system
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let font_size = f32::from(text_def.font_size());
        let line_height = text_def.line_height();
        let metrics = Metrics::new(font_size, line_height);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let weight = match text_def.weight() {
            FontWeight::Normal => Weight::NORMAL,
            FontWeight::Bold => Weight::BOLD,
        };
        let style = match text_def.slant() {
            FontSlant::Normal => Style::Normal,
            FontSlant::Italic => Style::Italic,
        };
        let attrs = Attrs::new()
            .family(Family::Name(text_def.font_family()))
            .weight(weight)
            .style(style);

        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let max_width = buffer
            .layout_runs()
            .filter_map(|run| run.glyphs.last().map(|last| last.x + last.w))
            .fold(0.0_f32, f32::max);

        let width = if max_width > 0.0 {
            max_width
        } else {
            let longest = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
            debug!(text, font_size; "No glyph runs, estimating text width");
            longest as f32 * font_size * FALLBACK_ADVANCE_FACTOR
        };

        Size::new(width, line_height * line_count as f32)
    }
}

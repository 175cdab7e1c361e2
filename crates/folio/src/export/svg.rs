//! SVG export.
//!
//! [`SvgBuilder`] resolves the rendering configuration into an [`Svg`]
//! renderer, which maps a [`Scene`] onto a fixed-size canvas and emits the
//! drawing through the layered output of [`folio_core::draw`].

use std::{fs::File, io::Write, path::Path};

use log::{debug, error, info};
use svg::{Document, node::element as svg_element};

use folio_core::{
    color::Color,
    draw::{
        Arrow, ArrowDrawer, Drawable, LayeredOutput, Rectangle, RectangleDefinition, RenderLayer,
        Text, TextDefinition,
    },
    geometry::{Insets, Point},
};

use super::{Error, Exporter};
use crate::{
    config::DiagramConfig,
    layout::{
        Scene, SceneLabel, Viewport,
        scene::{LabelStyle, MARGINS, TITLE_FONT_SIZE},
    },
};

/// Vertical center of the title, in pixels from the top edge.
const TITLE_Y: f32 = 22.5;
const TITLE_COLOR: &str = "#2c3e50";

/// Builder for [`Svg`] renderers.
#[derive(Debug, Default)]
pub struct SvgBuilder {
    config: DiagramConfig,
}

impl SvgBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: &DiagramConfig) -> Self {
        self.config = config.clone();
        self
    }

    /// Builds the renderer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] when a configured color is invalid or the
    /// configured width is zero.
    pub fn build(self) -> Result<Svg, Error> {
        let background = self.config.background_color().map_err(Error::Render)?;
        let title_color = Color::new(TITLE_COLOR).map_err(Error::Render)?;
        if self.config.width() == 0 {
            return Err(Error::Render("diagram width must be positive".to_string()));
        }

        Ok(Svg {
            font_family: self.config.font_family().to_string(),
            background,
            title_color,
            width: self.config.width() as f32,
            arrow_drawer: ArrowDrawer::new(),
        })
    }
}

/// Scene-to-SVG renderer.
#[derive(Debug)]
pub struct Svg {
    font_family: String,
    background: Color,
    title_color: Color,
    width: f32,
    arrow_drawer: ArrowDrawer,
}

impl Svg {
    /// Renders a scene to an SVG document.
    pub fn render_scene(&mut self, scene: &Scene) -> Document {
        let viewport = scene.frame().viewport(self.width, MARGINS);
        let (width, height) = (viewport.width(), viewport.height());
        debug!(width, height; "SVG canvas size");
        self.arrow_drawer = ArrowDrawer::new();

        let mut doc = Document::new()
            .set("viewBox", format!("0 0 {width} {height}"))
            .set("width", width)
            .set("height", height);

        let mut output = LayeredOutput::new();
        output.add_to_layer(
            RenderLayer::Background,
            Box::new(
                svg_element::Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", width)
                    .set("height", height)
                    .set("fill", self.background.to_string())
                    .set("fill-opacity", self.background.alpha()),
            ),
        );

        if !scene.title().is_empty() {
            let mut title = TextDefinition::new();
            title.set_font_family(&self.font_family);
            title.set_font_size(TITLE_FONT_SIZE);
            title.set_color(Some(self.title_color));
            output.merge(
                Text::new(&title, scene.title()).render_to_layers(Point::new(width / 2.0, TITLE_Y)),
            );
        }

        for connector in scene.connectors() {
            let arrow = Arrow::new(&connector.stroke);
            let node = self.arrow_drawer.draw_arrow(
                &arrow,
                viewport.to_pixels(connector.from),
                viewport.to_pixels(connector.to),
            );
            output.add_to_layer(RenderLayer::Connector, node);
        }

        for scene_box in scene.boxes() {
            let bounds = viewport.bounds_to_pixels(scene_box.bounds);
            let mut definition = RectangleDefinition::new();
            definition.set_fill_color(Some(scene_box.fill));
            definition.set_stroke(Some(scene_box.border.clone()));
            definition.set_opacity(scene_box.opacity);
            output.merge(
                Rectangle::new(&definition, bounds.to_size()).render_to_layers(bounds.center()),
            );
        }

        for label in scene.labels().iter().chain(scene.annotations()) {
            output.merge(self.render_label(label, &viewport));
        }

        if !self.arrow_drawer.is_empty() {
            doc = doc.add(self.arrow_drawer.draw_marker_definitions());
        }
        output
            .render()
            .into_iter()
            .fold(doc, |doc, node| doc.add(node))
    }

    fn render_label(&self, label: &SceneLabel, viewport: &Viewport) -> LayeredOutput {
        let definition = self.text_definition(&label.style);
        Text::new(&definition, &label.text).render_to_layers(viewport.to_pixels(label.position))
    }

    fn text_definition(&self, style: &LabelStyle) -> TextDefinition {
        let mut definition = TextDefinition::new();
        definition.set_font_family(&self.font_family);
        definition.set_font_size(style.font_size);
        definition.set_weight(style.weight);
        definition.set_slant(style.slant);
        definition.set_anchor(style.anchor);
        definition.set_color(Some(style.color));
        if let Some(background) = &style.background {
            definition.set_background_color(Some(background.fill));
            definition.set_border(Some(background.border.clone()));
            definition.set_padding(Insets::uniform(background.padding));
        }
        definition
    }

    /// Writes an SVG document to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be created or written.
    pub fn write_document(&self, doc: &Document, path: &Path) -> Result<(), Error> {
        info!(path:? = path; "Creating SVG file");
        let mut file = File::create(path).inspect_err(|err| {
            error!(path:? = path, err:% = err; "Failed to create SVG file");
        })?;

        write!(file, "{doc}").inspect_err(|err| {
            error!(path:? = path, err:% = err; "Failed to write SVG content");
        })?;

        Ok(())
    }
}

impl Exporter for Svg {
    fn export_scene(&mut self, scene: &Scene, path: &Path) -> Result<(), Error> {
        let doc = self.render_scene(scene);
        debug!("SVG document rendered");
        self.write_document(&doc, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{layout_boxes, layout_network};
    use crate::model::{
        BoxesDiagram, BoxesOptions, Connection, NetworkDiagram, NetworkOptions, Node, Stage,
    };

    fn renderer() -> Svg {
        SvgBuilder::new().build().unwrap()
    }

    fn boxes_scene() -> Scene {
        layout_boxes(&BoxesDiagram {
            title: "Pipeline".to_string(),
            stages: vec![
                Stage::new("Ingest", "blue").with_items(["Weather"]),
                Stage::new("Model", "teal"),
            ],
            options: BoxesOptions::default(),
        })
        .unwrap()
    }

    fn node(id: &str, x: f32, y: f32) -> Node {
        Node {
            id: id.to_string(),
            name: id.to_string(),
            x,
            y,
            color: "red".to_string(),
            size: None,
        }
    }

    #[test]
    fn test_document_size_follows_config_and_frame() {
        let mut config = DiagramConfig::default();
        config.set_width(900);
        let mut svg = SvgBuilder::new().with_config(&config).build().unwrap();

        let rendered = svg.render_scene(&boxes_scene()).to_string();
        assert!(rendered.contains("viewBox=\"0 0 900 220\""));
        assert!(rendered.contains("width=\"900\""));
    }

    #[test]
    fn test_boxes_render_in_layers() {
        let rendered = renderer().render_scene(&boxes_scene()).to_string();

        assert!(rendered.contains("data-layer=\"background\""));
        assert!(rendered.contains("data-layer=\"content\""));
        assert!(rendered.contains("data-layer=\"text\""));
        assert!(rendered.contains("Pipeline"));
        assert!(rendered.contains("• Weather"));
        assert!(rendered.contains("→"));
        assert_eq!(rendered.matches("<rect").count(), 3);

        // Background paints before the boxes
        let background = rendered.find("data-layer=\"background\"").unwrap();
        let content = rendered.find("data-layer=\"content\"").unwrap();
        assert!(background < content);
    }

    #[test]
    fn test_network_renders_arrows_and_framed_labels() {
        let scene = layout_network(&NetworkDiagram {
            title: String::new(),
            nodes: vec![node("a", 0.0, 0.0), node("b", 3.0, 1.0)],
            connections: vec![Connection::new("a", "b").with_label("risk scores")],
            options: NetworkOptions::default(),
        })
        .unwrap();
        let rendered = renderer().render_scene(&scene).to_string();

        assert!(rendered.contains("<marker"));
        assert!(rendered.contains("marker-end=\"url(#arrow-head-"));
        assert!(rendered.contains("data-layer=\"connector\""));
        assert!(rendered.contains("data-layer=\"annotation\""));
        assert!(rendered.contains("font-style=\"italic\""));
        assert!(rendered.contains("risk scores"));
    }

    #[test]
    fn test_invalid_width_is_rejected() {
        let mut config = DiagramConfig::default();
        config.set_width(0);
        assert!(matches!(
            SvgBuilder::new().with_config(&config).build(),
            Err(Error::Render(_))
        ));
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("figure.svg");
        renderer().export_scene(&boxes_scene(), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("<svg"));
        assert!(written.trim_end().ends_with("</svg>"));
    }
}

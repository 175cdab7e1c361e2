//! Diagram descriptions.
//!
//! A [`Diagram`] is a plain description of what to draw: stages, nodes,
//! connections or clusters with their colors and positions. Descriptions are
//! built in code or loaded from TOML, where the `kind` key selects the
//! variant:
//!
//! ```
//! # use folio::model::Diagram;
//! let diagram: Diagram = toml::from_str(
//!     r#"
//!     kind = "network"
//!     title = "Hazard agents"
//!
//!     [[nodes]]
//!     id = "fire"
//!     name = "Wildfire Agents"
//!     x = 1.0
//!     y = 3.0
//!     color = "red"
//!
//!     [[nodes]]
//!     id = "coord"
//!     name = "Coordinator"
//!     x = 2.0
//!     y = 1.0
//!     color = "green"
//!
//!     [[connections]]
//!     from = "fire"
//!     to = "coord"
//!     label = "risk scores"
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(diagram.title(), "Hazard agents");
//! ```
//!
//! Colors are house palette names (see [`Palette`](folio_core::color::Palette))
//! or any CSS color string.

use serde::Deserialize;

/// A diagram description of any kind.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Diagram {
    /// Left-to-right stages with bulleted items.
    Boxes(BoxesDiagram),
    /// Left-to-right stages with a single description line.
    Flow(FlowDiagram),
    /// Freely placed nodes joined by labeled arrows.
    Network(NetworkDiagram),
    /// Freely placed groups listing their members.
    Clusters(ClusterDiagram),
}

impl Diagram {
    pub fn title(&self) -> &str {
        match self {
            Self::Boxes(diagram) => &diagram.title,
            Self::Flow(diagram) => &diagram.title,
            Self::Network(diagram) => &diagram.title,
            Self::Clusters(diagram) => &diagram.title,
        }
    }

    /// Lowercase name of the diagram kind, as written in descriptions.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Boxes(_) => "boxes",
            Self::Flow(_) => "flow",
            Self::Network(_) => "network",
            Self::Clusters(_) => "clusters",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BoxesDiagram {
    #[serde(default)]
    pub title: String,
    pub stages: Vec<Stage>,
    #[serde(default)]
    pub options: BoxesOptions,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Stage {
    pub name: String,
    #[serde(default)]
    pub items: Vec<String>,
    pub color: String,
    /// Explicit center x; evenly spaced when absent.
    #[serde(default)]
    pub x: Option<f32>,
}

impl Stage {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
            color: color.into(),
            x: None,
        }
    }

    pub fn with_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_x(mut self, x: f32) -> Self {
        self.x = Some(x);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoxesOptions {
    /// Half the box width; 0.85 for up to four stages, 0.8 beyond.
    pub box_half_width: Option<f32>,
    pub top_y: f32,
    pub bottom_y: f32,
    /// Height of the arrow glyphs between boxes.
    pub arrow_y: f32,
    /// Multiplier for font sizes and pixel height.
    pub scale: f32,
}

impl Default for BoxesOptions {
    fn default() -> Self {
        Self {
            box_half_width: None,
            top_y: 2.0,
            bottom_y: 0.4,
            arrow_y: 1.1,
            scale: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FlowDiagram {
    #[serde(default)]
    pub title: String,
    pub stages: Vec<FlowStage>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FlowStage {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NetworkDiagram {
    #[serde(default)]
    pub title: String,
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub connections: Vec<Connection>,
    #[serde(default)]
    pub options: NetworkOptions,
}

/// Default half-width of a network node.
pub const DEFAULT_NODE_SIZE: f32 = 0.5;

/// Half-height of every network node.
pub const NODE_HALF_HEIGHT: f32 = 0.3;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Node {
    pub id: String,
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub color: String,
    /// Half-width of the node box.
    #[serde(default)]
    pub size: Option<f32>,
}

impl Node {
    pub fn half_width(&self) -> f32 {
        self.size.unwrap_or(DEFAULT_NODE_SIZE)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Connection {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub label: Option<String>,
    /// Line pattern: `solid` (default), `dashed` or `dotted`.
    #[serde(default)]
    pub style: Option<String>,
}

impl Connection {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            label: None,
            style: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NetworkOptions {
    /// Pixel height of the output.
    pub height: u32,
    /// Perpendicular distance of edge labels from the edge midpoint.
    pub label_offset: f32,
    pub label_font_size: u16,
    /// Gap left between a node border and the arrow ends.
    pub arrow_clearance: f32,
}

impl Default for NetworkOptions {
    fn default() -> Self {
        Self {
            height: 350,
            label_offset: 0.26,
            label_font_size: 10,
            arrow_clearance: 0.03,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClusterDiagram {
    #[serde(default)]
    pub title: String,
    pub clusters: Vec<Cluster>,
    #[serde(default)]
    pub options: ClusterOptions,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Cluster {
    pub name: String,
    #[serde(default)]
    pub agents: Vec<String>,
    pub color: String,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClusterOptions {
    /// Pixel height of the output.
    pub height: u32,
}

impl Default for ClusterOptions {
    fn default() -> Self {
        Self { height: 400 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxes_defaults() {
        let diagram: Diagram = toml::from_str(
            r##"
            kind = "boxes"
            title = "Pipeline"

            [[stages]]
            name = "Ingest"
            items = ["Satellite feeds", "Weather"]
            color = "blue"

            [[stages]]
            name = "Model"
            color = "#4db6ac"
            x = 4.0
            "##,
        )
        .unwrap();

        let Diagram::Boxes(boxes) = diagram else {
            panic!("expected a boxes diagram");
        };
        assert_eq!(boxes.stages.len(), 2);
        assert_eq!(boxes.stages[0].x, None);
        assert_eq!(boxes.stages[1].x, Some(4.0));
        assert!(boxes.stages[1].items.is_empty());
        assert_eq!(boxes.options, BoxesOptions::default());
    }

    #[test]
    fn test_options_are_partial() {
        let diagram: Diagram = toml::from_str(
            r#"
            kind = "clusters"
            clusters = []

            [options]
            height = 500
            "#,
        )
        .unwrap();
        assert_eq!(
            diagram,
            Diagram::Clusters(ClusterDiagram {
                title: String::new(),
                clusters: Vec::new(),
                options: ClusterOptions { height: 500 },
            })
        );
        assert_eq!(diagram.kind_name(), "clusters");
    }

    #[test]
    fn test_node_half_width() {
        let mut node = Node {
            id: "a".to_string(),
            name: "A".to_string(),
            x: 0.0,
            y: 0.0,
            color: "red".to_string(),
            size: None,
        };
        assert_eq!(node.half_width(), DEFAULT_NODE_SIZE);
        node.size = Some(0.8);
        assert_eq!(node.half_width(), 0.8);
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        assert!(toml::from_str::<Diagram>("kind = \"pie\"\ntitle = \"x\"").is_err());
    }

    #[test]
    fn test_builders() {
        let stage = Stage::new("Ingest", "blue").with_items(["a", "b"]).with_x(2.5);
        assert_eq!(stage.items, vec!["a", "b"]);
        assert_eq!(stage.x, Some(2.5));

        let connection = Connection::new("a", "b").with_label("data");
        assert_eq!(connection.label.as_deref(), Some("data"));
        assert_eq!(connection.style, None);
    }
}

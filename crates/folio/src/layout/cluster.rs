//! Cluster diagrams: groups of agents, each box listing its members.

use folio_core::{
    draw::StrokeDefinition,
    geometry::{Bounds, Point},
};

use super::{
    BOX_BORDER_COLOR, BOX_TEXT_COLOR, fixed_color, resolve_color,
    scene::{Frame, LabelStyle, Scene, SceneBox, SceneLabel},
};
use crate::{
    error::FolioError,
    model::{Cluster, ClusterDiagram},
};

const HALF_WIDTH: f32 = 1.2;
const BASE_HEIGHT: f32 = 0.4;
const ROW_HEIGHT: f32 = 0.25;
const OPACITY: f32 = 0.9;
const NAME_DROP: f32 = 0.18;
const FIRST_AGENT_DROP: f32 = 0.45;
const AGENT_STEP: f32 = 0.22;
const AGENT_INDENT: f32 = 0.15;
const X_MARGIN: f32 = 2.0;
const Y_MARGIN: f32 = 1.5;

/// Height of a cluster box; grows by one row per agent.
pub(crate) fn cluster_height(cluster: &Cluster) -> f32 {
    BASE_HEIGHT + cluster.agents.len() as f32 * ROW_HEIGHT
}

/// Lays out a cluster diagram.
///
/// # Errors
///
/// Returns [`FolioError::Layout`] for a diagram without clusters, an unknown
/// color or a zero output height.
pub fn layout_clusters(diagram: &ClusterDiagram) -> Result<Scene, FolioError> {
    let Some(first) = diagram.clusters.first() else {
        return Err(FolioError::Layout("cluster diagram has no clusters".to_string()));
    };

    let (x_min, x_max, y_min, y_max) = diagram.clusters.iter().fold(
        (first.x, first.x, first.y, first.y),
        |(x_min, x_max, y_min, y_max), cluster| {
            (
                x_min.min(cluster.x),
                x_max.max(cluster.x),
                y_min.min(cluster.y),
                y_max.max(cluster.y),
            )
        },
    );
    let frame = Frame::new(
        (x_min - X_MARGIN, x_max + X_MARGIN),
        (y_min - Y_MARGIN, y_max + Y_MARGIN),
        diagram.options.height,
    )?;
    let mut scene = Scene::new(diagram.title.clone(), frame);

    let text_color = fixed_color(BOX_TEXT_COLOR)?;
    let border = StrokeDefinition::solid(fixed_color(BOX_BORDER_COLOR)?, 2.0);
    let name_style = LabelStyle::new(12, text_color).bold();
    let agent_style = LabelStyle::new(10, text_color).left_aligned();

    for cluster in &diagram.clusters {
        let half_height = cluster_height(cluster) / 2.0;
        let top = cluster.y + half_height;

        scene.push_box(SceneBox {
            bounds: Bounds::new_from_half_extents(
                Point::new(cluster.x, cluster.y),
                HALF_WIDTH,
                half_height,
            ),
            fill: resolve_color(&cluster.color, &format!("cluster `{}`", cluster.name))?,
            border: border.clone(),
            opacity: OPACITY,
        });
        scene.push_label(SceneLabel::new(
            Point::new(cluster.x, top - NAME_DROP),
            cluster.name.clone(),
            name_style.clone(),
        ));

        let agent_x = cluster.x - HALF_WIDTH + AGENT_INDENT;
        for (i, agent) in cluster.agents.iter().enumerate() {
            scene.push_label(SceneLabel::new(
                Point::new(agent_x, top - FIRST_AGENT_DROP - i as f32 * AGENT_STEP),
                format!("• {agent}"),
                agent_style.clone(),
            ));
        }
    }

    Ok(scene)
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::model::ClusterOptions;

    fn cluster(name: &str, agents: &[&str], x: f32, y: f32) -> Cluster {
        Cluster {
            name: name.to_string(),
            agents: agents.iter().map(|a| a.to_string()).collect(),
            color: "red".to_string(),
            x,
            y,
        }
    }

    #[test]
    fn test_height_grows_with_agents() {
        assert_approx_eq!(f32, cluster_height(&cluster("a", &[], 0.0, 0.0)), 0.4);
        assert_approx_eq!(
            f32,
            cluster_height(&cluster("a", &["Fuel", "Weather", "Terrain", "Suppression"], 0.0, 0.0)),
            1.4
        );
    }

    #[test]
    fn test_cluster_layout() {
        let diagram = ClusterDiagram {
            title: "Agent pools".to_string(),
            clusters: vec![
                cluster("Wildfire (32)", &["Fuel", "Weather", "Terrain", "Suppression"], 1.0, 2.0),
                cluster("Flood (32)", &["Hydrology"], 3.0, 2.0),
            ],
            options: ClusterOptions::default(),
        };
        let scene = layout_clusters(&diagram).unwrap();

        let first = &scene.boxes()[0];
        assert_approx_eq!(f32, first.bounds.min_x(), -0.2, epsilon = 1e-5);
        assert_approx_eq!(f32, first.bounds.max_x(), 2.2, epsilon = 1e-5);
        assert_approx_eq!(f32, first.bounds.max_y(), 2.7, epsilon = 1e-5);
        assert_approx_eq!(f32, first.opacity, 0.9);

        let labels = scene.labels();
        assert_eq!(labels[0].text, "Wildfire (32)");
        assert_approx_eq!(f32, labels[0].position.y(), 2.52, epsilon = 1e-5);

        // Agents run top to bottom at a fixed step
        let agents: Vec<&SceneLabel> = labels[1..5].iter().collect();
        assert_eq!(agents[0].text, "• Fuel");
        assert_approx_eq!(f32, agents[0].position.x(), -0.05, epsilon = 1e-5);
        assert_approx_eq!(f32, agents[0].position.y(), 2.25, epsilon = 1e-5);
        assert_approx_eq!(f32, agents[3].position.y(), 2.25 - 0.66, epsilon = 1e-5);

        let frame = scene.frame();
        assert_eq!(frame.x_range(), (-1.0, 5.0));
        assert_eq!(frame.y_range(), (0.5, 3.5));
        assert_eq!(frame.height(), 400);
    }

    #[test]
    fn test_empty_clusters_is_an_error() {
        let diagram = ClusterDiagram {
            title: String::new(),
            clusters: Vec::new(),
            options: ClusterOptions::default(),
        };
        assert!(layout_clusters(&diagram).is_err());
    }
}

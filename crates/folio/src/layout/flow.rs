//! Simple flows: large stage boxes with a single description line each.

use folio_core::{
    draw::StrokeDefinition,
    geometry::{Bounds, Point},
};

use super::{
    BOX_BORDER_COLOR, BOX_TEXT_COLOR, CONNECTOR_COLOR, fixed_color, resolve_color,
    scene::{Frame, LabelStyle, Scene, SceneBox, SceneLabel},
};
use crate::{error::FolioError, model::FlowDiagram};

const BOX_WIDTH: f32 = 1.8;
const BOX_HEIGHT: f32 = 0.8;
const BOX_BOTTOM: f32 = 0.3;
const SPACING: f32 = 2.8;
const START_X: f32 = 1.5;
const NAME_Y: f32 = 0.85;
const DESCRIPTION_Y: f32 = 0.5;
const GLYPH_Y: f32 = 0.7;
const RIGHT_PADDING: f32 = 0.5;
const TOP: f32 = 1.5;
const HEIGHT: u32 = 180;

/// Lays out a flow diagram.
///
/// # Errors
///
/// Returns [`FolioError::Layout`] for a flow without stages or with an
/// unknown color.
pub fn layout_flow(diagram: &FlowDiagram) -> Result<Scene, FolioError> {
    let positions: Vec<f32> = (0..diagram.stages.len())
        .map(|i| START_X + i as f32 * SPACING)
        .collect();
    let Some(&last_x) = positions.last() else {
        return Err(FolioError::Layout("flow diagram has no stages".to_string()));
    };

    let frame = Frame::new(
        (0.0, last_x + BOX_WIDTH / 2.0 + RIGHT_PADDING),
        (0.0, TOP),
        HEIGHT,
    )?;
    let mut scene = Scene::new(diagram.title.clone(), frame);

    let text_color = fixed_color(BOX_TEXT_COLOR)?;
    let border = StrokeDefinition::solid(fixed_color(BOX_BORDER_COLOR)?, 3.0);
    let name_style = LabelStyle::new(13, text_color).bold();
    let description_style = LabelStyle::new(10, text_color);

    for (stage, &x) in diagram.stages.iter().zip(&positions) {
        scene.push_box(SceneBox {
            bounds: Bounds::new_from_ranges(
                x - BOX_WIDTH / 2.0,
                x + BOX_WIDTH / 2.0,
                BOX_BOTTOM,
                BOX_BOTTOM + BOX_HEIGHT,
            ),
            fill: resolve_color(&stage.color, &format!("stage `{}`", stage.name))?,
            border: border.clone(),
            opacity: 1.0,
        });
        scene.push_label(SceneLabel::new(
            Point::new(x, NAME_Y),
            stage.name.clone(),
            name_style.clone(),
        ));
        scene.push_label(SceneLabel::new(
            Point::new(x, DESCRIPTION_Y),
            stage.description.clone(),
            description_style.clone(),
        ));
    }

    let glyph_style = LabelStyle::new(32, fixed_color(CONNECTOR_COLOR)?);
    for pair in positions.windows(2) {
        scene.push_label(SceneLabel::new(
            Point::new((pair[0] + pair[1]) / 2.0, GLYPH_Y),
            "→",
            glyph_style.clone(),
        ));
    }

    Ok(scene)
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::model::FlowStage;

    fn stage(name: &str, description: &str) -> FlowStage {
        FlowStage {
            name: name.to_string(),
            description: description.to_string(),
            color: "teal".to_string(),
        }
    }

    #[test]
    fn test_flow_layout() {
        let diagram = FlowDiagram {
            title: "Flow".to_string(),
            stages: vec![
                stage("Input", "Raw coordinates"),
                stage("Process", "Feature extraction"),
            ],
        };
        let scene = layout_flow(&diagram).unwrap();

        assert_eq!(scene.boxes().len(), 2);
        let second = scene.boxes()[1].bounds;
        assert_approx_eq!(f32, second.center().x(), 4.3, epsilon = 1e-5);
        assert_approx_eq!(f32, second.min_y(), 0.3, epsilon = 1e-5);
        assert_approx_eq!(f32, second.max_y(), 1.1, epsilon = 1e-5);
        assert_approx_eq!(f32, second.width(), 1.8, epsilon = 1e-5);

        let frame = scene.frame();
        assert_approx_eq!(f32, frame.x_range().1, 4.3 + 0.9 + 0.5, epsilon = 1e-5);
        assert_approx_eq!(f32, frame.y_range().1, 1.5);
        assert_eq!(frame.height(), 180);

        let texts: Vec<&str> = scene.labels().iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["Input", "Raw coordinates", "Process", "Feature extraction", "→"]
        );
        let glyph = &scene.labels()[4];
        assert_approx_eq!(f32, glyph.position.x(), 2.9, epsilon = 1e-5);
        assert_eq!(glyph.style.font_size, 32);
    }

    #[test]
    fn test_empty_flow_is_an_error() {
        let diagram = FlowDiagram {
            title: String::new(),
            stages: Vec::new(),
        };
        assert!(layout_flow(&diagram).is_err());
    }
}

//! Left-to-right stage boxes with bulleted item lists.

use log::{debug, trace};

use folio_core::{
    draw::StrokeDefinition,
    geometry::{Bounds, Point},
};

use super::{
    BOX_BORDER_COLOR, BOX_TEXT_COLOR, CONNECTOR_COLOR, fixed_color, resolve_color,
    scaled_font_size,
    scene::{Frame, LabelStyle, Scene, SceneBox, SceneLabel},
    wrap::wrap_text,
};
use crate::{error::FolioError, model::BoxesDiagram};

/// Diagrams with more stages than this use the compact sizes.
const COMPACT_THRESHOLD: usize = 4;

const AUTO_START_X: f32 = 1.2;
const BORDER_WIDTH: f32 = 3.0;
const ITEM_INDENT: f32 = 0.15;
const TITLE_DROP: f32 = 0.25;
const FIRST_ITEM_DROP: f32 = 0.65;
const RIGHT_PADDING: f32 = 0.9;
const TOP_PADDING: f32 = 0.3;
const BASE_HEIGHT: f32 = 220.0;
const GLYPH_FONT_SIZE: f32 = 28.0;

/// Sizes that depend on how crowded the diagram is.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Density {
    half_width: f32,
    label_font: f32,
    item_font: f32,
    line_step: f32,
    x_step: f32,
    wrap_chars: usize,
}

impl Density {
    fn for_stage_count(count: usize) -> Self {
        let compact = count > COMPACT_THRESHOLD;
        Self {
            half_width: if compact { 0.8 } else { 0.85 },
            label_font: if compact { 13.0 } else { 14.0 },
            item_font: if compact { 11.0 } else { 12.0 },
            line_step: if compact { 0.22 } else { 0.25 },
            x_step: if compact { 2.1 } else { 2.2 },
            wrap_chars: if compact { 16 } else { 20 },
        }
    }
}

/// Center x of every stage: explicit where given, evenly spaced otherwise.
fn stage_positions(diagram: &BoxesDiagram, step: f32) -> Vec<f32> {
    diagram
        .stages
        .iter()
        .enumerate()
        .map(|(i, stage)| stage.x.unwrap_or(AUTO_START_X + i as f32 * step))
        .collect()
}

/// Lays out a boxes diagram.
///
/// # Errors
///
/// Returns [`FolioError::Layout`] for a diagram without stages, a
/// non-positive scale, an unknown color or an empty visible area.
pub fn layout_boxes(diagram: &BoxesDiagram) -> Result<Scene, FolioError> {
    let options = &diagram.options;
    if !(options.scale.is_finite() && options.scale > 0.0) {
        return Err(FolioError::Layout(format!(
            "scale must be positive, got {}",
            options.scale
        )));
    }

    let density = Density::for_stage_count(diagram.stages.len());
    let half_width = options.box_half_width.unwrap_or(density.half_width);
    let positions = stage_positions(diagram, density.x_step);
    trace!(positions:?; "Stage positions");

    let Some(&last_x) = positions.last() else {
        return Err(FolioError::Layout("boxes diagram has no stages".to_string()));
    };
    let frame = Frame::new(
        (0.0, last_x + half_width + RIGHT_PADDING),
        (0.0, options.top_y + TOP_PADDING),
        (BASE_HEIGHT * options.scale).round() as u32,
    )?;
    let mut scene = Scene::new(diagram.title.clone(), frame);

    let text_color = fixed_color(BOX_TEXT_COLOR)?;
    let border = StrokeDefinition::solid(fixed_color(BOX_BORDER_COLOR)?, BORDER_WIDTH);
    let title_style =
        LabelStyle::new(scaled_font_size(density.label_font, options.scale), text_color).bold();
    let item_style =
        LabelStyle::new(scaled_font_size(density.item_font, options.scale), text_color)
            .left_aligned();

    for (stage, &x) in diagram.stages.iter().zip(&positions) {
        let fill = resolve_color(&stage.color, &format!("stage `{}`", stage.name))?;
        scene.push_box(SceneBox {
            bounds: Bounds::new_from_ranges(
                x - half_width,
                x + half_width,
                options.bottom_y,
                options.top_y,
            ),
            fill,
            border: border.clone(),
            opacity: 1.0,
        });

        scene.push_label(SceneLabel::new(
            Point::new(x, options.top_y - TITLE_DROP),
            stage.name.clone(),
            title_style.clone(),
        ));

        let item_x = x - (half_width - ITEM_INDENT);
        for (i, item) in stage.items.iter().enumerate() {
            let wrapped = wrap_text(item, density.wrap_chars).join("\n");
            scene.push_label(SceneLabel::new(
                Point::new(
                    item_x,
                    options.top_y - FIRST_ITEM_DROP - i as f32 * density.line_step,
                ),
                format!("• {wrapped}"),
                item_style.clone(),
            ));
        }
        debug!(stage = stage.name, x, items = stage.items.len(); "Stage placed");
    }

    let glyph_style = LabelStyle::new(
        scaled_font_size(GLYPH_FONT_SIZE, options.scale),
        fixed_color(CONNECTOR_COLOR)?,
    );
    for pair in positions.windows(2) {
        scene.push_label(SceneLabel::new(
            Point::new((pair[0] + pair[1]) / 2.0, options.arrow_y),
            "→",
            glyph_style.clone(),
        ));
    }

    Ok(scene)
}

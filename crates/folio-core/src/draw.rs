//! Drawable primitives for diagram rendering.
//!
//! All drawable components implement the [`Drawable`] trait: they render
//! themselves, at a position in pixel space, into a [`LayeredOutput`] whose
//! [`RenderLayer`]s are ordered during final SVG generation.
mod arrow;
mod layer;
mod rectangle;
mod stroke;
mod text;

pub use arrow::{Arrow, ArrowDrawer, create_path_data_from_points};
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use rectangle::{Rectangle, RectangleDefinition};
pub use stroke::{StrokeDefinition, StrokeStyle};
pub use text::{FontSlant, FontWeight, Text, TextAnchor, TextDefinition};

use crate::geometry::{Point, Size};

/// Trait for drawable diagram elements that can be rendered to SVG layers.
pub trait Drawable: std::fmt::Debug {
    /// Renders this drawable to one or more layers.
    ///
    /// # Arguments
    ///
    /// * `position` - The anchor position of the drawable, in pixels
    fn render_to_layers(&self, position: Point) -> LayeredOutput;

    /// Returns the size of this drawable.
    fn size(&self) -> Size;
}

//! Folio Core Types
//!
//! Foundational types shared by the Folio crates:
//!
//! - **Colors**: CSS colors and the house palette ([`color::Color`], [`color::Palette`])
//! - **Geometry**: points, sizes, bounds and boundary clearance ([`geometry`] module)
//! - **Draw**: layered SVG drawing primitives ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;

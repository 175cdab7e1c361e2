//! Folio text tools
//!
//! Pure string transformations over Quarto (`.qmd`) publication sources:
//!
//! - **Headers**: pluggable header dialects ([`header::HeaderSyntax`])
//! - **Sections**: locating and extracting titled sections ([`section`])
//! - **Normalization**: Quarto to MDX cleanup ([`normalize::Normalizer`])
//! - **Chapters**: planning a book split ([`chapters::plan_split`])
//! - **Manifest**: rewriting the `_quarto.yml` chapter list ([`manifest`])
//! - **Preview**: assembling preview documents ([`preview::build_preview`])
//!
//! Nothing in this crate touches the filesystem.

pub mod chapters;
pub mod error;
pub mod header;
pub mod manifest;
pub mod normalize;
pub mod preview;
pub mod section;

pub use error::TextError;

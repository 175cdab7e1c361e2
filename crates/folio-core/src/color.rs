//! Color handling for Folio diagrams
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate, and the [`Palette`] of house colors used across
//! publication figures.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::DynamicColor;

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a CSS color string such as "#ff0000",
    /// "rgb(255, 0, 0)" or "red".
    ///
    /// # Examples
    ///
    /// ```
    /// use folio_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Resolve a color written in a diagram description.
    ///
    /// House palette names (see [`Palette`]) take precedence over CSS color
    /// names, so `"blue"` resolves to the palette blue rather than CSS blue.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio_core::color::{Color, Palette};
    ///
    /// let teal = Color::resolve("teal").unwrap();
    /// assert_eq!(teal, Color::new(Palette::Teal.hex()).unwrap());
    ///
    /// let custom = Color::resolve("#123456").unwrap();
    /// assert_eq!(custom, Color::new("#123456").unwrap());
    /// ```
    pub fn resolve(spec: &str) -> Result<Self, String> {
        match Palette::from_name(spec) {
            Some(palette) => Self::new(palette.hex()),
            None => Self::new(spec.trim()),
        }
    }

    /// Returns a sanitized, ID-safe string representation of this color.
    ///
    /// The result contains only alphanumeric characters and underscores and
    /// starts with a letter, so it can be embedded in SVG marker ids.
    pub fn to_id_safe_string(self) -> String {
        let color_str = self.to_string();
        let mut sanitized = color_str
            .replace('#', "hex")
            .replace(['(', ')', ',', ' ', ';', '.', '%'], "_");

        if sanitized.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            sanitized = format!("c_{sanitized}");
        }

        sanitized
    }

    /// Creates a new color with the specified alpha (transparency) value.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Color {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Returns the alpha (transparency) component of this color, between
    /// 0.0 (fully transparent) and 1.0 (fully opaque).
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

/// House colors for publication diagrams.
///
/// | Name | Hex | Typical use |
/// |------|-----|-------------|
/// | `blue` | `#64b5f6` | spatial, orchestration |
/// | `teal` | `#4db6ac` | data flow, processing |
/// | `orange` | `#ffb74d` | transformation, risk |
/// | `purple` | `#ba68c8` | analytics, ML |
/// | `green` | `#66bb6a` | success, quality |
/// | `red` | `#ef5350` | alerts |
/// | `gray` | `#78909c` | infrastructure |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Palette {
    Blue,
    Teal,
    Orange,
    Purple,
    Green,
    Red,
    Gray,
}

impl Palette {
    /// All palette entries in declaration order.
    pub const ALL: [Palette; 7] = [
        Self::Blue,
        Self::Teal,
        Self::Orange,
        Self::Purple,
        Self::Green,
        Self::Red,
        Self::Gray,
    ];

    /// Returns the lowercase palette name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Teal => "teal",
            Self::Orange => "orange",
            Self::Purple => "purple",
            Self::Green => "green",
            Self::Red => "red",
            Self::Gray => "gray",
        }
    }

    /// Returns the hex code of the palette entry.
    pub fn hex(self) -> &'static str {
        match self {
            Self::Blue => "#64b5f6",
            Self::Teal => "#4db6ac",
            Self::Orange => "#ffb74d",
            Self::Purple => "#ba68c8",
            Self::Green => "#66bb6a",
            Self::Red => "#ef5350",
            Self::Gray => "#78909c",
        }
    }

    /// Looks up a palette entry by name, ignoring case and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|palette| palette.name().eq_ignore_ascii_case(name))
    }
}

//! Geometric primitives for diagram layout and positioning.
//!
//! This module provides the small set of geometric types used by the layout
//! engines and the SVG exporter.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate, also used as a direction vector
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - An axis-aligned rectangle defined by minimum and maximum coordinates
//! - [`Insets`] - Padding/margin values for four sides
//! - [`exit_distance`] - Distance from a rectangle center to its border along a direction
//!
//! # Coordinate Systems
//!
//! The types themselves are orientation-neutral. Layouts are computed in
//! *diagram units* where Y grows upward:
//!
//! ```text
//!    +Y
//!     ▲
//!     │
//!     │
//!   (0,0) ────────► +X
//! ```
//!
//! The exporter maps diagram units onto SVG pixels, where Y grows downward.

/// Direction components smaller than this are treated as zero when computing
/// parametric distances.
const DIRECTION_EPSILON: f32 = 1e-9;

/// A 2D point representing a position, or a direction vector.
///
/// # Examples
///
/// ```
/// # use folio_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// // Vector addition
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
///
/// // Midpoint calculation
/// let mid = p1.midpoint(p2);
/// assert_eq!(mid.x(), 7.5);
/// assert_eq!(mid.y(), 12.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Calculates the hypotenuse (Euclidean distance from origin)
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Multiplies both coordinates by the given factor.
    ///
    /// # Examples
    ///
    /// ```
    /// # use folio_core::geometry::Point;
    /// let point = Point::new(10.0, 20.0);
    ///
    /// let doubled = point.scale(2.0);
    /// assert_eq!(doubled.x(), 20.0);
    /// assert_eq!(doubled.y(), 40.0);
    /// ```
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Returns the unit vector pointing the same way, or `None` for a zero vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use folio_core::geometry::Point;
    /// let unit = Point::new(3.0, 4.0).normalize().unwrap();
    /// assert_eq!(unit.x(), 0.6);
    /// assert_eq!(unit.y(), 0.8);
    ///
    /// assert!(Point::default().normalize().is_none());
    /// ```
    pub fn normalize(self) -> Option<Self> {
        let length = self.hypot();
        if length > 0.0 {
            Some(Self {
                x: self.x / length,
                y: self.y / length,
            })
        } else {
            None
        }
    }

    /// Returns this vector rotated a quarter turn counter-clockwise: `(-y, x)`.
    pub fn perpendicular(self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
        }
    }

    /// Converts a point and size into a bounds rectangle
    ///
    /// The point is treated as the center of the bounds, and the size
    /// is distributed equally in all directions around that center.
    pub fn to_bounds(self, size: Size) -> Bounds {
        Bounds::new_from_center(self, size)
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns a new Size with padding added to both width and height
    ///
    /// The padding is applied according to the specified Insets values
    pub fn add_padding(self, insets: Insets) -> Self {
        Self {
            width: self.width + insets.horizontal_sum(),
            height: self.height + insets.vertical_sum(),
        }
    }

    /// Multiplies both dimension by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }

    /// Returns true if both width and height are zero
    pub fn is_zero(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a center point and a size
    pub fn new_from_center(center: Point, size: Size) -> Self {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;
        Self {
            min_x: center.x - half_width,
            min_y: center.y - half_height,
            max_x: center.x + half_width,
            max_y: center.y + half_height,
        }
    }

    /// Creates a new bounds from a center point and half extents on each axis.
    pub fn new_from_half_extents(center: Point, half_width: f32, half_height: f32) -> Self {
        Self {
            min_x: center.x - half_width,
            min_y: center.y - half_height,
            max_x: center.x + half_width,
            max_y: center.y + half_height,
        }
    }

    /// Creates a new bounds from explicit minimum and maximum coordinates.
    pub fn new_from_ranges(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns half the width and half the height as a [`Size`].
    pub fn half_extents(self) -> Size {
        Size::new(self.width() / 2.0, self.height() / 2.0)
    }

    /// Returns the corner with the smallest coordinates as a Point
    pub fn min_point(self) -> Point {
        Point {
            x: self.min_x,
            y: self.min_y,
        }
    }

    /// Converts bounds to a Size object
    pub fn to_size(self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Merges two bounds to create a larger bounds that contains both.
    ///
    /// # Examples
    ///
    /// ```
    /// # use folio_core::geometry::{Bounds, Point, Size};
    /// let a = Bounds::new_from_center(Point::new(0.0, 0.0), Size::new(2.0, 2.0));
    /// let b = Bounds::new_from_center(Point::new(4.0, 1.0), Size::new(2.0, 2.0));
    ///
    /// let combined = a.merge(&b);
    /// assert_eq!(combined.min_x(), -1.0);
    /// assert_eq!(combined.max_x(), 5.0);
    /// assert_eq!(combined.height(), 3.0);
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Expands the bounds by adding insets.
    ///
    /// This decreases the minimum coordinates by left/top insets and increases
    /// the maximum coordinates by right/bottom insets, effectively growing the bounds.
    pub fn add_padding(&self, insets: Insets) -> Self {
        Self {
            min_x: self.min_x - insets.left(),
            min_y: self.min_y - insets.top(),
            max_x: self.max_x + insets.right(),
            max_y: self.max_y + insets.bottom(),
        }
    }

    /// Returns true if the point lies on the border of these bounds, within `tolerance`.
    pub fn is_on_border(self, point: Point, tolerance: f32) -> bool {
        let within_x = point.x >= self.min_x - tolerance && point.x <= self.max_x + tolerance;
        let within_y = point.y >= self.min_y - tolerance && point.y <= self.max_y + tolerance;
        let on_vertical = (point.x - self.min_x).abs() <= tolerance
            || (point.x - self.max_x).abs() <= tolerance;
        let on_horizontal = (point.y - self.min_y).abs() <= tolerance
            || (point.y - self.max_y).abs() <= tolerance;

        within_x && within_y && (on_vertical || on_horizontal)
    }
}

/// Represents spacing around an element (padding, margin, etc.)
/// with potentially different values for each side
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Creates new insets with specified values for each side
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates uniform insets with the same value for all sides
    pub fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Returns the top inset value
    pub fn top(self) -> f32 {
        self.top
    }

    /// Returns the right inset value
    pub fn right(self) -> f32 {
        self.right
    }

    /// Returns the bottom inset value
    pub fn bottom(self) -> f32 {
        self.bottom
    }

    /// Returns the left inset value
    pub fn left(self) -> f32 {
        self.left
    }

    /// Returns the sum of left and right insets
    pub fn horizontal_sum(self) -> f32 {
        self.left + self.right
    }

    /// Returns the sum of top and bottom insets
    pub fn vertical_sum(self) -> f32 {
        self.top + self.bottom
    }
}

/// Distance travelled from the center of a rectangle along a unit `direction`
/// before crossing its border.
///
/// The rectangle is described by its half extents. The result is the minimum
/// of the horizontal and vertical parametric distances; an axis whose
/// direction component is (nearly) zero never limits the distance.
///
/// # Examples
///
/// ```
/// # use folio_core::geometry::{exit_distance, Point, Size};
/// let half = Size::new(0.5, 0.3);
///
/// // Straight right: limited by the vertical edge.
/// assert_eq!(exit_distance(half, Point::new(1.0, 0.0)), 0.5);
///
/// // Straight up: limited by the horizontal edge.
/// assert_eq!(exit_distance(half, Point::new(0.0, 1.0)), 0.3);
/// ```
pub fn exit_distance(half_extents: Size, direction: Point) -> f32 {
    let along_x = if direction.x.abs() > DIRECTION_EPSILON {
        half_extents.width / direction.x.abs()
    } else {
        f32::INFINITY
    };
    let along_y = if direction.y.abs() > DIRECTION_EPSILON {
        half_extents.height / direction.y.abs()
    } else {
        f32::INFINITY
    };

    along_x.min(along_y)
}

/// Point where a ray leaving the center of `bounds` along a unit `direction`
/// crosses the border, pushed a further `clearance` along the ray.
pub fn border_exit(bounds: Bounds, direction: Point, clearance: f32) -> Point {
    let distance = exit_distance(bounds.half_extents(), direction) + clearance;
    bounds.center().add_point(direction.scale(distance))
}

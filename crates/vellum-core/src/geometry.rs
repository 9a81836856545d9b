//! Device-independent geometric value types.
//!
//! All coordinates use `f32` in device-independent units with the origin at
//! the top-left corner and the y-axis pointing down. Output backends that
//! use a different convention (e.g. PostScript) perform their own flip.

use crate::error::GeometryError;

/// A point in 2D space.
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

    /// Checks if both x and y coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Adds another point to this point, returning a new point
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

    /// Returns a new Size with the maximum width and height between this size and another
    pub fn max(self, other: Size) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Returns a new Size with the minimum width and height between this size and another
    pub fn min(self, other: Size) -> Self {
        Self {
            width: self.width.min(other.width),
            height: self.height.min(other.height),
        }
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

    /// Returns true if both width and height are zero
    pub fn is_zero(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

/// A rectangle given by its top-left origin and its extent.
///
/// Invariant: `width >= 0` and `height >= 0`. The fallible constructors
/// enforce this; all derived rectangles (translation, shrinking) preserve it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl Rect {
    /// Creates a new rectangle, rejecting negative dimensions.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Result<Self, GeometryError> {
        if width < 0.0 || height < 0.0 {
            return Err(GeometryError::NegativeDimensions { width, height });
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// Creates a rectangle from a top-left origin and a size.
    pub fn from_origin_size(origin: Point, size: Size) -> Result<Self, GeometryError> {
        Self::new(origin.x(), origin.y(), size.width(), size.height())
    }

    /// Returns the x-coordinate of the top-left corner
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the top-left corner
    pub fn y(self) -> f32 {
        self.y
    }

    /// Returns the width of the rectangle
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height of the rectangle
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the x-coordinate of the right edge
    pub fn right(self) -> f32 {
        self.x + self.width
    }

    /// Returns the y-coordinate of the bottom edge
    pub fn bottom(self) -> f32 {
        self.y + self.height
    }

    /// Returns the top-left corner as a Point
    pub fn origin(self) -> Point {
        Point {
            x: self.x,
            y: self.y,
        }
    }

    /// Returns the center of the rectangle as a Point
    pub fn center(self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    /// Converts the rectangle's extent to a Size
    pub fn size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Moves the rectangle by the specified offset, keeping its extent
    pub fn translate(self, offset: Point) -> Self {
        Self {
            x: self.x + offset.x(),
            y: self.y + offset.y(),
            ..self
        }
    }

    /// Shrinks the rectangle by the given insets to form a content area.
    ///
    /// Fails when the insets require more room than the rectangle provides.
    pub fn shrink(self, insets: Insets) -> Result<Self, GeometryError> {
        let min_width = insets.horizontal_sum();
        let min_height = insets.vertical_sum();
        if self.width < min_width || self.height < min_height {
            return Err(GeometryError::InsufficientBounds {
                width: self.width,
                height: self.height,
                min_width,
                min_height,
            });
        }
        Ok(Self {
            x: self.x + insets.left(),
            y: self.y + insets.top(),
            width: self.width - min_width,
            height: self.height - min_height,
        })
    }

    /// Grows the rectangle outward by the given insets.
    pub fn grow(self, insets: Insets) -> Self {
        Self {
            x: self.x - insets.left(),
            y: self.y - insets.top(),
            width: self.width + insets.horizontal_sum(),
            height: self.height + insets.vertical_sum(),
        }
    }

    /// Returns true if `other` lies entirely within this rectangle
    pub fn contains(self, other: Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Returns the smallest rectangle containing both rectangles
    pub fn union(self, other: Rect) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Self {
            x,
            y,
            width: self.right().max(other.right()) - x,
            height: self.bottom().max(other.bottom()) - y,
        }
    }

    /// Returns the intersection of both rectangles, empty at the overlap
    /// origin when they do not overlap.
    pub fn intersect(self, other: Rect) -> Self {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        Self {
            x,
            y,
            width: (self.right().min(other.right()) - x).max(0.0),
            height: (self.bottom().min(other.bottom()) - y).max(0.0),
        }
    }
}

/// Represents spacing around an element (padding, margin, etc.)
/// with potentially different values for each side.
///
/// Immutable once constructed; all sides are non-negative.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Creates new insets with specified values for each side, rejecting
    /// negative sides.
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Result<Self, GeometryError> {
        if top < 0.0 || right < 0.0 || bottom < 0.0 || left < 0.0 {
            return Err(GeometryError::NegativeInsets {
                top,
                right,
                bottom,
                left,
            });
        }
        Ok(Self {
            top,
            right,
            bottom,
            left,
        })
    }

    /// Creates uniform insets with the same value for all sides
    pub fn uniform(value: f32) -> Result<Self, GeometryError> {
        Self::new(value, value, value, value)
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

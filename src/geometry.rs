//! Pixel-space geometry primitives.
//!
//! # Coordinate System
//!
//! Graticule uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward
//!
//! Diagram documents that place row 0 at the bottom opt into the inverted
//! Y scaler instead of changing this convention.

/// A 2D point representing a position in pixel space.
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
}

/// Represents the dimensions of an area with width and height
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

    /// Returns a new Size with the insets subtracted from both dimensions
    ///
    /// This is the margin/padding reduction used when deriving a drawing
    /// area from a containing box.
    pub fn shrink_by(self, insets: Insets) -> Self {
        Self {
            width: self.width - insets.horizontal_sum(),
            height: self.height - insets.vertical_sum(),
        }
    }

    /// Width divided by height
    ///
    /// Callers must not pass a zero-height size.
    pub fn ratio(self) -> f32 {
        self.width / self.height
    }
}

/// Represents spacing around an area (margin, padding) with potentially
/// different values for each side
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Creates new insets with specified values for each side
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
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

/// The pixel box of the host container at render time.
///
/// Read once per render and injected by the caller; graticule never queries
/// the host environment itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the container width in pixels
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the container height in pixels
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the container box as a size
    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_new() {
        let point = Point::new(3.5, 4.2);
        assert_eq!(point.x(), 3.5);
        assert_eq!(point.y(), 4.2);
    }

    #[test]
    fn test_point_is_zero() {
        assert!(Point::default().is_zero());
        assert!(!Point::new(1.0, 0.0).is_zero());
        assert!(!Point::new(0.0, 1.0).is_zero());
    }

    #[test]
    fn test_point_add() {
        let sum = Point::new(1.0, 2.0).add_point(Point::new(3.0, 4.0));
        assert_eq!(sum.x(), 4.0);
        assert_eq!(sum.y(), 6.0);
    }

    #[test]
    fn test_size_shrink_by() {
        let size = Size::new(100.0, 80.0).shrink_by(Insets::new(5.0, 10.0, 15.0, 20.0));
        assert_eq!(size.width(), 70.0);
        assert_eq!(size.height(), 60.0);
    }

    #[test]
    fn test_size_ratio() {
        assert_eq!(Size::new(800.0, 600.0).ratio(), 800.0 / 600.0);
    }

    #[test]
    fn test_insets_uniform() {
        let insets = Insets::uniform(7.0);
        assert_eq!(insets.top(), 7.0);
        assert_eq!(insets.right(), 7.0);
        assert_eq!(insets.bottom(), 7.0);
        assert_eq!(insets.left(), 7.0);
        assert_eq!(insets.horizontal_sum(), 14.0);
        assert_eq!(insets.vertical_sum(), 14.0);
    }

    #[test]
    fn test_viewport_size() {
        let viewport = Viewport::new(640.0, 480.0);
        assert_eq!(viewport.size(), Size::new(640.0, 480.0));
    }
}

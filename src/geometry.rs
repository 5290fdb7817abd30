//! Basic geometric value types.
//!
//! Coordinates follow the SVG convention: x grows to the right, y grows
//! downward. A layer's origin is the top-left corner of its node grid.

/// A point in diagram coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point.
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point.
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

    /// Subtracts another point from this point, returning a new point.
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the hypotenuse (Euclidean distance from origin).
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Multiplies both coordinates by the given factor.
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Returns a point offset by `dx` along the x-axis.
    pub fn offset_x(self, dx: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y,
        }
    }

    /// Returns a point offset by `dy` along the y-axis.
    pub fn offset_y(self, dy: f32) -> Self {
        Self {
            x: self.x,
            y: self.y + dy,
        }
    }
}

/// Represents the dimensions of an element with width and height.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size.
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size.
    pub fn height(self) -> f32 {
        self.height
    }
}

/// A rectangular bounding box with minimum and maximum coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates bounds from a top-left corner point and a size.
    pub fn from_top_left(min_point: Point, size: Size) -> Self {
        Self {
            min_x: min_point.x(),
            min_y: min_point.y(),
            max_x: min_point.x() + size.width(),
            max_y: min_point.y() + size.height(),
        }
    }

    /// Creates the smallest bounds containing both points.
    pub fn from_points(a: Point, b: Point) -> Self {
        Self {
            min_x: a.x().min(b.x()),
            min_y: a.y().min(b.y()),
            max_x: a.x().max(b.x()),
            max_y: a.y().max(b.y()),
        }
    }

    /// Returns the minimum x-coordinate of the bounds.
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds.
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds.
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds.
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds.
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds.
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the top-left corner as a Point.
    pub fn min_point(self) -> Point {
        Point {
            x: self.min_x,
            y: self.min_y,
        }
    }

    /// Returns the center of the bounds.
    pub fn center(self) -> Point {
        Point {
            x: (self.min_x + self.max_x) / 2.0,
            y: (self.min_y + self.max_y) / 2.0,
        }
    }

    /// Converts bounds to a Size object.
    pub fn to_size(self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Merges two bounds to create a larger bounds that contains both.
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Grows the bounds outward by a uniform amount on every side.
    ///
    /// A negative amount shrinks the bounds instead.
    pub fn expand(&self, amount: f32) -> Self {
        Self {
            min_x: self.min_x - amount,
            min_y: self.min_y - amount,
            max_x: self.max_x + amount,
            max_y: self.max_y + amount,
        }
    }

    /// Returns true if the point lies inside the bounds (edges inclusive).
    pub fn contains(&self, point: Point) -> bool {
        point.x() >= self.min_x
            && point.x() <= self.max_x
            && point.y() >= self.min_y
            && point.y() <= self.max_y
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
    fn test_point_add_sub() {
        let p1 = Point::new(1.0, 2.0);
        let p2 = Point::new(3.0, 4.0);
        let sum = p1.add_point(p2);
        assert_eq!(sum.x(), 4.0);
        assert_eq!(sum.y(), 6.0);

        let diff = sum.sub_point(p2);
        assert_eq!(diff.x(), p1.x());
        assert_eq!(diff.y(), p1.y());
    }

    #[test]
    fn test_point_hypot() {
        let point = Point::new(3.0, 4.0);
        assert_eq!(point.hypot(), 5.0);
        assert_eq!(Point::default().hypot(), 0.0);
    }

    #[test]
    fn test_point_scale() {
        let scaled = Point::new(2.0, 3.0).scale(2.5);
        assert_eq!(scaled.x(), 5.0);
        assert_eq!(scaled.y(), 7.5);
    }

    #[test]
    fn test_point_offsets() {
        let point = Point::new(1.0, 2.0);
        assert_eq!(point.offset_x(0.5), Point::new(1.5, 2.0));
        assert_eq!(point.offset_y(-0.5), Point::new(1.0, 1.5));
    }

    #[test]
    fn test_bounds_from_top_left() {
        let bounds = Bounds::from_top_left(Point::new(2.0, 3.0), Size::new(4.0, 5.0));
        assert_eq!(bounds.min_x(), 2.0);
        assert_eq!(bounds.min_y(), 3.0);
        assert_eq!(bounds.max_x(), 6.0);
        assert_eq!(bounds.max_y(), 8.0);
        assert_eq!(bounds.width(), 4.0);
        assert_eq!(bounds.height(), 5.0);
    }

    #[test]
    fn test_bounds_from_points_orders_coordinates() {
        let bounds = Bounds::from_points(Point::new(5.0, 1.0), Point::new(2.0, 4.0));
        assert_eq!(bounds.min_x(), 2.0);
        assert_eq!(bounds.min_y(), 1.0);
        assert_eq!(bounds.max_x(), 5.0);
        assert_eq!(bounds.max_y(), 4.0);
    }

    #[test]
    fn test_bounds_center() {
        let bounds = Bounds::from_top_left(Point::new(0.0, 0.0), Size::new(4.0, 6.0));
        assert_eq!(bounds.center(), Point::new(2.0, 3.0));
    }

    #[test]
    fn test_bounds_merge() {
        let b1 = Bounds::from_top_left(Point::new(1.0, 2.0), Size::new(4.0, 4.0));
        let b2 = Bounds::from_top_left(Point::new(3.0, 0.0), Size::new(5.0, 4.0));
        let merged = b1.merge(&b2);
        assert_eq!(merged.min_x(), 1.0);
        assert_eq!(merged.min_y(), 0.0);
        assert_eq!(merged.max_x(), 8.0);
        assert_eq!(merged.max_y(), 6.0);
    }

    #[test]
    fn test_bounds_expand() {
        let bounds = Bounds::from_top_left(Point::new(2.0, 3.0), Size::new(4.0, 5.0));
        let padded = bounds.expand(1.0);
        assert_eq!(padded.min_x(), 1.0);
        assert_eq!(padded.min_y(), 2.0);
        assert_eq!(padded.max_x(), 7.0);
        assert_eq!(padded.max_y(), 9.0);

        let shrunk = bounds.expand(-1.0);
        assert_eq!(shrunk.width(), 2.0);
        assert_eq!(shrunk.height(), 3.0);
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = Bounds::from_top_left(Point::new(0.0, 0.0), Size::new(2.0, 2.0));
        assert!(bounds.contains(Point::new(1.0, 1.0)));
        assert!(bounds.contains(Point::new(0.0, 2.0)));
        assert!(!bounds.contains(Point::new(2.1, 1.0)));
        assert!(!bounds.contains(Point::new(1.0, -0.1)));
    }
}

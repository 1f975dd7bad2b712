//! Plane geometry for the crop engine.
//!
//! Everything in this module is pure: values in, values out. The crop state
//! machine in [`crate::crop`] is built entirely on these primitives.
//!
//! # Coordinate System
//!
//! - View space, origin top-left, y grows downward
//! - Angles are in degrees, positive = clockwise on screen
//! - Rectangles are axis-aligned and stored as edges (left, top, right, bottom)
//!
//! # Layout
//!
//! - `rect` - [`Rect`] and [`Ratio`] value types
//! - `affine` - 2x3 affine transform used to compose rotation, flip and tilt
//! - `intersect` - segment/segment intersection and outline spans
//! - `fit` - rectangle fitting against limits and rotated outlines

mod affine;
mod fit;
mod intersect;
mod rect;

pub use affine::Affine;
pub use fit::{
    compute_max_rect_within_limit, find_suitable_scale, fix_image_move, get_max_fixed_rect_size,
    get_min_fixed_rect_size, limit_rect_in_rotated, limit_rect_in_rotated_based_on_point,
    scale_rect_based_on_point,
};
pub use intersect::{get_intersection, has_intersection, horizontal_span, vertical_span};
pub use rect::{Ratio, Rect};

use serde::{Deserialize, Serialize};

/// Tolerance used for near-zero determinants and near-equal comparisons.
pub const EQUALITY_THRESHOLD: f64 = 1e-4;

/// A point in view space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// An ordered pair of points. Intersection tests treat it as undirected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
}

impl LineSegment {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Segment with the endpoints swapped.
    pub fn reversed(self) -> Self {
        Self::new(self.end, self.start)
    }
}

/// Rectangle corner, numbered in the winding order of [`rect_to_points`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft = 0,
    TopRight = 1,
    BottomRight = 2,
    BottomLeft = 3,
}

impl Corner {
    /// Index of this corner in the [`rect_to_points`] array.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The diagonally opposite corner.
    pub fn opposite(self) -> Corner {
        match self {
            Corner::TopLeft => Corner::BottomRight,
            Corner::TopRight => Corner::BottomLeft,
            Corner::BottomRight => Corner::TopLeft,
            Corner::BottomLeft => Corner::TopRight,
        }
    }
}

/// Convert degrees to radians.
#[inline]
pub fn formula_angle(angle_degrees: f64) -> f64 {
    angle_degrees.to_radians()
}

/// The four corners of `rect` in the order top-left, top-right,
/// bottom-right, bottom-left.
pub fn rect_to_points(rect: &Rect) -> [Point; 4] {
    [
        Point::new(rect.left, rect.top),
        Point::new(rect.right, rect.top),
        Point::new(rect.right, rect.bottom),
        Point::new(rect.left, rect.bottom),
    ]
}

/// Closed outline through `points`: one segment per consecutive pair, the
/// last one joining back to the first.
pub fn polygon_lines(points: &[Point]) -> Vec<LineSegment> {
    (0..points.len())
        .map(|i| LineSegment::new(points[i], points[(i + 1) % points.len()]))
        .collect()
}

/// Rotate `points` about `origin` by `angle_degrees` (clockwise on screen).
pub fn rotate_points(points: &[Point], angle_degrees: f64, origin: Point) -> Vec<Point> {
    let alpha = formula_angle(angle_degrees);
    let (sin, cos) = alpha.sin_cos();
    points
        .iter()
        .map(|p| {
            let dx = p.x - origin.x;
            let dy = p.y - origin.y;
            Point::new(
                origin.x + cos * dx - sin * dy,
                origin.y + sin * dx + cos * dy,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_point_eq(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9,
            "{:?} != {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_rect_to_points_winding() {
        let rect = Rect::new(1.0, 2.0, 5.0, 7.0);
        let points = rect_to_points(&rect);
        assert_eq!(points[Corner::TopLeft.index()], Point::new(1.0, 2.0));
        assert_eq!(points[Corner::TopRight.index()], Point::new(5.0, 2.0));
        assert_eq!(points[Corner::BottomRight.index()], Point::new(5.0, 7.0));
        assert_eq!(points[Corner::BottomLeft.index()], Point::new(1.0, 7.0));
    }

    #[test]
    fn test_rotate_points_clockwise_on_screen() {
        // y grows downward, so a clockwise quarter turn maps "right" to "down"
        let rotated = rotate_points(&[Point::new(10.0, 0.0)], 90.0, Point::default());
        assert_point_eq(rotated[0], Point::new(0.0, 10.0));
    }

    #[test]
    fn test_rotate_points_about_origin() {
        let origin = Point::new(5.0, 5.0);
        let rotated = rotate_points(&[Point::new(6.0, 5.0)], 180.0, origin);
        assert_point_eq(rotated[0], Point::new(4.0, 5.0));
    }

    #[test]
    fn test_rotate_points_full_turn() {
        let input = [Point::new(3.0, -2.0), Point::new(-7.5, 1.25)];
        let rotated = rotate_points(&input, 360.0, Point::new(1.0, 1.0));
        for (a, b) in input.iter().zip(rotated.iter()) {
            assert_point_eq(*a, *b);
        }
    }

    #[test]
    fn test_polygon_lines_closes_outline() {
        let points = rect_to_points(&Rect::new(0.0, 0.0, 4.0, 3.0));
        let lines = polygon_lines(&points);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3].start, points[3]);
        assert_eq!(lines[3].end, points[0]);
    }

    #[test]
    fn test_corner_opposite() {
        assert_eq!(Corner::TopLeft.opposite(), Corner::BottomRight);
        assert_eq!(Corner::BottomLeft.opposite(), Corner::TopRight);
    }

    #[test]
    fn test_point_distance() {
        assert!((Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)) - 5.0).abs() < 1e-12);
    }
}

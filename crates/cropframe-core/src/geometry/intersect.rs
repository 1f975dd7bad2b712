//! Segment/segment intersection and outline spans.
//!
//! [`has_intersection`] is a strict test: segments that only touch at an
//! endpoint, or that are collinear, do not count as intersecting. The span
//! queries are inclusive: a line through a vertex or along an edge counts.

use super::{LineSegment, Point, EQUALITY_THRESHOLD};

/// Signed area of the parallelogram spanned by `a - origin` and `b - origin`.
#[inline]
fn cross(origin: Point, a: Point, b: Point) -> f64 {
    (a.x - origin.x) * (b.y - origin.y) - (a.y - origin.y) * (b.x - origin.x)
}

/// True if the two segments properly cross each other.
///
/// A bounding-box rejection runs first, then two orientation tests: each
/// segment's endpoints must lie strictly on opposite sides of the other.
pub fn has_intersection(line1: &LineSegment, line2: &LineSegment) -> bool {
    let (p1, p2) = (line1.start, line1.end);
    let (p3, p4) = (line2.start, line2.end);

    if p1.x.max(p2.x) < p3.x.min(p4.x)
        || p1.y.max(p2.y) < p3.y.min(p4.y)
        || p3.x.max(p4.x) < p1.x.min(p2.x)
        || p3.y.max(p4.y) < p1.y.min(p2.y)
    {
        return false;
    }

    let straddles_2 = cross(p3, p1, p4) * cross(p3, p2, p4) < 0.0;
    let straddles_1 = cross(p1, p3, p2) * cross(p1, p4, p2) < 0.0;
    straddles_1 && straddles_2
}

/// Intersection point of the infinite lines through both segments.
///
/// Returns `None` when the lines are parallel or nearly so (determinant below
/// [`EQUALITY_THRESHOLD`]); callers treat that as "no constraint".
pub fn get_intersection(line1: &LineSegment, line2: &LineSegment) -> Option<Point> {
    let a1 = line1.start.y - line1.end.y;
    let b1 = line1.end.x - line1.start.x;
    let c1 = a1 * line1.start.x + b1 * line1.start.y;

    let a2 = line2.start.y - line2.end.y;
    let b2 = line2.end.x - line2.start.x;
    let c2 = a2 * line2.start.x + b2 * line2.start.y;

    let k = a1 * b2 - a2 * b1;
    if k.abs() < EQUALITY_THRESHOLD {
        return None;
    }

    let x = (b2 * c1 - b1 * c2) / k;
    let y = (a1 * c2 - a2 * c1) / k;
    Some(Point::new(x, y))
}

/// Extent `(min_x, max_x)` of a closed outline along the horizontal line at `y`.
///
/// `None` if the line misses the outline.
pub fn horizontal_span(lines: &[LineSegment], y: f64) -> Option<(f64, f64)> {
    span(lines, y, |p| (p.y, p.x))
}

/// Extent `(min_y, max_y)` of a closed outline along the vertical line at `x`.
pub fn vertical_span(lines: &[LineSegment], x: f64) -> Option<(f64, f64)> {
    span(lines, x, |p| (p.x, p.y))
}

/// `split` maps a point to `(across, along)` coordinates of the query line.
fn span(lines: &[LineSegment], at: f64, split: impl Fn(Point) -> (f64, f64)) -> Option<(f64, f64)> {
    let mut extent: Option<(f64, f64)> = None;
    let mut include = |v: f64| {
        extent = Some(match extent {
            Some((lo, hi)) => (lo.min(v), hi.max(v)),
            None => (v, v),
        });
    };

    for line in lines {
        let (a0, b0) = split(line.start);
        let (a1, b1) = split(line.end);
        let (d0, d1) = (a0 - at, a1 - at);
        if (d0 > EQUALITY_THRESHOLD && d1 > EQUALITY_THRESHOLD)
            || (d0 < -EQUALITY_THRESHOLD && d1 < -EQUALITY_THRESHOLD)
        {
            continue;
        }
        if (a1 - a0).abs() < EQUALITY_THRESHOLD {
            include(b0);
            include(b1);
            continue;
        }
        let t = ((at - a0) / (a1 - a0)).clamp(0.0, 1.0);
        include(b0 + t * (b1 - b0));
    }
    extent
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> LineSegment {
        LineSegment::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[test]
    fn test_crossing_segments() {
        let a = seg(0.0, 0.0, 10.0, 10.0);
        let b = seg(0.0, 10.0, 10.0, 0.0);
        assert!(has_intersection(&a, &b));
        let p = get_intersection(&a, &b).expect("lines cross");
        assert!((p.x - 5.0).abs() < 1e-9);
        assert!((p.y - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_disjoint_segments() {
        let a = seg(0.0, 0.0, 1.0, 1.0);
        let b = seg(5.0, 0.0, 6.0, 1.0);
        assert!(!has_intersection(&a, &b));
    }

    #[test]
    fn test_endpoint_touch_is_not_intersection() {
        let a = seg(95.0, 0.0, 95.0, 800.0);
        let b = seg(50.0, 0.0, 950.0, 0.0);
        assert!(!has_intersection(&a, &b));
    }

    #[test]
    fn test_t_junction_is_not_intersection() {
        // b ends exactly on a
        let a = seg(0.0, 0.0, 10.0, 0.0);
        let b = seg(5.0, 5.0, 5.0, 0.0);
        assert!(!has_intersection(&a, &b));
    }

    #[test]
    fn test_collinear_overlap_is_not_intersection() {
        let a = seg(0.0, 0.0, 10.0, 0.0);
        let b = seg(5.0, 0.0, 15.0, 0.0);
        assert!(!has_intersection(&a, &b));
    }

    #[test]
    fn test_parallel_lines_have_no_intersection_point() {
        let a = seg(0.0, 0.0, 10.0, 0.0);
        let b = seg(0.0, 1.0, 10.0, 1.0);
        assert!(get_intersection(&a, &b).is_none());
    }

    #[test]
    fn test_get_intersection_extends_lines() {
        // segments do not overlap but their lines meet at (20, 0)
        let a = seg(0.0, 0.0, 10.0, 0.0);
        let b = seg(20.0, 5.0, 20.0, 10.0);
        let p = get_intersection(&a, &b).expect("lines meet");
        assert!((p.x - 20.0).abs() < 1e-9);
        assert!(p.y.abs() < 1e-9);
    }

    #[test]
    fn test_vertical_and_horizontal() {
        let a = seg(3.0, -5.0, 3.0, 5.0);
        let b = seg(-5.0, 2.0, 5.0, 2.0);
        assert!(has_intersection(&a, &b));
        let p = get_intersection(&a, &b).expect("perpendicular lines meet");
        assert!((p.x - 3.0).abs() < 1e-9);
        assert!((p.y - 2.0).abs() < 1e-9);
    }

    fn diamond() -> Vec<LineSegment> {
        vec![
            seg(50.0, 0.0, 100.0, 50.0),
            seg(100.0, 50.0, 50.0, 100.0),
            seg(50.0, 100.0, 0.0, 50.0),
            seg(0.0, 50.0, 50.0, 0.0),
        ]
    }

    #[test]
    fn test_horizontal_span_of_diamond() {
        let (lo, hi) = horizontal_span(&diamond(), 25.0).expect("line crosses");
        assert!((lo - 25.0).abs() < 1e-9);
        assert!((hi - 75.0).abs() < 1e-9);
        let (lo, hi) = horizontal_span(&diamond(), 50.0).expect("through vertices");
        assert!(lo.abs() < 1e-9);
        assert!((hi - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_vertical_span_of_diamond() {
        let (lo, hi) = vertical_span(&diamond(), 80.0).expect("line crosses");
        assert!((lo - 30.0).abs() < 1e-9);
        assert!((hi - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_span_along_edge_and_miss() {
        let square = vec![
            seg(0.0, 0.0, 10.0, 0.0),
            seg(10.0, 0.0, 10.0, 10.0),
            seg(10.0, 10.0, 0.0, 10.0),
            seg(0.0, 10.0, 0.0, 0.0),
        ];
        assert_eq!(horizontal_span(&square, 0.0), Some((0.0, 10.0)));
        assert_eq!(vertical_span(&square, 10.0), Some((0.0, 10.0)));
        assert_eq!(horizontal_span(&square, 11.0), None);
        assert_eq!(horizontal_span(&diamond(), -1.0), None);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

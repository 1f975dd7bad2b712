//! Rectangle fitting.
//!
//! Helpers that size and place rectangles against an axis-aligned limit or
//! against the (possibly rotated) outline of the image. The outline is passed
//! as its four edges; see [`super::polygon_lines`].

use super::{
    get_intersection, has_intersection, rect_to_points, Corner, LineSegment, Point, Rect,
    EQUALITY_THRESHOLD,
};

/// Largest rectangle of aspect `rate` (width / height) centered inside `limit`.
///
/// When `rate` is wider than the limit, the width fills the limit and the
/// rectangle is centered vertically; otherwise the height fills the limit and
/// it is centered horizontally.
pub fn compute_max_rect_within_limit(limit: &Rect, rate: f64) -> Rect {
    let limit_width = limit.width();
    let limit_height = limit.height();
    if rate > limit_width / limit_height {
        let height = limit_width / rate;
        let top = limit.top + (limit_height - height) / 2.0;
        Rect::from_origin_size(limit.left, top, limit_width, height)
    } else {
        let width = limit_height * rate;
        let left = limit.left + (limit_width - width) / 2.0;
        Rect::from_origin_size(left, limit.top, width, limit_height)
    }
}

/// Scale every edge of `rect` radially about `pivot`.
pub fn scale_rect_based_on_point(rect: &Rect, pivot: Point, scale: f64) -> Rect {
    Rect::new(
        (rect.left - pivot.x) * scale + pivot.x,
        (rect.top - pivot.y) * scale + pivot.y,
        (rect.right - pivot.x) * scale + pivot.x,
        (rect.bottom - pivot.y) * scale + pivot.y,
    )
}

/// Largest `(width, height)` of aspect `rate` fitting in `max_width` x `max_height`.
pub fn get_max_fixed_rect_size(rate: f64, max_width: f64, max_height: f64) -> (f64, f64) {
    if rate > max_width / max_height {
        (max_width, max_width / rate)
    } else {
        (max_height * rate, max_height)
    }
}

/// Smallest `(width, height)` of aspect `rate` whose shorter side is `min_length`.
pub fn get_min_fixed_rect_size(rate: f64, min_length: f64) -> (f64, f64) {
    if rate > 1.0 {
        (min_length * rate, min_length)
    } else {
        (min_length, min_length / rate)
    }
}

/// Smallest factor (>= 1) by which `rect` must grow about `origin` so that it
/// contains every point.
///
/// `origin` is expected inside `rect`; an axis where it sits on or beyond the
/// edge cannot be fixed by scaling and is ignored.
pub fn find_suitable_scale(points: &[Point], rect: &Rect, origin: Point) -> f64 {
    let mut scale: f64 = 1.0;
    for point in points {
        if point.x < rect.left && origin.x - rect.left > EQUALITY_THRESHOLD {
            scale = scale.max((origin.x - point.x) / (origin.x - rect.left));
        }
        if point.x > rect.right && rect.right - origin.x > EQUALITY_THRESHOLD {
            scale = scale.max((point.x - origin.x) / (rect.right - origin.x));
        }
        if point.y < rect.top && origin.y - rect.top > EQUALITY_THRESHOLD {
            scale = scale.max((origin.y - point.y) / (origin.y - rect.top));
        }
        if point.y > rect.bottom && rect.bottom - origin.y > EQUALITY_THRESHOLD {
            scale = scale.max((point.y - origin.y) / (rect.bottom - origin.y));
        }
    }
    scale
}

/// Offset `(dx, dy)` by which `rect` must move so that it covers the points
/// sticking out of it. Negative values move left/up.
pub fn fix_image_move(points: &[Point], rect: &Rect) -> (f64, f64) {
    let mut offset_x: f64 = 0.0;
    let mut offset_y: f64 = 0.0;
    for point in points {
        if point.x < rect.left {
            offset_x = offset_x.min(point.x - rect.left);
        } else if point.x > rect.right {
            offset_x = offset_x.max(point.x - rect.right);
        }
        if point.y < rect.top {
            offset_y = offset_y.min(point.y - rect.top);
        } else if point.y > rect.bottom {
            offset_y = offset_y.max(point.y - rect.bottom);
        }
    }
    (offset_x, offset_y)
}

/// If `diagonal` crosses `outer_line`, move the corner on that side of the
/// rectangle's center onto the crossing point.
fn limit_corner_if_line_intersect(outer_line: &LineSegment, diagonal: &LineSegment, rect: &mut Rect) {
    if !has_intersection(outer_line, diagonal) {
        return;
    }
    let Some(intersection) = get_intersection(outer_line, diagonal) else {
        return;
    };
    let origin = rect.center();
    if intersection.x < origin.x {
        rect.left = intersection.x;
    } else {
        rect.right = intersection.x;
    }
    if intersection.y < origin.y {
        rect.top = intersection.y;
    } else {
        rect.bottom = intersection.y;
    }
}

/// Pull the corners of `rect` in along its diagonals until neither diagonal
/// crosses the outline.
///
/// Each corner moves along its own diagonal, so the aspect ratio of the
/// rectangle is kept while its center may shift.
pub fn limit_rect_in_rotated(rect: &Rect, outer_lines: &[LineSegment]) -> Rect {
    let mut copy = *rect;

    let diagonal = LineSegment::new(
        Point::new(copy.left, copy.top),
        Point::new(copy.right, copy.bottom),
    );
    for line in outer_lines {
        limit_corner_if_line_intersect(line, &diagonal, &mut copy);
    }

    let diagonal = LineSegment::new(
        Point::new(copy.left, copy.bottom),
        Point::new(copy.right, copy.top),
    );
    for line in outer_lines {
        limit_corner_if_line_intersect(line, &diagonal, &mut copy);
    }

    copy
}

/// Shrink `rect` uniformly about the `anchor` corner by the smallest factor
/// that keeps the segments from the anchor to the other three corners inside
/// the outline. The factor never exceeds 1.
pub fn limit_rect_in_rotated_based_on_point(
    anchor: Corner,
    rect: &Rect,
    rotated_lines: &[LineSegment],
) -> Rect {
    let points = rect_to_points(rect);
    let base = points[anchor.index()];
    let mut scale: f64 = 1.0;

    for (i, point) in points.iter().enumerate() {
        if i == anchor.index() {
            continue;
        }
        let line = LineSegment::new(base, *point);
        let full = base.distance(*point);
        for rotated_line in rotated_lines {
            if !has_intersection(&line, rotated_line) {
                continue;
            }
            let Some(p) = get_intersection(&line, rotated_line) else {
                continue;
            };
            let temp_scale = base.distance(p) / full;
            scale = scale.min(if temp_scale > EQUALITY_THRESHOLD {
                temp_scale
            } else {
                1.0
            });
        }
    }

    scale_rect_based_on_point(rect, base, scale)
}

#[cfg(test)]
mod tests {
    use super::super::polygon_lines;
    use super::*;

    fn diamond(center: Point, radius: f64) -> Vec<LineSegment> {
        polygon_lines(&[
            Point::new(center.x, center.y - radius),
            Point::new(center.x + radius, center.y),
            Point::new(center.x, center.y + radius),
            Point::new(center.x - radius, center.y),
        ])
    }

    #[test]
    fn test_max_rect_wide_rate_fills_width() {
        let limit = Rect::new(0.0, 0.0, 1000.0, 800.0);
        let rect = compute_max_rect_within_limit(&limit, 1.5);
        assert!((rect.left - 0.0).abs() < 1e-9);
        assert!((rect.width() - 1000.0).abs() < 1e-9);
        assert!((rect.height() - 666.666_666_666_7).abs() < 1e-6);
        assert!((rect.top - 66.666_666_666_7).abs() < 1e-6);
    }

    #[test]
    fn test_max_rect_narrow_rate_fills_height() {
        let limit = Rect::new(0.0, 0.0, 1000.0, 800.0);
        let rect = compute_max_rect_within_limit(&limit, 1.0);
        assert_eq!(rect, Rect::new(100.0, 0.0, 900.0, 800.0));
    }

    #[test]
    fn test_max_rect_respects_limit_offset() {
        let limit = Rect::new(50.0, 20.0, 250.0, 120.0);
        let rect = compute_max_rect_within_limit(&limit, 1.0);
        assert_eq!(rect, Rect::new(100.0, 20.0, 200.0, 120.0));
    }

    #[test]
    fn test_scale_rect_based_on_point() {
        let rect = Rect::new(10.0, 10.0, 20.0, 20.0);
        let scaled = scale_rect_based_on_point(&rect, Point::new(10.0, 10.0), 2.0);
        assert_eq!(scaled, Rect::new(10.0, 10.0, 30.0, 30.0));
    }

    #[test]
    fn test_fixed_rect_sizes() {
        assert_eq!(get_max_fixed_rect_size(2.0, 100.0, 100.0), (100.0, 50.0));
        assert_eq!(get_max_fixed_rect_size(0.5, 100.0, 100.0), (50.0, 100.0));
        assert_eq!(get_min_fixed_rect_size(2.0, 90.0), (180.0, 90.0));
        assert_eq!(get_min_fixed_rect_size(0.5, 90.0), (90.0, 180.0));
        assert_eq!(get_min_fixed_rect_size(1.0, 90.0), (90.0, 90.0));
    }

    #[test]
    fn test_find_suitable_scale() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let origin = Point::new(50.0, 50.0);
        let inside = [Point::new(10.0, 10.0)];
        assert_eq!(find_suitable_scale(&inside, &rect, origin), 1.0);

        let outside = [Point::new(-50.0, 50.0)];
        assert!((find_suitable_scale(&outside, &rect, origin) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_find_suitable_scale_ignores_degenerate_axis() {
        // origin on the left edge: the left overflow cannot be fixed by scaling
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let scale = find_suitable_scale(&[Point::new(-10.0, 50.0)], &rect, Point::new(0.0, 50.0));
        assert_eq!(scale, 1.0);
    }

    #[test]
    fn test_fix_image_move() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let points = [Point::new(-5.0, 50.0), Point::new(50.0, 110.0)];
        assert_eq!(fix_image_move(&points, &rect), (-5.0, 10.0));
        assert_eq!(fix_image_move(&[Point::new(5.0, 5.0)], &rect), (0.0, 0.0));
    }

    #[test]
    fn test_limit_rect_in_rotated_diamond() {
        let outline = diamond(Point::new(50.0, 50.0), 60.0);
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let limited = limit_rect_in_rotated(&rect, &outline);
        assert!(
            limited.approx_eq(&Rect::new(20.0, 20.0, 80.0, 80.0), 1e-9),
            "{:?}",
            limited
        );
    }

    #[test]
    fn test_limit_rect_in_rotated_keeps_fitting_rect() {
        let outline = diamond(Point::new(50.0, 50.0), 60.0);
        let rect = Rect::new(40.0, 40.0, 60.0, 60.0);
        assert_eq!(limit_rect_in_rotated(&rect, &outline), rect);
    }

    #[test]
    fn test_limit_rect_based_on_point() {
        let outline = polygon_lines(&rect_to_points(&Rect::new(-10.0, -10.0, 60.0, 200.0)));
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let limited = limit_rect_in_rotated_based_on_point(Corner::TopLeft, &rect, &outline);
        assert!(limited.approx_eq(&Rect::new(0.0, 0.0, 60.0, 60.0), 1e-9), "{:?}", limited);
    }

    #[test]
    fn test_limit_rect_based_on_point_anchor_bottom_right() {
        let outline = polygon_lines(&rect_to_points(&Rect::new(50.0, -100.0, 200.0, 200.0)));
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let limited = limit_rect_in_rotated_based_on_point(Corner::BottomRight, &rect, &outline);
        assert!(limited.approx_eq(&Rect::new(50.0, 50.0, 100.0, 100.0), 1e-9), "{:?}", limited);
    }

    #[test]
    fn test_limit_rect_based_on_point_never_grows() {
        let outline = polygon_lines(&rect_to_points(&Rect::new(-100.0, -100.0, 500.0, 500.0)));
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert_eq!(
            limit_rect_in_rotated_based_on_point(Corner::BottomLeft, &rect, &outline),
            rect
        );
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

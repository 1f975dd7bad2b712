//! Drag gestures on the crop outline.
//!
//! A gesture is `is_crop_rect_touch` at pointer down, any number of
//! `move_crop_rect` deltas, then `end_crop_rect_move`. Without a ratio lock
//! each grabbed edge moves on its own; with one, only corners move and they
//! slide along the ratio's diagonal.

use super::{CropShow, EngagedEdges, Engagement};
use crate::geometry::{
    get_max_fixed_rect_size, get_min_fixed_rect_size, horizontal_span,
    limit_rect_in_rotated_based_on_point, vertical_span, Corner, LineSegment, Rect,
    EQUALITY_THRESHOLD,
};
use log::debug;

impl CropShow {
    /// Hit-test a pointer-down at `(x, y)` against the ring of width
    /// `touch_bound` on each side of the crop outline.
    ///
    /// Starts a new gesture: any previous engagement is replaced, and a miss
    /// leaves the session idle.
    pub fn is_crop_rect_touch(&mut self, x: f64, y: f64) -> bool {
        let bound = self.config.touch_bound;
        let outer = self.crop.inset(-bound, -bound);
        let inner = self.crop.inset(bound, bound);
        self.engagement = Engagement::IDLE;

        if outer.contains(x, y) && !inner.contains(x, y) {
            let left = x <= inner.left;
            let right = !left && x >= inner.right;
            let top = y <= inner.top;
            let bottom = !top && y >= inner.bottom;
            self.engagement.edges = EngagedEdges::from_flags(left, right, top, bottom);

            if self.ratio.is_locked() {
                self.engagement
                    .promote_side_to_corner(x < self.crop.center_x(), y < self.crop.center_y());
            }
            debug!("is_crop_rect_touch: ({}, {}) -> {:?}", x, y, self.engagement);
        }
        self.engagement.edges.is_engaged()
    }

    /// Apply one drag delta to the engaged edges.
    pub fn move_crop_rect(&mut self, dx: f64, dy: f64) {
        if !self.engagement.edges.is_engaged() {
            return;
        }
        if self.ratio.is_locked() {
            self.move_in_fixed_mode(dx, dy);
        } else {
            self.move_in_free_mode(dx, dy);
        }
    }

    /// Finish the gesture. Calling it again is harmless.
    pub fn end_crop_rect_move(&mut self) {
        self.engagement = Engagement::IDLE;
    }

    // ===== Free mode =====

    fn move_in_free_mode(&mut self, dx: f64, dy: f64) {
        let edges = self.engagement.edges;
        let min_side = self.config.min_side_length;
        let limit = self.limit;
        let lines = self.image_lines();

        if edges.has_left() {
            if dx < 0.0 || self.could_enlarge_image_w() {
                let left = (self.crop.left + dx)
                    .min(self.crop.right - min_side)
                    .max(limit.left);
                let fixed = fix_left_in_free_mode(left, &self.crop, &lines);
                if self.crop.right - fixed >= min_side - EQUALITY_THRESHOLD {
                    self.crop.left = fixed;
                }
            }
        } else if edges.has_right() && (dx > 0.0 || self.could_enlarge_image_w()) {
            let right = (self.crop.right + dx)
                .max(self.crop.left + min_side)
                .min(limit.right);
            let fixed = fix_right_in_free_mode(right, &self.crop, &lines);
            if fixed - self.crop.left >= min_side - EQUALITY_THRESHOLD {
                self.crop.right = fixed;
            }
        }

        if edges.has_top() {
            if dy < 0.0 || self.could_enlarge_image_h() {
                let top = (self.crop.top + dy)
                    .min(self.crop.bottom - min_side)
                    .max(limit.top);
                let fixed = fix_top_in_free_mode(top, &self.crop, &lines);
                if self.crop.bottom - fixed >= min_side - EQUALITY_THRESHOLD {
                    self.crop.top = fixed;
                }
            }
        } else if edges.has_bottom() && (dy > 0.0 || self.could_enlarge_image_h()) {
            let bottom = (self.crop.bottom + dy)
                .max(self.crop.top + min_side)
                .min(limit.bottom);
            let fixed = fix_bottom_in_free_mode(bottom, &self.crop, &lines);
            if fixed - self.crop.top >= min_side - EQUALITY_THRESHOLD {
                self.crop.bottom = fixed;
            }
        }
    }

    // ===== Fixed mode =====

    fn move_in_fixed_mode(&mut self, dx: f64, dy: f64) {
        let (x, y) = match self.engagement.promotion {
            Some(promotion) => promotion.mask(dx, dy),
            None => (dx, dy),
        };
        let offset_hypot = x.hypot(y);

        match self.engagement.edges {
            EngagedEdges::LeftTop => {
                let is_enlarge = dx < 0.0 || dy < 0.0;
                if is_enlarge || self.could_enlarge_image() {
                    self.fix_left_top_in_fixed_mode(offset_hypot, is_enlarge);
                }
            }
            EngagedEdges::LeftBottom => {
                let is_enlarge = dx < 0.0 || dy > 0.0;
                if is_enlarge || self.could_enlarge_image() {
                    self.fix_left_bottom_in_fixed_mode(offset_hypot, is_enlarge);
                }
            }
            EngagedEdges::RightTop => {
                let is_enlarge = dx > 0.0 || dy < 0.0;
                if is_enlarge || self.could_enlarge_image() {
                    self.fix_right_top_in_fixed_mode(offset_hypot, is_enlarge);
                }
            }
            EngagedEdges::RightBottom => {
                let is_enlarge = dx > 0.0 || dy > 0.0;
                if is_enlarge || self.could_enlarge_image() {
                    self.fix_right_bottom_in_fixed_mode(offset_hypot, is_enlarge);
                }
            }
            _ => {}
        }
    }

    fn fix_left_top_in_fixed_mode(&mut self, offset_hypot: f64, is_enlarge: bool) {
        let crop = self.crop;
        let rate = self.ratio.rate();
        let target = if is_enlarge {
            let (w, h) = get_max_fixed_rect_size(
                rate,
                crop.right - self.limit.left,
                crop.bottom - self.limit.top,
            );
            let rect = Rect::new(crop.right - w, crop.bottom - h, crop.right, crop.bottom);
            limit_rect_in_rotated_based_on_point(Corner::BottomRight, &rect, &self.image_lines())
        } else {
            let (w, h) = get_min_fixed_rect_size(rate, self.config.min_side_length);
            Rect::new(crop.right - w, crop.bottom - h, crop.right, crop.bottom)
        };
        let (step_x, step_y) = self.diagonal_step(&crop, &target, offset_hypot, is_enlarge);
        let sign = if is_enlarge { -1.0 } else { 1.0 };
        self.crop.left += step_x * sign;
        self.crop.top += step_y * sign;
    }

    fn fix_left_bottom_in_fixed_mode(&mut self, offset_hypot: f64, is_enlarge: bool) {
        let crop = self.crop;
        let rate = self.ratio.rate();
        let target = if is_enlarge {
            let (w, h) = get_max_fixed_rect_size(
                rate,
                crop.right - self.limit.left,
                self.limit.bottom - crop.top,
            );
            let rect = Rect::new(crop.right - w, crop.top, crop.right, crop.top + h);
            limit_rect_in_rotated_based_on_point(Corner::TopRight, &rect, &self.image_lines())
        } else {
            let (w, h) = get_min_fixed_rect_size(rate, self.config.min_side_length);
            Rect::new(crop.right - w, crop.top, crop.right, crop.top + h)
        };
        let (step_x, step_y) = self.diagonal_step(&crop, &target, offset_hypot, is_enlarge);
        let sign = if is_enlarge { 1.0 } else { -1.0 };
        self.crop.left -= step_x * sign;
        self.crop.bottom += step_y * sign;
    }

    fn fix_right_top_in_fixed_mode(&mut self, offset_hypot: f64, is_enlarge: bool) {
        let crop = self.crop;
        let rate = self.ratio.rate();
        let target = if is_enlarge {
            let (w, h) = get_max_fixed_rect_size(
                rate,
                self.limit.right - crop.left,
                crop.bottom - self.limit.top,
            );
            let rect = Rect::new(crop.left, crop.bottom - h, crop.left + w, crop.bottom);
            limit_rect_in_rotated_based_on_point(Corner::BottomLeft, &rect, &self.image_lines())
        } else {
            let (w, h) = get_min_fixed_rect_size(rate, self.config.min_side_length);
            Rect::new(crop.left, crop.bottom - h, crop.left + w, crop.bottom)
        };
        let (step_x, step_y) = self.diagonal_step(&crop, &target, offset_hypot, is_enlarge);
        let sign = if is_enlarge { 1.0 } else { -1.0 };
        self.crop.right += step_x * sign;
        self.crop.top -= step_y * sign;
    }

    fn fix_right_bottom_in_fixed_mode(&mut self, offset_hypot: f64, is_enlarge: bool) {
        let crop = self.crop;
        let rate = self.ratio.rate();
        let target = if is_enlarge {
            let (w, h) = get_max_fixed_rect_size(
                rate,
                self.limit.right - crop.left,
                self.limit.bottom - crop.top,
            );
            let rect = Rect::new(crop.left, crop.top, crop.left + w, crop.top + h);
            limit_rect_in_rotated_based_on_point(Corner::TopLeft, &rect, &self.image_lines())
        } else {
            let (w, h) = get_min_fixed_rect_size(rate, self.config.min_side_length);
            Rect::new(crop.left, crop.top, crop.left + w, crop.top + h)
        };
        let (step_x, step_y) = self.diagonal_step(&crop, &target, offset_hypot, is_enlarge);
        let sign = if is_enlarge { 1.0 } else { -1.0 };
        self.crop.right += step_x * sign;
        self.crop.bottom += step_y * sign;
    }

    /// Unsigned `(x, y)` step along the ratio diagonal: the drag length,
    /// capped by how far the diagonal may still grow or shrink toward
    /// `target`.
    fn diagonal_step(&self, crop: &Rect, target: &Rect, offset_hypot: f64, is_enlarge: bool) -> (f64, f64) {
        let rect_hypot = target.diagonal();
        let crop_hypot = crop.diagonal();
        let room = (rect_hypot - crop_hypot) * if is_enlarge { 1.0 } else { -1.0 };
        let step = offset_hypot.min(room.max(0.0));
        let ratio_hypot = self.ratio.hypot();
        (
            step * self.ratio.w / ratio_hypot,
            step * self.ratio.h / ratio_hypot,
        )
    }
}

// The image outline is convex and the crop starts inside it, so a moved side
// stays inside exactly when its two new corners do. Each fix pulls the side
// to the outline's extent along the two adjacent crop edges; if either edge
// misses the outline the previous value is kept.

fn fix_left_in_free_mode(left: f64, crop: &Rect, image_lines: &[LineSegment]) -> f64 {
    match (
        horizontal_span(image_lines, crop.top),
        horizontal_span(image_lines, crop.bottom),
    ) {
        (Some((top_min, _)), Some((bottom_min, _))) => left.max(top_min).max(bottom_min),
        _ => crop.left,
    }
}

fn fix_right_in_free_mode(right: f64, crop: &Rect, image_lines: &[LineSegment]) -> f64 {
    match (
        horizontal_span(image_lines, crop.top),
        horizontal_span(image_lines, crop.bottom),
    ) {
        (Some((_, top_max)), Some((_, bottom_max))) => right.min(top_max).min(bottom_max),
        _ => crop.right,
    }
}

fn fix_top_in_free_mode(top: f64, crop: &Rect, image_lines: &[LineSegment]) -> f64 {
    match (
        vertical_span(image_lines, crop.left),
        vertical_span(image_lines, crop.right),
    ) {
        (Some((left_min, _)), Some((right_min, _))) => top.max(left_min).max(right_min),
        _ => crop.top,
    }
}

fn fix_bottom_in_free_mode(bottom: f64, crop: &Rect, image_lines: &[LineSegment]) -> f64 {
    match (
        vertical_span(image_lines, crop.left),
        vertical_span(image_lines, crop.right),
    ) {
        (Some((_, left_max)), Some((_, right_max))) => bottom.min(left_max).min(right_max),
        _ => crop.bottom,
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

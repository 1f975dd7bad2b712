//! Axis-aligned rectangles and aspect ratios.

use super::Point;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle stored as its four edges.
///
/// `Rect` is `Copy`: every getter in the engine hands out an independent
/// value. Callers are expected to keep `left <= right` and `top <= bottom`;
/// the derived width/height are signed and will go negative otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle from an origin and a size.
    pub fn from_origin_size(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self::new(left, top, left + width, top + height)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    #[inline]
    pub fn center_x(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    #[inline]
    pub fn center_y(&self) -> f64 {
        (self.top + self.bottom) / 2.0
    }

    pub fn center(&self) -> Point {
        Point::new(self.center_x(), self.center_y())
    }

    /// Hypotenuse of the rectangle, i.e. the length of either diagonal.
    pub fn diagonal(&self) -> f64 {
        self.width().hypot(self.height())
    }

    /// Inclusive containment test.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    /// True if `other` lies inside this rectangle, allowing `tolerance`
    /// of slack on every edge.
    pub fn contains_rect(&self, other: &Rect, tolerance: f64) -> bool {
        other.left >= self.left - tolerance
            && other.top >= self.top - tolerance
            && other.right <= self.right + tolerance
            && other.bottom <= self.bottom + tolerance
    }

    /// Grow (positive) or shrink (negative) every edge by `dx`/`dy`.
    pub fn inset(&self, dx: f64, dy: f64) -> Rect {
        Rect::new(
            self.left + dx,
            self.top + dy,
            self.right - dx,
            self.bottom - dy,
        )
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.left += dx;
        self.right += dx;
        self.top += dy;
        self.bottom += dy;
    }

    /// Scale about the rectangle's own center.
    pub fn scale_about_center(&mut self, scale: f64) {
        let cx = self.center_x();
        let cy = self.center_y();
        let half_w = self.width() * scale / 2.0;
        let half_h = self.height() * scale / 2.0;
        *self = Rect::new(cx - half_w, cy - half_h, cx + half_w, cy + half_h);
    }

    /// Swap width and height while keeping the center fixed.
    pub fn swap_width_height(&mut self) {
        let cx = self.center_x();
        let cy = self.center_y();
        let half_w = self.width() / 2.0;
        let half_h = self.height() / 2.0;
        *self = Rect::new(cx - half_h, cy - half_w, cx + half_h, cy + half_w);
    }

    /// Express the rectangle as fractions of a `width` x `height` area.
    pub fn normalize(&self, width: f64, height: f64) -> Rect {
        Rect::new(
            self.left / width,
            self.top / height,
            self.right / width,
            self.bottom / height,
        )
    }

    /// Inverse of [`Rect::normalize`].
    pub fn revert(&self, width: f64, height: f64) -> Rect {
        Rect::new(
            self.left * width,
            self.top * height,
            self.right * width,
            self.bottom * height,
        )
    }

    /// Round every edge to the nearest integer.
    pub fn round_out(&self) -> Rect {
        Rect::new(
            self.left.round(),
            self.top.round(),
            self.right.round(),
            self.bottom.round(),
        )
    }

    /// Edge-wise comparison within `epsilon`.
    pub fn approx_eq(&self, other: &Rect, epsilon: f64) -> bool {
        (self.left - other.left).abs() <= epsilon
            && (self.top - other.top).abs() <= epsilon
            && (self.right - other.right).abs() <= epsilon
            && (self.bottom - other.bottom).abs() <= epsilon
    }
}

/// Width:height ratio lock. A non-positive component means "free".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ratio {
    pub w: f64,
    pub h: f64,
}

impl Default for Ratio {
    fn default() -> Self {
        Self::FREE
    }
}

impl Ratio {
    /// No aspect lock.
    pub const FREE: Ratio = Ratio { w: -1.0, h: -1.0 };

    pub const fn new(w: f64, h: f64) -> Self {
        Self { w, h }
    }

    /// True when the ratio constrains the crop.
    #[inline]
    pub fn is_locked(&self) -> bool {
        self.w > 0.0 && self.h > 0.0
    }

    /// `w / h`.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.w / self.h
    }

    /// Length of the (w, h) vector, used to walk along the ratio's diagonal.
    #[inline]
    pub fn hypot(&self) -> f64 {
        self.w.hypot(self.h)
    }

    /// Ratio with its components exchanged, as after a quarter turn.
    pub fn swapped(self) -> Ratio {
        Ratio::new(self.h, self.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_derived_values() {
        let rect = Rect::new(10.0, 20.0, 110.0, 70.0);
        assert_eq!(rect.width(), 100.0);
        assert_eq!(rect.height(), 50.0);
        assert_eq!(rect.center(), Point::new(60.0, 45.0));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(0.0, 0.0));
        assert!(rect.contains(10.0, 10.0));
        assert!(!rect.contains(10.01, 5.0));
    }

    #[test]
    fn test_swap_width_height_keeps_center() {
        let mut rect = Rect::new(0.0, 0.0, 200.0, 100.0);
        rect.swap_width_height();
        assert_eq!(rect, Rect::new(50.0, -50.0, 150.0, 150.0));
    }

    #[test]
    fn test_scale_about_center() {
        let mut rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        rect.scale_about_center(2.0);
        assert_eq!(rect, Rect::new(-50.0, -25.0, 150.0, 75.0));
    }

    #[test]
    fn test_normalize_and_revert() {
        let rect = Rect::new(50.0, 25.0, 150.0, 75.0);
        let normalized = rect.normalize(200.0, 100.0);
        assert_eq!(normalized, Rect::new(0.25, 0.25, 0.75, 0.75));
        assert_eq!(normalized.revert(200.0, 100.0), rect);
    }

    #[test]
    fn test_round_out() {
        let rect = Rect::new(0.4, 0.6, 9.5, 10.49);
        assert_eq!(rect.round_out(), Rect::new(0.0, 1.0, 10.0, 10.0));
    }

    #[test]
    fn test_copies_are_independent() {
        let original = Rect::new(0.0, 0.0, 1.0, 1.0);
        let mut copy = original;
        copy.translate(5.0, 5.0);
        assert_eq!(original, Rect::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(copy, Rect::new(5.0, 5.0, 6.0, 6.0));
    }

    #[test]
    fn test_ratio_free_and_locked() {
        assert!(!Ratio::FREE.is_locked());
        assert!(!Ratio::new(-1.0, 3.0).is_locked());
        assert!(Ratio::new(16.0, 9.0).is_locked());
        assert_eq!(Ratio::new(16.0, 9.0).swapped(), Ratio::new(9.0, 16.0));
        assert!((Ratio::new(3.0, 2.0).rate() - 1.5).abs() < f64::EPSILON);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (-500.0f64..500.0, -500.0f64..500.0, 0.0f64..1000.0, 0.0f64..1000.0)
            .prop_map(|(l, t, w, h)| Rect::from_origin_size(l, t, w, h))
    }

    proptest! {
        /// Property: normalize undoes revert for any positive area.
        #[test]
        fn prop_normalize_revert_round_trip(
            rect in rect_strategy(),
            width in 0.5f64..5000.0,
            height in 0.5f64..5000.0,
        ) {
            let back = rect.revert(width, height).normalize(width, height);
            prop_assert!(back.approx_eq(&rect, 1e-9), "{:?} != {:?}", back, rect);
        }

        /// Property: swapping twice restores the rectangle.
        #[test]
        fn prop_swap_twice_is_identity(rect in rect_strategy()) {
            let mut swapped = rect;
            swapped.swap_width_height();
            swapped.swap_width_height();
            prop_assert!(swapped.approx_eq(&rect, 1e-9));
        }
    }
}

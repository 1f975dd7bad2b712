//! Crop overlay geometry for one frame.
//!
//! Produces the shapes a host draws over the image: the dimming mask
//! around the crop, the crop frame, an optional grid and the grab handles.
//! Nothing here touches a canvas; hosts stroke the segments and fill the
//! rectangles with the colors in [`OverlayStyle`].

use crate::crop::CropShow;
use crate::geometry::{polygon_lines, rect_to_points, LineSegment, Point, Rect};
use serde::{Deserialize, Serialize};

/// Stroke widths, sizes and colors of the overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayStyle {
    /// Frame and grid stroke width.
    pub line_width: f64,
    /// Handle stroke width, also the gap between handle and frame.
    pub handle_width: f64,
    /// How far corner handles overshoot the corner.
    pub handle_padding: f64,
    pub handle_length: f64,
    pub line_color: String,
    pub handle_color: String,
    pub mask_color: String,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            line_width: 0.5,
            handle_width: 3.0,
            handle_padding: 1.0,
            handle_length: 20.0,
            line_color: "#80FFFFFF".to_string(),
            handle_color: "white".to_string(),
            mask_color: "rgba(0, 0, 0, 0.3)".to_string(),
        }
    }
}

/// The four bands of `outer` not covered by `inner`: top, left, right, bottom.
pub fn mask_rects(outer: &Rect, inner: &Rect) -> [Rect; 4] {
    [
        Rect::new(outer.left, outer.top, outer.right, inner.top),
        Rect::new(outer.left, inner.top, inner.left, inner.bottom),
        Rect::new(inner.right, inner.top, outer.right, inner.bottom),
        Rect::new(outer.left, inner.bottom, outer.right, outer.bottom),
    ]
}

/// Outline of `crop`.
pub fn frame_lines(crop: &Rect) -> Vec<LineSegment> {
    polygon_lines(&rect_to_points(crop))
}

/// Grid splitting `crop` into `split` x `split` cells.
///
/// Cell sizes are rounded up, so the last row and column may be narrower.
pub fn split_lines(crop: &Rect, split: u32) -> Vec<LineSegment> {
    if split < 2 {
        return Vec::new();
    }
    let w = (crop.width() / split as f64).ceil();
    let h = (crop.height() / split as f64).ceil();
    let mut lines = Vec::with_capacity(2 * (split as usize - 1));
    for i in 1..split {
        let x = crop.left + w * i as f64;
        let y = crop.top + h * i as f64;
        lines.push(segment(x, crop.top, x, crop.bottom));
        lines.push(segment(crop.left, y, crop.right, y));
    }
    lines
}

/// L-shaped handles at the four corners, two strokes each, in TL, TR, BL,
/// BR order.
pub fn corner_handles(crop: &Rect, style: &OverlayStyle) -> [LineSegment; 8] {
    let w = style.handle_width;
    let pad = style.handle_padding;
    let len = style.handle_length;
    [
        segment(crop.left - w - pad, crop.top - w, crop.left - w - pad + len, crop.top - w),
        segment(crop.left - w, crop.top - w - pad, crop.left - w, crop.top - w - pad + len),
        segment(crop.right + w + pad, crop.top - w, crop.right + w + pad - len, crop.top - w),
        segment(crop.right + w, crop.top - w - pad, crop.right + w, crop.top - w - pad + len),
        segment(crop.left - w, crop.bottom + w + pad, crop.left - w, crop.bottom + w + pad - len),
        segment(crop.left - w - pad, crop.bottom + w, crop.left - w - pad + len, crop.bottom + w),
        segment(crop.right + w + pad, crop.bottom + w, crop.right + w + pad - len, crop.bottom + w),
        segment(crop.right + w, crop.bottom + w + pad, crop.right + w, crop.bottom + w + pad - len),
    ]
}

/// Short bars centered on each side: top, bottom, left, right.
pub fn side_handles(crop: &Rect, style: &OverlayStyle) -> [LineSegment; 4] {
    let w = style.handle_width;
    let len = style.handle_length;
    let x = crop.center_x() - len / 2.0;
    let y = crop.center_y() - len / 2.0;
    [
        segment(x, crop.top - w, x + len, crop.top - w),
        segment(x, crop.bottom + w, x + len, crop.bottom + w),
        segment(crop.left - w, y, crop.left - w, y + len),
        segment(crop.right + w, y, crop.right + w, y + len),
    ]
}

fn segment(x1: f64, y1: f64, x2: f64, y2: f64) -> LineSegment {
    LineSegment::new(Point::new(x1, y1), Point::new(x2, y2))
}

/// Everything drawn over the image for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropOverlay {
    pub mask: [Rect; 4],
    pub frame: Vec<LineSegment>,
    pub grid: Vec<LineSegment>,
    pub corner_handles: [LineSegment; 8],
    pub side_handles: [LineSegment; 4],
}

impl CropOverlay {
    /// Overlay for the current state of `show`. The mask covers the limit
    /// rect outside the crop; `split` of 0 or 1 draws no grid.
    pub fn build(show: &CropShow, style: &OverlayStyle, split: u32) -> Self {
        let crop = show.crop_rect();
        Self {
            mask: mask_rects(&show.limit_rect(), &crop),
            frame: frame_lines(&crop),
            grid: split_lines(&crop, split),
            corner_handles: corner_handles(&crop, style),
            side_handles: side_handles(&crop, style),
        }
    }
}

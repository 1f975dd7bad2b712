//! The crop session state machine.
//!
//! # Coordinate System
//!
//! Every rectangle is in view units, the units of the limit rect supplied by
//! the host. The crop rect is axis-aligned on screen. The image rect is
//! axis-aligned in the image's local frame; what the screen shows is that
//! rect mapped through the display transform:
//!
//! ```text
//! view = translate(o) * scale(fx, fy) * rotate(a) * translate(-o) * local
//! a    = rotation * fx * fy + tilt
//! ```
//!
//! where `o` is the limit center and `fx`/`fy` are `-1` for a flipped axis.
//! Positive angles turn clockwise on screen.

use super::{AngleError, CropConfig, CropRatioType, Engagement, RatioError};
use crate::apply::CropCommit;
use crate::geometry::{
    compute_max_rect_within_limit, find_suitable_scale, fix_image_move, limit_rect_in_rotated,
    polygon_lines, rect_to_points, scale_rect_based_on_point, Affine, LineSegment, Point, Ratio,
    Rect, EQUALITY_THRESHOLD,
};
use log::{debug, warn};

/// One coarse rotation step, in degrees.
pub const QUARTER_TURN: f64 = 90.0;

/// Crop state for one edit session.
#[derive(Debug, Clone)]
pub struct CropShow {
    pub(super) config: CropConfig,
    pub(super) limit: Rect,
    pub(super) image: Rect,
    pub(super) crop: Rect,
    pub(super) ratio: Ratio,
    pub(super) ratio_type: CropRatioType,
    pub(super) rotation_angle: f64,
    pub(super) horizontal_angle: f64,
    pub(super) flip_horizontal: bool,
    pub(super) flip_vertical: bool,
    pub(super) engagement: Engagement,
    display: Affine,
    display_inverse: Affine,
}

impl Default for CropShow {
    fn default() -> Self {
        Self::new(CropConfig::default())
    }
}

impl CropShow {
    pub fn new(config: CropConfig) -> Self {
        Self {
            config,
            limit: Rect::default(),
            image: Rect::default(),
            crop: Rect::default(),
            ratio: Ratio::FREE,
            ratio_type: CropRatioType::Free,
            rotation_angle: 0.0,
            horizontal_angle: 0.0,
            flip_horizontal: false,
            flip_vertical: false,
            engagement: Engagement::IDLE,
            display: Affine::IDENTITY,
            display_inverse: Affine::IDENTITY,
        }
    }

    /// Start a session: fit the image into `limit` and select all of it.
    ///
    /// `image_ratio` is the source width over height.
    pub fn init(&mut self, limit: Rect, image_ratio: f64) {
        self.limit = limit;
        self.image = compute_max_rect_within_limit(&limit, image_ratio);
        self.crop = self.image;
        self.ratio = Ratio::FREE;
        self.ratio_type = CropRatioType::Free;
        self.rotation_angle = 0.0;
        self.horizontal_angle = 0.0;
        self.flip_horizontal = false;
        self.flip_vertical = false;
        self.engagement = Engagement::IDLE;
        self.rebuild_transform();
        debug!("init: limit {:?} image {:?}", self.limit, self.image);
    }

    // ===== Accessors =====

    pub fn config(&self) -> &CropConfig {
        &self.config
    }

    pub fn limit_rect(&self) -> Rect {
        self.limit
    }

    pub fn crop_rect(&self) -> Rect {
        self.crop
    }

    pub fn image_rect(&self) -> Rect {
        self.image
    }

    pub fn ratio(&self) -> Ratio {
        self.ratio
    }

    /// Last selected preset. The live [`Ratio`] may be its swap after a
    /// quarter turn.
    pub fn ratio_type(&self) -> CropRatioType {
        self.ratio_type
    }

    pub fn rotation_angle(&self) -> f64 {
        self.rotation_angle
    }

    pub fn horizontal_angle(&self) -> f64 {
        self.horizontal_angle
    }

    pub fn is_flip_horizontal(&self) -> bool {
        self.flip_horizontal
    }

    pub fn is_flip_vertical(&self) -> bool {
        self.flip_vertical
    }

    pub fn engagement(&self) -> Engagement {
        self.engagement
    }

    /// Image-local to view transform.
    pub fn display_transform(&self) -> Affine {
        self.display
    }

    /// View to image-local transform.
    pub fn display_inverse(&self) -> Affine {
        self.display_inverse
    }

    /// Total on-screen angle of the image content, in degrees.
    pub fn display_angle(&self) -> f64 {
        let (fx, fy) = self.flip_signs();
        self.rotation_angle * fx * fy + self.horizontal_angle
    }

    /// The image rect's corners as shown on screen, in TL, TR, BR, BL order
    /// of the local frame.
    pub fn image_polygon(&self) -> [Point; 4] {
        rect_to_points(&self.image).map(|p| self.display.apply(p))
    }

    /// Edges of [`Self::image_polygon`].
    pub fn image_lines(&self) -> Vec<LineSegment> {
        polygon_lines(&self.image_polygon())
    }

    /// Axis-aligned bounds of the on-screen image outline.
    pub fn image_bounds(&self) -> Rect {
        let polygon = self.image_polygon();
        polygon.iter().skip(1).fold(
            Rect::new(polygon[0].x, polygon[0].y, polygon[0].x, polygon[0].y),
            |acc, p| {
                Rect::new(
                    acc.left.min(p.x),
                    acc.top.min(p.y),
                    acc.right.max(p.x),
                    acc.bottom.max(p.y),
                )
            },
        )
    }

    // ===== Host updates =====

    /// The viewport changed. Refit the crop to the new limit, keeping the
    /// content under it.
    pub fn sync_limit_rect(&mut self, limit: Rect) {
        let pivot = self.crop_center_in_image();
        self.limit = limit;
        self.rebuild_transform();
        self.enlarge_around(pivot);
        debug!("sync_limit_rect: limit {:?} crop {:?}", self.limit, self.crop);
    }

    /// Replace the backing image rect without refitting anything.
    pub fn set_image_rect(&mut self, image: Rect) {
        self.image = image;
    }

    pub fn set_max_scale_factor(&mut self, factor_w: f64, factor_h: f64) {
        self.config.max_scale_factor_w = factor_w;
        self.config.max_scale_factor_h = factor_h;
    }

    /// Set the absolute coarse rotation.
    ///
    /// `angle` must be a whole number of quarter turns; it is stored
    /// normalized to `0`, `90`, `180` or `270`. Any other value is refused
    /// and leaves the session untouched.
    pub fn sync_rotation_angle(&mut self, angle: f64) -> Result<(), AngleError> {
        let turns = angle / QUARTER_TURN;
        if !turns.is_finite() || (turns - turns.round()).abs() > EQUALITY_THRESHOLD {
            warn!("sync_rotation_angle: rejected {}", angle);
            return Err(AngleError::NotQuarterTurn(angle));
        }
        let new_turns = (turns.round() as i64).rem_euclid(4);
        let old_turns = (self.rotation_angle / QUARTER_TURN).round() as i64;

        let pivot = self.crop_center_in_image();
        if (new_turns - old_turns).rem_euclid(2) == 1 {
            self.crop.swap_width_height();
            self.ratio = self.ratio.swapped();
        }
        self.rotation_angle = new_turns as f64 * QUARTER_TURN;
        self.rebuild_transform();
        self.enlarge_around(pivot);
        debug!(
            "sync_rotation_angle: {} crop {:?} image {:?}",
            self.rotation_angle, self.crop, self.image
        );
        Ok(())
    }

    /// Rotate relative to the current angle.
    pub fn rotate_by(&mut self, step: f64) -> Result<(), AngleError> {
        if !(step / QUARTER_TURN).is_finite() {
            return Err(AngleError::NotQuarterTurn(step));
        }
        self.sync_rotation_angle(self.rotation_angle + step)
            .map_err(|_| AngleError::NotQuarterTurn(step))
    }

    /// Set the fine tilt. The crop is kept; the image grows to cover it.
    pub fn sync_horizontal_angle(&mut self, angle: f64) {
        self.horizontal_angle = angle;
        self.rebuild_transform();
        self.cover_crop();
        debug!("sync_horizontal_angle: {} image {:?}", angle, self.image);
    }

    pub fn set_flip(&mut self, flip_horizontal: bool, flip_vertical: bool) {
        self.flip_horizontal = flip_horizontal;
        self.flip_vertical = flip_vertical;
        self.rebuild_transform();
        self.cover_crop();
        debug!("set_flip: h {} v {}", flip_horizontal, flip_vertical);
    }

    /// Select a ratio preset.
    ///
    /// A locked preset reshapes the crop to the largest rect of that ratio
    /// inside both the limit and the image outline, then grows it back to
    /// fill the limit. `Free` only lifts the lock.
    pub fn set_ratio(&mut self, ratio_type: CropRatioType) {
        self.ratio_type = ratio_type;
        self.ratio = ratio_type.ratio(&self.config);
        debug!("set_ratio: {} -> {:?}", ratio_type, self.ratio);
        if !self.ratio.is_locked() {
            return;
        }
        let crop = compute_max_rect_within_limit(&self.limit, self.ratio.rate());
        self.crop = limit_rect_in_rotated(&crop, &self.image_lines());
        self.image_crop_compare();
        self.enlarge_crop_area();
    }

    /// Select a ratio preset by its toolbar code.
    pub fn select_ratio(&mut self, code: u32) -> Result<(), RatioError> {
        match CropRatioType::try_from(code) {
            Ok(ratio_type) => {
                self.set_ratio(ratio_type);
                Ok(())
            }
            Err(err) => {
                warn!("select_ratio: {}", err);
                Err(err)
            }
        }
    }

    // ===== Fitting =====

    /// True if the image may still be shown larger relative to the crop on
    /// both axes.
    pub fn could_enlarge_image(&self) -> bool {
        self.could_enlarge_image_w() && self.could_enlarge_image_h()
    }

    pub fn could_enlarge_image_w(&self) -> bool {
        self.image.width() / self.crop.width() < self.config.max_scale_factor_w
    }

    pub fn could_enlarge_image_h(&self) -> bool {
        self.image.height() / self.crop.height() < self.config.max_scale_factor_h
    }

    /// Grow the crop to the largest rect of its aspect inside the limit,
    /// scaling the image with it so the content under the crop stays put.
    pub fn enlarge_crop_area(&mut self) {
        let pivot = self.crop_center_in_image();
        self.enlarge_around(pivot);
    }

    /// Grow the image about the limit center until it covers every crop
    /// corner, then shift it for anything scaling could not reach.
    pub fn cover_crop(&mut self) {
        let origin = self.limit.center();
        let corners = self.display_inverse.apply_all(&rect_to_points(&self.crop));
        let scale = find_suitable_scale(&corners, &self.image, origin);
        self.image = scale_rect_based_on_point(&self.image, origin, scale);
        let (dx, dy) = fix_image_move(&corners, &self.image);
        self.image.translate(dx, dy);
    }

    /// Grow the image about its own center if it is narrower or shorter
    /// than the crop.
    pub fn image_crop_compare(&mut self) {
        let scale = (self.crop.width() / self.image.width())
            .max(self.crop.height() / self.image.height());
        if scale > 1.0 {
            self.image.scale_about_center(scale);
        }
    }

    /// Capture the final crop for the apply stage.
    pub fn commit(&self) -> CropCommit {
        CropCommit::capture(self)
    }

    /// Where the crop center sits in the image-local frame.
    pub fn crop_center_in_image(&self) -> Point {
        self.display_inverse.apply(self.crop.center())
    }

    fn enlarge_around(&mut self, pivot: Point) {
        let rate = if self.ratio.is_locked() {
            self.ratio.rate()
        } else {
            self.crop.width() / self.crop.height()
        };
        let new_crop = compute_max_rect_within_limit(&self.limit, rate);
        let scale = new_crop.width() / self.crop.width();

        self.image = scale_rect_based_on_point(&self.image, pivot, scale);
        let target = self.display_inverse.apply(new_crop.center());
        self.image.translate(target.x - pivot.x, target.y - pivot.y);
        self.crop = new_crop;
    }

    fn flip_signs(&self) -> (f64, f64) {
        (
            if self.flip_horizontal { -1.0 } else { 1.0 },
            if self.flip_vertical { -1.0 } else { 1.0 },
        )
    }

    fn rebuild_transform(&mut self) {
        let origin = self.limit.center();
        let (fx, fy) = self.flip_signs();
        let angle = self.display_angle();
        self.display = Affine::translate(-origin.x, -origin.y)
            .then(Affine::rotate(angle))
            .then(Affine::scale(fx, fy))
            .then(Affine::translate(origin.x, origin.y));
        self.display_inverse = Affine::translate(-origin.x, -origin.y)
            .then(Affine::scale(fx, fy))
            .then(Affine::rotate(-angle))
            .then(Affine::translate(origin.x, origin.y));
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

//! Committed crop and the raster plan derived from it.
//!
//! # Coordinate System
//!
//! The committed crop is stored normalized to the image rect: `(0, 0)` is
//! the image's top-left and `(1, 1)` its bottom-right, in the image's own
//! unrotated frame. The rect is centered on the source point under the
//! on-screen crop center and sized like the on-screen crop, so its pixel
//! version is the output window before rotation and flips.

use super::{ApplyError, PixelBuffer};
use crate::crop::CropShow;
use crate::geometry::{Affine, Rect};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Crop rect and transform captured when editing ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropCommit {
    /// Output window, normalized to the image rect.
    pub crop: Rect,
    pub rotation_angle: f64,
    pub horizontal_angle: f64,
    pub flip_horizontal: bool,
    pub flip_vertical: bool,
}

impl Default for CropCommit {
    fn default() -> Self {
        Self {
            crop: Rect::new(0.0, 0.0, 1.0, 1.0),
            rotation_angle: 0.0,
            horizontal_angle: 0.0,
            flip_horizontal: false,
            flip_vertical: false,
        }
    }
}

impl CropCommit {
    pub fn capture(show: &CropShow) -> Self {
        let image = show.image_rect();
        let crop = show.crop_rect();
        let center = show.crop_center_in_image();
        let center_x = (center.x - image.left) / image.width();
        let center_y = (center.y - image.top) / image.height();
        let half_w = crop.width() / 2.0 / image.width();
        let half_h = crop.height() / 2.0 / image.height();

        Self {
            crop: Rect::new(
                center_x - half_w,
                center_y - half_h,
                center_x + half_w,
                center_y + half_h,
            ),
            rotation_angle: show.rotation_angle(),
            horizontal_angle: show.horizontal_angle(),
            flip_horizontal: show.is_flip_horizontal(),
            flip_vertical: show.is_flip_vertical(),
        }
    }

    /// True if applying this commit would return the source unchanged.
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }

    /// Total rotation applied to the pixels, in degrees.
    pub fn display_angle(&self) -> f64 {
        let fx = if self.flip_horizontal { -1.0 } else { 1.0 };
        let fy = if self.flip_vertical { -1.0 } else { 1.0 };
        self.rotation_angle * fx * fy + self.horizontal_angle
    }

    /// Resolve against a source of `width` x `height` pixels.
    pub fn plan(&self, width: u32, height: u32) -> Result<RasterPlan, ApplyError> {
        if width == 0 || height == 0 {
            return Err(ApplyError::ZeroDimensions);
        }
        let crop = self.crop.revert(width as f64, height as f64);
        let crop_w = crop.width();
        let crop_h = crop.height();
        let output_width = crop_w.round();
        let output_height = crop_h.round();
        if output_width < 1.0 || output_height < 1.0 {
            return Err(ApplyError::EmptyCrop {
                width: crop_w,
                height: crop_h,
            });
        }

        let sx = if self.flip_horizontal { -1.0 } else { 1.0 };
        let sy = if self.flip_vertical { -1.0 } else { 1.0 };
        let transform = Affine::translate(-crop.left, -crop.top)
            .then(Affine::translate(-crop_w / 2.0, -crop_h / 2.0))
            .then(Affine::rotate(self.display_angle()))
            .then(Affine::translate(crop_w / 2.0, crop_h / 2.0))
            .then(Affine::scale(sx, sy))
            .then(Affine::translate(
                if self.flip_horizontal { crop_w } else { 0.0 },
                if self.flip_vertical { crop_h } else { 0.0 },
            ));

        Ok(RasterPlan {
            crop,
            output_width: output_width as u32,
            output_height: output_height as u32,
            transform,
        })
    }
}

/// Everything a rasterizer needs to produce the cropped output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RasterPlan {
    /// Output window in source pixels.
    pub crop: Rect,
    pub output_width: u32,
    pub output_height: u32,
    /// Source pixel to output pixel.
    pub transform: Affine,
}

/// Draws a source buffer through a [`RasterPlan`].
///
/// Implemented by the host: a canvas, a GPU pass or a CPU resampler.
pub trait Rasterizer {
    type Error: Display;

    fn rasterize(
        &mut self,
        source: &PixelBuffer,
        plan: &RasterPlan,
    ) -> Result<PixelBuffer, Self::Error>;
}

/// Applies one committed crop to source images.
#[derive(Debug, Clone, Default)]
pub struct CropFilter {
    commit: CropCommit,
}

impl CropFilter {
    pub fn new(commit: CropCommit) -> Self {
        Self { commit }
    }

    pub fn commit(&self) -> &CropCommit {
        &self.commit
    }

    /// Crop, rotate and flip `source` with `rasterizer`.
    pub fn render<R: Rasterizer>(
        &self,
        source: &PixelBuffer,
        rasterizer: &mut R,
    ) -> Result<PixelBuffer, ApplyError> {
        source.validate()?;
        let plan = self.commit.plan(source.width, source.height)?;
        debug!(
            "render: {}x{} -> {}x{} via {:?}",
            source.width, source.height, plan.output_width, plan.output_height, plan.transform
        );

        let output = rasterizer
            .rasterize(source, &plan)
            .map_err(|err| ApplyError::Rasterizer(err.to_string()))?;
        if output.width != plan.output_width || output.height != plan.output_height {
            return Err(ApplyError::Rasterizer(format!(
                "expected {}x{} output, got {}x{}",
                plan.output_width, plan.output_height, output.width, output.height
            )));
        }
        output.validate()?;
        Ok(output)
    }
}

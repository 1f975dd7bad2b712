//! Committed crop bindings.
//!
//! The host rasterizes; these types only hand over the numbers it needs.

use crate::session::rect_to_vec;
use cropframe_core::{CropCommit, RasterPlan};
use wasm_bindgen::prelude::*;

/// A committed crop, normalized to the image.
#[wasm_bindgen]
pub struct JsCropCommit {
    inner: CropCommit,
}

impl From<CropCommit> for JsCropCommit {
    fn from(inner: CropCommit) -> Self {
        Self { inner }
    }
}

#[wasm_bindgen]
impl JsCropCommit {
    /// Crop window as `[left, top, right, bottom]` fractions of the image.
    pub fn crop(&self) -> Vec<f64> {
        rect_to_vec(&self.inner.crop)
    }

    #[wasm_bindgen(getter)]
    pub fn rotation_angle(&self) -> f64 {
        self.inner.rotation_angle
    }

    #[wasm_bindgen(getter)]
    pub fn horizontal_angle(&self) -> f64 {
        self.inner.horizontal_angle
    }

    #[wasm_bindgen(getter)]
    pub fn flip_horizontal(&self) -> bool {
        self.inner.flip_horizontal
    }

    #[wasm_bindgen(getter)]
    pub fn flip_vertical(&self) -> bool {
        self.inner.flip_vertical
    }

    /// True if exporting would leave the image unchanged.
    pub fn is_identity(&self) -> bool {
        self.inner.is_identity()
    }

    /// Resolve the commit against a source of `width` x `height` pixels.
    ///
    /// # Errors
    /// Fails for a zero-sized source or a crop that rounds to no pixels.
    pub fn plan(&self, width: u32, height: u32) -> Result<JsRasterPlan, JsValue> {
        self.inner
            .plan(width, height)
            .map(JsRasterPlan::from)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

/// Output size and pixel transform for one export.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const plan = session.commit().plan(bitmap.width, bitmap.height);
/// const canvas = new OffscreenCanvas(plan.output_width, plan.output_height);
/// const ctx = canvas.getContext('2d');
/// ctx.setTransform(...plan.transform());
/// ctx.drawImage(bitmap, 0, 0);
/// ```
#[wasm_bindgen]
pub struct JsRasterPlan {
    inner: RasterPlan,
}

impl From<RasterPlan> for JsRasterPlan {
    fn from(inner: RasterPlan) -> Self {
        Self { inner }
    }
}

#[wasm_bindgen]
impl JsRasterPlan {
    /// Crop window in source pixels.
    pub fn crop(&self) -> Vec<f64> {
        rect_to_vec(&self.inner.crop)
    }

    #[wasm_bindgen(getter)]
    pub fn output_width(&self) -> u32 {
        self.inner.output_width
    }

    #[wasm_bindgen(getter)]
    pub fn output_height(&self) -> u32 {
        self.inner.output_height
    }

    /// Source to output transform as `[a, b, c, d, e, f]`.
    pub fn transform(&self) -> Vec<f64> {
        self.inner.transform.to_array().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cropframe_core::Rect;

    fn half_commit() -> JsCropCommit {
        JsCropCommit::from(CropCommit {
            crop: Rect::new(0.25, 0.25, 0.75, 0.75),
            ..CropCommit::default()
        })
    }

    #[test]
    fn test_default_commit_is_identity() {
        let commit = JsCropCommit::from(CropCommit::default());
        assert!(commit.is_identity());
        assert_eq!(commit.crop(), vec![0.0, 0.0, 1.0, 1.0]);
        assert!(!commit.flip_horizontal());
        assert!(!commit.flip_vertical());
    }

    #[test]
    fn test_plan_pixels() {
        let plan = match half_commit().plan(400, 200) {
            Ok(plan) => plan,
            Err(_) => panic!("plan should resolve"),
        };
        assert_eq!(plan.output_width(), 200);
        assert_eq!(plan.output_height(), 100);
        assert_eq!(plan.crop(), vec![100.0, 50.0, 300.0, 150.0]);
        let t = plan.transform();
        assert_eq!(t.len(), 6);
        assert!((t[4] + 100.0).abs() < 1e-9);
        assert!((t[5] + 50.0).abs() < 1e-9);
    }
}

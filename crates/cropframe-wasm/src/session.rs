//! Crop session bindings.
//!
//! Rectangles cross the boundary as `[left, top, right, bottom]` arrays of
//! numbers, in the same units as the limit rect passed to `init`.

use crate::apply::JsCropCommit;
use cropframe_core::{CropConfig, CropOverlay, CropRatioType, CropShow, OverlayStyle, Rect};
use wasm_bindgen::prelude::*;

pub(crate) fn rect_to_vec(rect: &Rect) -> Vec<f64> {
    vec![rect.left, rect.top, rect.right, rect.bottom]
}

/// Helper struct for deserializing JS overlay options via serde.
///
/// Both fields are optional: `{ split: 3 }` draws a rule-of-thirds grid with
/// the default style.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct OverlayOptionsJs {
    split: u32,
    style: OverlayStyle,
}

/// One interactive crop session.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const session = new JsCropSession();
/// session.init(0, 0, canvas.width, canvas.height, image.width / image.height);
/// session.select_ratio(3); // 1:1
///
/// canvas.onpointerdown = (e) => session.is_crop_rect_touch(e.offsetX, e.offsetY);
/// canvas.onpointermove = (e) => session.move_crop_rect(e.movementX, e.movementY);
/// canvas.onpointerup = () => session.end_crop_rect_move();
/// ```
#[wasm_bindgen]
pub struct JsCropSession {
    inner: CropShow,
}

impl Default for JsCropSession {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl JsCropSession {
    /// Create a session with the default configuration.
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsCropSession {
        JsCropSession {
            inner: CropShow::default(),
        }
    }

    /// Create a session from a partial `CropConfig` object.
    pub fn with_config(config: JsValue) -> Result<JsCropSession, JsValue> {
        let config: CropConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Invalid crop config: {}", e)))?;
        Ok(JsCropSession {
            inner: CropShow::new(config),
        })
    }

    /// Start editing an image of aspect `image_ratio` inside the given limit.
    pub fn init(&mut self, left: f64, top: f64, right: f64, bottom: f64, image_ratio: f64) {
        self.inner
            .init(Rect::new(left, top, right, bottom), image_ratio);
    }

    pub fn sync_limit_rect(&mut self, left: f64, top: f64, right: f64, bottom: f64) {
        self.inner.sync_limit_rect(Rect::new(left, top, right, bottom));
    }

    pub fn set_image_rect(&mut self, left: f64, top: f64, right: f64, bottom: f64) {
        self.inner.set_image_rect(Rect::new(left, top, right, bottom));
    }

    pub fn sync_rotation_angle(&mut self, angle: f64) -> Result<(), JsValue> {
        self.inner
            .sync_rotation_angle(angle)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Rotate by a signed number of degrees, a multiple of 90.
    pub fn rotate_by(&mut self, step: f64) -> Result<(), JsValue> {
        self.inner
            .rotate_by(step)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn sync_horizontal_angle(&mut self, angle: f64) {
        self.inner.sync_horizontal_angle(angle);
    }

    pub fn set_flip(&mut self, flip_horizontal: bool, flip_vertical: bool) {
        self.inner.set_flip(flip_horizontal, flip_vertical);
    }

    /// Select a ratio by toolbar code (0 = free, 1 = horizontal, 2 = vertical,
    /// 3 = 1:1, 4 = 16:9, 5 = 9:16, 6 = 4:3, 7 = 3:4, 8 = 3:2, 9 = 2:3).
    pub fn select_ratio(&mut self, code: u32) -> Result<(), JsValue> {
        self.inner
            .select_ratio(code)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Select a ratio by name, e.g. `"free"` or `"16:9"`.
    pub fn select_ratio_name(&mut self, name: &str) -> Result<(), JsValue> {
        let ratio_type: CropRatioType = name
            .parse()
            .map_err(|e: cropframe_core::RatioError| JsValue::from_str(&e.to_string()))?;
        self.inner.set_ratio(ratio_type);
        Ok(())
    }

    pub fn set_max_scale_factor(&mut self, factor_w: f64, factor_h: f64) {
        self.inner.set_max_scale_factor(factor_w, factor_h);
    }

    pub fn could_enlarge_image(&self) -> bool {
        self.inner.could_enlarge_image()
    }

    pub fn enlarge_crop_area(&mut self) {
        self.inner.enlarge_crop_area();
    }

    pub fn is_crop_rect_touch(&mut self, x: f64, y: f64) -> bool {
        self.inner.is_crop_rect_touch(x, y)
    }

    pub fn move_crop_rect(&mut self, dx: f64, dy: f64) {
        self.inner.move_crop_rect(dx, dy);
    }

    pub fn end_crop_rect_move(&mut self) {
        self.inner.end_crop_rect_move();
    }

    pub fn crop_rect(&self) -> Vec<f64> {
        rect_to_vec(&self.inner.crop_rect())
    }

    pub fn image_rect(&self) -> Vec<f64> {
        rect_to_vec(&self.inner.image_rect())
    }

    pub fn limit_rect(&self) -> Vec<f64> {
        rect_to_vec(&self.inner.limit_rect())
    }

    /// On-screen image corners as `[x0, y0, x1, y1, x2, y2, x3, y3]`.
    pub fn image_polygon(&self) -> Vec<f64> {
        self.inner
            .image_polygon()
            .iter()
            .flat_map(|p| [p.x, p.y])
            .collect()
    }

    /// Image-local to view transform as `[a, b, c, d, e, f]`, ready for
    /// `CanvasRenderingContext2D.setTransform`.
    pub fn display_transform(&self) -> Vec<f64> {
        self.inner.display_transform().to_array().to_vec()
    }

    #[wasm_bindgen(getter)]
    pub fn rotation_angle(&self) -> f64 {
        self.inner.rotation_angle()
    }

    #[wasm_bindgen(getter)]
    pub fn horizontal_angle(&self) -> f64 {
        self.inner.horizontal_angle()
    }

    /// Overlay shapes for the current frame, as a plain object.
    pub fn overlay(&self, split: u32) -> Result<JsValue, JsValue> {
        let overlay = self.build_overlay(&OverlayOptionsJs {
            split,
            ..Default::default()
        });
        serde_wasm_bindgen::to_value(&overlay).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Overlay shapes with a custom style, from `{ split?, style? }`.
    pub fn overlay_with(&self, options: JsValue) -> Result<JsValue, JsValue> {
        let options: OverlayOptionsJs = serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsValue::from_str(&format!("Invalid overlay options: {}", e)))?;
        let overlay = self.build_overlay(&options);
        serde_wasm_bindgen::to_value(&overlay).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Snapshot the crop for export.
    pub fn commit(&self) -> JsCropCommit {
        JsCropCommit::from(self.inner.commit())
    }
}

impl JsCropSession {
    fn build_overlay(&self, options: &OverlayOptionsJs) -> CropOverlay {
        CropOverlay::build(&self.inner, &options.style, options.split)
    }
}

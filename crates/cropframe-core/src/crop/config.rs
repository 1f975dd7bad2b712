//! Tunables for a crop session.

use serde::{Deserialize, Serialize};

/// Default minimum crop side, in view units.
pub const DEFAULT_MIN_SIDE_LENGTH: f64 = 90.0;
/// Default width of the touch ring around the crop outline, in view units.
pub const DEFAULT_TOUCH_BOUND: f64 = 20.0;
/// Default zoom limit: the image may not be shown larger than this many crop widths.
pub const BASE_SCALE_VALUE: f64 = 1.0;

/// Settings for a [`super::CropShow`].
///
/// Missing fields fall back to their defaults when deserializing, so hosts
/// can persist only what they override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropConfig {
    /// Smallest allowed crop width or height.
    pub min_side_length: f64,
    /// Half-width of the band around each crop edge that counts as a hit.
    pub touch_bound: f64,
    /// Upper bound on `image.width / crop.width` before shrinking drags stop.
    pub max_scale_factor_w: f64,
    /// Upper bound on `image.height / crop.height` before shrinking drags stop.
    pub max_scale_factor_h: f64,
    /// Screen width, used by the screen-shaped ratio presets.
    pub screen_width: f64,
    /// Screen height, used by the screen-shaped ratio presets.
    pub screen_height: f64,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            min_side_length: DEFAULT_MIN_SIDE_LENGTH,
            touch_bound: DEFAULT_TOUCH_BOUND,
            max_scale_factor_w: BASE_SCALE_VALUE,
            max_scale_factor_h: BASE_SCALE_VALUE,
            screen_width: 1080.0,
            screen_height: 1920.0,
        }
    }
}

impl CropConfig {
    /// Longer screen side, rounded up.
    pub fn screen_max_side(&self) -> f64 {
        self.screen_width.max(self.screen_height).ceil()
    }

    /// Shorter screen side, rounded up.
    pub fn screen_min_side(&self) -> f64 {
        self.screen_width.min(self.screen_height).ceil()
    }
}

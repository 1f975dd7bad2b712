//! Aspect ratio presets offered to the user.

use super::{CropConfig, RatioError};
use crate::geometry::Ratio;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A ratio selection from the crop toolbar.
///
/// `Horizontal` and `Vertical` follow the shape of the device screen, the
/// rest are fixed presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropRatioType {
    #[default]
    Free,
    Horizontal,
    Vertical,
    Ratio1x1,
    Ratio16x9,
    Ratio9x16,
    Ratio4x3,
    Ratio3x4,
    Ratio3x2,
    Ratio2x3,
}

impl CropRatioType {
    /// Every preset, in toolbar order. The index is the selection code.
    pub const ALL: [CropRatioType; 10] = [
        CropRatioType::Free,
        CropRatioType::Horizontal,
        CropRatioType::Vertical,
        CropRatioType::Ratio1x1,
        CropRatioType::Ratio16x9,
        CropRatioType::Ratio9x16,
        CropRatioType::Ratio4x3,
        CropRatioType::Ratio3x4,
        CropRatioType::Ratio3x2,
        CropRatioType::Ratio2x3,
    ];

    /// Concrete ratio for this preset. `Free` maps to [`Ratio::FREE`].
    pub fn ratio(self, config: &CropConfig) -> Ratio {
        match self {
            CropRatioType::Free => Ratio::FREE,
            CropRatioType::Horizontal => {
                Ratio::new(config.screen_max_side(), config.screen_min_side())
            }
            CropRatioType::Vertical => {
                Ratio::new(config.screen_min_side(), config.screen_max_side())
            }
            CropRatioType::Ratio1x1 => Ratio::new(1.0, 1.0),
            CropRatioType::Ratio16x9 => Ratio::new(16.0, 9.0),
            CropRatioType::Ratio9x16 => Ratio::new(9.0, 16.0),
            CropRatioType::Ratio4x3 => Ratio::new(4.0, 3.0),
            CropRatioType::Ratio3x4 => Ratio::new(3.0, 4.0),
            CropRatioType::Ratio3x2 => Ratio::new(3.0, 2.0),
            CropRatioType::Ratio2x3 => Ratio::new(2.0, 3.0),
        }
    }

    /// Selection code, the inverse of `TryFrom<u32>`.
    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn as_label(self) -> &'static str {
        match self {
            CropRatioType::Free => "free",
            CropRatioType::Horizontal => "horizontal",
            CropRatioType::Vertical => "vertical",
            CropRatioType::Ratio1x1 => "1:1",
            CropRatioType::Ratio16x9 => "16:9",
            CropRatioType::Ratio9x16 => "9:16",
            CropRatioType::Ratio4x3 => "4:3",
            CropRatioType::Ratio3x4 => "3:4",
            CropRatioType::Ratio3x2 => "3:2",
            CropRatioType::Ratio2x3 => "2:3",
        }
    }
}

impl TryFrom<u32> for CropRatioType {
    type Error = RatioError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        CropRatioType::ALL
            .get(value as usize)
            .copied()
            .ok_or(RatioError::Unknown(value))
    }
}

impl fmt::Display for CropRatioType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

impl FromStr for CropRatioType {
    type Err = RatioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        CropRatioType::ALL
            .iter()
            .copied()
            .find(|preset| preset.as_label() == needle)
            .ok_or_else(|| RatioError::UnknownName(s.to_string()))
    }
}

//! Interactive crop state.
//!
//! [`CropShow`] owns the limit, image and crop rectangles of one edit
//! session along with the ratio lock, rotation, tilt, flips and the touch
//! state of the active drag. Every public mutation re-derives the crop and
//! image rects so that afterwards:
//!
//! - the crop lies inside the limit,
//! - a locked crop has exactly the locked aspect,
//! - neither crop side is shorter than the minimum side length,
//! - the crop lies inside the image outline as shown on screen.

mod config;
mod engage;
mod error;
mod gesture;
mod ratio;
mod show;

pub use config::{CropConfig, BASE_SCALE_VALUE, DEFAULT_MIN_SIDE_LENGTH, DEFAULT_TOUCH_BOUND};
pub use engage::{EngagedEdges, Engagement, SidePromotion};
pub use error::{AngleError, RatioError};
pub use ratio::CropRatioType;
pub use show::{CropShow, QUARTER_TURN};

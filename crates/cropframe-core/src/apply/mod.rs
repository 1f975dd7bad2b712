//! Apply a finished crop to source pixels.
//!
//! [`CropCommit`] snapshots the crop session once editing ends. A
//! [`CropFilter`] resolves it against the source dimensions into a
//! [`RasterPlan`] and hands that to a host [`Rasterizer`], which does the
//! actual sampling.

mod buffer;
mod error;
mod filter;

pub use buffer::PixelBuffer;
pub use error::ApplyError;
pub use filter::{CropCommit, CropFilter, RasterPlan, Rasterizer};

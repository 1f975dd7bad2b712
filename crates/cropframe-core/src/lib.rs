//! Cropframe Core - Interactive crop geometry
//!
//! This crate keeps a crop rectangle consistent with an image that can be
//! rotated in quarter turns, tilted and flipped, while the user drags the
//! crop outline, locks an aspect ratio or resizes the viewport. When editing
//! ends the crop is committed and handed to an external rasterizer.
//!
//! - [`geometry`] - points, rectangles, affine transforms and fitting
//! - [`crop`] - the [`CropShow`] session state machine
//! - [`apply`] - committing a crop and planning the raster pass
//! - [`overlay`] - mask, frame, grid and handle shapes for drawing

pub mod apply;
pub mod crop;
pub mod geometry;
pub mod overlay;

pub use apply::{ApplyError, CropCommit, CropFilter, PixelBuffer, RasterPlan, Rasterizer};
pub use crop::{AngleError, CropConfig, CropRatioType, CropShow, RatioError};
pub use geometry::{Affine, LineSegment, Point, Ratio, Rect};
pub use overlay::{CropOverlay, OverlayStyle};

/// Library version, from the crate manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

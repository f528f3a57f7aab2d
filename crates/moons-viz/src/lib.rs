#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// side by side canvas for a pair of images.
pub mod canvas;

/// drawing configuration.
pub mod config;

/// raster drawing primitives.
pub mod draw;

/// Error types for the visualization module.
pub mod error;

/// drawing local affine frames on a single image.
pub mod laf;

/// drawing matches between two images.
pub mod matches;

/// image inputs accepted by the drawing functions.
pub mod source;

pub use crate::canvas::MatchCanvas;
pub use crate::config::{DrawConfig, Rgb};
pub use crate::error::VizError;
pub use crate::laf::visualize_laf;
pub use crate::matches::{
    draw_laf_inliers_perspective_reprojected, draw_laf_matches, draw_laf_matches_from_result,
    LafMatches, MatchingResult,
};
pub use crate::source::ImageSource;

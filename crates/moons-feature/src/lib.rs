#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// conversions between keypoints, matches and local affine frames.
pub mod convert;

/// adapters turning keypoint detectors into local affine frame detectors.
pub mod detector;

/// Error types for the feature module.
pub mod error;

/// OpenCV-style keypoint and match records.
pub mod keypoint;

/// local affine frames.
pub mod laf;

pub use crate::convert::*;
pub use crate::detector::{FeatureExtractor, KeypointDetector, LafDetector, LafFeature};
pub use crate::error::FeatureError;
pub use crate::keypoint::{DMatch, KeyPoint};
pub use crate::laf::{get_laf_centers, perspective_transform_lafs, Laf};

#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// clipping lines to a rectangular viewport.
pub mod clip;

/// epipolar lines from a fundamental matrix.
pub mod epipolar;

/// Error types for the geometry module.
pub mod error;

/// lines, viewports and segments.
pub mod line;

/// small fixed size linear algebra and homography helpers.
pub mod linalg;

/// module containing parallelization utilities.
pub mod parallel;

pub use crate::clip::{clip_line, clip_lines, clip_segment, lines_to_start_end_points};
pub use crate::epipolar::{compute_correspond_epilines, compute_correspond_epilines_inverse};
pub use crate::error::GeometryError;
pub use crate::line::{Line, Point2, Segment, Viewport};
pub use crate::linalg::Mat3;
pub use crate::parallel::ExecutionStrategy;

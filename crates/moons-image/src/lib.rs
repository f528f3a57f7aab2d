#![deny(missing_docs)]
//! Image types and I/O used to visualize local features

/// image representation for computer vision purposes.
pub mod image;

/// color conversions between gray and rgb images.
pub mod color;

/// Error types for the image module.
pub mod error;

/// reading and writing images from disk.
pub mod io;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};

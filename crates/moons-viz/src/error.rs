use moons_geometry::GeometryError;
use moons_image::ImageError;

/// An error type for the visualization module.
#[derive(thiserror::Error, Debug)]
pub enum VizError {
    /// Error from the image module.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Error from the geometry module.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// A tentative correspondence points past the end of a frame list.
    #[error("Tentative index {index} out of range for {which} with {len} frames")]
    IndexOutOfRange {
        /// The frame list the index refers to.
        which: &'static str,
        /// The offending index.
        index: usize,
        /// The number of frames in the list.
        len: usize,
    },

    /// The inlier mask does not have one entry per tentative correspondence.
    #[error("Inlier mask has {0} entries but there are {1} tentative matches")]
    MaskLengthMismatch(usize, usize),

    /// Error to parse a json document.
    #[error("Failed to parse json. {0}")]
    Json(#[from] serde_json::Error),

    /// Error to read a file.
    #[error("Failed to manipulate the file. {0}")]
    Io(#[from] std::io::Error),
}

/// An error type for the feature module.
#[derive(thiserror::Error, Debug)]
pub enum FeatureError {
    /// Two sequences that must be paired element-wise have different lengths.
    #[error("Length mismatch: {0} has {1} elements but {2} were expected")]
    LengthMismatch(&'static str, usize, usize),

    /// Error from the image module.
    #[error("Image error. {0}")]
    Image(#[from] moons_image::ImageError),

    /// Error reported by a wrapped keypoint detector.
    #[error("Detector failed. {0}")]
    Detector(String),
}

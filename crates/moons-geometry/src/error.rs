/// An error type for the geometry module.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Both direction coefficients of the line are zero, so it has no direction.
    #[error("Degenerate line: both direction coefficients are zero")]
    DegenerateLine,

    /// The line does not cross the viewport.
    #[error("The line does not intersect the viewport")]
    NoIntersection,

    /// The viewport dimensions are not positive finite numbers.
    #[error("Invalid viewport (h: {0}, w: {1}), both sides must be positive")]
    InvalidViewport(f64, f64),

    /// The matrix cannot be inverted.
    #[error("Matrix is singular and cannot be inverted")]
    SingularMatrix,

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),

    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    ThreadPool(String),
}

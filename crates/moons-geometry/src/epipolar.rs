use crate::{
    line::{Line, Point2},
    linalg::{mul_mat33_vec3, transpose_mat33, Mat3},
};

const EPILINE_EPS: f64 = 1e-8;

/// Compute the epipolar lines of a set of points in the other view.
///
/// Each line is `F · [x, y, 1]ᵀ`, scaled so that `a² + b² = 1`. Lines in the second
/// image for points of the first image are obtained with `F`; use
/// [`compute_correspond_epilines_inverse`] for the other direction.
///
/// # Arguments
///
/// * `points` - The points in the source view.
/// * `fundamental` - The fundamental matrix relating both views with `x2ᵀ F x1 = 0`.
///
/// # Returns
///
/// One line per point, in the same order.
pub fn compute_correspond_epilines(points: &[Point2], fundamental: &Mat3) -> Vec<Line> {
    points
        .iter()
        .map(|p| {
            let [a, b, c] = mul_mat33_vec3(fundamental, &[p[0], p[1], 1.0]);
            let factor = a.hypot(b) + EPILINE_EPS;
            Line::new(a / factor, b / factor, c / factor)
        })
        .collect()
}

/// Compute the epipolar lines in the first image for points of the second image.
///
/// Equivalent to [`compute_correspond_epilines`] with `Fᵀ`.
pub fn compute_correspond_epilines_inverse(points: &[Point2], fundamental: &Mat3) -> Vec<Line> {
    compute_correspond_epilines(points, &transpose_mat33(fundamental))
}

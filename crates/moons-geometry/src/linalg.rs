use crate::{error::GeometryError, line::Point2};

/// A row major 3x3 matrix.
pub type Mat3 = [[f64; 3]; 3];

/// The 3x3 identity matrix.
pub const IDENTITY_MAT3: Mat3 = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

/// Below this magnitude the homogeneous coordinate is not divided out.
const HOMOGENEOUS_EPS: f64 = 1e-8;

/// Determinant of a 3x3 matrix.
#[rustfmt::skip]
pub fn det_mat33(m: &Mat3) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1]) -
    m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0]) +
    m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

/// Transpose of a 3x3 matrix.
pub fn transpose_mat33(m: &Mat3) -> Mat3 {
    let mut out = [[0.0; 3]; 3];
    for (i, row) in m.iter().enumerate() {
        for (j, v) in row.iter().enumerate() {
            out[j][i] = *v;
        }
    }
    out
}

#[rustfmt::skip]
fn adjugate_mat33(m: &Mat3) -> Mat3 {
    [
        [
            m[1][1] * m[2][2] - m[1][2] * m[2][1],
            m[0][2] * m[2][1] - m[0][1] * m[2][2],
            m[0][1] * m[1][2] - m[0][2] * m[1][1],
        ],
        [
            m[1][2] * m[2][0] - m[1][0] * m[2][2],
            m[0][0] * m[2][2] - m[0][2] * m[2][0],
            m[0][2] * m[1][0] - m[0][0] * m[1][2],
        ],
        [
            m[1][0] * m[2][1] - m[1][1] * m[2][0],
            m[0][1] * m[2][0] - m[0][0] * m[2][1],
            m[0][0] * m[1][1] - m[0][1] * m[1][0],
        ],
    ]
}

/// Inverse of a 3x3 matrix.
///
/// # Errors
///
/// Returns [`GeometryError::SingularMatrix`] if the determinant is close to zero.
pub fn inverse_mat33(m: &Mat3) -> Result<Mat3, GeometryError> {
    let det = det_mat33(m);
    if !det.is_finite() || det.abs() < 1e-12 {
        return Err(GeometryError::SingularMatrix);
    }

    let adj = adjugate_mat33(m);
    let inv_det = 1.0 / det;

    let mut inv = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            inv[i][j] = adj[i][j] * inv_det;
        }
    }
    Ok(inv)
}

/// Product of a 3x3 matrix and a 3d vector.
pub fn mul_mat33_vec3(m: &Mat3, v: &[f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// Apply a homography to a point and go back to euclidean coordinates.
///
/// Points mapped to the line at infinity keep their unscaled coordinates.
pub fn transform_point(m: &Mat3, p: &Point2) -> Point2 {
    let [x, y, z] = mul_mat33_vec3(m, &[p[0], p[1], 1.0]);
    let scale = if z.abs() > HOMOGENEOUS_EPS { 1.0 / z } else { 1.0 };
    [x * scale, y * scale]
}

/// Apply a homography to a set of points.
pub fn perspective_transform_points(m: &Mat3, points: &[Point2]) -> Vec<Point2> {
    points.iter().map(|p| transform_point(m, p)).collect()
}

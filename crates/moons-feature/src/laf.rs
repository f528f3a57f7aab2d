use serde::{Deserialize, Serialize};

use moons_geometry::{
    linalg::{transform_point, Mat3},
    Point2,
};

/// Number of points returned by [`Laf::boundary_points`] when drawing.
pub const DEFAULT_BOUNDARY_POINTS: usize = 50;

const SCALE_EPS: f64 = 1e-10;

/// A local affine frame `[A | c]` stored as a 2x3 row major matrix.
///
/// `c` is the center of the feature and `A` maps the unit circle onto the feature
/// ellipse, encoding scale, orientation and shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Laf(pub [[f64; 3]; 2]);

impl Laf {
    /// Create a frame from its center, isotropic scale and orientation in degrees.
    ///
    /// The affine part is `scale * [[cos θ, sin θ], [-sin θ, cos θ]]`.
    ///
    /// # Example
    ///
    /// ```
    /// use moons_feature::Laf;
    ///
    /// let laf = Laf::from_center_scale_ori([10.0, 20.0], 4.0, 30.0);
    /// assert_eq!(laf.center(), [10.0, 20.0]);
    /// assert!((laf.scale() - 4.0).abs() < 1e-6);
    /// assert!((laf.orientation() - 30.0).abs() < 1e-9);
    /// ```
    pub fn from_center_scale_ori(center: Point2, scale: f64, ori_deg: f64) -> Self {
        let (sin, cos) = ori_deg.to_radians().sin_cos();
        Laf([
            [scale * cos, scale * sin, center[0]],
            [-scale * sin, scale * cos, center[1]],
        ])
    }

    /// The center of the frame.
    pub fn center(&self) -> Point2 {
        [self.0[0][2], self.0[1][2]]
    }

    /// The isotropic scale, `sqrt(|det A|)`.
    pub fn scale(&self) -> f64 {
        let m = &self.0;
        let det = m[0][0] * m[1][1] - m[0][1] * m[1][0];
        (det.abs() + SCALE_EPS).sqrt()
    }

    /// The orientation in degrees, in `(-180, 180]`.
    pub fn orientation(&self) -> f64 {
        self.0[0][1].atan2(self.0[0][0]).to_degrees()
    }

    /// Return a frame with the affine part multiplied by `coef`, keeping the center.
    pub fn scaled(&self, coef: f64) -> Laf {
        let mut out = *self;
        for row in out.0.iter_mut() {
            row[0] *= coef;
            row[1] *= coef;
        }
        out
    }

    /// Return the frame translated by `offset`.
    pub fn translated(&self, offset: Point2) -> Laf {
        let mut out = *self;
        out.0[0][2] += offset[0];
        out.0[1][2] += offset[1];
        out
    }

    /// Map a point given in the frame's local coordinates to the image.
    pub fn apply(&self, p: &Point2) -> Point2 {
        let m = &self.0;
        [
            m[0][0] * p[0] + m[0][1] * p[1] + m[0][2],
            m[1][0] * p[0] + m[1][1] * p[1] + m[1][2],
        ]
    }

    /// Points to draw the frame as a polyline.
    ///
    /// The first point is the center, followed by `n_pts - 1` samples of the mapped unit
    /// circle starting from the local `(0, 1)` direction. Drawn in order, the polyline shows
    /// a radius for the orientation and the feature ellipse.
    pub fn boundary_points(&self, n_pts: usize) -> Vec<Point2> {
        let num_circle = n_pts.saturating_sub(1).max(2);
        let step = 2.0 * std::f64::consts::PI / (num_circle - 1) as f64;

        let mut pts = Vec::with_capacity(num_circle + 1);
        pts.push(self.center());
        for i in 0..num_circle {
            let (sin, cos) = (i as f64 * step).sin_cos();
            pts.push(self.apply(&[sin, cos]));
        }
        pts
    }

    /// Represent the frame by three points: `c + A[:, 0]`, `c + A[:, 1]` and `c`.
    pub fn to_three_points(&self) -> [Point2; 3] {
        let m = &self.0;
        [
            [m[0][2] + m[0][0], m[1][2] + m[1][0]],
            [m[0][2] + m[0][1], m[1][2] + m[1][1]],
            self.center(),
        ]
    }

    /// Build a frame back from the three points of [`Laf::to_three_points`].
    pub fn from_three_points(pts: &[Point2; 3]) -> Laf {
        let [p0, p1, c] = pts;
        Laf([
            [p0[0] - c[0], p1[0] - c[0], c[0]],
            [p0[1] - c[1], p1[1] - c[1], c[1]],
        ])
    }

    /// Map the frame with a homography.
    ///
    /// The three defining points are transformed and the frame is rebuilt from them,
    /// which is the local affine approximation of the homography at the center.
    pub fn perspective_transform(&self, homography: &Mat3) -> Laf {
        let pts = self.to_three_points();
        let warped = [
            transform_point(homography, &pts[0]),
            transform_point(homography, &pts[1]),
            transform_point(homography, &pts[2]),
        ];
        Laf::from_three_points(&warped)
    }
}

/// Map a set of frames with a homography.
pub fn perspective_transform_lafs(homography: &Mat3, lafs: &[Laf]) -> Vec<Laf> {
    lafs.iter()
        .map(|laf| laf.perspective_transform(homography))
        .collect()
}

/// Centers of a set of frames.
pub fn get_laf_centers(lafs: &[Laf]) -> Vec<Point2> {
    lafs.iter().map(Laf::center).collect()
}

use crate::error::GeometryError;

/// A 2d point in pixel coordinates as `[x, y]`.
pub type Point2 = [f64; 2];

/// Coefficients below this value, on a normalized line, are treated as zero.
pub(crate) const DEGENERATE_EPS: f64 = 1e-12;

/// A line in implicit form `a * x + b * y + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// Coefficient of x.
    pub a: f64,
    /// Coefficient of y.
    pub b: f64,
    /// Constant term.
    pub c: f64,
}

impl Line {
    /// Create a new line from its coefficients.
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Return the line scaled so that `a² + b² = 1`.
    ///
    /// With a normalized line, [`Line::signed_distance`] is a distance in pixels.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateLine`] when the direction coefficients vanish
    /// relative to the largest coefficient, or when any coefficient is not finite.
    pub fn normalized(&self) -> Result<Line, GeometryError> {
        let Line { a, b, c } = *self;
        if !(a.is_finite() && b.is_finite() && c.is_finite()) {
            return Err(GeometryError::DegenerateLine);
        }

        let norm = a.hypot(b);
        let largest = a.abs().max(b.abs()).max(c.abs());
        if norm == 0.0 || norm <= DEGENERATE_EPS * largest {
            return Err(GeometryError::DegenerateLine);
        }

        Ok(Line::new(a / norm, b / norm, c / norm))
    }

    /// Evaluate `a * x + b * y + c` at the given point.
    pub fn signed_distance(&self, p: &Point2) -> f64 {
        self.a * p[0] + self.b * p[1] + self.c
    }
}

impl From<[f64; 3]> for Line {
    fn from(abc: [f64; 3]) -> Self {
        Line::new(abc[0], abc[1], abc[2])
    }
}

impl From<Line> for [f64; 3] {
    fn from(line: Line) -> Self {
        [line.a, line.b, line.c]
    }
}

/// An axis aligned rectangle `[0, w] x [0, h]` with the origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    height: f64,
    width: f64,
}

impl Viewport {
    /// Create a viewport from its height and width, in image (row, col) order.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidViewport`] if a side is not a positive finite number.
    pub fn new(height: f64, width: f64) -> Result<Self, GeometryError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(height) || !valid(width) {
            return Err(GeometryError::InvalidViewport(height, width));
        }
        Ok(Self { height, width })
    }

    /// The height of the viewport.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The width of the viewport.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Slack allowed when testing whether a computed crossing is inside the viewport.
    pub fn tolerance(&self) -> f64 {
        1e-9 * self.width.max(self.height).max(1.0)
    }

    /// Whether `x` lies in `[0, w]` up to [`Viewport::tolerance`].
    pub fn contains_x(&self, x: f64) -> bool {
        let tol = self.tolerance();
        x >= -tol && x <= self.width + tol
    }

    /// Whether `y` lies in `[0, h]` up to [`Viewport::tolerance`].
    pub fn contains_y(&self, y: f64) -> bool {
        let tol = self.tolerance();
        y >= -tol && y <= self.height + tol
    }

    /// Whether the point lies inside the viewport up to [`Viewport::tolerance`].
    pub fn contains(&self, p: &Point2) -> bool {
        self.contains_x(p[0]) && self.contains_y(p[1])
    }

    /// Clamp a point into the viewport.
    pub fn clamp(&self, p: Point2) -> Point2 {
        [p[0].clamp(0.0, self.width), p[1].clamp(0.0, self.height)]
    }
}

/// The visible part of a line: two endpoints on the viewport border.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// First endpoint.
    pub start: Point2,
    /// Second endpoint.
    pub end: Point2,
}

impl Segment {
    /// Create a new segment.
    pub const fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Translate both endpoints by `offset`.
    pub fn translated(&self, offset: Point2) -> Segment {
        Segment::new(
            [self.start[0] + offset[0], self.start[1] + offset[1]],
            [self.end[0] + offset[0], self.end[1] + offset[1]],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn line_normalized() -> Result<(), GeometryError> {
        let line = Line::new(3.0, 4.0, 10.0).normalized()?;
        assert_relative_eq!(line.a, 0.6);
        assert_relative_eq!(line.b, 0.8);
        assert_relative_eq!(line.c, 2.0);
        assert_relative_eq!(line.signed_distance(&[0.0, 0.0]), 2.0);
        Ok(())
    }

    #[test]
    fn line_degenerate() {
        assert_eq!(
            Line::new(0.0, 0.0, 1.0).normalized(),
            Err(GeometryError::DegenerateLine)
        );
        assert_eq!(
            Line::new(1e-20, 0.0, 5.0).normalized(),
            Err(GeometryError::DegenerateLine)
        );
        assert_eq!(
            Line::new(f64::NAN, 1.0, 0.0).normalized(),
            Err(GeometryError::DegenerateLine)
        );
        // a tiny line through the origin is still a valid line
        assert!(Line::new(1e-20, 1e-20, 0.0).normalized().is_ok());
    }

    #[test]
    fn viewport_invalid() {
        assert_eq!(
            Viewport::new(0.0, 10.0),
            Err(GeometryError::InvalidViewport(0.0, 10.0))
        );
        assert!(Viewport::new(10.0, f64::INFINITY).is_err());
        assert!(Viewport::new(-1.0, 10.0).is_err());
    }

    #[test]
    fn viewport_contains() -> Result<(), GeometryError> {
        let vp = Viewport::new(10.0, 20.0)?;
        assert!(vp.contains(&[0.0, 0.0]));
        assert!(vp.contains(&[20.0, 10.0]));
        assert!(!vp.contains(&[20.5, 10.0]));
        assert!(!vp.contains(&[5.0, -0.1]));
        assert!(!vp.contains(&[f64::NAN, 1.0]));
        assert_eq!(vp.clamp([-1.0, 11.0]), [0.0, 10.0]);
        Ok(())
    }
}

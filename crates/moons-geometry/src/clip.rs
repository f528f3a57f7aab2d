use crate::{
    error::GeometryError,
    line::{Line, Point2, Segment, Viewport, DEGENERATE_EPS},
    parallel::{ExecutionStrategy, MapExt},
};

/// Clip an infinite line to the viewport border.
///
/// The line is written as `y = k * x + q` and crossed with the four borders:
///
/// * `p1 = (0, q)` on the left border,
/// * `p2 = (w, k * w + q)` on the right border,
/// * `p3 = (-q / k, 0)` on the top border,
/// * `p4 = ((h - q) / k, h)` on the bottom border.
///
/// The start is `p1` when it lies on the left border, otherwise `p3` for a non-negative
/// slope and `p4` for a negative one. The end is `p2` when it lies on the right border,
/// otherwise `p4` for a non-negative slope and `p3` for a negative one. So `start.x <= end.x`.
///
/// Axis aligned lines are handled exactly: a vertical line goes from `(x, 0)` to `(x, h)`
/// and a horizontal one from `(0, y)` to `(w, y)`.
///
/// # Arguments
///
/// * `line` - The line to clip.
/// * `viewport` - The clipping rectangle.
///
/// # Returns
///
/// The segment with both endpoints clamped into the viewport.
///
/// # Errors
///
/// * [`GeometryError::DegenerateLine`] if the line has no direction.
/// * [`GeometryError::NoIntersection`] if the line misses the viewport.
///
/// # Example
///
/// ```
/// use moons_geometry::{clip_line, Line, Viewport};
///
/// let viewport = Viewport::new(10.0, 10.0).unwrap();
/// let segment = clip_line(&Line::new(1.0, -1.0, 0.0), &viewport).unwrap();
///
/// assert_eq!(segment.start, [0.0, 0.0]);
/// assert_eq!(segment.end, [10.0, 10.0]);
/// ```
pub fn clip_line(line: &Line, viewport: &Viewport) -> Result<Segment, GeometryError> {
    let Line { a, b, c } = line.normalized()?;
    let (h, w) = (viewport.height(), viewport.width());

    // vertical: x = -c / a
    if b.abs() < DEGENERATE_EPS {
        let x = -c / a;
        if !viewport.contains_x(x) {
            return Err(GeometryError::NoIntersection);
        }
        return Ok(Segment::new(
            viewport.clamp([x, 0.0]),
            viewport.clamp([x, h]),
        ));
    }

    // horizontal: y = -c / b
    if a.abs() < DEGENERATE_EPS {
        let y = -c / b;
        if !viewport.contains_y(y) {
            return Err(GeometryError::NoIntersection);
        }
        return Ok(Segment::new(
            viewport.clamp([0.0, y]),
            viewport.clamp([w, y]),
        ));
    }

    let k = -a / b;
    let q = -c / b;

    // crossings with x = 0, x = w, y = 0, y = h
    let p1 = [0.0, q];
    let p2 = [w, k * w + q];
    let p3 = [-q / k, 0.0];
    let p4 = [(h - q) / k, h];

    let k_positive = k >= 0.0;

    let start = if viewport.contains_y(p1[1]) {
        p1
    } else if k_positive {
        p3
    } else {
        p4
    };

    let end = if viewport.contains_y(p2[1]) {
        p2
    } else if k_positive {
        p4
    } else {
        p3
    };

    if !viewport.contains(&start) || !viewport.contains(&end) {
        return Err(GeometryError::NoIntersection);
    }

    Ok(Segment::new(viewport.clamp(start), viewport.clamp(end)))
}

/// Clip a batch of lines to the viewport border.
///
/// Each line is clipped independently with [`clip_line`]. A line that cannot be clipped
/// does not abort the batch: its slot holds the error.
///
/// # Arguments
///
/// * `lines` - The lines to clip.
/// * `viewport` - The clipping rectangle.
/// * `strategy` - How to spread the work over threads.
///
/// # Returns
///
/// One result per line, at the same index as the input line.
pub fn clip_lines(
    lines: &[Line],
    viewport: &Viewport,
    strategy: ExecutionStrategy,
) -> Result<Vec<Result<Segment, GeometryError>>, GeometryError> {
    let segments = lines.map_with(strategy, |line| clip_line(line, viewport))?;

    let num_failed = segments.iter().filter(|s| s.is_err()).count();
    if num_failed > 0 {
        log::debug!(
            "{} of {} lines could not be clipped to {}x{}",
            num_failed,
            lines.len(),
            viewport.width(),
            viewport.height()
        );
    }

    Ok(segments)
}

/// Convert lines into start and end points inside an image of `h` rows and `w` columns.
///
/// Shorthand for [`clip_lines`] with the default execution strategy.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidViewport`] if `h` or `w` are not positive.
pub fn lines_to_start_end_points(
    lines: &[Line],
    h: f64,
    w: f64,
) -> Result<Vec<Result<Segment, GeometryError>>, GeometryError> {
    let viewport = Viewport::new(h, w)?;
    clip_lines(lines, &viewport, ExecutionStrategy::default())
}

const INSIDE: u8 = 0;
const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const TOP: u8 = 4;
const BOTTOM: u8 = 8;

/// Cohen-Sutherland converges in at most four steps for finite input.
const MAX_CLIP_ITERATIONS: usize = 8;

/// Region of `p` relative to the viewport, with crossings within
/// [`Viewport::tolerance`] counted as inside.
fn outcode(p: &Point2, viewport: &Viewport) -> u8 {
    let tol = viewport.tolerance();
    let mut code = INSIDE;
    if p[0] < -tol {
        code |= LEFT;
    } else if p[0] > viewport.width() + tol {
        code |= RIGHT;
    }
    if p[1] < -tol {
        code |= TOP;
    } else if p[1] > viewport.height() + tol {
        code |= BOTTOM;
    }
    code
}

/// Clip a finite segment to the viewport with the Cohen-Sutherland algorithm.
///
/// Endpoints already inside the viewport are kept untouched, and the direction of the
/// segment is preserved. Intersections are not clamped while clipping, so a segment
/// passing outside a corner is rejected instead of collapsing onto the corner.
///
/// # Returns
///
/// The visible part of the segment, or `None` when it lies outside the viewport or has
/// non-finite coordinates.
///
/// # Example
///
/// ```
/// use moons_geometry::{clip_segment, Segment, Viewport};
///
/// let viewport = Viewport::new(10.0, 10.0).unwrap();
/// let visible = clip_segment(&Segment::new([-5.0, 5.0], [5.0, 5.0]), &viewport).unwrap();
/// assert_eq!(visible, Segment::new([0.0, 5.0], [5.0, 5.0]));
/// ```
pub fn clip_segment(segment: &Segment, viewport: &Viewport) -> Option<Segment> {
    let finite = |p: &Point2| p[0].is_finite() && p[1].is_finite();
    if !finite(&segment.start) || !finite(&segment.end) {
        return None;
    }

    let (w, h) = (viewport.width(), viewport.height());
    let (mut p0, mut p1) = (segment.start, segment.end);
    let mut code0 = outcode(&p0, viewport);
    let mut code1 = outcode(&p1, viewport);

    for _ in 0..MAX_CLIP_ITERATIONS {
        if (code0 | code1) == INSIDE {
            return Some(Segment::new(viewport.clamp(p0), viewport.clamp(p1)));
        }
        if (code0 & code1) != INSIDE {
            return None;
        }

        let code_out = if code0 != INSIDE { code0 } else { code1 };
        let (dx, dy) = (p1[0] - p0[0], p1[1] - p0[1]);
        if !(dx.is_finite() && dy.is_finite()) {
            return None;
        }

        // a set bit guarantees the matching delta is non-zero
        let p = if code_out & BOTTOM != 0 {
            [p0[0] + dx * ((h - p0[1]) / dy), h]
        } else if code_out & TOP != 0 {
            [p0[0] - dx * (p0[1] / dy), 0.0]
        } else if code_out & RIGHT != 0 {
            [w, p0[1] + dy * ((w - p0[0]) / dx)]
        } else {
            [0.0, p0[1] - dy * (p0[0] / dx)]
        };

        if code_out == code0 {
            p0 = p;
            code0 = outcode(&p0, viewport);
        } else {
            p1 = p;
            code1 = outcode(&p1, viewport);
        }
    }

    None
}

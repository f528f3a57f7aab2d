use moons_feature::{laf::DEFAULT_BOUNDARY_POINTS, Laf};
use moons_geometry::{clip_segment, Point2, Segment, Viewport};
use moons_image::Image;

/// Set a pixel's color, ignoring coordinates outside the image.
#[inline]
fn set_pixel<const C: usize>(img: &mut Image<u8, C>, x: i64, y: i64, color: [u8; C]) {
    if x < 0 || y < 0 || x >= img.cols() as i64 || y >= img.rows() as i64 {
        return;
    }
    let start = (y as usize * img.cols() + x as usize) * C;
    img.as_slice_mut()[start..start + C].copy_from_slice(&color);
}

/// Draws a line on an image inplace using Bresenham's line algorithm.
///
/// Pixels falling outside the image are skipped.
///
/// # Arguments
///
/// * `img` - The image to draw on.
/// * `p0` - The start point of the line as a tuple of (x, y).
/// * `p1` - The end point of the line as a tuple of (x, y).
/// * `color` - The color of the line as an array of `C` elements.
/// * `thickness` - The side of the square brush stamped at each step.
pub fn draw_line<const C: usize>(
    img: &mut Image<u8, C>,
    p0: (i64, i64),
    p1: (i64, i64),
    color: [u8; C],
    thickness: usize,
) {
    let (mut x0, mut y0) = p0;
    let (x1, y1) = p1;

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };

    let mut err = dx - dy;

    // brush spans [-lo, hi] so that even thicknesses keep their width
    let hi = thickness.max(1) as i64 / 2;
    let lo = (thickness.max(1) as i64 - 1) / 2;

    loop {
        for j in -lo..=hi {
            for i in -lo..=hi {
                set_pixel(img, x0 + i, y0 + j, color);
            }
        }

        if x0 == x1 && y0 == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x0 += sx;
        }
        if e2 < dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Draws a segment given in sub-pixel coordinates.
///
/// The segment is clipped to the image first, so far away or huge endpoints are cheap.
/// Segments with non-finite coordinates or outside the image are not drawn.
///
/// # Returns
///
/// Whether any part of the segment was drawn.
pub fn draw_segment<const C: usize>(
    img: &mut Image<u8, C>,
    segment: &Segment,
    color: [u8; C],
    thickness: usize,
) -> bool {
    let Ok(viewport) = Viewport::new(img.rows() as f64, img.cols() as f64) else {
        return false;
    };
    let Some(visible) = clip_segment(segment, &viewport) else {
        return false;
    };

    let to_pixel = |p: Point2| (p[0].round() as i64, p[1].round() as i64);
    draw_line(
        img,
        to_pixel(visible.start),
        to_pixel(visible.end),
        color,
        thickness,
    );
    true
}

/// Draws a polyline through consecutive points.
pub fn draw_polyline<const C: usize>(
    img: &mut Image<u8, C>,
    points: &[Point2],
    color: [u8; C],
    thickness: usize,
) {
    for pair in points.windows(2) {
        draw_segment(img, &Segment::new(pair[0], pair[1]), color, thickness);
    }
}

/// Draws a local affine frame as its ellipse plus the radius showing its orientation.
pub fn draw_laf<const C: usize>(
    img: &mut Image<u8, C>,
    laf: &Laf,
    color: [u8; C],
    thickness: usize,
) {
    let pts = laf.boundary_points(DEFAULT_BOUNDARY_POINTS);
    draw_polyline(img, &pts, color, thickness);
}

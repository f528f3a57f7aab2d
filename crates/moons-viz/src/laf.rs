use moons_feature::Laf;
use moons_image::Image;

use crate::{config::Rgb, draw::draw_laf, error::VizError, source::ImageSource};

/// Draw local affine frames on a copy of the image.
///
/// Frames are drawn at half their scale, which matches the radius of the region the
/// descriptor is computed on.
///
/// # Arguments
///
/// * `img` - The image to draw on.
/// * `lafs` - The frames, in image coordinates.
/// * `color` - The color of the frames.
pub fn visualize_laf(
    img: &ImageSource,
    lafs: &[Laf],
    color: Rgb,
) -> Result<Image<u8, 3>, VizError> {
    let mut canvas = img.to_rgb_image()?;
    for laf in lafs {
        draw_laf(&mut canvas, &laf.scaled(0.5), color, 1);
    }
    log::debug!("drew {} frames", lafs.len());
    Ok(canvas)
}

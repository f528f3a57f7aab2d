use crate::{error::ImageError, image::Image};

/// Expand a grayscale image into three identical RGB channels.
///
/// # Examples
///
/// ```
/// use moons_image::{color::rgb_from_gray, Image, ImageSize};
///
/// let gray = Image::<u8, 1>::new(ImageSize { width: 2, height: 1 }, vec![7, 9]).unwrap();
/// let rgb = rgb_from_gray(&gray).unwrap();
/// assert_eq!(rgb.as_slice(), &[7, 7, 7, 9, 9, 9]);
/// ```
pub fn rgb_from_gray<T: Copy>(src: &Image<T, 1>) -> Result<Image<T, 3>, ImageError> {
    let data = src.as_slice().iter().flat_map(|&v| [v, v, v]).collect();
    Image::new(src.size(), data)
}

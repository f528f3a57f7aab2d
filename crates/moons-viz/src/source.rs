use std::path::PathBuf;

use moons_image::{color::rgb_from_gray, io::read_image_rgb8, Image, ImageError};

/// Any of the image representations the drawing functions accept.
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// An image file on disk.
    Path(PathBuf),
    /// An 8-bit RGB image.
    Rgb8(Image<u8, 3>),
    /// An 8-bit grayscale image.
    Gray8(Image<u8, 1>),
    /// A float RGB image, either normalized to `[0, 1]` or in `[0, 255]`.
    Float(Image<f32, 3>),
}

impl ImageSource {
    /// Bring the source to an 8-bit RGB image ready to be drawn on.
    pub fn to_rgb_image(&self) -> Result<Image<u8, 3>, ImageError> {
        match self {
            ImageSource::Path(path) => read_image_rgb8(path),
            ImageSource::Rgb8(img) => Ok(img.clone()),
            ImageSource::Gray8(img) => rgb_from_gray(img),
            ImageSource::Float(img) => img.to_u8_autoscale(),
        }
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        ImageSource::Path(path)
    }
}

impl From<&std::path::Path> for ImageSource {
    fn from(path: &std::path::Path) -> Self {
        ImageSource::Path(path.to_path_buf())
    }
}

impl From<Image<u8, 3>> for ImageSource {
    fn from(img: Image<u8, 3>) -> Self {
        ImageSource::Rgb8(img)
    }
}

impl From<Image<u8, 1>> for ImageSource {
    fn from(img: Image<u8, 1>) -> Self {
        ImageSource::Gray8(img)
    }
}

impl From<Image<f32, 3>> for ImageSource {
    fn from(img: Image<f32, 3>) -> Self {
        ImageSource::Float(img)
    }
}

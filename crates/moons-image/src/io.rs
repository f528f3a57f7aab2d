use std::path::Path;

use crate::{
    error::ImageError,
    image::{Image, ImageSize},
};

fn decode_any(file_path: &Path) -> Result<image::DynamicImage, ImageError> {
    if !file_path.exists() {
        return Err(ImageError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let img = image::ImageReader::open(file_path)?
        .with_guessed_format()?
        .decode()?;

    Ok(img)
}

/// Reads an image from the given file path as 8-bit RGB.
///
/// Any format supported by the image crate is accepted; grayscale or RGBA
/// sources are converted.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
pub fn read_image_rgb8(file_path: impl AsRef<Path>) -> Result<Image<u8, 3>, ImageError> {
    let img = decode_any(file_path.as_ref())?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    Image::new(size, img.into_rgb8().into_raw())
}

/// Writes an 8-bit RGB image to the given path.
///
/// The encoding is picked from the file extension.
pub fn write_image_rgb8(
    file_path: impl AsRef<Path>,
    image: &Image<u8, 3>,
) -> Result<(), ImageError> {
    image::save_buffer(
        file_path.as_ref(),
        image.as_slice(),
        image.width() as u32,
        image.height() as u32,
        image::ExtendedColorType::Rgb8,
    )?;
    Ok(())
}

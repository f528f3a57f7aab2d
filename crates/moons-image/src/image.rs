use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use moons_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

/// Represents an image with interleaved pixel data.
///
/// The data is laid out row major with shape (H, W, C).
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T, const CHANNELS: usize> {
    size: ImageSize,
    data: Vec<T>,
}

impl<T, const CHANNELS: usize> Image<T, CHANNELS> {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use moons_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::new(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     vec![0u8; 10 * 20 * 3],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 3);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        if data.len() != size.width * size.height * CHANNELS {
            return Err(ImageError::InvalidChannelShape(
                data.len(),
                size.width * size.height * CHANNELS,
            ));
        }
        Ok(Self { size, data })
    }

    /// Create a new image with the given size filled with `val`.
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let data = vec![val; size.width * size.height * CHANNELS];
        Image::new(size, data)
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.size.width
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.size.height
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        CHANNELS
    }

    /// Get the pixel data as a flat slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the pixel data as a flat mutable slice.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    fn linear_index(&self, x: usize, y: usize, ch: usize) -> Result<usize, ImageError> {
        if x >= self.width() || y >= self.height() {
            return Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                self.width(),
                self.height(),
            ));
        }
        if ch >= CHANNELS {
            return Err(ImageError::ChannelIndexOutOfBounds(ch, CHANNELS));
        }
        Ok((y * self.width() + x) * CHANNELS + ch)
    }

    /// Get the value of a pixel channel.
    ///
    /// # Arguments
    ///
    /// * `x` - The x-coordinate of the pixel.
    /// * `y` - The y-coordinate of the pixel.
    /// * `ch` - The channel index of the pixel.
    pub fn get_pixel(&self, x: usize, y: usize, ch: usize) -> Result<T, ImageError>
    where
        T: Copy,
    {
        let idx = self.linear_index(x, y, ch)?;
        Ok(self.data[idx])
    }

    /// Set the value of a pixel channel.
    pub fn set_pixel(&mut self, x: usize, y: usize, ch: usize, val: T) -> Result<(), ImageError> {
        let idx = self.linear_index(x, y, ch)?;
        self.data[idx] = val;
        Ok(())
    }

    /// Copy `src` into this image with its top-left corner at `(x, y)`.
    ///
    /// Pixels falling outside this image are dropped.
    pub fn paste(&mut self, src: &Image<T, CHANNELS>, x: usize, y: usize)
    where
        T: Copy,
    {
        if x >= self.width() || y >= self.height() {
            return;
        }
        let cols = src.width().min(self.width() - x);
        let rows = src.height().min(self.height() - y);
        let row_len = cols * CHANNELS;

        for row in 0..rows {
            let src_start = row * src.width() * CHANNELS;
            let dst_start = ((y + row) * self.width() + x) * CHANNELS;
            self.data[dst_start..dst_start + row_len]
                .copy_from_slice(&src.data[src_start..src_start + row_len]);
        }
    }
}

impl<const CHANNELS: usize> Image<f32, CHANNELS> {
    /// Convert a float image to 8 bits.
    ///
    /// Images whose maximum value is below 2.0 are assumed to be normalized to `[0, 1]`
    /// and are scaled by 255. Otherwise values are taken as already in the `[0, 255]` range.
    /// Values are rounded and saturated.
    ///
    /// # Examples
    ///
    /// ```
    /// use moons_image::{Image, ImageSize};
    ///
    /// let size = ImageSize { width: 2, height: 1 };
    /// let normalized = Image::<f32, 1>::new(size, vec![0.0, 1.0]).unwrap();
    /// assert_eq!(normalized.to_u8_autoscale().unwrap().as_slice(), &[0, 255]);
    ///
    /// let raw = Image::<f32, 1>::new(size, vec![10.0, 200.0]).unwrap();
    /// assert_eq!(raw.to_u8_autoscale().unwrap().as_slice(), &[10, 200]);
    /// ```
    pub fn to_u8_autoscale(&self) -> Result<Image<u8, CHANNELS>, ImageError> {
        let max_val = self
            .data
            .iter()
            .copied()
            .fold(f32::NEG_INFINITY, f32::max);
        let scale = if max_val < 2.0 { 255.0 } else { 1.0 };

        let data = self
            .data
            .iter()
            .map(|&x| (x * scale).round().clamp(0.0, 255.0) as u8)
            .collect();

        Image::new(self.size, data)
    }
}

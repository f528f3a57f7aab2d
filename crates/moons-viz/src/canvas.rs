use moons_geometry::Point2;
use moons_image::{Image, ImageError, ImageSize};

/// Two images pasted on a single canvas, side by side or stacked.
///
/// The first image sits at the origin and the second one at [`MatchCanvas::offset`].
/// Uncovered pixels are black.
#[derive(Debug, Clone)]
pub struct MatchCanvas {
    image: Image<u8, 3>,
    offset: Point2,
    size1: ImageSize,
    size2: ImageSize,
}

impl MatchCanvas {
    /// Build the canvas for a pair of images.
    ///
    /// # Arguments
    ///
    /// * `img1` - The left or top image.
    /// * `img2` - The right or bottom image.
    /// * `vertical` - Stack the images instead of placing them side by side.
    pub fn new(
        img1: &Image<u8, 3>,
        img2: &Image<u8, 3>,
        vertical: bool,
    ) -> Result<Self, ImageError> {
        let (size1, size2) = (img1.size(), img2.size());
        let (size, offset) = if vertical {
            (
                ImageSize {
                    width: size1.width.max(size2.width),
                    height: size1.height + size2.height,
                },
                (0, size1.height),
            )
        } else {
            (
                ImageSize {
                    width: size1.width + size2.width,
                    height: size1.height.max(size2.height),
                },
                (size1.width, 0),
            )
        };

        let mut image = Image::from_size_val(size, 0)?;
        image.paste(img1, 0, 0);
        image.paste(img2, offset.0, offset.1);

        Ok(Self {
            image,
            offset: [offset.0 as f64, offset.1 as f64],
            size1,
            size2,
        })
    }

    /// Position of the second image on the canvas.
    pub fn offset(&self) -> Point2 {
        self.offset
    }

    /// Size of the first image.
    pub fn size1(&self) -> ImageSize {
        self.size1
    }

    /// Size of the second image.
    pub fn size2(&self) -> ImageSize {
        self.size2
    }

    /// Map a point of the second image to canvas coordinates.
    pub fn to_canvas(&self, p: &Point2) -> Point2 {
        [p[0] + self.offset[0], p[1] + self.offset[1]]
    }

    /// The canvas pixels.
    pub fn image(&self) -> &Image<u8, 3> {
        &self.image
    }

    /// The canvas pixels, for drawing.
    pub fn image_mut(&mut self) -> &mut Image<u8, 3> {
        &mut self.image
    }

    /// Consume the canvas and return the drawn image.
    pub fn into_image(self) -> Image<u8, 3> {
        self.image
    }
}

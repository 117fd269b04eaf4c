use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use iconkit_image::ImageSize;
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

impl ImageSize {
    /// Number of pixels covered by this size, `None` if it does not fit in `usize`.
    pub fn area(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

// number of values needed to store an image of the given size
fn buffer_len(size: ImageSize, channels: usize) -> Result<usize, ImageError> {
    size.area()
        .and_then(|area| area.checked_mul(channels))
        .ok_or(ImageError::ImageSizeOverflow(size.width, size.height, channels))
}

// reserve up front, huge sizes give an error instead of an allocation abort
fn alloc_buffer<T>(len: usize) -> Result<Vec<T>, ImageError> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| ImageError::AllocationError(len))?;
    Ok(data)
}

/// Represents an image with pixel data.
///
/// The pixels are stored row-major with interleaved channels, i.e. a buffer of shape
/// (H, W, C) where H is the height, W the width and C the number of channels.
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
    /// If the length of the pixel data does not match the image size, or the size
    /// overflows, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use iconkit_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::new(
    ///    ImageSize {
    ///       width: 10,
    ///       height: 20,
    ///    },
    ///    vec![0u8; 10 * 20 * 3],
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 3);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        // check if the data length matches the image size
        let expected = buffer_len(size, CHANNELS)?;
        if data.len() != expected {
            return Err(ImageError::InvalidChannelShape(data.len(), expected));
        }

        Ok(Self { size, data })
    }

    /// Create a new image with the given size and every value set to `val`.
    ///
    /// # Examples
    ///
    /// ```
    /// use iconkit_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 4>::from_size_val(
    ///   ImageSize {
    ///     width: 10,
    ///     height: 20,
    ///   }, 0u8).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 4);
    /// ```
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let len = buffer_len(size, CHANNELS)?;
        let mut data = alloc_buffer(len)?;
        data.resize(len, val);
        Image::new(size, data)
    }

    /// Create an image filled with a single repeated pixel.
    pub fn from_size_pixel(size: ImageSize, pixel: [T; CHANNELS]) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let len = buffer_len(size, CHANNELS)?;
        let mut data = alloc_buffer(len)?;
        data.extend(pixel.iter().cloned().cycle().take(len));
        Image::new(size, data)
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height()
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

    /// Whether the image has no pixels.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the pixel data as a flat slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the pixel data as a flat mutable slice.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Get all the channels of a pixel.
    ///
    /// # Examples
    ///
    /// ```
    /// use iconkit_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::new(
    ///     ImageSize { width: 2, height: 1 },
    ///     vec![1, 2, 3, 4, 5, 6],
    /// ).unwrap();
    ///
    /// assert_eq!(image.pixel(1, 0).unwrap(), &[4, 5, 6]);
    /// ```
    pub fn pixel(&self, x: usize, y: usize) -> Result<&[T], ImageError> {
        if x >= self.width() || y >= self.height() {
            return Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                self.width(),
                self.height(),
            ));
        }

        let offset = (y * self.width() + x) * CHANNELS;
        Ok(&self.data[offset..offset + CHANNELS])
    }

    /// Overwrite all the channels of a pixel.
    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: [T; CHANNELS]) -> Result<(), ImageError> {
        if x >= self.width() || y >= self.height() {
            return Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                self.width(),
                self.height(),
            ));
        }

        let offset = (y * self.width() + x) * CHANNELS;
        for (dst, src) in self.data[offset..offset + CHANNELS].iter_mut().zip(pixel) {
            *dst = src;
        }

        Ok(())
    }

    /// Iterate over the pixels in row-major order.
    pub fn pixels(&self) -> std::slice::ChunksExact<'_, T> {
        self.data.chunks_exact(CHANNELS)
    }
}

#[cfg(test)]
mod tests {
    use crate::image::{Image, ImageError, ImageSize};

    #[test]
    fn image_size() {
        let image_size = ImageSize {
            width: 10,
            height: 20,
        };
        assert_eq!(image_size.width, 10);
        assert_eq!(image_size.height, 20);
        assert_eq!(image_size.area(), Some(200));
        assert_eq!(image_size.to_string(), "10x20");
    }

    #[test]
    fn image_smoke() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 10,
                height: 20,
            },
            vec![0u8; 10 * 20 * 3],
        )?;
        assert_eq!(image.size().width, 10);
        assert_eq!(image.size().height, 20);
        assert_eq!(image.num_channels(), 3);

        Ok(())
    }

    #[test]
    fn image_wrong_length() {
        let image = Image::<u8, 4>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0u8; 12],
        );
        assert_eq!(image, Err(ImageError::InvalidChannelShape(12, 16)));
    }

    #[test]
    fn image_pixel_access() -> Result<(), ImageError> {
        let mut image = Image::<u8, 4>::from_size_pixel(
            ImageSize {
                width: 3,
                height: 2,
            },
            [10, 20, 30, 255],
        )?;
        assert_eq!(image.pixel(2, 1)?, &[10, 20, 30, 255]);

        image.set_pixel(2, 1, [1, 2, 3, 0])?;
        assert_eq!(image.pixel(2, 1)?, &[1, 2, 3, 0]);

        assert_eq!(
            image.pixel(3, 0),
            Err(ImageError::PixelIndexOutOfBounds(3, 0, 3, 2))
        );

        Ok(())
    }

    #[test]
    fn image_pixels_row_major() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0, 1, 2, 3],
        )?;
        let values = image.pixels().map(|p| p[0]).collect::<Vec<_>>();
        assert_eq!(values, vec![0, 1, 2, 3]);

        Ok(())
    }

    #[test]
    fn image_size_overflow() {
        let size = ImageSize {
            width: usize::MAX / 2,
            height: 3,
        };
        assert_eq!(size.area(), None);

        assert_eq!(
            Image::<u8, 4>::from_size_val(size, 0),
            Err(ImageError::ImageSizeOverflow(usize::MAX / 2, 3, 4))
        );
        assert_eq!(
            Image::<u8, 3>::from_size_pixel(size, [1, 2, 3]),
            Err(ImageError::ImageSizeOverflow(usize::MAX / 2, 3, 3))
        );
        assert_eq!(
            Image::<u8, 1>::new(size, vec![]),
            Err(ImageError::ImageSizeOverflow(usize::MAX / 2, 3, 1))
        );
    }

    #[test]
    fn image_too_large_to_allocate() {
        // fits in usize but not in memory
        let size = ImageSize {
            width: 1 << 31,
            height: 1 << 30,
        };
        let res = Image::<u8, 4>::from_size_val(size, 0);
        assert_eq!(res, Err(ImageError::AllocationError(1 << 63)));
    }
}

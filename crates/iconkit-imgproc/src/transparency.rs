use iconkit_image::{Image, ImageError, ImageSize};
use num_traits::Zero;

/// A corner pixel sampled from an RGBA image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerPixel<T> {
    /// Column of the corner.
    pub x: usize,
    /// Row of the corner.
    pub y: usize,
    /// The red, green, blue and alpha values.
    pub pixel: [T; 4],
}

impl<T: Zero + PartialEq> CornerPixel<T> {
    /// Whether the alpha channel of the corner is zero.
    pub fn is_transparent(&self) -> bool {
        is_transparent_pixel(&self.pixel)
    }
}

/// The four corners of an RGBA image with their pixel values.
#[derive(Debug, Clone, PartialEq)]
pub struct CornerReport<T> {
    /// Corners in the order given by [`corner_coordinates`].
    pub corners: [CornerPixel<T>; 4],
}

impl<T: Zero + PartialEq> CornerReport<T> {
    /// Corners whose alpha is not zero, in corner order.
    pub fn opaque_corners(&self) -> impl Iterator<Item = &CornerPixel<T>> {
        self.corners.iter().filter(|c| !c.is_transparent())
    }

    /// Whether all four corners are fully transparent.
    pub fn is_transparent(&self) -> bool {
        self.corners.iter().all(|c| c.is_transparent())
    }
}

/// Whether an RGBA pixel is fully transparent, i.e. its alpha channel is zero.
///
/// Pixels with fewer than four channels have no alpha and are never transparent.
pub fn is_transparent_pixel<T: Zero + PartialEq>(pixel: &[T]) -> bool {
    pixel.get(3).is_some_and(|alpha| alpha.is_zero())
}

/// The corner coordinates `(x, y)` of an image.
///
/// The order is top-left, bottom-left, top-right, bottom-right. The size must not be empty.
///
/// # Example
///
/// ```
/// use iconkit_image::ImageSize;
/// use iconkit_imgproc::transparency::corner_coordinates;
///
/// let corners = corner_coordinates(ImageSize { width: 4, height: 3 });
/// assert_eq!(corners, [(0, 0), (0, 2), (3, 0), (3, 2)]);
/// ```
pub fn corner_coordinates(size: ImageSize) -> [(usize, usize); 4] {
    let (last_x, last_y) = (size.width.saturating_sub(1), size.height.saturating_sub(1));
    [(0, 0), (0, last_y), (last_x, 0), (last_x, last_y)]
}

/// Inspect the four corner pixels of an RGBA image.
///
/// # Arguments
///
/// * `src` - The input RGBA image.
///
/// # Returns
///
/// A [`CornerReport`] with the value of every corner.
///
/// # Errors
///
/// Returns [`ImageError::EmptyImage`] if the image has no pixels.
///
/// # Example
///
/// ```
/// use iconkit_image::{Image, ImageSize};
/// use iconkit_imgproc::transparency::check_corner_transparency;
///
/// let image = Image::<u8, 4>::from_size_val(ImageSize { width: 3, height: 3 }, 0).unwrap();
///
/// let report = check_corner_transparency(&image).unwrap();
/// assert!(report.is_transparent());
/// ```
pub fn check_corner_transparency<T>(src: &Image<T, 4>) -> Result<CornerReport<T>, ImageError>
where
    T: Copy + Zero + PartialEq,
{
    if src.is_empty() {
        return Err(ImageError::EmptyImage);
    }

    let coords = corner_coordinates(src.size());
    let mut corners = [CornerPixel {
        x: 0,
        y: 0,
        pixel: [T::zero(); 4],
    }; 4];

    for (corner, (x, y)) in corners.iter_mut().zip(coords) {
        let pixel = src.pixel(x, y)?;
        *corner = CornerPixel {
            x,
            y,
            pixel: [pixel[0], pixel[1], pixel[2], pixel[3]],
        };
    }

    Ok(CornerReport { corners })
}

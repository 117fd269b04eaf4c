use crate::parallel;
use iconkit_image::{Image, ImageError};

/// Convert an RGBA image to RGB image.
///
/// The alpha channel is dropped, the color channels are copied as they are.
///
/// # Arguments
///
/// * `src` - The input RGBA image.
/// * `dst` - The output RGB image.
///
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use iconkit_image::{Image, ImageSize};
/// use iconkit_imgproc::color::rgb_from_rgba;
///
/// let src = Image::<u8, 4>::new(ImageSize { width: 2, height: 1 }, vec![
///     0, 1, 2, 255, // (0, 0)
///     3, 4, 5, 0,   // (1, 0)
/// ]).unwrap();
///
/// let mut dst = Image::<u8, 3>::from_size_val(src.size(), 0).unwrap();
///
/// rgb_from_rgba(&src, &mut dst).unwrap();
/// assert_eq!(dst.as_slice(), &[0, 1, 2, 3, 4, 5]);
/// ```
pub fn rgb_from_rgba(src: &Image<u8, 4>, dst: &mut Image<u8, 3>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    // just drop the alpha channel in the last index
    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        dst_pixel.copy_from_slice(&src_pixel[..3]);
    });

    Ok(())
}

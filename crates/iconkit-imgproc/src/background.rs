use iconkit_image::{Image, ImageError};

use crate::parallel;

/// Parameters of the background removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveBackgroundConfig {
    /// Exclusive per-channel distance to the reference color for a pixel to match.
    pub tolerance: u8,
    /// The RGBA value written over every matching pixel.
    pub fill: [u8; 4],
}

impl Default for RemoveBackgroundConfig {
    fn default() -> Self {
        Self {
            tolerance: 30,
            fill: [255, 255, 255, 0],
        }
    }
}

/// Sample the background reference color, the top-left pixel of the image.
///
/// # Errors
///
/// Returns [`ImageError::EmptyImage`] if the image has no pixels.
pub fn background_reference(src: &Image<u8, 4>) -> Result<[u8; 4], ImageError> {
    if src.is_empty() {
        return Err(ImageError::EmptyImage);
    }

    let p = src.pixel(0, 0)?;
    Ok([p[0], p[1], p[2], p[3]])
}

/// Whether a pixel is close to the reference color.
///
/// Red, green and blue must each differ from the reference by strictly less than
/// `tolerance`. Alpha is not compared.
///
/// # Example
///
/// ```
/// use iconkit_imgproc::background::matches_background;
///
/// assert!(matches_background(&[20, 20, 20, 255], &[10, 10, 10, 255], 30));
/// assert!(!matches_background(&[40, 10, 10, 255], &[10, 10, 10, 255], 30));
/// ```
pub fn matches_background(pixel: &[u8], reference: &[u8; 4], tolerance: u8) -> bool {
    pixel
        .iter()
        .zip(reference.iter())
        .take(3)
        .all(|(&p, &r)| p.abs_diff(r) < tolerance)
}

/// Replace the background of an RGBA image with a transparent fill.
///
/// The top-left pixel is taken as the background color. Every pixel within
/// `config.tolerance` of it on all of red, green and blue is replaced by
/// `config.fill`; every other pixel is copied unchanged.
///
/// # Arguments
///
/// * `src` - The input RGBA image.
/// * `dst` - The output RGBA image.
/// * `config` - The removal parameters.
///
/// # Returns
///
/// The reference color that was sampled.
///
/// # Errors
///
/// Returns an error if the images differ in size or are empty.
///
/// # Example
///
/// ```
/// use iconkit_image::{Image, ImageSize};
/// use iconkit_imgproc::background::{remove_background, RemoveBackgroundConfig};
///
/// let src = Image::<u8, 4>::new(ImageSize { width: 2, height: 1 }, vec![
///     10, 10, 10, 255,
///     200, 200, 200, 255,
/// ]).unwrap();
/// let mut dst = Image::<u8, 4>::from_size_val(src.size(), 0).unwrap();
///
/// remove_background(&src, &mut dst, &RemoveBackgroundConfig::default()).unwrap();
/// assert_eq!(dst.as_slice(), &[255, 255, 255, 0, 200, 200, 200, 255]);
/// ```
pub fn remove_background(
    src: &Image<u8, 4>,
    dst: &mut Image<u8, 4>,
    config: &RemoveBackgroundConfig,
) -> Result<[u8; 4], ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    let reference = background_reference(src)?;
    log::debug!(
        "background reference {:?}, tolerance {}",
        reference,
        config.tolerance
    );

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        if matches_background(src_pixel, &reference, config.tolerance) {
            dst_pixel.copy_from_slice(&config.fill);
        } else {
            dst_pixel.copy_from_slice(src_pixel);
        }
    });

    Ok(reference)
}

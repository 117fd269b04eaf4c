use std::collections::HashMap;

use iconkit_image::{Image, ImageError, ImageSize};

use crate::{color, interpolation::InterpolationMode, resize};

/// An RGB color printed as a lowercase `#rrggbb` string.
///
/// # Example
///
/// ```
/// use iconkit_imgproc::dominant::HexColor;
///
/// assert_eq!(HexColor([100, 50, 200]).to_string(), "#6432c8");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor(pub [u8; 3]);

impl From<[u8; 3]> for HexColor {
    fn from(rgb: [u8; 3]) -> Self {
        HexColor(rgb)
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

/// Parameters of the dominant color estimation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DominantColorConfig {
    /// Size the image is reduced to before counting.
    pub size: ImageSize,
    /// Interpolation used for the reduction.
    pub interpolation: InterpolationMode,
    /// A pixel whose three channels are all above this value is near-white.
    pub white_threshold: u8,
    /// A pixel whose three channels are all below this value is near-black.
    pub black_threshold: u8,
}

impl Default for DominantColorConfig {
    fn default() -> Self {
        Self {
            size: ImageSize {
                width: 50,
                height: 50,
            },
            interpolation: InterpolationMode::Bicubic,
            white_threshold: 240,
            black_threshold: 15,
        }
    }
}

/// The result of [`dominant_color`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DominantColor {
    /// The most frequent color.
    pub color: HexColor,
    /// How many pixels have exactly that color.
    pub count: usize,
    /// How many pixels survived the near-white / near-black filter.
    pub considered: usize,
    /// How many pixels the reduced image has.
    pub total: usize,
}

/// Whether all three color channels are strictly above `threshold`.
pub fn is_near_white(pixel: &[u8], threshold: u8) -> bool {
    pixel[..3].iter().all(|&v| v > threshold)
}

/// Whether all three color channels are strictly below `threshold`.
pub fn is_near_black(pixel: &[u8], threshold: u8) -> bool {
    pixel[..3].iter().all(|&v| v < threshold)
}

/// Find the most frequent color among the pixels that are neither near-white nor near-black.
///
/// Ties are resolved in favour of the color that appears first in row-major order.
/// Returns `None` if every pixel is filtered out.
pub fn most_frequent_color(
    src: &Image<u8, 3>,
    white_threshold: u8,
    black_threshold: u8,
) -> Option<DominantColor> {
    // color -> (count, index of first occurrence)
    let mut counts: HashMap<[u8; 3], (usize, usize)> = HashMap::new();
    let mut considered = 0;

    let candidates = src.pixels().enumerate().filter(|(_, p)| {
        !is_near_white(p, white_threshold) && !is_near_black(p, black_threshold)
    });

    for (idx, p) in candidates {
        counts.entry([p[0], p[1], p[2]]).or_insert((0, idx)).0 += 1;
        considered += 1;
    }

    let total = src.pixels().len();
    log::debug!(
        "{} distinct colors in {} of {} pixels",
        counts.len(),
        considered,
        total
    );

    counts
        .into_iter()
        .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .map(|(color, (count, _))| DominantColor {
            color: HexColor(color),
            count,
            considered,
            total,
        })
}

/// Estimate the dominant color of an RGBA image.
///
/// The image is reduced to `config.size` with its color premultiplied by alpha, so
/// fully transparent pixels end up black. Alpha is then dropped, near-white and
/// near-black pixels are discarded, and the most frequent remaining color is returned.
/// An image already at `config.size` is not resampled and keeps the color of its
/// transparent pixels.
///
/// # Arguments
///
/// * `src` - The input RGBA image. Opaque images carry an alpha of 255.
/// * `config` - The estimation parameters.
///
/// # Returns
///
/// The dominant color, or `None` if the image holds only near-white and near-black pixels.
///
/// # Errors
///
/// Returns an error if the image is empty or cannot be resized.
///
/// # Example
///
/// ```
/// use iconkit_image::{Image, ImageSize};
/// use iconkit_imgproc::dominant::{dominant_color, DominantColorConfig};
///
/// let image = Image::<u8, 4>::from_size_pixel(
///     ImageSize { width: 50, height: 50 },
///     [100, 50, 200, 255],
/// ).unwrap();
///
/// let dominant = dominant_color(&image, &DominantColorConfig::default()).unwrap();
/// assert_eq!(dominant.unwrap().color.to_string(), "#6432c8");
/// ```
pub fn dominant_color(
    src: &Image<u8, 4>,
    config: &DominantColorConfig,
) -> Result<Option<DominantColor>, ImageError> {
    if src.is_empty() || config.size.width == 0 || config.size.height == 0 {
        return Err(ImageError::EmptyImage);
    }

    let reduced = if src.size() == config.size {
        None
    } else {
        let reduced = resize::resize_to(src, config.size, config.interpolation)?;
        log::debug!("reduced {} to {}", src.size(), reduced.size());
        Some(reduced)
    };
    let reduced = reduced.as_ref().unwrap_or(src);

    let mut rgb = Image::from_size_val(reduced.size(), 0u8)?;
    color::rgb_from_rgba(reduced, &mut rgb)?;

    Ok(most_frequent_color(
        &rgb,
        config.white_threshold,
        config.black_threshold,
    ))
}

use std::path::Path;

use iconkit::image::Image;
use iconkit::imgproc::background::{remove_background, RemoveBackgroundConfig};
use iconkit::io::{functional as F, write_image_png_rgba8, IoError};

/// The logo read when no input is given.
pub const DEFAULT_INPUT_PATH: &str = "public/AdaptLogo_Transparent.png";

/// The icon written when no output is given.
pub const DEFAULT_OUTPUT_PATH: &str = "app/icon.png";

/// Make the background of the image at `input_path` transparent and save it as PNG.
///
/// The input is converted to RGBA first, so any decodable format is accepted.
///
/// # Returns
///
/// The background reference color sampled from the top-left pixel.
pub fn remove_background_file(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &RemoveBackgroundConfig,
) -> Result<[u8; 4], IoError> {
    let src = F::read_image_any_rgba8(input_path)?;
    log::debug!("source size {}", src.size());

    let mut dst = Image::from_size_val(src.size(), 0u8)?;
    let reference = remove_background(&src, &mut dst, config)?;

    write_image_png_rgba8(output_path, &dst)?;

    Ok(reference)
}

use std::{fs::File, io::BufWriter, path::Path};

use iconkit_image::{Image, ImageSize};
use png::{BitDepth, ColorType, Decoder, Encoder};

use crate::error::IoError;
use crate::functional::ColorMode;

/// Read the color type from the header of an encoded PNG.
pub(crate) fn decode_png_color_mode(bytes: &[u8]) -> Result<ColorMode, IoError> {
    let reader = Decoder::new(bytes)
        .read_info()
        .map_err(|e| IoError::PngDecodeError(e.to_string()))?;

    let mode = match reader.info().color_type {
        ColorType::Grayscale => ColorMode::Gray,
        ColorType::GrayscaleAlpha => ColorMode::GrayAlpha,
        ColorType::Indexed => ColorMode::Indexed,
        ColorType::Rgb => ColorMode::Rgb,
        ColorType::Rgba => ColorMode::Rgba,
    };

    Ok(mode)
}

/// Writes the given PNG _(rgba8)_ data to the given file path.
///
/// # Arguments
///
/// - `file_path` - The path to the PNG image.
/// - `image` - The image containing the RGBA data.
///
/// The file is PNG encoded whatever its extension.
pub fn write_image_png_rgba8(
    file_path: impl AsRef<Path>,
    image: &Image<u8, 4>,
) -> Result<(), IoError> {
    write_png_impl(
        file_path,
        image.as_slice(),
        image.size(),
        BitDepth::Eight,
        ColorType::Rgba,
    )
}

fn write_png_impl(
    file_path: impl AsRef<Path>,
    image_data: &[u8],
    image_size: ImageSize,
    // Make sure you set `depth` correctly
    depth: BitDepth,
    color_type: ColorType,
) -> Result<(), IoError> {
    let file_path = file_path.as_ref();
    let file = File::create(file_path)?;

    let mut encoder = Encoder::new(
        BufWriter::new(file),
        image_size.width as u32,
        image_size.height as u32,
    );
    encoder.set_color(color_type);
    encoder.set_depth(depth);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    writer
        .write_image_data(image_data)
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    writer
        .finish()
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;

    log::debug!(
        "wrote {} ({}, {:?})",
        file_path.display(),
        image_size,
        color_type
    );

    Ok(())
}

use std::path::Path;

use iconkit_image::{Image, ImageSize};

use crate::error::IoError;
use crate::png::decode_png_color_mode;

/// A generic image type that can be any of the supported image formats.
///
/// The variant records the pixel format the file was stored with, before any
/// conversion.
#[derive(Debug, Clone)]
pub enum GenericImage {
    /// 8-bit grayscale image
    L8(Image<u8, 1>),
    /// 8-bit grayscale image with alpha channel
    La8(Image<u8, 2>),
    /// 8-bit RGB image
    Rgb8(Image<u8, 3>),
    /// 8-bit RGB image with alpha channel
    Rgba8(Image<u8, 4>),
    /// 16-bit grayscale image
    L16(Image<u16, 1>),
    /// 16-bit grayscale image with alpha channel
    La16(Image<u16, 2>),
    /// 16-bit RGB image
    Rgb16(Image<u16, 3>),
    /// 16-bit RGB image with alpha channel
    Rgba16(Image<u16, 4>),
    /// 32-bit float RGB image
    Rgb32F(Image<f32, 3>),
    /// 32-bit float RGB image with alpha channel
    Rgba32F(Image<f32, 4>),
}

impl GenericImage {
    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        match self {
            GenericImage::L8(img) => img.size(),
            GenericImage::La8(img) => img.size(),
            GenericImage::Rgb8(img) => img.size(),
            GenericImage::Rgba8(img) => img.size(),
            GenericImage::L16(img) => img.size(),
            GenericImage::La16(img) => img.size(),
            GenericImage::Rgb16(img) => img.size(),
            GenericImage::Rgba16(img) => img.size(),
            GenericImage::Rgb32F(img) => img.size(),
            GenericImage::Rgba32F(img) => img.size(),
        }
    }

    /// A short name of the pixel format, e.g. `RGBA8`.
    pub fn format_name(&self) -> &'static str {
        match self {
            GenericImage::L8(_) => "L8",
            GenericImage::La8(_) => "LA8",
            GenericImage::Rgb8(_) => "RGB8",
            GenericImage::Rgba8(_) => "RGBA8",
            GenericImage::L16(_) => "L16",
            GenericImage::La16(_) => "LA16",
            GenericImage::Rgb16(_) => "RGB16",
            GenericImage::Rgba16(_) => "RGBA16",
            GenericImage::Rgb32F(_) => "RGB32F",
            GenericImage::Rgba32F(_) => "RGBA32F",
        }
    }

    /// Convert the image to 8-bit RGBA.
    ///
    /// Gray is repeated on the three color channels and a missing alpha is set to 255.
    /// 16-bit values keep their high byte; float values are clamped to `[0, 1]` and scaled.
    pub fn to_rgba8(&self) -> Result<Image<u8, 4>, IoError> {
        match self {
            GenericImage::L8(img) => rgba8_from(img, |v| v),
            GenericImage::La8(img) => rgba8_from(img, |v| v),
            GenericImage::Rgb8(img) => rgba8_from(img, |v| v),
            GenericImage::Rgba8(img) => Ok(img.clone()),
            GenericImage::L16(img) => rgba8_from(img, u8_from_u16),
            GenericImage::La16(img) => rgba8_from(img, u8_from_u16),
            GenericImage::Rgb16(img) => rgba8_from(img, u8_from_u16),
            GenericImage::Rgba16(img) => rgba8_from(img, u8_from_u16),
            GenericImage::Rgb32F(img) => rgba8_from(img, u8_from_f32),
            GenericImage::Rgba32F(img) => rgba8_from(img, u8_from_f32),
        }
    }
}

fn u8_from_u16(v: u16) -> u8 {
    (v >> 8) as u8
}

fn u8_from_f32(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn rgba8_from<T: Copy, const C: usize>(
    src: &Image<T, C>,
    to_u8: impl Fn(T) -> u8,
) -> Result<Image<u8, 4>, IoError> {
    let data = src
        .pixels()
        .flat_map(|p| {
            let v = |ch: usize| to_u8(p[ch]);
            match C {
                1 => [v(0), v(0), v(0), 255],
                2 => [v(0), v(0), v(0), v(1)],
                3 => [v(0), v(1), v(2), 255],
                _ => [v(0), v(1), v(2), v(3)],
            }
        })
        .collect();

    Ok(Image::new(src.size(), data)?)
}

/// The color layout declared by the file, before palette or transparency expansion.
///
/// A palette PNG with a transparency chunk decodes to RGBA pixels but keeps
/// [`ColorMode::Indexed`] here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// grayscale
    Gray,
    /// grayscale with alpha channel
    GrayAlpha,
    /// palette indices
    Indexed,
    /// red, green, blue
    Rgb,
    /// red, green, blue with alpha channel
    Rgba,
}

impl ColorMode {
    /// Whether the file stores an alpha channel next to red, green and blue.
    pub fn is_rgba(&self) -> bool {
        *self == ColorMode::Rgba
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            ColorMode::Gray => "L",
            ColorMode::GrayAlpha => "LA",
            ColorMode::Indexed => "P",
            ColorMode::Rgb => "RGB",
            ColorMode::Rgba => "RGBA",
        };
        write!(f, "{name}")
    }
}

impl From<image::ColorType> for ColorMode {
    fn from(color: image::ColorType) -> Self {
        match (color.has_color(), color.has_alpha()) {
            (false, false) => ColorMode::Gray,
            (false, true) => ColorMode::GrayAlpha,
            (true, false) => ColorMode::Rgb,
            (true, true) => ColorMode::Rgba,
        }
    }
}

/// A decoded image together with the color mode its file declares.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// The color layout found in the file header.
    pub mode: ColorMode,
    /// The pixels in their decoded format.
    pub image: GenericImage,
}

impl TryFrom<image::DynamicImage> for GenericImage {
    type Error = IoError;

    fn try_from(img: image::DynamicImage) -> Result<Self, Self::Error> {
        let size = ImageSize {
            width: img.width() as usize,
            height: img.height() as usize,
        };

        let image = match img {
            image::DynamicImage::ImageLuma8(buf) => {
                GenericImage::L8(Image::new(size, buf.into_raw())?)
            }
            image::DynamicImage::ImageLumaA8(buf) => {
                GenericImage::La8(Image::new(size, buf.into_raw())?)
            }
            image::DynamicImage::ImageRgb8(buf) => {
                GenericImage::Rgb8(Image::new(size, buf.into_raw())?)
            }
            image::DynamicImage::ImageRgba8(buf) => {
                GenericImage::Rgba8(Image::new(size, buf.into_raw())?)
            }
            image::DynamicImage::ImageLuma16(buf) => {
                GenericImage::L16(Image::new(size, buf.into_raw())?)
            }
            image::DynamicImage::ImageLumaA16(buf) => {
                GenericImage::La16(Image::new(size, buf.into_raw())?)
            }
            image::DynamicImage::ImageRgb16(buf) => {
                GenericImage::Rgb16(Image::new(size, buf.into_raw())?)
            }
            image::DynamicImage::ImageRgba16(buf) => {
                GenericImage::Rgba16(Image::new(size, buf.into_raw())?)
            }
            image::DynamicImage::ImageRgb32F(buf) => {
                GenericImage::Rgb32F(Image::new(size, buf.into_raw())?)
            }
            image::DynamicImage::ImageRgba32F(buf) => {
                GenericImage::Rgba32F(Image::new(size, buf.into_raw())?)
            }
            other => return Err(IoError::UnsupportedImageFormat(other.color())),
        };

        Ok(image)
    }
}

/// Decodes an in-memory encoded image, keeping its native pixel format.
///
/// The format is guessed from the leading bytes, the file extension plays no role.
pub fn decode_image_any(bytes: &[u8]) -> Result<DecodedImage, IoError> {
    let reader = image::ImageReader::new(std::io::Cursor::new(bytes)).with_guessed_format()?;
    let format = reader.format();
    let img = reader.decode()?;

    // the image crate reports the color type after palette and tRNS expansion
    let mode = match format {
        Some(image::ImageFormat::Png) => decode_png_color_mode(bytes)?,
        Some(image::ImageFormat::Gif) => ColorMode::Indexed,
        _ => ColorMode::from(img.color()),
    };

    Ok(DecodedImage {
        mode,
        image: GenericImage::try_from(img)?,
    })
}

/// Reads an image from the given file path, keeping its native pixel format.
///
/// The method tries to read from any image format supported by the image crate.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// A [`DecodedImage`] with the color mode of the file and its pixels.
pub fn read_image_any(file_path: impl AsRef<Path>) -> Result<DecodedImage, IoError> {
    let file_path = file_path.as_ref();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path)?;
    let decoded = decode_image_any(&bytes)?;

    log::debug!(
        "decoded {} as {} {} ({})",
        file_path.display(),
        decoded.mode,
        decoded.image.format_name(),
        decoded.image.size()
    );

    Ok(decoded)
}

/// Reads an image from the given file path and converts it to 8-bit RGBA.
///
/// Images without alpha get a fully opaque alpha channel. See [`GenericImage::to_rgba8`].
pub fn read_image_any_rgba8(file_path: impl AsRef<Path>) -> Result<Image<u8, 4>, IoError> {
    read_image_any(file_path)?.image.to_rgba8()
}

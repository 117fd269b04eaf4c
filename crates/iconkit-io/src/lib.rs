#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`IoError`] variants for file access, encoding/decoding failures,
/// and format-specific errors.
pub mod error;

/// High-level image reading functions.
///
/// Decodes any format supported by the `image` crate, keeping the native pixel
/// format in a [`functional::GenericImage`] next to the declared color mode, or
/// converting to RGBA.
pub mod functional;

/// PNG image encoding and decoding.
pub mod png;

pub use crate::error::IoError;
pub use crate::functional::{
    decode_image_any, read_image_any, read_image_any_rgba8, ColorMode, DecodedImage, GenericImage,
};
pub use crate::png::write_image_png_rgba8;

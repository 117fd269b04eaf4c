use std::{error::Error, path::Path};

use iconkit::image::{Image, ImageError};
use iconkit::imgproc::transparency::check_corner_transparency;
use iconkit::io::{functional as F, DecodedImage, IoError};

/// The icon inspected when no path is given.
pub const DEFAULT_ICON_PATH: &str = "app/icon.png";

/// Printed when the file has no RGBA pixel format.
pub const NOT_RGBA: &str = "Mode is not RGBA (No transparency)";

/// Printed when all four corners are transparent.
pub const TRANSPARENT_VERDICT: &str = "Image appears to have transparent corners.";

/// Printed when at least one corner is not transparent.
pub const OPAQUE_VERDICT: &str = "Image content is NOT fully transparent at corners.";

fn format_pixel(pixel: &[u8]) -> String {
    let channels = pixel.iter().map(u8::to_string).collect::<Vec<_>>();
    format!("({})", channels.join(", "))
}

fn corner_messages(image: &Image<u8, 4>) -> Result<Vec<String>, ImageError> {
    let report = check_corner_transparency(image)?;

    let mut lines = report
        .opaque_corners()
        .map(|c| {
            format!(
                "Corner ({},{}) is not transparent: {}",
                c.x,
                c.y,
                format_pixel(&c.pixel)
            )
        })
        .collect::<Vec<_>>();

    lines.push(if report.is_transparent() {
        TRANSPARENT_VERDICT.to_string()
    } else {
        OPAQUE_VERDICT.to_string()
    });

    Ok(lines)
}

/// The lines reported for a decoded image.
///
/// Files whose header does not declare RGBA produce the single [`NOT_RGBA`] line, palette
/// images with a transparency chunk included. RGBA files produce one line per
/// non-transparent corner followed by the verdict, with channels on the 0-255 scale
/// whatever the stored bit depth.
pub fn transparency_messages(decoded: &DecodedImage) -> Result<Vec<String>, IoError> {
    if !decoded.mode.is_rgba() {
        return Ok(vec![NOT_RGBA.to_string()]);
    }

    let rgba = decoded.image.to_rgba8()?;
    Ok(corner_messages(&rgba)?)
}

fn read_and_check(file_path: impl AsRef<Path>) -> Result<Vec<String>, Box<dyn Error>> {
    let decoded = F::read_image_any(file_path)?;
    Ok(transparency_messages(&decoded)?)
}

/// Check the corners of the icon at `file_path`.
///
/// Never fails: any error is reported as a single `Error: ...` line.
pub fn check_transparency(file_path: impl AsRef<Path>) -> Vec<String> {
    read_and_check(file_path).unwrap_or_else(|e| vec![format!("Error: {e}")])
}

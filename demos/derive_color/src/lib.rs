use std::{error::Error, path::Path};

use iconkit::imgproc::dominant::{dominant_color, DominantColor, DominantColorConfig};
use iconkit::imgproc::interpolation::InterpolationMode;
use iconkit::io::{functional as F, ColorMode};

/// The logo inspected when no path is given.
pub const DEFAULT_LOGO_PATH: &str = "/home/xanta/Adapt_Automation/public/assets/pics/AdaptLogo.jpg";

/// Returned when every pixel is near-white or near-black.
pub const NO_DOMINANT_COLOR: &str = "No dominant color found (only b/w)";

/// Read the logo at `file_path` and estimate its dominant color.
///
/// Palette images are always reduced with nearest neighbour so that no color outside
/// the palette appears.
pub fn read_dominant_color(
    file_path: impl AsRef<Path>,
    config: &DominantColorConfig,
) -> Result<Option<DominantColor>, Box<dyn Error>> {
    let decoded = F::read_image_any(file_path)?;
    let rgba = decoded.image.to_rgba8()?;

    let config = match decoded.mode {
        ColorMode::Indexed => DominantColorConfig {
            interpolation: InterpolationMode::Nearest,
            ..*config
        },
        _ => *config,
    };

    let dominant = dominant_color(&rgba, &config)?;

    if let Some(d) = &dominant {
        log::debug!(
            "{} covers {} of {} kept pixels ({} total)",
            d.color,
            d.count,
            d.considered,
            d.total
        );
    }

    Ok(dominant)
}

/// The dominant color of the logo at `file_path` as a `#rrggbb` string.
///
/// Never fails: returns [`NO_DOMINANT_COLOR`] when only black and white remain, and
/// the error message when the file cannot be processed.
pub fn derive_brand_color(file_path: impl AsRef<Path>, config: &DominantColorConfig) -> String {
    match read_dominant_color(file_path, config) {
        Ok(Some(dominant)) => dominant.color.to_string(),
        Ok(None) => NO_DOMINANT_COLOR.to_string(),
        Err(e) => e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iconkit::image::Image;
    use iconkit::io::write_image_png_rgba8;

    fn write_palette_png(
        file_path: &Path,
        side: u32,
        palette: Vec<u8>,
        trns: Vec<u8>,
    ) -> Result<(), Box<dyn Error>> {
        let file = std::fs::File::create(file_path)?;
        let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), side, side);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_palette(palette);
        encoder.set_trns(trns);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&vec![0; (side * side) as usize])?;
        writer.finish()?;
        Ok(())
    }

    #[test]
    fn uniform_logo() -> Result<(), Box<dyn Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("logo.png");

        image::RgbImage::from_pixel(50, 50, image::Rgb([100, 50, 200])).save(&file_path)?;

        let color = derive_brand_color(&file_path, &DominantColorConfig::default());
        assert_eq!(color, "#6432c8");

        Ok(())
    }

    #[test]
    fn uniform_logo_is_reduced() -> Result<(), Box<dyn Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("logo.jpg");

        image::RgbImage::from_pixel(64, 64, image::Rgb([0, 120, 215])).save(&file_path)?;

        let config = DominantColorConfig {
            interpolation: InterpolationMode::Nearest,
            ..Default::default()
        };
        let dominant = read_dominant_color(&file_path, &config)?.expect("a dominant color");
        assert_eq!(dominant.total, 2500);

        Ok(())
    }

    #[test]
    fn transparent_logo_has_no_color() -> Result<(), Box<dyn Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("logo.png");

        let image = Image::<u8, 4>::from_size_pixel([60, 60].into(), [100, 50, 200, 0])?;
        write_image_png_rgba8(&file_path, &image)?;

        let color = derive_brand_color(&file_path, &DominantColorConfig::default());
        assert_eq!(color, NO_DOMINANT_COLOR);

        Ok(())
    }

    #[test]
    fn palette_logo_keeps_palette_color() -> Result<(), Box<dyn Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("logo.png");
        write_palette_png(&file_path, 60, vec![100, 50, 200], vec![0])?;

        let color = derive_brand_color(&file_path, &DominantColorConfig::default());
        assert_eq!(color, "#6432c8");

        Ok(())
    }

    #[test]
    fn alpha_is_dropped() -> Result<(), Box<dyn Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("logo.png");

        let image = Image::<u8, 4>::from_size_pixel([50, 50].into(), [100, 50, 200, 0])?;
        write_image_png_rgba8(&file_path, &image)?;

        let color = derive_brand_color(&file_path, &DominantColorConfig::default());
        assert_eq!(color, "#6432c8");

        Ok(())
    }

    #[test]
    fn only_black_and_white() -> Result<(), Box<dyn Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let config = DominantColorConfig::default();

        let white_path = tmp_dir.path().join("white.png");
        image::RgbImage::from_pixel(50, 50, image::Rgb([255, 255, 255])).save(&white_path)?;
        assert_eq!(derive_brand_color(&white_path, &config), NO_DOMINANT_COLOR);

        let black_path = tmp_dir.path().join("black.png");
        image::RgbImage::from_pixel(50, 50, image::Rgb([0, 0, 0])).save(&black_path)?;
        assert_eq!(derive_brand_color(&black_path, &config), NO_DOMINANT_COLOR);

        Ok(())
    }

    #[test]
    fn errors_become_text() {
        let color = derive_brand_color("does/not/exist.jpg", &DominantColorConfig::default());
        assert_eq!(color, "File does not exist: does/not/exist.jpg");
    }

    #[test]
    fn undecodable_file() -> Result<(), Box<dyn Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("logo.jpg");
        std::fs::write(&file_path, b"not an image")?;

        let color = derive_brand_color(&file_path, &DominantColorConfig::default());
        assert!(color.starts_with("Failed to decode the image."), "{color}");

        Ok(())
    }

    #[test]
    fn huge_size_becomes_text() -> Result<(), Box<dyn Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("logo.png");
        image::RgbImage::from_pixel(4, 4, image::Rgb([100, 50, 200])).save(&file_path)?;

        let config = DominantColorConfig {
            size: iconkit::image::ImageSize {
                width: usize::MAX,
                height: usize::MAX,
            },
            ..Default::default()
        };
        let color = derive_brand_color(&file_path, &config);
        assert!(color.starts_with("Image size"), "{color}");

        Ok(())
    }
}

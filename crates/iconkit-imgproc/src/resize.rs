use crate::interpolation::InterpolationMode;
use fast_image_resize as fr;
use iconkit_image::{Image, ImageError, ImageSize};

fn fr_size(size: ImageSize) -> Result<(u32, u32), ImageError> {
    let to_u32 = |v: usize| u32::try_from(v).map_err(|e| ImageError::ResizeError(e.to_string()));
    Ok((to_u32(size.width)?, to_u32(size.height)?))
}

fn pixel_type<const C: usize>() -> Result<fr::PixelType, ImageError> {
    match C {
        1 => Ok(fr::PixelType::U8),
        2 => Ok(fr::PixelType::U8x2),
        3 => Ok(fr::PixelType::U8x3),
        4 => Ok(fr::PixelType::U8x4),
        _ => Err(ImageError::ResizeError(format!(
            "unsupported number of channels: {C}"
        ))),
    }
}

/// Resize an image to a new size using the [fast_image_resize](https://crates.io/crates/fast_image_resize) crate.
///
/// The function resizes an 8-bit image with 1 to 4 channels to the size of `dst`
/// using the specified interpolation mode. When both sizes match the pixels are copied.
///
/// Images with alpha (2 and 4 channels) are filtered premultiplied by alpha, so fully
/// transparent pixels come out as zero on every channel. Nearest neighbour picks source
/// pixels as they are.
///
/// # Arguments
///
/// * `src` - The input image container.
/// * `dst` - The output image container, already allocated with the new size.
/// * `interpolation` - The interpolation mode to use.
///
/// # Errors
///
/// The function returns an error if either image is empty or cannot be resized.
///
/// # Example
///
/// ```
/// use iconkit_image::{Image, ImageSize};
/// use iconkit_imgproc::interpolation::InterpolationMode;
/// use iconkit_imgproc::resize::resize_fast;
///
/// let image = Image::<_, 3>::new(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     vec![0u8; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let new_size = ImageSize {
///     width: 2,
///     height: 3,
/// };
///
/// let mut image_resized = Image::<_, 3>::from_size_val(new_size, 0).unwrap();
///
/// resize_fast(&image, &mut image_resized, InterpolationMode::Bilinear).unwrap();
///
/// assert_eq!(image_resized.num_channels(), 3);
/// assert_eq!(image_resized.size().width, 2);
/// assert_eq!(image_resized.size().height, 3);
/// ```
pub fn resize_fast<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    interpolation: InterpolationMode,
) -> Result<(), ImageError> {
    if src.is_empty() || dst.is_empty() {
        return Err(ImageError::EmptyImage);
    }

    if src.size() == dst.size() {
        dst.as_slice_mut().copy_from_slice(src.as_slice());
        return Ok(());
    }

    let pixel_type = pixel_type::<C>()?;

    // prepare the input image for the fast_image_resize crate
    let (src_width, src_height) = fr_size(src.size())?;
    let src_image = fr::images::ImageRef::new(src_width, src_height, src.as_slice(), pixel_type)
        .map_err(|e| ImageError::ResizeError(e.to_string()))?;

    // prepare the output image for the fast_image_resize crate
    let (dst_width, dst_height) = fr_size(dst.size())?;
    let mut dst_image =
        fr::images::Image::from_slice_u8(dst_width, dst_height, dst.as_slice_mut(), pixel_type)
            .map_err(|e| ImageError::ResizeError(e.to_string()))?;

    let options = fr::ResizeOptions::new()
        .resize_alg(interpolation.resize_alg())
        .use_alpha(true);

    fr::Resizer::new()
        .resize(&src_image, &mut dst_image, &options)
        .map_err(|e| ImageError::ResizeError(e.to_string()))?;

    Ok(())
}

/// Resize an image into a newly allocated image of the given size.
///
/// Convenience wrapper around [`resize_fast`].
pub fn resize_to<const C: usize>(
    src: &Image<u8, C>,
    new_size: ImageSize,
    interpolation: InterpolationMode,
) -> Result<Image<u8, C>, ImageError> {
    let mut dst = Image::from_size_val(new_size, 0u8)?;
    resize_fast(src, &mut dst, interpolation)?;
    Ok(dst)
}

#[cfg(test)]
mod tests {
    use crate::interpolation::InterpolationMode;
    use iconkit_image::{Image, ImageError, ImageSize};

    #[test]
    fn resize_smoke_ch3() -> Result<(), ImageError> {
        let image = Image::<_, 3>::from_size_pixel(
            ImageSize {
                width: 4,
                height: 5,
            },
            [100u8, 50, 200],
        )?;

        let new_size = ImageSize {
            width: 2,
            height: 3,
        };

        let mut image_resized = Image::<_, 3>::from_size_val(new_size, 0)?;
        super::resize_fast(&image, &mut image_resized, InterpolationMode::Nearest)?;

        assert_eq!(image_resized.num_channels(), 3);
        assert_eq!(image_resized.size(), new_size);
        assert!(image_resized.pixels().all(|p| p == [100, 50, 200]));

        Ok(())
    }

    #[test]
    fn resize_smoke_ch4() -> Result<(), ImageError> {
        let image = Image::<u8, 4>::from_size_val([8, 8].into(), 0)?;
        let resized = super::resize_to(&image, [3, 2].into(), InterpolationMode::Bilinear)?;

        assert_eq!(resized.num_channels(), 4);
        assert_eq!(resized.size(), ImageSize::from([3, 2]));

        Ok(())
    }

    #[test]
    fn resize_same_size_copies() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new([2, 2].into(), vec![1, 2, 3, 4])?;
        let resized = super::resize_to(&image, image.size(), InterpolationMode::Bicubic)?;
        assert_eq!(resized, image);

        Ok(())
    }

    #[test]
    fn resize_empty() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::from_size_val([0, 0].into(), 0)?;
        let res = super::resize_to(&image, [2, 2].into(), InterpolationMode::Nearest);
        assert_eq!(res, Err(ImageError::EmptyImage));

        Ok(())
    }

    #[test]
    fn resize_transparent_pixels_are_cleared() -> Result<(), ImageError> {
        let image = Image::<u8, 4>::from_size_pixel([4, 4].into(), [100, 50, 200, 0])?;

        let resized = super::resize_to(&image, [2, 2].into(), InterpolationMode::Bilinear)?;
        assert!(resized.pixels().all(|p| p == [0, 0, 0, 0]));

        let resized = super::resize_to(&image, [2, 2].into(), InterpolationMode::Nearest)?;
        assert!(resized.pixels().all(|p| p == [100, 50, 200, 0]));

        Ok(())
    }

    #[test]
    fn resize_opaque_pixels_keep_color() -> Result<(), ImageError> {
        let image = Image::<u8, 4>::from_size_pixel([6, 6].into(), [100, 50, 200, 255])?;
        let resized = super::resize_to(&image, [3, 3].into(), InterpolationMode::Bicubic)?;
        for p in resized.pixels() {
            for (v, expected) in p.iter().zip([100u8, 50, 200, 255]) {
                assert!(v.abs_diff(expected) <= 1, "{p:?}");
            }
        }

        Ok(())
    }

    #[test]
    fn resize_size_too_large() {
        let too_wide = ImageSize {
            width: u32::MAX as usize + 1,
            height: 1,
        };
        assert!(matches!(
            super::fr_size(too_wide),
            Err(ImageError::ResizeError(_))
        ));
    }
}

use fast_image_resize as fr;

/// Interpolation mode for the resize operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationMode {
    /// Nearest neighbor interpolation
    Nearest,
    /// Bilinear interpolation
    Bilinear,
    /// Bicubic (Catmull-Rom) interpolation
    #[default]
    Bicubic,
}

impl InterpolationMode {
    /// The matching [fast_image_resize](https://crates.io/crates/fast_image_resize) algorithm.
    pub fn resize_alg(&self) -> fr::ResizeAlg {
        match self {
            InterpolationMode::Nearest => fr::ResizeAlg::Nearest,
            InterpolationMode::Bilinear => fr::ResizeAlg::Convolution(fr::FilterType::Bilinear),
            InterpolationMode::Bicubic => fr::ResizeAlg::Convolution(fr::FilterType::CatmullRom),
        }
    }
}

impl std::str::FromStr for InterpolationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nearest" => Ok(InterpolationMode::Nearest),
            "bilinear" => Ok(InterpolationMode::Bilinear),
            "bicubic" => Ok(InterpolationMode::Bicubic),
            other => Err(format!(
                "unknown interpolation `{other}`, expected nearest, bilinear or bicubic"
            )),
        }
    }
}

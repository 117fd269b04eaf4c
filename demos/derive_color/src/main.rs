use argh::FromArgs;
use std::path::PathBuf;

use derive_color::{derive_brand_color, DEFAULT_LOGO_PATH};
use iconkit::image::ImageSize;
use iconkit::imgproc::dominant::DominantColorConfig;
use iconkit::imgproc::interpolation::InterpolationMode;

#[derive(FromArgs)]
/// Print the dominant brand color of a logo as #rrggbb
struct Args {
    /// path to the logo
    #[argh(option, short = 'i', default = "PathBuf::from(DEFAULT_LOGO_PATH)")]
    image_path: PathBuf,

    /// side of the square the logo is reduced to before counting
    #[argh(option, default = "50")]
    size: usize,

    /// channels above this value on all of r, g, b are ignored as white
    #[argh(option, default = "240")]
    white: u8,

    /// channels below this value on all of r, g, b are ignored as black
    #[argh(option, default = "15")]
    black: u8,

    /// interpolation used for the reduction: nearest, bilinear or bicubic
    #[argh(option, default = "InterpolationMode::Bicubic")]
    interpolation: InterpolationMode,
}

fn main() {
    env_logger::init();
    let args: Args = argh::from_env();

    let config = DominantColorConfig {
        size: ImageSize {
            width: args.size,
            height: args.size,
        },
        interpolation: args.interpolation,
        white_threshold: args.white,
        black_threshold: args.black,
    };

    println!("{}", derive_brand_color(&args.image_path, &config));
}

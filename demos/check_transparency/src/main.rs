use argh::FromArgs;
use std::path::PathBuf;

use check_transparency::{check_transparency, DEFAULT_ICON_PATH};

#[derive(FromArgs)]
/// Check whether the four corners of an icon are transparent
struct Args {
    /// path to the icon
    #[argh(option, short = 'i', default = "PathBuf::from(DEFAULT_ICON_PATH)")]
    image_path: PathBuf,
}

fn main() {
    env_logger::init();
    let args: Args = argh::from_env();

    for line in check_transparency(&args.image_path) {
        println!("{line}");
    }
}

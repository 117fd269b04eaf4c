use argh::FromArgs;
use std::path::PathBuf;

use iconkit::imgproc::background::RemoveBackgroundConfig;
use remove_bg::{remove_background_file, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};

#[derive(FromArgs)]
/// Replace the background color sampled at the top-left pixel with transparency
struct Args {
    /// path to the input image
    #[argh(option, short = 'i', default = "PathBuf::from(DEFAULT_INPUT_PATH)")]
    input_path: PathBuf,

    /// path where the PNG output is written
    #[argh(option, short = 'o', default = "PathBuf::from(DEFAULT_OUTPUT_PATH)")]
    output_path: PathBuf,

    /// per-channel distance below which a pixel counts as background
    #[argh(option, short = 't', default = "30")]
    tolerance: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let config = RemoveBackgroundConfig {
        tolerance: args.tolerance,
        ..Default::default()
    };

    let reference = remove_background_file(&args.input_path, &args.output_path, &config)?;
    log::info!("background reference color {:?}", reference);

    println!(
        "Saved transparent image to {}",
        args.output_path.display()
    );

    Ok(())
}

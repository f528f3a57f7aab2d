use argh::FromArgs;
use std::path::PathBuf;

use kornia_moons::{
    image::io::write_image_rgb8,
    viz::{draw_laf_matches_from_result, DrawConfig, ImageSource, MatchingResult},
};

/// Draws local feature matches between two images
#[derive(FromArgs)]
struct Args {
    /// path to the first image
    #[argh(option)]
    img1: PathBuf,

    /// path to the second image
    #[argh(option)]
    img2: PathBuf,

    /// path to the json matching result
    #[argh(option)]
    result: PathBuf,

    /// path to a json drawing configuration
    #[argh(option)]
    config: Option<PathBuf>,

    /// path to the output image
    #[argh(option, default = "PathBuf::from(\"matches.png\")")]
    output: PathBuf,

    /// stack the images vertically
    #[argh(switch)]
    vertical: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let result = MatchingResult::from_json_file(&args.result)?;
    let mut config = match &args.config {
        Some(path) => DrawConfig::from_json_file(path)?,
        None => DrawConfig::default(),
    };
    config.vertical |= args.vertical;

    log::info!(
        "drawing {} tentative matches between {} and {} frames",
        result.tent_idxs.len(),
        result.lafs1.len(),
        result.lafs2.len()
    );

    let canvas = draw_laf_matches_from_result(
        &result,
        &ImageSource::from(args.img1),
        &ImageSource::from(args.img2),
        &config,
    )?;

    write_image_rgb8(&args.output, &canvas)?;
    log::info!("saved {}", args.output.display());

    Ok(())
}

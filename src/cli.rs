use crate::constants::{DEFAULT_QUALITY, MAX_QUALITY, MIN_QUALITY};
use crate::validation::validate_quality;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "img-compress",
    about = "Compress PNG, JPG, and JPEG images",
    long_about = "img-compress shrinks PNG and JPEG files by re-encoding them. \
                  JPEG output honours the quality setting, PNG output is losslessly \
                  re-optimized with oxipng. Images can optionally be downscaled to fit \
                  a maximum width and/or height while preserving aspect ratio.",
    version,
    after_help = "EXAMPLES:\n  \
    img-compress image.jpg\n  \
    img-compress image.png -o output.png\n  \
    img-compress image.jpg -q 75\n  \
    img-compress image.png --max-width 1920 --max-height 1080\n  \
    img-compress shot.png -o shot.jpg"
)]
pub struct Args {
    #[arg(help = "Input image file path (.png, .jpg, .jpeg)")]
    pub input: PathBuf,

    #[arg(
        short = 'o',
        long,
        help = "Output image file path (default: <input>_compressed.<ext>)",
        long_help = "Output image file path. The output format follows its extension: \
                     .png writes PNG, anything else writes JPEG. \
                     Defaults to the input name with a _compressed suffix."
    )]
    pub output: Option<PathBuf>,

    #[arg(
        short = 'q',
        long,
        default_value_t = DEFAULT_QUALITY,
        value_parser = parse_quality,
        allow_negative_numbers = true,
        help = "Compression quality for JPEG (1-100)",
        long_help = "JPEG quality from 1 (smallest file, worst quality) to 100 \
                     (largest file, best quality). Ignored for PNG output."
    )]
    pub quality: u8,

    #[arg(
        long,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Maximum width for resizing",
        long_help = "Downscale so the width does not exceed this many pixels. \
                     Aspect ratio is preserved and images are never enlarged."
    )]
    pub max_width: Option<u32>,

    #[arg(
        long,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Maximum height for resizing",
        long_help = "Downscale so the height does not exceed this many pixels. \
                     Aspect ratio is preserved and images are never enlarged."
    )]
    pub max_height: Option<u32>,

    #[arg(short = 'v', long, help = "Print debug diagnostics to stderr")]
    pub verbose: bool,

    #[arg(long, help = "Only print errors", conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Every out-of-range value, including ones that do not fit in a `u8`,
/// gets the same message as the library's quality check.
fn parse_quality(value: &str) -> Result<u8, String> {
    let invalid = || {
        format!(
            "Invalid quality value: {}. Must be between {} and {}",
            value, MIN_QUALITY, MAX_QUALITY
        )
    };

    let number: i64 = value.trim().parse().map_err(|_| invalid())?;
    let quality = u8::try_from(number).map_err(|_| invalid())?;
    validate_quality(quality).map_err(|e| e.to_string())?;
    Ok(quality)
}

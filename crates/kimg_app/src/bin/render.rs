//! kimg-render - decode a KIMG file and save it as a standard raster image.

use anyhow::{bail, Context, Result};
use clap::Parser;
use kimg_app::bridge;

#[derive(Parser, Debug)]
#[command(name = "kimg-render")]
#[command(author, version, about = "Convert KIMG files to other formats, like PNG")]
struct Args {
    /// The .kimg file to convert.
    source: String,

    /// The file to output to.
    #[arg(default_value = "image.png")]
    output: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let decoded = kimg_io::read_kimg(&args.source)
        .with_context(|| format!("failed to read KIMG file: {}", args.source))?;

    if !decoded.is_complete() {
        eprintln!(
            "Pixel data is truncated: {} of {} pixels present",
            decoded.pixels.len(),
            decoded.header.pixel_count()
        );
        bail!("refusing to render an incomplete image");
    }

    let header = decoded.header;
    bridge::save_image(
        &args.output,
        header.width,
        header.height,
        decoded.into_rgb_bytes(),
    )?;

    println!("Image successfully saved to {}", args.output);

    Ok(())
}

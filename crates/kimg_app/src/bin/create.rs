//! kimg-create - encode a standard raster image into a KIMG file.

use anyhow::{Context, Result};
use clap::Parser;
use kimg_app::bridge;

#[derive(Parser, Debug)]
#[command(name = "kimg-create")]
#[command(author, version, about = "Convert image files to the KIMG format")]
struct Args {
    /// The image file to convert from.
    source: String,

    /// The kimg file to output to.
    #[arg(default_value = "image.kimg")]
    output: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let buffer = bridge::load_image(&args.source)?;
    kimg_io::write_kimg(&args.output, &buffer)
        .with_context(|| format!("failed to write KIMG file: {}", args.output))?;

    println!(
        "Encoded {} -> {} ({}x{})",
        args.source,
        args.output,
        buffer.width(),
        buffer.height()
    );

    Ok(())
}

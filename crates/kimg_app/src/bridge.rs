//! Bridge between standard raster formats and the KIMG pixel model.
//!
//! Standard-format decoding and encoding is delegated entirely to the
//! `image` crate; nothing here parses PNG or JPEG itself.

use anyhow::{bail, Context, Result};
use image::{GenericImageView, ImageFormat};
use kimg_core::{PixelBuffer, MIN_ENCODE_CHANNELS};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Loads any image format the `image` crate recognizes into a
/// [`PixelBuffer`].
///
/// Sources with fewer than 3 channels (grayscale, grayscale+alpha) are
/// rejected here, before the KIMG encoder ever runs. RGB sources keep 3
/// channels, sources with alpha keep 4; 16-bit samples are narrowed to 8.
pub fn load_image(path: impl AsRef<Path>) -> Result<PixelBuffer> {
    let path = path.as_ref();
    let img = image::open(path)
        .with_context(|| format!("failed to load image: {}", path.display()))?;

    let source_channels = img.color().channel_count() as usize;
    if source_channels < MIN_ENCODE_CHANNELS {
        bail!(
            "image must be full RGB: {} has {} channel(s)",
            path.display(),
            source_channels
        );
    }

    let (width, height) = img.dimensions();
    let (channels, samples) = if img.color().has_alpha() {
        (4, img.into_rgba8().into_raw())
    } else {
        (3, img.into_rgb8().into_raw())
    };

    Ok(PixelBuffer::new(width, height, channels, samples)?)
}

/// Saves interleaved RGB bytes as the format named by `path`'s extension.
///
/// Recognized (case-insensitive): `png` lossless, `jpg`/`jpeg` at quality
/// 100, `bmp`, `tga`. Any other extension fails with no file written.
pub fn save_image(path: impl AsRef<Path>, width: u32, height: u32, rgb: Vec<u8>) -> Result<()> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let format = match ext.as_str() {
        "png" => ImageFormat::Png,
        "jpg" | "jpeg" => ImageFormat::Jpeg,
        "bmp" => ImageFormat::Bmp,
        "tga" => ImageFormat::Tga,
        _ => bail!("unrecognized output extension: {}", path.display()),
    };

    let img = image::RgbImage::from_raw(width, height, rgb)
        .context("pixel data does not match the image dimensions")?;

    if format == ImageFormat::Jpeg {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut writer, 100);
        img.write_with_encoder(encoder)
            .with_context(|| format!("failed to encode JPEG: {}", path.display()))?;
        writer.flush()?;
    } else {
        img.save_with_format(path, format)
            .with_context(|| format!("failed to save image: {}", path.display()))?;
    }

    Ok(())
}

//! File-level KIMG encoding.

use kimg_core::{encode, KimgError, KimgHeader, PixelBuffer, Result, MIN_ENCODE_CHANNELS};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Encodes `buffer` into a KIMG file at `path`, creating or overwriting it.
///
/// The buffer is validated before the destination is touched, so a rejected
/// encode leaves no file behind. A write failure after creation is surfaced
/// as `Err` with whatever bytes made it to disk left in place.
pub fn write_kimg(path: impl AsRef<Path>, buffer: &PixelBuffer) -> Result<()> {
    if buffer.channels() < MIN_ENCODE_CHANNELS {
        return Err(KimgError::TooFewChannels {
            channels: buffer.channels(),
        });
    }
    KimgHeader::new(buffer.width(), buffer.height())?;

    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    encode(&mut writer, buffer)?;
    writer.flush()?;

    Ok(())
}

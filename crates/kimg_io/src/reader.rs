//! File-level KIMG decoding.

use kimg_core::{decode, decode_header, DecodedImage, KimgHeader, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Reads just the 6-byte header of the KIMG file at `path`.
pub fn read_kimg_header(path: impl AsRef<Path>) -> Result<KimgHeader> {
    let file = File::open(path.as_ref())?;
    let mut reader = BufReader::new(file);
    decode_header(&mut reader)
}

/// Reads and decodes the KIMG file at `path`.
///
/// A pixel section shorter than the header promises yields a partial
/// [`DecodedImage`], not an error; callers check
/// [`DecodedImage::is_complete`]. A missing or unopenable file is an error.
pub fn read_kimg(path: impl AsRef<Path>) -> Result<DecodedImage> {
    let file = File::open(path.as_ref())?;

    #[cfg(target_os = "linux")]
    {
        use rustix::fs::{fadvise, Advice};
        let _ = fadvise(&file, 0, None, Advice::Sequential);
    }

    let mut reader = BufReader::new(file);
    decode(&mut reader)
}

//! KIMG decoder with explicit partial-result semantics for short streams.

use crate::error::{KimgError, Result};
use crate::header::{KimgHeader, HEADER_SIZE};
use crate::pixel::Rgb;
use std::io::{ErrorKind, Read};

/// A corrupt header can claim absurd dimensions; never trust it for
/// preallocation.
const PREALLOC_PIXEL_LIMIT: u64 = 1 << 22;

/// The result of decoding a KIMG stream.
///
/// `pixels` holds every complete RGB triple the stream contained, which may
/// be fewer than `header.pixel_count()` when the stream is truncated.
/// Callers that need a guaranteed-complete image must check
/// [`is_complete`](Self::is_complete) before rendering.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub header: KimgHeader,
    pub pixels: Vec<Rgb>,
}

impl DecodedImage {
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.pixels.len() as u64 == self.header.pixel_count()
    }

    /// How many triples the header promised but the stream did not deliver.
    #[inline]
    pub fn missing_pixels(&self) -> u64 {
        self.header.pixel_count().saturating_sub(self.pixels.len() as u64)
    }

    /// Flattens the triples into interleaved RGB bytes for handoff to a
    /// standard image encoder.
    pub fn into_rgb_bytes(self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for px in self.pixels {
            bytes.extend_from_slice(&px.to_array());
        }
        bytes
    }
}

/// Reads until `buf` is full or the stream ends, retrying on interruption.
/// Returns how many bytes were actually filled.
fn fill<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Reads and decodes the 6-byte header. A stream shorter than 6 bytes is
/// an error, not a partial result.
pub fn decode_header<R: Read>(reader: &mut R) -> Result<KimgHeader> {
    let mut bytes = [0u8; HEADER_SIZE];
    let filled = fill(reader, &mut bytes)?;
    if filled < HEADER_SIZE {
        return Err(KimgError::TruncatedHeader { actual: filled });
    }
    Ok(KimgHeader::from_bytes(&bytes))
}

/// Decodes a KIMG stream: header, then up to `width * height` RGB triples.
///
/// Each triple is read as a unit. When the stream ends mid-triple or before
/// the expected count, the incomplete triple is discarded and the triples
/// read so far are returned as a successful partial result; truncation is
/// detected by comparing `pixels.len()` against `header.pixel_count()`.
/// Only genuine I/O failures return `Err`.
pub fn decode<R: Read>(reader: &mut R) -> Result<DecodedImage> {
    let header = decode_header(reader)?;
    let expected = header.pixel_count();

    let mut pixels = Vec::with_capacity(expected.min(PREALLOC_PIXEL_LIMIT) as usize);
    let mut triple = [0u8; 3];
    for _ in 0..expected {
        if fill(reader, &mut triple)? < 3 {
            break;
        }
        pixels.push(Rgb::from(triple));
    }

    Ok(DecodedImage { header, pixels })
}

/// Decodes a KIMG byte slice, e.g. a file already read into memory.
pub fn decode_slice(data: &[u8]) -> Result<DecodedImage> {
    let mut cursor = data;
    decode(&mut cursor)
}

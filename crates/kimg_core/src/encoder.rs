//! KIMG encoder: 6-byte header followed by raw RGB triples.

use crate::error::{KimgError, Result};
use crate::header::KimgHeader;
use crate::pixel::{PixelBuffer, MIN_ENCODE_CHANNELS};
use std::io::Write;

/// Encodes `buffer` as a KIMG stream into `writer`.
///
/// Buffers with fewer than 3 channels and dimensions above the 24-bit
/// maximum are rejected before any byte is written. Channels beyond the
/// first three (alpha and friends) are dropped; KIMG persists RGB only.
///
/// A mid-stream write failure leaves whatever was already written in
/// place; there is no rollback.
pub fn encode<W: Write>(writer: &mut W, buffer: &PixelBuffer) -> Result<()> {
    if buffer.channels() < MIN_ENCODE_CHANNELS {
        return Err(KimgError::TooFewChannels {
            channels: buffer.channels(),
        });
    }

    let header = KimgHeader::new(buffer.width(), buffer.height())?;
    writer.write_all(&header.to_bytes())?;

    for window in buffer.samples().chunks_exact(buffer.channels()) {
        writer.write_all(&window[..3])?;
    }

    Ok(())
}

/// Encodes `buffer` into a freshly allocated byte vector of exactly
/// `6 + width * height * 3` bytes.
pub fn encode_to_vec(buffer: &PixelBuffer) -> Result<Vec<u8>> {
    if buffer.channels() < MIN_ENCODE_CHANNELS {
        return Err(KimgError::TooFewChannels {
            channels: buffer.channels(),
        });
    }

    let header = KimgHeader::new(buffer.width(), buffer.height())?;
    let mut out = Vec::with_capacity(header.file_size() as usize);
    encode(&mut out, buffer)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_rgb() {
        #[rustfmt::skip]
        let buffer = PixelBuffer::new(2, 2, 3, vec![
            255, 0, 0,   0, 255, 0,
            0, 0, 255,   255, 255, 0,
        ])
        .unwrap();

        let encoded = encode_to_vec(&buffer).unwrap();
        assert_eq!(&encoded[..6], &[0x00, 0x00, 0x02, 0x00, 0x00, 0x02]);
        #[rustfmt::skip]
        assert_eq!(&encoded[6..], &[
            255, 0, 0,   0, 255, 0,
            0, 0, 255,   255, 255, 0,
        ]);
    }

    #[test]
    fn test_encode_drops_alpha() {
        let buffer =
            PixelBuffer::new(2, 1, 4, vec![10, 20, 30, 40, 50, 60, 70, 80]).unwrap();

        let encoded = encode_to_vec(&buffer).unwrap();
        assert_eq!(&encoded[6..], &[10, 20, 30, 50, 60, 70]);
    }

    #[test]
    fn test_encode_rejects_grayscale_before_writing() {
        let buffer = PixelBuffer::new(2, 1, 1, vec![128, 200]).unwrap();

        let mut out = Vec::new();
        let err = encode(&mut out, &buffer).unwrap_err();
        assert!(matches!(err, KimgError::TooFewChannels { channels: 1 }));
        assert!(out.is_empty());
    }

    #[test]
    fn test_encode_size_invariant() {
        for (w, h, ch) in [(1u32, 1u32, 3usize), (5, 4, 3), (3, 7, 4), (0, 0, 3)] {
            let samples = vec![0u8; w as usize * h as usize * ch];
            let buffer = PixelBuffer::new(w, h, ch, samples).unwrap();
            let encoded = encode_to_vec(&buffer).unwrap();
            assert_eq!(encoded.len() as u64, 6 + w as u64 * h as u64 * 3);
        }
    }

    #[test]
    fn test_encode_zero_sized_image() {
        let buffer = PixelBuffer::new(0, 0, 3, vec![]).unwrap();
        let encoded = encode_to_vec(&buffer).unwrap();
        assert_eq!(encoded, vec![0u8; 6]);
    }
}

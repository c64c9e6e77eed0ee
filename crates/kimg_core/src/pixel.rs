//! In-memory pixel representations shared by the encoder and decoder.

use crate::error::{KimgError, Result};

/// Minimum channel count a buffer needs before it can be encoded as KIMG.
pub const MIN_ENCODE_CHANNELS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(px: Rgb) -> Self {
        px.to_array()
    }
}

/// An interleaved raster image as produced by a standard image decoder.
///
/// Samples are row-major, top row first, left-to-right within a row, with
/// `channels` consecutive samples per pixel. The buffer owns its samples
/// exclusively and is handed by value between pipeline stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    channels: usize,
    samples: Vec<u8>,
}

impl PixelBuffer {
    /// Builds a buffer, enforcing `samples.len() == width * height * channels`.
    pub fn new(width: u32, height: u32, channels: usize, samples: Vec<u8>) -> Result<Self> {
        if channels == 0 {
            return Err(KimgError::ZeroChannels);
        }

        let expected = width as u64 * height as u64 * channels as u64;
        if samples.len() as u64 != expected {
            return Err(KimgError::InvalidBufferSize {
                expected,
                actual: samples.len() as u64,
            });
        }

        Ok(Self {
            width,
            height,
            channels,
            samples,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    #[inline]
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// The sample window of the pixel at `(x, y)`: `channels` consecutive
    /// samples starting at `(y * width + x) * channels`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let start = (y as usize * self.width as usize + x as usize) * self.channels;
        &self.samples[start..start + self.channels]
    }

    /// Whether the buffer carries at least the RGB channels KIMG persists.
    #[inline]
    pub fn has_rgb(&self) -> bool {
        self.channels >= MIN_ENCODE_CHANNELS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_sample_length() {
        assert!(PixelBuffer::new(2, 2, 3, vec![0; 12]).is_ok());
        assert!(PixelBuffer::new(2, 2, 3, vec![0; 11]).is_err());
        assert!(PixelBuffer::new(2, 2, 3, vec![0; 13]).is_err());
    }

    #[test]
    fn test_new_rejects_zero_channels() {
        assert!(matches!(
            PixelBuffer::new(2, 2, 0, vec![]),
            Err(KimgError::ZeroChannels)
        ));
    }

    #[test]
    fn test_zero_sized_image() {
        let buffer = PixelBuffer::new(0, 0, 3, vec![]).unwrap();
        assert_eq!(buffer.samples().len(), 0);
    }

    #[test]
    fn test_pixel_window() {
        #[rustfmt::skip]
        let samples = vec![
            10, 20, 30, 40,   50, 60, 70, 80,
            90, 91, 92, 93,   94, 95, 96, 97,
        ];
        let buffer = PixelBuffer::new(2, 2, 4, samples).unwrap();

        assert_eq!(buffer.pixel(0, 0), &[10, 20, 30, 40]);
        assert_eq!(buffer.pixel(1, 0), &[50, 60, 70, 80]);
        assert_eq!(buffer.pixel(0, 1), &[90, 91, 92, 93]);
        assert_eq!(buffer.pixel(1, 1), &[94, 95, 96, 97]);
    }

    #[test]
    #[should_panic(expected = "pixel out of bounds")]
    fn test_pixel_out_of_bounds_panics() {
        let buffer = PixelBuffer::new(1, 1, 3, vec![0; 3]).unwrap();
        buffer.pixel(1, 0);
    }

    #[test]
    fn test_has_rgb() {
        assert!(!PixelBuffer::new(1, 1, 1, vec![0]).unwrap().has_rgb());
        assert!(!PixelBuffer::new(1, 1, 2, vec![0; 2]).unwrap().has_rgb());
        assert!(PixelBuffer::new(1, 1, 3, vec![0; 3]).unwrap().has_rgb());
        assert!(PixelBuffer::new(1, 1, 4, vec![0; 4]).unwrap().has_rgb());
    }

    #[test]
    fn test_rgb_conversions() {
        let px = Rgb::new(1, 2, 3);
        assert_eq!(px.to_array(), [1, 2, 3]);
        assert_eq!(Rgb::from([1, 2, 3]), px);
        assert_eq!(<[u8; 3]>::from(px), [1, 2, 3]);
    }
}

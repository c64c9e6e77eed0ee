//! The 6-byte KIMG file header: width and height as big-endian tribytes.

use crate::error::Result;
use crate::tribyte::{checked_tribyte, from_tribyte, to_tribyte};

/// Serialized header size in bytes.
pub const HEADER_SIZE: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KimgHeader {
    pub width: u32,
    pub height: u32,
}

impl KimgHeader {
    /// Builds a header, rejecting dimensions above the 24-bit maximum.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        checked_tribyte(width)?;
        checked_tribyte(height)?;
        Ok(Self { width, height })
    }

    /// Serializes as width tribyte then height tribyte. Dimensions set
    /// directly on the struct beyond 24 bits are masked; [`Self::new`] is
    /// the validated path.
    pub fn to_bytes(self) -> [u8; HEADER_SIZE] {
        let w = to_tribyte(self.width);
        let h = to_tribyte(self.height);
        [w[0], w[1], w[2], h[0], h[1], h[2]]
    }

    /// Every 6-byte pattern is a representable header, so this cannot fail.
    pub fn from_bytes(bytes: &[u8; HEADER_SIZE]) -> Self {
        Self {
            width: from_tribyte([bytes[0], bytes[1], bytes[2]]),
            height: from_tribyte([bytes[3], bytes[4], bytes[5]]),
        }
    }

    #[inline]
    pub const fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    #[inline]
    pub const fn pixel_bytes(&self) -> u64 {
        self.pixel_count() * 3
    }

    /// Exact size of a complete file with this header.
    #[inline]
    pub const fn file_size(&self) -> u64 {
        HEADER_SIZE as u64 + self.pixel_bytes()
    }
}

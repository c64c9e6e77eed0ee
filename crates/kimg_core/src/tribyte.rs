//! 24-bit big-endian integer codec used by the KIMG header.

use crate::error::{KimgError, Result};

/// Largest value representable in three bytes.
pub const TRIBYTE_MAX: u32 = 0x00FF_FFFF;

/// Encodes the low 24 bits of `value` as three big-endian bytes.
///
/// Total over all of `u32`: bits above the 24th are masked off, not
/// rejected. Callers encoding dimensions must use [`checked_tribyte`]
/// or validate the range themselves.
#[inline]
pub const fn to_tribyte(value: u32) -> [u8; 3] {
    [(value >> 16) as u8, (value >> 8) as u8, value as u8]
}

/// Decodes three big-endian bytes into the integer they represent.
///
/// Exact inverse of [`to_tribyte`] over `[0, TRIBYTE_MAX]`.
#[inline]
pub const fn from_tribyte(bytes: [u8; 3]) -> u32 {
    (bytes[0] as u32) << 16 | (bytes[1] as u32) << 8 | bytes[2] as u32
}

/// Range-checked encode: fails for values above [`TRIBYTE_MAX`] instead
/// of silently wrapping.
#[inline]
pub fn checked_tribyte(value: u32) -> Result<[u8; 3]> {
    if value > TRIBYTE_MAX {
        return Err(KimgError::DimensionTooLarge {
            value,
            max: TRIBYTE_MAX,
        });
    }
    Ok(to_tribyte(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_known_values() {
        assert_eq!(to_tribyte(0), [0x00, 0x00, 0x00]);
        assert_eq!(to_tribyte(1), [0x00, 0x00, 0x01]);
        assert_eq!(to_tribyte(1920), [0x00, 0x07, 0x80]);
        assert_eq!(to_tribyte(TRIBYTE_MAX), [0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn test_decode_known_values() {
        assert_eq!(from_tribyte([0x00, 0x00, 0x00]), 0);
        assert_eq!(from_tribyte([0x00, 0x04, 0x38]), 1080);
        assert_eq!(from_tribyte([0xFF, 0xFF, 0xFF]), TRIBYTE_MAX);
    }

    #[test]
    fn test_roundtrip_boundaries() {
        for v in [0, 1, 255, 256, 65_535, 65_536, 1920, 1080, TRIBYTE_MAX] {
            assert_eq!(from_tribyte(to_tribyte(v)), v);
        }
    }

    #[test]
    fn test_roundtrip_swept() {
        // Stride chosen to hit every residue of all three byte positions.
        let mut v = 0u32;
        while v <= TRIBYTE_MAX {
            assert_eq!(from_tribyte(to_tribyte(v)), v);
            v += 4099;
        }
    }

    #[test]
    fn test_unchecked_masks_high_bits() {
        assert_eq!(to_tribyte(TRIBYTE_MAX + 1), [0x00, 0x00, 0x00]);
        assert_eq!(to_tribyte(0xAB00_0001), [0x00, 0x00, 0x01]);
    }

    #[test]
    fn test_checked_rejects_out_of_range() {
        assert!(checked_tribyte(TRIBYTE_MAX).is_ok());
        assert!(checked_tribyte(TRIBYTE_MAX + 1).is_err());
        assert!(checked_tribyte(u32::MAX).is_err());
    }
}

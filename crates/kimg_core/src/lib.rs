pub mod decoder;
pub mod encoder;
mod error;
pub mod header;
pub mod pixel;
pub mod tribyte;

pub use decoder::{decode, decode_header, decode_slice, DecodedImage};
pub use encoder::{encode, encode_to_vec};
pub use error::{KimgError, Result};
pub use header::{KimgHeader, HEADER_SIZE};
pub use pixel::{PixelBuffer, Rgb, MIN_ENCODE_CHANNELS};
pub use tribyte::TRIBYTE_MAX;

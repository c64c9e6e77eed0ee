use thiserror::Error;

#[derive(Debug, Error)]
pub enum KimgError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dimension {value} exceeds the 24-bit maximum {max}")]
    DimensionTooLarge { value: u32, max: u32 },

    #[error("Pixel buffer has {channels} channel(s), KIMG requires at least 3 (RGB)")]
    TooFewChannels { channels: usize },

    #[error("Pixel buffer must have at least one channel")]
    ZeroChannels,

    #[error("Invalid sample buffer size: expected {expected}, got {actual}")]
    InvalidBufferSize { expected: u64, actual: u64 },

    #[error("Truncated header: got {actual} of 6 bytes")]
    TruncatedHeader { actual: usize },
}

pub type Result<T> = std::result::Result<T, KimgError>;

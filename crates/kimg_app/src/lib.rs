//! Shared pieces of the KIMG command-line tools.

pub mod bridge;

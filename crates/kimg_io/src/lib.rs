//! Filesystem adapters for the KIMG codec.
//!
//! The core crate works on `Read`/`Write` streams; this crate owns the file
//! handles. Handles are scoped to each call and released on every exit path,
//! success or failure.

mod reader;
mod writer;

pub use reader::{read_kimg, read_kimg_header};
pub use writer::write_kimg;

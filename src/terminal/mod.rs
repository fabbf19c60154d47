//! Shared terminal utilities.
//!
//! Box drawing and styled output, written against any `Write` so the same
//! rendering serves stdout and in-memory buffers.

mod output;

pub use output::*;

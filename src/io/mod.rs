//! I/O utilities for hexlit.
//!
//! Provides whole-file reading, memory mapping large inputs.

pub mod reader;

pub use reader::{FileBytes, FileReader, MMAP_THRESHOLD, read_bytes};

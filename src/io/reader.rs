//! Whole-file byte reading.
//!
//! Small files are read into a `Vec`. Files of [`MMAP_THRESHOLD`] bytes or
//! more stay memory mapped and are formatted directly from the mapping.

// Memory mapping requires unsafe; the mapping is read-only
#![allow(unsafe_code)]

use crate::error::{IoError, Result};
use memmap2::Mmap;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Files at or above this size are memory mapped instead of copied (1MB).
pub const MMAP_THRESHOLD: u64 = 1024 * 1024;

/// Contents of an input file.
#[derive(Debug)]
pub enum FileBytes {
    /// Read into memory.
    Owned(Vec<u8>),
    /// Read-only mapping of the file.
    Mapped(Mmap),
}

impl FileBytes {
    /// Returns `true` if the contents are served from a memory map.
    #[must_use]
    pub const fn is_mapped(&self) -> bool {
        matches!(self, Self::Mapped(_))
    }
}

impl Deref for FileBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            Self::Owned(bytes) => bytes.as_slice(),
            Self::Mapped(mmap) => &mmap[..],
        }
    }
}

impl AsRef<[u8]> for FileBytes {
    fn as_ref(&self) -> &[u8] {
        self
    }
}

/// Input file opened for a single full read.
///
/// # Examples
///
/// ```no_run
/// use hexlit::io::FileReader;
///
/// let bytes = FileReader::open("firmware.bin").unwrap().read().unwrap();
/// println!("{}", hexlit::format_literals(&bytes));
/// ```
#[derive(Debug)]
pub struct FileReader {
    file: File,
    size: u64,
    path: PathBuf,
}

impl FileReader {
    /// Opens `path` and records its size.
    ///
    /// # Errors
    ///
    /// [`IoError::FileNotFound`] if nothing exists at `path`;
    /// [`IoError::ReadFailed`] if it cannot be opened or is a directory.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let read_failed = |reason: String| IoError::ReadFailed {
            path: path.clone(),
            reason,
        };

        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(IoError::FileNotFound { path }.into());
            }
            Err(e) => return Err(read_failed(e.to_string()).into()),
        };

        let metadata = file.metadata().map_err(|e| read_failed(e.to_string()))?;
        if metadata.is_dir() {
            return Err(read_failed("is a directory".to_string()).into());
        }

        let size = metadata.len();
        debug!(path = %path.display(), size, "opened input file");

        Ok(Self { file, size, path })
    }

    /// Size of the file when it was opened.
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Path the reader was opened with.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole file, releasing the handle.
    ///
    /// # Errors
    ///
    /// [`IoError::MmapFailed`] or [`IoError::ReadFailed`] depending on the
    /// strategy chosen for the file's size.
    pub fn read(self) -> Result<FileBytes> {
        if self.size >= MMAP_THRESHOLD {
            self.map()
        } else {
            self.read_owned()
        }
    }

    fn map(self) -> Result<FileBytes> {
        debug!(path = %self.path.display(), "mapping input");
        // Safety: read-only mapping; the input is not written by this process
        let mmap = unsafe { Mmap::map(&self.file) }.map_err(|e| IoError::MmapFailed {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        Ok(FileBytes::Mapped(mmap))
    }

    #[allow(clippy::cast_possible_truncation)]
    fn read_owned(mut self) -> Result<FileBytes> {
        debug!(path = %self.path.display(), "reading input");
        let mut bytes = Vec::with_capacity(self.size as usize);
        self.file
            .read_to_end(&mut bytes)
            .map_err(|e| IoError::ReadFailed {
                path: self.path,
                reason: e.to_string(),
            })?;
        Ok(FileBytes::Owned(bytes))
    }
}

/// Reads an entire file.
///
/// The file handle is released before this returns, on success or failure.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn read_bytes<P: AsRef<Path>>(path: P) -> Result<FileBytes> {
    FileReader::open(path)?.read()
}

//! Line source abstraction for thread dump input.
//!
//! This module supplies the ordered sequence of raw text lines the segmentation machine
//! consumes. It abstracts over where the dump comes from (a file on disk or a buffer already
//! in memory) so that everything downstream works on a materialized `&[&str]` and never
//! performs I/O itself.
//!
//! # Key Components
//!
//! - [`crate::file::DumpSource`] - Main input abstraction, owns a backend and exposes lines
//! - [`crate::file::Backend`] - Trait for different data sources (disk files, memory buffers)
//! - [`crate::file::physical::Physical`] - Memory-mapped file backend for disk access
//! - [`crate::file::memory::Memory`] - In-memory buffer backend
//!
//! # Examples
//!
//! ## Loading from File
//!
//! ```rust,no_run
//! use threadscope::DumpSource;
//!
//! let source = DumpSource::from_file("tests/samples/jdk8.txt")?;
//! println!("Dump has {} lines", source.text().lines().count());
//! # Ok::<(), threadscope::Error>(())
//! ```
//!
//! ## Loading from Memory
//!
//! ```rust
//! use threadscope::DumpSource;
//!
//! let source = DumpSource::from_text("first\r\nsecond\n");
//! let text = source.text();
//! assert_eq!(DumpSource::lines(&text), vec!["first", "second"]);
//! ```
//!
//! # Encoding
//!
//! Dumps are decoded as UTF-8. Invalid byte sequences are replaced rather than rejected, so a
//! dump that was captured with a different platform charset still parses; only the affected
//! characters are lost.

mod memory;
mod physical;

use std::{borrow::Cow, path::Path};

use crate::Result;
use memory::Memory;
use physical::Physical;

/// Backend trait for dump data sources.
///
/// This trait abstracts over the source of dump data, allowing for both in-memory and on-disk
/// representations. All implementations must be thread-safe so that several dumps can be
/// read in parallel.
pub trait Backend: Send + Sync {
    /// Returns the entire data buffer.
    fn data(&self) -> &[u8];

    /// Returns the total length of the data buffer.
    fn len(&self) -> usize;

    /// Returns `true` if the backend holds no data.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A loaded thread dump, ready to be split into lines.
///
/// `DumpSource` owns its backend; the lines handed to the parser borrow from the decoded
/// text and therefore live as long as the source itself.
pub struct DumpSource {
    data: Box<dyn Backend>,
}

impl DumpSource {
    /// Loads a dump from disk using a memory mapping.
    ///
    /// # Arguments
    /// * `path` - Path to the dump file. Accepts `&Path`, `&str`, `String`, or `PathBuf`.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the file cannot be opened or
    /// [`crate::Error::Error`] if memory mapping fails.
    pub fn from_file(path: impl AsRef<Path>) -> Result<DumpSource> {
        let physical = Physical::new(path)?;
        Ok(DumpSource {
            data: Box::new(physical),
        })
    }

    /// Wraps a byte buffer that already holds a dump.
    #[must_use]
    pub fn from_mem(data: Vec<u8>) -> DumpSource {
        DumpSource {
            data: Box::new(Memory::new(data)),
        }
    }

    /// Wraps dump text; never fails.
    #[must_use]
    pub fn from_text(text: &str) -> DumpSource {
        Self::from_mem(text.as_bytes().to_vec())
    }

    /// Returns the size of the raw input in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the input is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Decodes the input as UTF-8, replacing invalid sequences.
    ///
    /// Borrows the underlying buffer when it is valid UTF-8, which is the common case.
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.data.data())
    }

    /// Splits text into lines, stripping `\n` and `\r\n` terminators.
    ///
    /// Leading and trailing whitespace inside a line is left untouched; the segmentation
    /// machine depends on it to tell body lines from blank separators. A trailing terminator
    /// does not produce an extra empty line.
    #[must_use]
    pub fn lines(text: &str) -> Vec<&str> {
        text.lines().collect()
    }
}

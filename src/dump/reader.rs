use std::path::Path;

use log::debug;
use rayon::prelude::*;

use crate::{
    dump::{config::ParserConfig, segment::segment, thread::ThreadInfo},
    file::DumpSource,
    Result,
};

/// Reads thread dumps from files or text and returns their thread records.
///
/// The reader only carries a [`ParserConfig`]; it holds no state between calls and can be
/// shared freely across threads.
///
/// # Examples
///
/// ```rust
/// use threadscope::ThreadDumpReader;
///
/// let dump = "\"main\" #1 prio=5 os_prio=0 tid=0x00007f32b4012000 nid=0x5934 runnable\n   \
///             java.lang.Thread.State: RUNNABLE\n\tat Main.main(Main.java:3)\n";
///
/// let threads = ThreadDumpReader::new().read_str(dump);
/// assert_eq!(threads.len(), 1);
/// assert_eq!(threads[0].name(), "main");
/// assert_eq!(threads[0].state(), "RUNNABLE");
/// assert_eq!(threads[0].stack_trace(), Some("at Main.main(Main.java:3)\n"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadDumpReader {
    config: ParserConfig,
}

impl ThreadDumpReader {
    /// Creates a reader with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a reader with a custom configuration.
    #[must_use]
    pub fn with_config(config: ParserConfig) -> Self {
        ThreadDumpReader { config }
    }

    /// Returns the configuration this reader parses with.
    #[must_use]
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses the dump stored at `path`.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the file does not exist or cannot be read, or
    /// [`crate::Error::Error`] if it cannot be mapped. Content never causes an error.
    pub fn read_file(&self, path: impl AsRef<Path>) -> Result<Vec<ThreadInfo>> {
        let path = path.as_ref();
        let source = DumpSource::from_file(path)?;
        let threads = self.read_source(&source);
        debug!("{}: {} threads", path.display(), threads.len());
        Ok(threads)
    }

    /// Parses dump text held in memory.
    #[must_use]
    pub fn read_str(&self, text: &str) -> Vec<ThreadInfo> {
        self.parse_lines(&DumpSource::lines(text))
    }

    /// Parses an already loaded [`DumpSource`].
    #[must_use]
    pub fn read_source(&self, source: &DumpSource) -> Vec<ThreadInfo> {
        let text = source.text();
        self.parse_lines(&DumpSource::lines(&text))
    }

    /// Parses a materialized line sequence.
    #[must_use]
    pub fn parse_lines(&self, lines: &[&str]) -> Vec<ThreadInfo> {
        segment(lines, &self.config)
    }

    /// Parses several dumps in parallel.
    ///
    /// Returns one result per path, in the order the paths were given. A failing path does
    /// not affect the others.
    pub fn read_files<P>(&self, paths: &[P]) -> Vec<Result<Vec<ThreadInfo>>>
    where
        P: AsRef<Path> + Sync,
    {
        paths.par_iter().map(|path| self.read_file(path)).collect()
    }
}

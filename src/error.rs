use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Thread dump parsing is deliberately tolerant: unrecognized lines, truncated records and
/// malformed header fields are never reported through this type. Only failures at the input
/// boundary (opening or mapping a file) and explicit conversions requested by the caller
/// surface as errors.
///
/// # Error Categories
///
/// ## I/O and External Errors
/// - [`Error::FileError`] - Filesystem I/O errors
/// - [`Error::Error`] - Memory mapping and other miscellaneous failures
///
/// ## Conversion Errors
/// - [`Error::UnknownState`] - A string is not one of the canonical JVM thread states
///
/// # Examples
///
/// ```rust
/// use threadscope::{Error, ThreadDumpReader};
///
/// match ThreadDumpReader::new().read_file("does/not/exist.txt") {
///     Ok(threads) => println!("Parsed {} threads", threads.len()),
///     Err(Error::FileError(io_err)) => eprintln!("I/O error: {}", io_err),
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O error.
    ///
    /// Wraps standard I/O errors that can occur when opening a dump file, such as a missing
    /// path or insufficient permissions.
    #[error("{0}")]
    FileError(#[from] std::io::Error),

    /// Generic error for miscellaneous failures.
    ///
    /// Used when memory mapping an otherwise readable file fails.
    #[error("{0}")]
    Error(String),

    /// The provided text is not a canonical JVM thread state.
    ///
    /// Returned by [`crate::CanonicalState::parse`]; the segmentation machine itself treats an
    /// unknown state token as "no explicit state" instead.
    #[error("Unknown thread state - {0}")]
    UnknownState(String),
}

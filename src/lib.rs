// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![allow(dead_code)]
//#![deny(unsafe_code)]
// - 'file/physical.rs' uses mmap to map a file into memory

//! # threadscope
//!
//! A fast, tolerant parser and analyzer for JVM thread dumps.
//!
//! `threadscope` turns the raw text printed by `jstack`, `kill -3` or `jcmd Thread.print`
//! into structured thread records, then derives lock ownership and top-of-stack method
//! frequencies from them. Dumps from JVM 8 through 15 and vendor builds are supported; the
//! parser never fails on content, it skips what it does not recognize.
//!
//! ## Features
//!
//! - **📦 Efficient input** - Memory-mapped dump files, decoded without copying when valid UTF-8
//! - **🧵 Robust segmentation** - Handles missing state lines, header dialects and threads printed back to back
//! - **🔒 Lock analysis** - Monitors held, waited on and parked on, per thread
//! - **📊 Hot frames** - How many threads sit in the same method
//! - **⚡ Batch parsing** - Several dumps in parallel
//!
//! ## Quick Start
//!
//! ### Using the Prelude
//!
//! ```rust,no_run
//! use threadscope::prelude::*;
//!
//! let threads = ThreadDumpReader::new().read_file("tests/samples/jdk8.txt")?;
//! println!("Found {} threads", threads.len());
//! # Ok::<(), threadscope::Error>(())
//! ```
//!
//! ### Basic Usage
//!
//! ```rust
//! use threadscope::{analysis, parse};
//!
//! let dump = "\"default task-23\" #349 prio=5 os_prio=0 tid=0x00007f8fe400c800 nid=0x72fa waiting for monitor entry\n\
//!             \tjava.lang.Thread.State: BLOCKED (on object monitor)\n\
//!             \tat java.security.Provider.getService(Provider.java:1039)\n\
//!             \t- locked <0x0000000682e5f948> (a sun.security.provider.Sun)\n";
//!
//! let threads = parse(dump);
//! assert_eq!(threads.len(), 1);
//! assert_eq!(threads[0].state(), "BLOCKED");
//!
//! let holds = analysis::holds(&threads);
//! assert_eq!(holds[&threads[0]][0].class_name, "sun.security.provider.Sun");
//! ```
//!
//! ## Architecture
//!
//! Data flows one way, leaf-first:
//!
//! - [`DumpSource`] - Supplies the dump's lines from a file or memory
//! - [`dump`] - Field extractors, the segmentation state machine and the [`ThreadInfo`] model
//! - [`analysis`] - Lock holds and most-used methods over the parsed records
//! - [`prelude`] - Convenient re-exports of commonly used types
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Error Handling
//!
//! Only I/O at the input boundary can fail:
//!
//! ```rust
//! use threadscope::{parse_file, Error};
//!
//! match parse_file("tests/samples/missing.txt") {
//!     Ok(threads) => println!("{} threads", threads.len()),
//!     Err(Error::FileError(e)) => println!("Cannot read dump: {}", e),
//!     Err(e) => println!("Error: {}", e),
//! }
//! ```
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade at `debug` and `trace`
//! level. Install any logger in the application to see them.
//!
//! ## Development and Testing
//!
//! ### Fuzzing
//!
//! ```bash
//! cargo +nightly fuzz run threaddump --release
//! ```
//!
//! ### Testing
//!
//! ```bash
//! cargo test
//! cargo bench
//! ```

pub(crate) mod error;
pub(crate) mod file;

#[cfg(test)]
pub(crate) mod test;

/// Shortcuts for the most common imports.
pub mod prelude;

pub mod analysis;

pub mod dump;

use std::path::Path;

/// `threadscope` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `threadscope` Error type
///
/// The main error type for all operations in this crate.
pub use error::Error;

/// Line source for dump input.
pub use file::{Backend, DumpSource};

/// Parsing entry points and the thread record model.
pub use dump::{
    CanonicalState, InformalState, ParserConfig, ThreadDumpReader, ThreadInfo, ThreadState,
};

/// Parses dump text with the default configuration.
///
/// Equivalent to `ThreadDumpReader::new().read_str(text)`.
#[must_use]
pub fn parse(text: &str) -> Vec<ThreadInfo> {
    ThreadDumpReader::new().read_str(text)
}

/// Parses the dump file at `path` with the default configuration.
///
/// # Errors
/// Returns [`Error::FileError`] if the file does not exist or cannot be read.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Vec<ThreadInfo>> {
    ThreadDumpReader::new().read_file(path)
}

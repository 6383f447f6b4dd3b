//! Thread dump parsing.
//!
//! This module turns the raw lines of a JVM thread dump (`jstack`, `kill -3`, `jcmd
//! Thread.print`) into an ordered list of [`ThreadInfo`] records. It is organized leaf-first:
//!
//! - [`extract`](crate::dump::extract_header) - Stateless per-line field extractors
//! - [`segment()`] - The cursor-driven state machine grouping lines into records
//! - [`ThreadInfo`], [`ThreadState`] - The record model
//! - [`ThreadDumpReader`] - Entry point tying a [`crate::DumpSource`] to the segmentation
//!
//! # Supported Dialects
//!
//! Headers from JVM 8 through 15 and vendor builds are accepted, with or without the `#<n>`
//! ordinal, `prio=`, or the `cpu=`/`elapsed=` timers added in JDK 11. Threads without a Java
//! stack are printed by HotSpot as bare headers; their state is inferred from the header's
//! status text when no `java.lang.Thread.State:` line follows.
//!
//! # Examples
//!
//! ```rust
//! use threadscope::{dump::segment, ParserConfig};
//!
//! let lines = [
//!     "\"VM Thread\" os_prio=0 tid=0x00007f195c299000 nid=0xb07e runnable",
//!     "\"GC Thread#0\" os_prio=0 tid=0x00007f195c04a800 nid=0xb077 runnable",
//!     "",
//! ];
//! let threads = segment(&lines, &ParserConfig::default());
//! assert_eq!(threads.len(), 2);
//! assert_eq!(threads[1].name(), "GC Thread#0");
//! ```

mod config;
mod extract;
mod reader;
mod segment;
mod thread;

pub use config::ParserConfig;
pub use extract::{
    extract_explicit_state, extract_header, has_runnable_marker,
    has_waiting_on_condition_marker, is_header, Header,
};
pub use reader::ThreadDumpReader;
pub use segment::{segment, LineCursor};
pub use thread::{CanonicalState, InformalState, ThreadInfo, ThreadState};

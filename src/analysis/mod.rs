//! Derived analyses over parsed thread records.
//!
//! Both passes take the ordered record list produced by [`crate::ThreadDumpReader`] and never
//! look back at the raw dump:
//!
//! - [`holds`] / [`holds_for_thread`] - Monitors each thread holds (`- locked <..> (a ..)`)
//! - [`lock_relations_for_thread`] - All lock annotations of a thread, tagged by [`LockKind`]
//! - [`most_used_methods`] - How many threads share each top-of-stack frame
//!
//! # Usage
//!
//! ```rust,no_run
//! use threadscope::{analysis, ThreadDumpReader};
//!
//! let threads = ThreadDumpReader::new().read_file("tests/samples/jdk8.txt")?;
//!
//! for (thread, locks) in analysis::holds(&threads) {
//!     println!("{} holds {} locks", thread.name(), locks.len());
//! }
//!
//! let methods = analysis::most_used_methods(&threads);
//! for (signature, count) in analysis::ranked(&methods).into_iter().take(5) {
//!     println!("{count:>4} {signature}");
//! }
//! # Ok::<(), threadscope::Error>(())
//! ```

mod locks;
mod methods;

pub use locks::{
    holds, holds_for_thread, lock_relations_for_thread, LockKind, LockRelation, Locked,
};
pub use methods::{most_used_methods, most_used_methods_with, ranked};

//! Lock relations recorded in stack traces.
//!
//! jstack annotates frames with the monitors and synchronizers a thread interacts with:
//!
//! ```text
//! - locked <0x0000000682e5f948> (a sun.security.provider.Sun)
//! - waiting to lock <0x00000000c0008ee0> (a java.lang.Object)
//! - parking to wait for  <0x00000000c01ec3b8> (a java.util.concurrent.locks.ReentrantLock$NonfairSync)
//! - waiting on <0x00000000c0008f48> (a java.lang.ref.Reference$Lock)
//! ```
//!
//! Relations are extracted per thread only; no cross-thread wait-for graph is built.

use std::{collections::HashMap, sync::LazyLock};

use regex::Regex;
use strum::{Display, EnumCount, EnumIter, IntoEnumIterator};

use crate::dump::ThreadInfo;

static RELATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"-\s+(locked|waiting to lock|parking to wait for|waiting on)\s+<(0x[0-9a-fA-F]+)>\s+\(a\s+([^)]+)\)",
    )
    .unwrap()
});

/// Kind of relation between a thread and a monitor or synchronizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount)]
pub enum LockKind {
    /// The thread holds the monitor
    #[strum(serialize = "locked")]
    Locked,
    /// The thread is blocked entering the monitor
    #[strum(serialize = "waiting to lock")]
    WaitingToLock,
    /// The thread is parked on a `java.util.concurrent` synchronizer
    #[strum(serialize = "parking to wait for")]
    ParkingToWaitFor,
    /// The thread called `Object.wait()` on the monitor
    #[strum(serialize = "waiting on")]
    WaitingOn,
}

impl LockKind {
    /// Keyword jstack prints after the `- ` of an annotated frame.
    #[must_use]
    pub fn keyword(&self) -> &'static str {
        match self {
            LockKind::Locked => "locked",
            LockKind::WaitingToLock => "waiting to lock",
            LockKind::ParkingToWaitFor => "parking to wait for",
            LockKind::WaitingOn => "waiting on",
        }
    }

    fn from_keyword(keyword: &str) -> Option<LockKind> {
        LockKind::iter().find(|kind| kind.keyword() == keyword)
    }
}

/// A monitor or synchronizer, identified by its address and class.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locked {
    /// Hexadecimal object address, e.g. `0x0000000682e5f948`
    pub address: String,
    /// Fully qualified class of the object
    pub class_name: String,
}

impl Locked {
    /// Creates a new lock value.
    #[must_use]
    pub fn new(address: impl Into<String>, class_name: impl Into<String>) -> Locked {
        Locked {
            address: address.into(),
            class_name: class_name.into(),
        }
    }
}

/// One annotated frame: what the thread does with which lock.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LockRelation {
    /// Relation kind
    pub kind: LockKind,
    /// The monitor or synchronizer involved
    pub lock: Locked,
}

/// Returns every lock relation in the thread's stack trace, top of stack first.
///
/// Annotations without an address (`- waiting on <no object reference available>`) and the
/// entries under "Locked ownable synchronizers" are not relations and are skipped.
#[must_use]
pub fn lock_relations_for_thread(thread: &ThreadInfo) -> Vec<LockRelation> {
    thread
        .frames()
        .filter_map(|frame| {
            let captures = RELATION_REGEX.captures(frame)?;
            let kind = LockKind::from_keyword(captures.get(1)?.as_str())?;
            Some(LockRelation {
                kind,
                lock: Locked::new(captures.get(2)?.as_str(), captures.get(3)?.as_str().trim()),
            })
        })
        .collect()
}

/// Returns the locks the thread holds, in stack-trace order.
///
/// # Examples
///
/// ```rust
/// use threadscope::{analysis::{holds_for_thread, Locked}, ThreadDumpReader};
///
/// let threads = ThreadDumpReader::new().read_str(
///     "\"t\" tid=0x1 nid=0x2 runnable\n\t - locked <0x0000000682e5f948> (a sun.security.provider.Sun)\n",
/// );
/// assert_eq!(
///     holds_for_thread(&threads[0]),
///     vec![Locked::new("0x0000000682e5f948", "sun.security.provider.Sun")]
/// );
/// ```
#[must_use]
pub fn holds_for_thread(thread: &ThreadInfo) -> Vec<Locked> {
    lock_relations_for_thread(thread)
        .into_iter()
        .filter(|relation| relation.kind == LockKind::Locked)
        .map(|relation| relation.lock)
        .collect()
}

/// Maps each thread holding at least one lock to the locks it holds.
///
/// Threads without a stack trace or without `- locked` frames are absent from the result.
#[must_use]
pub fn holds(threads: &[ThreadInfo]) -> HashMap<&ThreadInfo, Vec<Locked>> {
    threads
        .iter()
        .filter(|thread| thread.stack_trace().is_some())
        .filter_map(|thread| {
            let locks = holds_for_thread(thread);
            (!locks.is_empty()).then_some((thread, locks))
        })
        .collect()
}

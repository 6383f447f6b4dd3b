//! Thread record model produced by segmentation.
//!
//! A [`ThreadInfo`] is a plain value: once the segmentation machine finishes a record it is
//! never modified again, and two records compare equal when every field matches. The thread
//! state is modeled as a tagged [`ThreadState`] so the difference between a canonical state
//! read from a `java.lang.Thread.State:` line and a label guessed from the header text stays
//! visible to callers.

use std::fmt;

use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

use crate::{Error::UnknownState, Result};

/// The six canonical JVM thread states, as printed on an explicit state line.
///
/// Parsing is case-sensitive: `RUNNABLE` is a state, `runnable` is not.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
    AsRefStr,
    IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CanonicalState {
    /// Thread has not yet started
    New,
    /// Thread is executing in the JVM
    Runnable,
    /// Thread is blocked waiting for a monitor lock
    Blocked,
    /// Thread is waiting indefinitely for another thread
    Waiting,
    /// Thread is waiting for another thread for up to a specified time
    TimedWaiting,
    /// Thread has exited
    Terminated,
}

impl CanonicalState {
    /// Converts a state token into a [`CanonicalState`].
    ///
    /// # Arguments
    /// * `token` - The state name, e.g. `TIMED_WAITING`
    ///
    /// # Errors
    /// Returns [`crate::Error::UnknownState`] if `token` is not one of the six state names.
    pub fn parse(token: &str) -> Result<CanonicalState> {
        token
            .parse::<CanonicalState>()
            .map_err(|_| UnknownState(token.to_string()))
    }
}

/// Labels inferred from the header line when no explicit state line follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, IntoStaticStr)]
pub enum InformalState {
    /// The header status text contains `runnable`
    #[strum(serialize = "runnable")]
    Runnable,
    /// The header status text contains `waiting on condition`
    #[strum(serialize = "waiting on condition")]
    WaitingOnCondition,
}

/// State of a thread record, tagged by where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThreadState {
    /// Read from a `java.lang.Thread.State:` line; always takes precedence
    Explicit(CanonicalState),
    /// Guessed from the status text of the header line
    Inferred(InformalState),
    /// Neither an explicit state line nor a recognized header marker
    #[default]
    Unknown,
}

impl ThreadState {
    /// Returns the state label as it appears in the dump, or `None` for [`ThreadState::Unknown`].
    ///
    /// Explicit states render upper-case (`TIMED_WAITING`), inferred ones keep the header's
    /// wording (`waiting on condition`).
    #[must_use]
    pub fn label(&self) -> Option<&'static str> {
        match self {
            ThreadState::Explicit(state) => Some((*state).into()),
            ThreadState::Inferred(label) => Some((*label).into()),
            ThreadState::Unknown => None,
        }
    }

    /// Returns `true` if the state was read from an explicit state line.
    #[must_use]
    pub fn is_explicit(&self) -> bool {
        matches!(self, ThreadState::Explicit(_))
    }

    /// Returns the canonical state, if one was given explicitly.
    #[must_use]
    pub fn canonical(&self) -> Option<CanonicalState> {
        match self {
            ThreadState::Explicit(state) => Some(*state),
            _ => None,
        }
    }
}

impl fmt::Display for ThreadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().unwrap_or("unknown"))
    }
}

impl PartialEq<str> for ThreadState {
    fn eq(&self, other: &str) -> bool {
        self.label() == Some(other)
    }
}

impl PartialEq<&str> for ThreadState {
    fn eq(&self, other: &&str) -> bool {
        self.label() == Some(*other)
    }
}

/// One thread detected in a dump.
///
/// `id` is the JVM-internal thread pointer (`tid=`), `native_id` the OS thread id (`nid=`).
/// Either is left empty when the header carried no well-formed hexadecimal value for it.
///
/// # Examples
///
/// ```rust
/// use threadscope::{CanonicalState, ThreadInfo, ThreadState};
///
/// let thread = ThreadInfo::new("Attach Listener", "0x00007f90d0106000", "0x18a1", true)
///     .with_state(ThreadState::Explicit(CanonicalState::Runnable));
///
/// assert_eq!(
///     thread.to_string(),
///     "Thread Id: '0x00007f90d0106000' (daemon), Name: 'Attach Listener', State: 'RUNNABLE'"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ThreadInfo {
    id: String,
    native_id: String,
    name: String,
    daemon: bool,
    state: ThreadState,
    stack_trace: Option<String>,
}

impl ThreadInfo {
    /// Creates a record with [`ThreadState::Unknown`] and no stack trace.
    ///
    /// # Arguments
    /// * `name` - Display name from the header quotes
    /// * `id` - JVM thread pointer, e.g. `0x00007f90d0106000`
    /// * `native_id` - OS thread id, e.g. `0x18a1`
    /// * `daemon` - Whether the header carried the `daemon` token
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        native_id: impl Into<String>,
        daemon: bool,
    ) -> ThreadInfo {
        ThreadInfo {
            id: id.into(),
            native_id: native_id.into(),
            name: name.into(),
            daemon,
            state: ThreadState::Unknown,
            stack_trace: None,
        }
    }

    /// Returns the record with `state` applied.
    ///
    /// An inferred state never replaces an explicit one.
    #[must_use]
    pub fn with_state(mut self, state: ThreadState) -> ThreadInfo {
        self.apply_state(state);
        self
    }

    /// Returns the record with the given stack trace; an empty trace is stored as `None`.
    #[must_use]
    pub fn with_stack_trace(mut self, stack_trace: impl Into<String>) -> ThreadInfo {
        let stack_trace = stack_trace.into();
        self.stack_trace = if stack_trace.is_empty() {
            None
        } else {
            Some(stack_trace)
        };
        self
    }

    pub(crate) fn apply_state(&mut self, state: ThreadState) {
        if self.state.is_explicit() && !state.is_explicit() {
            return;
        }
        self.state = state;
    }

    /// JVM-internal thread pointer (`tid=`).
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// OS-level thread id (`nid=`).
    #[must_use]
    pub fn native_id(&self) -> &str {
        &self.native_id
    }

    /// Display name of the thread.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `true` if the header carried the `daemon` token.
    #[must_use]
    pub fn is_daemon(&self) -> bool {
        self.daemon
    }

    /// Current state of the thread.
    #[must_use]
    pub fn state(&self) -> ThreadState {
        self.state
    }

    /// Trimmed body lines joined by `\n` (with a trailing `\n`), if the record had any.
    #[must_use]
    pub fn stack_trace(&self) -> Option<&str> {
        self.stack_trace.as_deref()
    }

    /// Iterates the body lines in dump order, top of stack first.
    pub fn frames(&self) -> impl Iterator<Item = &str> {
        self.stack_trace
            .as_deref()
            .unwrap_or_default()
            .split('\n')
            .filter(|line| !line.is_empty())
    }

    /// Returns the first body line, if any.
    #[must_use]
    pub fn top_frame(&self) -> Option<&str> {
        self.frames().next()
    }
}

impl fmt::Display for ThreadInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Thread Id: '{}'", self.id)?;
        if self.daemon {
            f.write_str(" (daemon)")?;
        }
        write!(f, ", Name: '{}', State: '{}'", self.name, self.state)
    }
}

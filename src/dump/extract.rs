//! Line-local field extractors.
//!
//! Every function in this module looks at exactly one line and holds no state, so each rule
//! can be exercised without the segmentation machine. None of them fail: a line that does not
//! match yields `None` or `false`, and a malformed sub-field (a `tid=` that is not
//! hexadecimal, say) is left empty instead of being guessed.
//!
//! # Recognized Shapes
//!
//! ```text
//! "<NAME>" [#<ordinal>] [daemon] prio=<n> os_prio=<n> [cpu=.. elapsed=..] tid=0x<HEX> nid=0x<HEX> <STATUS> [<addr>]
//!    java.lang.Thread.State: <STATE> [(detail)]
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::dump::thread::{CanonicalState, InformalState, ThreadInfo, ThreadState};

static STATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Thread\.State:\s*([A-Za-z_]+)").unwrap());

/// Token preceding the JVM thread pointer on a header line.
const TID_KEY: &str = "tid=";
/// Token preceding the native thread id on a header line.
const NID_KEY: &str = "nid=";
/// Token marking a daemon thread.
const DAEMON_TOKEN: &str = "daemon";
const RUNNABLE_MARKER: &str = "runnable";
const WAITING_ON_CONDITION_MARKER: &str = "waiting on condition";

/// Fields extracted from a thread header line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Header {
    /// Text between the opening marker and the matching closing marker
    pub name: String,
    /// Value of the `tid=` token, empty if absent or not hexadecimal
    pub id: String,
    /// Value of the `nid=` token, empty if absent or not hexadecimal
    pub native_id: String,
    /// `true` if the `daemon` token appears on the line
    pub daemon: bool,
}

impl Header {
    /// Converts the header into a fresh record with [`ThreadState::Unknown`].
    #[must_use]
    pub fn into_thread(self) -> ThreadInfo {
        ThreadInfo::new(self.name, self.id, self.native_id, self.daemon)
    }
}

/// Recognizes a thread header and extracts its fields.
///
/// A header is a line that starts with `marker` and contains a second `marker` closing the
/// thread name. The closing marker is the last one on the line, so names containing the
/// marker character survive intact.
///
/// # Arguments
/// * `line` - One raw line of the dump
/// * `marker` - Character opening and closing the thread name, `"` for jstack output
///
/// # Examples
///
/// ```rust
/// use threadscope::dump::extract_header;
///
/// let header = extract_header(
///     r#""Finalizer" #3 daemon prio=8 os_prio=0 tid=0x00007f6f5c29e000 nid=0x6b90 in Object.wait()"#,
///     '"',
/// )
/// .unwrap();
/// assert_eq!(header.name, "Finalizer");
/// assert_eq!(header.id, "0x00007f6f5c29e000");
/// assert_eq!(header.native_id, "0x6b90");
/// assert!(header.daemon);
///
/// assert!(extract_header("   java.lang.Thread.State: RUNNABLE", '"').is_none());
/// ```
#[must_use]
pub fn extract_header(line: &str, marker: char) -> Option<Header> {
    let rest = line.strip_prefix(marker)?;
    let close = rest.rfind(marker)?;
    let name = &rest[..close];
    let fields = &rest[close + marker.len_utf8()..];

    Some(Header {
        name: name.to_string(),
        id: keyed_hex(fields, TID_KEY).unwrap_or_default().to_string(),
        native_id: keyed_hex(fields, NID_KEY).unwrap_or_default().to_string(),
        daemon: line.split_whitespace().any(|token| token == DAEMON_TOKEN),
    })
}

/// Returns `true` if `line` is a thread header for `marker`.
#[must_use]
pub fn is_header(line: &str, marker: char) -> bool {
    extract_header(line, marker).is_some()
}

/// Returns `true` if the line contains the literal `runnable`.
///
/// Only meaningful on header lines; JVMs print it as the status of threads without a Java
/// stack (`"VM Thread" os_prio=0 tid=.. nid=.. runnable`).
#[must_use]
pub fn has_runnable_marker(line: &str) -> bool {
    line.contains(RUNNABLE_MARKER)
}

/// Returns `true` if the line contains the literal `waiting on condition`.
#[must_use]
pub fn has_waiting_on_condition_marker(line: &str) -> bool {
    line.contains(WAITING_ON_CONDITION_MARKER)
}

/// Extracts the canonical state from a `java.lang.Thread.State:` line.
///
/// Whitespace around the token is tolerated and a trailing parenthesized detail such as
/// `(on object monitor)` is ignored. The token itself must be one of the six canonical state
/// names, spelled exactly.
///
/// # Examples
///
/// ```rust
/// use threadscope::{dump::extract_explicit_state, CanonicalState};
///
/// assert_eq!(
///     extract_explicit_state("   java.lang.Thread.State: TIMED_WAITING (sleeping)"),
///     Some(CanonicalState::TimedWaiting)
/// );
/// assert_eq!(extract_explicit_state("   java.lang.Thread.State: runnable"), None);
/// ```
#[must_use]
pub fn extract_explicit_state(line: &str) -> Option<CanonicalState> {
    let token = STATE_REGEX.captures(line)?.get(1)?.as_str();
    CanonicalState::parse(token).ok()
}

/// State inferred from the status text of a header line, if any.
///
/// `include_waiting_on_condition` selects whether `waiting on condition` is recognized in
/// addition to `runnable`; `runnable` is checked first.
pub(crate) fn inferred_state(line: &str, include_waiting_on_condition: bool) -> Option<ThreadState> {
    if has_runnable_marker(line) {
        Some(ThreadState::Inferred(InformalState::Runnable))
    } else if include_waiting_on_condition && has_waiting_on_condition_marker(line) {
        Some(ThreadState::Inferred(InformalState::WaitingOnCondition))
    } else {
        None
    }
}

/// Value of the first whitespace-delimited `key<value>` token, if it is hexadecimal.
fn keyed_hex<'a>(fields: &'a str, key: &str) -> Option<&'a str> {
    let value = fields
        .split_whitespace()
        .find_map(|token| token.strip_prefix(key))?;
    is_hex(value).then_some(value)
}

/// Accepts `0x`-prefixed or bare hexadecimal digits, at least one digit.
fn is_hex(value: &str) -> bool {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_hexdigit())
}

use std::collections::HashMap;

use crate::dump::{ParserConfig, ThreadInfo};

/// Prefix jstack prints in front of every Java frame.
const FRAME_PREFIX: &str = "at ";

/// Counts how many threads share each top-of-stack frame, using the default configuration.
///
/// Threads without a stack trace do not contribute. No ordering is imposed; see [`ranked`].
///
/// # Examples
///
/// ```rust
/// use threadscope::{analysis::most_used_methods, ThreadDumpReader};
///
/// let threads = ThreadDumpReader::new().read_str(
///     "\"a\" tid=0x1 nid=0x1 in Object.wait()\n\tat java.lang.Object.wait(Native Method)\n\n\
///      \"b\" tid=0x2 nid=0x2 in Object.wait()\n\tat java.lang.Object.wait(Native Method)\n\n",
/// );
/// let methods = most_used_methods(&threads);
/// assert_eq!(methods["java.lang.Object.wait(Native Method)"], 2);
/// ```
#[must_use]
pub fn most_used_methods(threads: &[ThreadInfo]) -> HashMap<String, usize> {
    most_used_methods_with(threads, &ParserConfig::default())
}

/// Counts top-of-stack frames, honouring [`ParserConfig::strip_frame_prefix`].
#[must_use]
pub fn most_used_methods_with(
    threads: &[ThreadInfo],
    config: &ParserConfig,
) -> HashMap<String, usize> {
    let mut methods = HashMap::new();
    for frame in threads.iter().filter_map(ThreadInfo::top_frame) {
        let mut signature = frame.trim();
        if config.strip_frame_prefix {
            signature = signature.strip_prefix(FRAME_PREFIX).unwrap_or(signature);
        }
        *methods.entry(signature.to_string()).or_insert(0) += 1;
    }
    methods
}

/// Orders a frequency mapping by descending count, then by signature.
#[must_use]
pub fn ranked(methods: &HashMap<String, usize>) -> Vec<(&str, usize)> {
    let mut ranked: Vec<_> = methods
        .iter()
        .map(|(signature, count)| (signature.as_str(), *count))
        .collect();
    ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked
}

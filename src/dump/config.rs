/// Configuration for thread dump parsing and analysis
///
/// The defaults match the output of `jstack` and `kill -3` on HotSpot and OpenJ9-derived
/// JVMs from version 8 through 15.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Leading character of a thread header, opening the thread's display name (default: `"`)
    pub header_marker: char,

    /// Strip the `at ` prefix from top-of-stack frames when counting method usage, so that
    /// signatures read `java.lang.Object.wait(Native Method)` (default: true)
    pub strip_frame_prefix: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            header_marker: '"',
            strip_frame_prefix: true,
        }
    }
}

impl ParserConfig {
    /// Creates a configuration that keeps top-of-stack frames exactly as printed
    #[must_use]
    pub fn verbatim() -> Self {
        Self {
            strip_frame_prefix: false,
            ..Self::default()
        }
    }

    /// Returns the configuration with a different header marker
    ///
    /// Useful for dumps that were post-processed by tools which re-quote thread names.
    #[must_use]
    pub fn with_header_marker(self, header_marker: char) -> Self {
        Self {
            header_marker,
            ..self
        }
    }
}

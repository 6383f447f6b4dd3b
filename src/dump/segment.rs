//! Segmentation of a dump's lines into thread records.
//!
//! The input is not one grammar: headers differ between JVM versions, the explicit state line
//! is sometimes missing, and threads without a Java stack (GC workers, compiler threads) are
//! printed as bare headers directly after one another. The machine below walks a materialized
//! line array with an explicit cursor so it can look one line ahead, decide, and either consume
//! or leave that line for the next step.
//!
//! # Per-record steps
//!
//! 1. A line that is not a header is skipped.
//! 2. A header opens a pending record; a `runnable` marker on it sets an inferred state.
//! 3. If the header is the last line, the dump was cut off and segmentation stops without
//!    emitting the pending record.
//! 4. An explicit state line directly after the header overrides any inferred state.
//! 5. Otherwise, if the next line is itself a header, the two threads are "together": a second
//!    record is built from that line alone and emitted right after the first.
//! 6. Non-blank, non-header lines are trimmed and collected into the first record's stack
//!    trace, stopping at a blank line, the next header or the end of input.
//!
//! Every line access goes through [`LineCursor::peek`], so running off the end of the input
//! is treated as "nothing more to parse" and never panics.

use log::{debug, trace};

use crate::dump::{
    config::ParserConfig,
    extract::{extract_explicit_state, extract_header, inferred_state, is_header},
    thread::{ThreadInfo, ThreadState},
};

/// A cursor over a materialized sequence of lines.
///
/// Mirrors a byte parser's position handling, but all accessors are total: reading past the
/// end yields `None` instead of an error.
#[derive(Debug, Clone)]
pub struct LineCursor<'a, 'l> {
    lines: &'l [&'a str],
    position: usize,
}

impl<'a, 'l> LineCursor<'a, 'l> {
    /// Create a new cursor positioned at the first line
    #[must_use]
    pub fn new(lines: &'l [&'a str]) -> Self {
        LineCursor { lines, position: 0 }
    }

    /// Returns the line under the cursor without consuming it
    #[must_use]
    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.position).copied()
    }

    /// Moves the cursor past the current line; saturates at the end of input
    pub fn advance(&mut self) {
        if self.position < self.lines.len() {
            self.position += 1;
        }
    }

    /// Returns the current position of the cursor
    #[must_use]
    pub fn pos(&self) -> usize {
        self.position
    }

    /// Returns `true` if there are lines left under or after the cursor
    #[must_use]
    pub fn has_more_data(&self) -> bool {
        self.position < self.lines.len()
    }
}

/// Splits `lines` into thread records in dump order.
///
/// Never fails: unrecognized lines are skipped, a record cut off right after its header is
/// dropped, and input without any header yields an empty list.
///
/// # Arguments
/// * `lines` - The dump, one entry per line with terminators already stripped
/// * `config` - Parser configuration providing the header marker
#[must_use]
pub fn segment(lines: &[&str], config: &ParserConfig) -> Vec<ThreadInfo> {
    let marker = config.header_marker;
    let mut cursor = LineCursor::new(lines);
    let mut threads = Vec::new();

    while let Some(line) = cursor.peek() {
        let Some(header) = extract_header(line, marker) else {
            cursor.advance();
            continue;
        };

        let mut first = header.into_thread();
        if let Some(state) = inferred_state(line, false) {
            first.apply_state(state);
        }
        cursor.advance();

        let Some(next) = cursor.peek() else {
            debug!(
                "dump ends after the header of '{}' at line {}, dropping it",
                first.name(),
                cursor.pos()
            );
            break;
        };

        let mut together = None;
        if let Some(state) = extract_explicit_state(next) {
            first.apply_state(ThreadState::Explicit(state));
            cursor.advance();
        } else if let Some(second) = extract_header(next, marker) {
            let mut second = second.into_thread();
            if let Some(state) = inferred_state(next, true) {
                second.apply_state(state);
            }
            together = Some(second);
            cursor.advance();
        }

        let stack_trace = collect_stack_trace(&mut cursor, marker);
        if !stack_trace.is_empty() {
            first = first.with_stack_trace(stack_trace);
        }

        trace!("thread '{}' ({})", first.name(), first.state());
        threads.push(first);
        if let Some(second) = together {
            trace!("thread '{}' ({}) printed together", second.name(), second.state());
            threads.push(second);
        }
    }

    threads
}

/// Collects trimmed body lines up to a blank line, the next header or the end of input.
fn collect_stack_trace(cursor: &mut LineCursor<'_, '_>, marker: char) -> String {
    let mut stack_trace = String::new();
    while let Some(line) = cursor.peek() {
        let body = line.trim();
        if body.is_empty() || is_header(line, marker) {
            break;
        }

        stack_trace.push_str(body);
        stack_trace.push('\n');
        cursor.advance();
    }
    stack_trace
}

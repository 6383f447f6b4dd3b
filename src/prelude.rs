//! # threadscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and functions
//! from the threadscope library. Import this module to get quick access to everything needed
//! to parse and analyze a thread dump.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all threadscope operations
pub use crate::Error;

/// The result type used throughout threadscope
pub use crate::Result;

/// Configuration for parsing and analysis
pub use crate::ParserConfig;

// ================================================================================================
// Main Entry Points
// ================================================================================================

/// Thread dump reader and input source
pub use crate::{DumpSource, ThreadDumpReader};

/// Thread record model
pub use crate::{CanonicalState, InformalState, ThreadInfo, ThreadState};

// ================================================================================================
// Analysis
// ================================================================================================

/// Lock and method-frequency analyses
pub use crate::analysis::{
    holds, holds_for_thread, lock_relations_for_thread, most_used_methods, ranked, LockKind,
    LockRelation, Locked,
};

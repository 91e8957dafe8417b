// crates/specrun-report/src/lib.rs
// ============================================================================
// Module: Specrun Reporters
// Description: Reporter implementations for the contract harness.
// Purpose: Deliver step outcomes to the console and to report artifacts.
// Dependencies: serde_jcs, specrun-core
// ============================================================================

//! ## Overview
//! Reporters receive per-step outcome events and flush a report artifact at
//! suite end. Implementations here cover the common cases: a console
//! reporter for interactive runs, a JSON file reporter writing canonical
//! bytes, and a fan-out set composing several reporters.
//!
//! Invariants:
//! - `on_suite_end` is idempotent for every implementation; a duplicate
//!   suite-end signal must not corrupt or duplicate the artifact.

// ============================================================================
// SECTION: Implementations
// ============================================================================

pub mod console;
pub mod json_file;
pub mod set;

pub use console::ConsoleReporter;
pub use json_file::JsonFileReporter;
pub use set::ReporterSet;

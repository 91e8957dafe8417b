// crates/specrun-report/src/console.rs
// ============================================================================
// Module: Console Reporter
// Description: Human-readable per-step output on standard output.
// Purpose: Give interactive runs an immediate pass/fail line per scenario.
// Dependencies: specrun-core
// ============================================================================

//! ## Overview
//! The console reporter prints one line per step and a summary at suite end.
//! Printing is this reporter's delivery mechanism, so stdout use is confined
//! to this module.

#![allow(clippy::print_stdout, reason = "Console output is this reporter's sink.")]

// ============================================================================
// SECTION: Imports
// ============================================================================

use specrun_core::Reporter;
use specrun_core::ReporterError;
use specrun_core::StepResult;
use specrun_core::SuiteMeta;

// ============================================================================
// SECTION: Console Reporter
// ============================================================================

/// Reporter printing per-step lines and a suite summary to stdout.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    /// Count of passing steps seen so far.
    passed: usize,
    /// Count of failing steps seen so far.
    failed: usize,
    /// True once the summary has been printed.
    flushed: bool,
}

impl ConsoleReporter {
    /// Creates a console reporter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reporter for ConsoleReporter {
    fn on_suite_start(&mut self, meta: &SuiteMeta) -> Result<(), ReporterError> {
        println!("suite `{}` against {}", meta.suite, meta.environment);
        Ok(())
    }

    fn on_step_result(&mut self, result: &StepResult) -> Result<(), ReporterError> {
        if result.passed {
            self.passed += 1;
            println!("  pass  {} ({} ms)", result.scenario_name, result.duration_ms);
        } else {
            self.failed += 1;
            let reason = result.failure_reason.as_deref().unwrap_or("unknown failure");
            println!(
                "  FAIL  {} ({} ms): {reason}",
                result.scenario_name, result.duration_ms
            );
        }
        Ok(())
    }

    fn on_suite_end(&mut self) -> Result<(), ReporterError> {
        if self.flushed {
            return Ok(());
        }
        self.flushed = true;
        println!("{} passed, {} failed", self.passed, self.failed);
        Ok(())
    }
}

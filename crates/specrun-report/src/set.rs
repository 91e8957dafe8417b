// crates/specrun-report/src/set.rs
// ============================================================================
// Module: Reporter Set
// Description: Fan-out composite delivering every event to every reporter.
// Purpose: Isolate one reporter's failure from the others.
// Dependencies: specrun-core
// ============================================================================

//! ## Overview
//! A reporter set delivers each event to every member before reporting any
//! error, so a broken reporter cannot starve the rest. The first member
//! error (in registration order) is surfaced after delivery completes.

// ============================================================================
// SECTION: Imports
// ============================================================================

use specrun_core::Reporter;
use specrun_core::ReporterError;
use specrun_core::StepResult;
use specrun_core::SuiteMeta;

// ============================================================================
// SECTION: Reporter Set
// ============================================================================

/// Composite reporter fanning events out to every member.
#[derive(Default)]
pub struct ReporterSet {
    /// Member reporters in registration order.
    members: Vec<Box<dyn Reporter>>,
}

impl ReporterSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a member reporter.
    pub fn add(&mut self, reporter: Box<dyn Reporter>) {
        self.members.push(reporter);
    }

    /// Returns the number of member reporters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true when the set has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Delivers one event to every member, returning the first error after
    /// all members received the event.
    fn deliver<F>(&mut self, mut event: F) -> Result<(), ReporterError>
    where
        F: FnMut(&mut dyn Reporter) -> Result<(), ReporterError>,
    {
        let mut first_error = None;
        for member in &mut self.members {
            if let Err(err) = event(member.as_mut()) {
                if first_error.is_none() {
                    first_error = Some(err);
                }
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

impl Reporter for ReporterSet {
    fn on_suite_start(&mut self, meta: &SuiteMeta) -> Result<(), ReporterError> {
        self.deliver(|reporter| reporter.on_suite_start(meta))
    }

    fn on_step_result(&mut self, result: &StepResult) -> Result<(), ReporterError> {
        self.deliver(|reporter| reporter.on_step_result(result))
    }

    fn on_suite_end(&mut self) -> Result<(), ReporterError> {
        self.deliver(|reporter| reporter.on_suite_end())
    }
}

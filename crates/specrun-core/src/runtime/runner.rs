// crates/specrun-core/src/runtime/runner.rs
// ============================================================================
// Module: Spec Runner
// Description: Executes one resolved request and validates the response.
// Purpose: Walk a single step through the phase machine, fail-fast.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! The runner executes exactly one step: send the request, check the status,
//! run body assertions in order, then apply the extraction rule if one is
//! declared. Any failure transitions the step directly to `Failed` and skips
//! the remaining phases. The context is written only after a successful
//! extraction, so a failed step leaves the context untouched.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use serde_json::Value;

use crate::core::context::ScenarioContext;
use crate::core::error::StepError;
use crate::core::expect::ExpectedOutcome;
use crate::core::expect::StepPhase;
use crate::core::extract::ExtractionRule;
use crate::core::request::RequestSpec;
use crate::interfaces::Transport;

// ============================================================================
// SECTION: Step Evaluation
// ============================================================================

/// Terminal record of one executed step.
///
/// # Invariants
/// - `phase` is terminal (`Done` or `Failed`).
/// - `error` is present exactly when `phase` is `Failed`.
/// - `extracted` is present only when an extraction rule was declared and
///   the step completed.
#[derive(Debug, Clone, PartialEq)]
pub struct StepEvaluation {
    /// Terminal phase the step reached.
    pub phase: StepPhase,
    /// Value written into the context, when an extraction rule applied.
    pub extracted: Option<Value>,
    /// First failure of the step, when it failed.
    pub error: Option<StepError>,
}

impl StepEvaluation {
    /// Builds a completed evaluation.
    const fn done(extracted: Option<Value>) -> Self {
        Self {
            phase: StepPhase::Done,
            extracted,
            error: None,
        }
    }

    /// Builds a failed evaluation from the first error.
    const fn failed(error: StepError) -> Self {
        Self {
            phase: StepPhase::Failed,
            extracted: None,
            error: Some(error),
        }
    }
}

// ============================================================================
// SECTION: Spec Runner
// ============================================================================

/// Executes resolved request specs against an injected transport.
pub struct SpecRunner<'t> {
    /// Transport used to send requests.
    transport: &'t dyn Transport,
}

impl<'t> SpecRunner<'t> {
    /// Creates a runner over the given transport.
    #[must_use]
    pub const fn new(transport: &'t dyn Transport) -> Self {
        Self {
            transport,
        }
    }

    /// Runs one step end to end and returns its terminal evaluation.
    ///
    /// The context handle is borrowed for the duration of the call only and
    /// is mutated solely by a successful extraction.
    pub fn run(
        &self,
        spec: &RequestSpec,
        expected: &ExpectedOutcome,
        extract: Option<&ExtractionRule>,
        ctx: &mut ScenarioContext,
        timeout: Duration,
    ) -> StepEvaluation {
        let response = match self.transport.send(spec, timeout) {
            Ok(response) => response,
            Err(failure) => return StepEvaluation::failed(StepError::Transport(failure)),
        };

        // Pending -> StatusChecked
        if let Err(failure) = expected.check_status(response.status) {
            return StepEvaluation::failed(StepError::Assertion(failure));
        }

        // StatusChecked -> BodyChecked
        if let Err(failure) = expected.check_body(&response.body) {
            return StepEvaluation::failed(StepError::Assertion(failure));
        }

        // BodyChecked -> Extracted -> Done
        match extract {
            Some(rule) => match rule.apply(&response.body) {
                Ok(value) => {
                    ctx.set(rule.name.clone(), value.clone());
                    StepEvaluation::done(Some(value))
                }
                Err(failure) => StepEvaluation::failed(StepError::Assertion(failure)),
            },
            None => StepEvaluation::done(None),
        }
    }
}

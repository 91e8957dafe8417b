// crates/specrun-core/src/runtime/orchestrator.rs
// ============================================================================
// Module: Suite Orchestrator
// Description: Sequential scenario execution with reporter fan-out.
// Purpose: Thread the context through ordered scenarios and report outcomes.
// Dependencies: crate::core, crate::interfaces, crate::runtime::runner
// ============================================================================

//! ## Overview
//! The orchestrator owns the scenario context for the lifetime of a run and
//! executes registered scenarios strictly in declared order: later scenarios
//! consume state produced by earlier ones, so ordering is the concurrency
//! control and no locking is needed. One scenario's failure does not halt the
//! run. A scenario whose template references a context value that was never
//! produced fails locally with a configuration error before any request is
//! sent, so dependent scenarios cascade-fail clearly instead of hitting
//! malformed URLs.
//!
//! Cancellation stops scheduling further scenarios but lets the in-flight
//! step resolve (exactly one step result per started scenario) and still
//! delivers the suite-end flush so partial results are not lost.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::time::Duration;
use std::time::Instant;

use crate::core::context::ScenarioContext;
use crate::core::error::StepError;
use crate::core::report::StepResult;
use crate::core::report::SuiteMeta;
use crate::core::report::now_millis;
use crate::core::scenario::Scenario;
use crate::interfaces::Reporter;
use crate::interfaces::Transport;
use crate::runtime::runner::SpecRunner;

// ============================================================================
// SECTION: Cancel Token
// ============================================================================

/// Cooperative cancellation signal for a suite run.
///
/// # Invariants
/// - Cancellation is observed between scenarios only; the in-flight step
///   always resolves.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    /// Shared cancellation flag.
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a token in the not-cancelled state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation of the run.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Returns true once cancellation was requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

// ============================================================================
// SECTION: Suite Summary
// ============================================================================

/// Aggregate outcome of one suite run.
#[derive(Debug)]
pub struct SuiteSummary {
    /// Step results in execution order, one per started scenario.
    pub results: Vec<StepResult>,
    /// Count of passing steps.
    pub passed: usize,
    /// Count of failing steps.
    pub failed: usize,
    /// True when the run stopped early due to cancellation.
    pub cancelled: bool,
    /// Reporter errors observed during fan-out, in delivery order.
    pub reporter_errors: Vec<String>,
}

impl SuiteSummary {
    /// Returns true when every started scenario passed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

// ============================================================================
// SECTION: Suite Orchestrator
// ============================================================================

/// Registers scenarios and runs them strictly sequentially.
///
/// # Invariants
/// - The scenario context is owned exclusively by the orchestrator for the
///   run's lifetime; the runner borrows it per call and never retains it.
pub struct SuiteOrchestrator {
    /// Suite name used in reports.
    suite: String,
    /// Environment label used in reports.
    environment: String,
    /// Per-request timeout applied to every step.
    timeout: Duration,
    /// Registered scenarios in declared order.
    scenarios: Vec<Scenario>,
    /// Registered reporters in registration order.
    reporters: Vec<Box<dyn Reporter>>,
    /// Cooperative cancellation token.
    cancel: CancelToken,
}

impl SuiteOrchestrator {
    /// Creates an orchestrator for the named suite.
    #[must_use]
    pub fn new(
        suite: impl Into<String>,
        environment: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            suite: suite.into(),
            environment: environment.into(),
            timeout,
            scenarios: Vec::new(),
            reporters: Vec::new(),
            cancel: CancelToken::new(),
        }
    }

    /// Registers a scenario; execution order is registration order.
    pub fn register(&mut self, scenario: Scenario) {
        self.scenarios.push(scenario);
    }

    /// Registers a reporter; every reporter receives every event.
    pub fn add_reporter(&mut self, reporter: Box<dyn Reporter>) {
        self.reporters.push(reporter);
    }

    /// Returns a clone of the cancellation token for external signalling.
    #[must_use]
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Runs every registered scenario in order and returns the summary.
    ///
    /// The suite-end flush is delivered even when the run was cancelled, so
    /// partial results are never lost.
    pub fn run(mut self, transport: &dyn Transport) -> SuiteSummary {
        let meta = SuiteMeta {
            suite: self.suite.clone(),
            environment: self.environment.clone(),
            started_at_ms: now_millis(),
        };
        let mut reporter_errors = Vec::new();
        fan_out(&mut self.reporters, &mut reporter_errors, |reporter| {
            reporter.on_suite_start(&meta)
        });

        let runner = SpecRunner::new(transport);
        let mut ctx = ScenarioContext::new();
        let mut results = Vec::with_capacity(self.scenarios.len());
        let mut cancelled = false;

        for scenario in &self.scenarios {
            if self.cancel.is_cancelled() {
                cancelled = true;
                break;
            }
            let result = run_scenario(&runner, scenario, &mut ctx, self.timeout);
            fan_out(&mut self.reporters, &mut reporter_errors, |reporter| {
                reporter.on_step_result(&result)
            });
            results.push(result);
        }

        fan_out(&mut self.reporters, &mut reporter_errors, |reporter| reporter.on_suite_end());

        let passed = results.iter().filter(|result| result.passed).count();
        let failed = results.len() - passed;
        SuiteSummary {
            results,
            passed,
            failed,
            cancelled,
            reporter_errors,
        }
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves and executes one scenario, emitting exactly one step result.
fn run_scenario(
    runner: &SpecRunner<'_>,
    scenario: &Scenario,
    ctx: &mut ScenarioContext,
    timeout: Duration,
) -> StepResult {
    let start = Instant::now();

    // Resolution failures are local authoring errors; no request is sent.
    let spec = match scenario.request.resolve(ctx) {
        Ok(spec) => spec,
        Err(config) => {
            return StepResult::failed(
                scenario.name.as_str(),
                &StepError::Config(config),
                elapsed_ms(start),
            );
        }
    };
    let expected = match scenario.expected.resolve(ctx) {
        Ok(expected) => expected,
        Err(config) => {
            return StepResult::failed(
                scenario.name.as_str(),
                &StepError::Config(config),
                elapsed_ms(start),
            );
        }
    };

    let evaluation = runner.run(&spec, &expected, scenario.extract.as_ref(), ctx, timeout);
    let duration_ms = elapsed_ms(start);
    match evaluation.error {
        Some(error) => StepResult::failed(scenario.name.as_str(), &error, duration_ms),
        None => StepResult::passed(scenario.name.as_str(), duration_ms),
    }
}

/// Delivers one event to every reporter, isolating individual failures.
fn fan_out<F>(reporters: &mut [Box<dyn Reporter>], errors: &mut Vec<String>, mut event: F)
where
    F: FnMut(&mut dyn Reporter) -> Result<(), crate::interfaces::ReporterError>,
{
    for reporter in reporters.iter_mut() {
        if let Err(err) = event(reporter.as_mut()) {
            errors.push(err.to_string());
        }
    }
}

/// Returns elapsed wall-clock milliseconds, saturating on overflow.
fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

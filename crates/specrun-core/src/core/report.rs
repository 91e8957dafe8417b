// crates/specrun-core/src/core/report.rs
// ============================================================================
// Module: Step Results and Report Document
// Description: Immutable per-step outcomes and the aggregated suite report.
// Purpose: Give reporters a serializable record of everything that ran.
// Dependencies: crate::core::{error, expect}, serde
// ============================================================================

//! ## Overview
//! A step result is produced once per started scenario and is immutable from
//! then on. The report document aggregates every step result with suite-level
//! metadata; reporters build it incrementally and finalize it exactly once at
//! suite end.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Deserialize;
use serde::Serialize;

use crate::core::error::StepError;
use crate::core::expect::StepPhase;

// ============================================================================
// SECTION: Failure Class
// ============================================================================

/// Coarse failure family recorded on failed step results.
///
/// # Invariants
/// - `Config` marks a local authoring bug, not a remote-API problem; output
///   keeps the two distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureClass {
    /// The transport failed (timeout or connection error).
    Transport,
    /// The API answered but violated the contract.
    Assertion,
    /// The suite itself is misauthored.
    Config,
}

impl From<&StepError> for FailureClass {
    fn from(error: &StepError) -> Self {
        match error {
            StepError::Transport(_) => Self::Transport,
            StepError::Assertion(_) => Self::Assertion,
            StepError::Config(_) => Self::Config,
        }
    }
}

// ============================================================================
// SECTION: Step Result
// ============================================================================

/// Immutable outcome of one executed (or locally failed) scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepResult {
    /// Scenario name as registered.
    pub scenario_name: String,
    /// True when every check (and any extraction) succeeded.
    pub passed: bool,
    /// Human-readable failure description for failed steps.
    pub failure_reason: Option<String>,
    /// Failure family for failed steps.
    pub failure_class: Option<FailureClass>,
    /// Terminal phase reached by the step.
    pub phase: StepPhase,
    /// Wall-clock duration of the step in milliseconds.
    pub duration_ms: u64,
}

impl StepResult {
    /// Builds a passing result.
    #[must_use]
    pub fn passed(scenario_name: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            scenario_name: scenario_name.into(),
            passed: true,
            failure_reason: None,
            failure_class: None,
            phase: StepPhase::Done,
            duration_ms,
        }
    }

    /// Builds a failing result from the first error the step produced.
    #[must_use]
    pub fn failed(scenario_name: impl Into<String>, error: &StepError, duration_ms: u64) -> Self {
        Self {
            scenario_name: scenario_name.into(),
            passed: false,
            failure_reason: Some(error.to_string()),
            failure_class: Some(FailureClass::from(error)),
            phase: StepPhase::Failed,
            duration_ms,
        }
    }
}

// ============================================================================
// SECTION: Suite Metadata
// ============================================================================

/// Suite-level metadata handed to reporters at suite start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteMeta {
    /// Suite name.
    pub suite: String,
    /// Environment label, for example a base URL or deployment name.
    pub environment: String,
    /// Suite start time in epoch milliseconds.
    pub started_at_ms: u64,
}

// ============================================================================
// SECTION: Report Document
// ============================================================================

/// Aggregated report covering every step of one suite run.
///
/// # Invariants
/// - Built incrementally via [`ReportDocument::record`]; finalized once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDocument {
    /// Suite name.
    pub suite: String,
    /// Environment label.
    pub environment: String,
    /// Suite start time in epoch milliseconds.
    pub started_at_ms: u64,
    /// Suite end time in epoch milliseconds; zero until finalized.
    pub ended_at_ms: u64,
    /// Count of passing steps.
    pub passed: usize,
    /// Count of failing steps.
    pub failed: usize,
    /// Every step result in execution order.
    pub results: Vec<StepResult>,
}

impl ReportDocument {
    /// Starts an empty report from suite metadata.
    #[must_use]
    pub fn new(meta: &SuiteMeta) -> Self {
        Self {
            suite: meta.suite.clone(),
            environment: meta.environment.clone(),
            started_at_ms: meta.started_at_ms,
            ended_at_ms: 0,
            passed: 0,
            failed: 0,
            results: Vec::new(),
        }
    }

    /// Appends one step result and updates the counters.
    pub fn record(&mut self, result: StepResult) {
        if result.passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
        self.results.push(result);
    }

    /// Stamps the suite end time.
    pub fn finalize(&mut self, ended_at_ms: u64) {
        self.ended_at_ms = ended_at_ms;
    }
}

// ============================================================================
// SECTION: Time Helpers
// ============================================================================

/// Returns the current time in epoch milliseconds, saturating on overflow.
#[must_use]
pub fn now_millis() -> u64 {
    let millis = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
    u64::try_from(millis).unwrap_or(u64::MAX)
}

// crates/specrun-core/src/interfaces/mod.rs
// ============================================================================
// Module: Specrun Interfaces
// Description: Transport and reporter seams for the contract harness.
// Purpose: Keep HTTP clients and report sinks behind capability traits.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! The harness core treats the HTTP client as a black box behind [`Transport`]
//! and report sinks as capability interfaces behind [`Reporter`]. Reporters
//! are registered explicitly before the run and finalized after it; there is
//! no implicit hook discovery. Implementations must not retain the scenario
//! context or mutate step results.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use thiserror::Error;

use crate::core::error::TransportFailure;
use crate::core::report::StepResult;
use crate::core::report::SuiteMeta;
use crate::core::request::RequestSpec;

// ============================================================================
// SECTION: HTTP Response
// ============================================================================

/// Response returned by a transport: status code plus raw body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body text.
    pub body: String,
}

// ============================================================================
// SECTION: Transport
// ============================================================================

/// Sends one resolved request and returns the response.
///
/// Implementations must honor the per-request timeout and map a timeout to
/// [`TransportFailure::Timeout`]; timeouts are never retried by the harness.
pub trait Transport: Send + Sync {
    /// Sends the request, blocking until a response arrives or the timeout
    /// elapses.
    ///
    /// # Errors
    ///
    /// Returns [`TransportFailure`] when the request cannot be completed.
    fn send(&self, spec: &RequestSpec, timeout: Duration)
    -> Result<HttpResponse, TransportFailure>;
}

// ============================================================================
// SECTION: Reporter
// ============================================================================

/// Errors emitted by reporters.
///
/// # Invariants
/// - One reporter's failure never blocks delivery to the others; the
///   orchestrator isolates reporter errors and continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReporterError {
    /// Writing the report artifact failed.
    #[error("report write failed: {reason}")]
    WriteFailed {
        /// I/O error description.
        reason: String,
    },
    /// Serializing the report failed.
    #[error("report serialization failed: {reason}")]
    SerializationFailed {
        /// Serialization error description.
        reason: String,
    },
}

/// Pluggable sink for per-step outcome events.
///
/// # Invariants
/// - `on_suite_end` performs the actual artifact I/O and must be idempotent:
///   a duplicate suite-end signal must not corrupt or duplicate the artifact.
pub trait Reporter: Send {
    /// Receives suite metadata before the first scenario runs.
    ///
    /// # Errors
    ///
    /// Returns [`ReporterError`] when the reporter cannot process the event.
    fn on_suite_start(&mut self, meta: &SuiteMeta) -> Result<(), ReporterError>;

    /// Receives one step result as soon as the step resolves.
    ///
    /// # Errors
    ///
    /// Returns [`ReporterError`] when the reporter cannot process the event.
    fn on_step_result(&mut self, result: &StepResult) -> Result<(), ReporterError>;

    /// Flushes the report artifact at suite end.
    ///
    /// # Errors
    ///
    /// Returns [`ReporterError`] when the flush fails.
    fn on_suite_end(&mut self) -> Result<(), ReporterError>;
}

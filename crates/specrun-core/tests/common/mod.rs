// crates/specrun-core/tests/common/mod.rs
// ============================================================================
// Module: Core Test Doubles
// Description: Scripted transport and recording reporter for core tests.
// Purpose: Exercise the runner and orchestrator without real HTTP.
// Dependencies: specrun-core
// ============================================================================

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    dead_code,
    reason = "Test-only helpers are permitted; not every test uses every helper."
)]

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use specrun_core::CancelToken;
use specrun_core::HttpResponse;
use specrun_core::Reporter;
use specrun_core::ReporterError;
use specrun_core::RequestSpec;
use specrun_core::StepResult;
use specrun_core::SuiteMeta;
use specrun_core::Transport;
use specrun_core::TransportFailure;

/// Transport replaying a scripted sequence of responses.
pub struct ScriptedTransport {
    /// Remaining scripted responses, consumed front to back.
    responses: Mutex<VecDeque<Result<HttpResponse, TransportFailure>>>,
    /// Specs received, in call order.
    calls: Arc<Mutex<Vec<RequestSpec>>>,
}

impl ScriptedTransport {
    /// Creates a transport that replays `responses` in order.
    pub fn new(responses: Vec<Result<HttpResponse, TransportFailure>>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Convenience constructor for a sequence of OK responses.
    pub fn replying(responses: Vec<(u16, &str)>) -> Self {
        Self::new(
            responses
                .into_iter()
                .map(|(status, body)| {
                    Ok(HttpResponse {
                        status,
                        body: body.to_string(),
                    })
                })
                .collect(),
        )
    }

    /// Returns the specs received so far.
    pub fn calls(&self) -> Vec<RequestSpec> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }

    /// Returns how many requests reached the transport.
    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("calls lock poisoned").len()
    }
}

impl Transport for ScriptedTransport {
    fn send(
        &self,
        spec: &RequestSpec,
        _timeout: Duration,
    ) -> Result<HttpResponse, TransportFailure> {
        self.calls.lock().expect("calls lock poisoned").push(spec.clone());
        self.responses
            .lock()
            .expect("responses lock poisoned")
            .pop_front()
            .unwrap_or_else(|| {
                Err(TransportFailure::Connection {
                    reason: "no scripted response remaining".to_string(),
                })
            })
    }
}

/// Reporter event record shared with the owning test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReporterEvent {
    /// Suite start with the suite name.
    SuiteStart(String),
    /// Step result with name and pass flag.
    Step(String, bool),
    /// Suite end flush.
    SuiteEnd,
}

/// Reporter recording every event into shared storage.
pub struct RecordingReporter {
    /// Shared event log.
    events: Arc<Mutex<Vec<ReporterEvent>>>,
}

impl RecordingReporter {
    /// Creates a recording reporter and its shared event log.
    pub fn new() -> (Self, Arc<Mutex<Vec<ReporterEvent>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                events: Arc::clone(&events),
            },
            events,
        )
    }
}

impl Reporter for RecordingReporter {
    fn on_suite_start(&mut self, meta: &SuiteMeta) -> Result<(), ReporterError> {
        self.events
            .lock()
            .expect("events lock poisoned")
            .push(ReporterEvent::SuiteStart(meta.suite.clone()));
        Ok(())
    }

    fn on_step_result(&mut self, result: &StepResult) -> Result<(), ReporterError> {
        self.events
            .lock()
            .expect("events lock poisoned")
            .push(ReporterEvent::Step(result.scenario_name.clone(), result.passed));
        Ok(())
    }

    fn on_suite_end(&mut self) -> Result<(), ReporterError> {
        self.events.lock().expect("events lock poisoned").push(ReporterEvent::SuiteEnd);
        Ok(())
    }
}

/// Reporter failing every event, for isolation tests.
pub struct FailingReporter;

impl Reporter for FailingReporter {
    fn on_suite_start(&mut self, _meta: &SuiteMeta) -> Result<(), ReporterError> {
        Err(ReporterError::WriteFailed {
            reason: "failing reporter".to_string(),
        })
    }

    fn on_step_result(&mut self, _result: &StepResult) -> Result<(), ReporterError> {
        Err(ReporterError::WriteFailed {
            reason: "failing reporter".to_string(),
        })
    }

    fn on_suite_end(&mut self) -> Result<(), ReporterError> {
        Err(ReporterError::WriteFailed {
            reason: "failing reporter".to_string(),
        })
    }
}

/// Reporter cancelling the run after a named step resolves.
pub struct CancellingReporter {
    /// Token to trip.
    token: CancelToken,
    /// Step name that triggers cancellation.
    after: String,
}

impl CancellingReporter {
    /// Creates a reporter that cancels after the named step.
    pub fn new(token: CancelToken, after: impl Into<String>) -> Self {
        Self {
            token,
            after: after.into(),
        }
    }
}

impl Reporter for CancellingReporter {
    fn on_suite_start(&mut self, _meta: &SuiteMeta) -> Result<(), ReporterError> {
        Ok(())
    }

    fn on_step_result(&mut self, result: &StepResult) -> Result<(), ReporterError> {
        if result.scenario_name == self.after {
            self.token.cancel();
        }
        Ok(())
    }

    fn on_suite_end(&mut self) -> Result<(), ReporterError> {
        Ok(())
    }
}

// crates/specrun-core/src/lib.rs
// ============================================================================
// Module: Specrun Core
// Description: Core engine for sequential, state-threading HTTP contract tests.
// Purpose: Define the data model, evaluation rules, and runtime for suites.
// Dependencies: jsonpath_lib, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Specrun executes ordered HTTP contract scenarios: each scenario sends one
//! request, validates status and body against a declared outcome, and may
//! extract a value from the response for later scenarios to consume. The
//! transport and reporters are pluggable trait seams; this crate carries no
//! HTTP dependency of its own.
//!
//! Invariants:
//! - Scenarios execute strictly in declared order, never concurrently.
//! - Exactly one [`StepResult`] is emitted per started scenario.
//! - The shared [`ScenarioContext`] is mutated only by successful extraction.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use crate::core::context::ScenarioContext;
pub use crate::core::error::AssertionFailure;
pub use crate::core::error::ConfigError;
pub use crate::core::error::StepError;
pub use crate::core::error::TransportFailure;
pub use crate::core::expect::BodyAssertion;
pub use crate::core::expect::ExpectedOutcome;
pub use crate::core::expect::StepPhase;
pub use crate::core::extract::ExtractionRule;
pub use crate::core::report::FailureClass;
pub use crate::core::report::ReportDocument;
pub use crate::core::report::StepResult;
pub use crate::core::report::SuiteMeta;
pub use crate::core::report::now_millis;
pub use crate::core::request::Method;
pub use crate::core::request::RequestSpec;
pub use crate::core::request::RequestTemplate;
pub use crate::core::scenario::Scenario;
pub use crate::interfaces::HttpResponse;
pub use crate::interfaces::Reporter;
pub use crate::interfaces::ReporterError;
pub use crate::interfaces::Transport;
pub use crate::runtime::orchestrator::CancelToken;
pub use crate::runtime::orchestrator::SuiteOrchestrator;
pub use crate::runtime::orchestrator::SuiteSummary;
pub use crate::runtime::runner::SpecRunner;
pub use crate::runtime::runner::StepEvaluation;

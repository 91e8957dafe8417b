// crates/specrun-core/src/core/scenario.rs
// ============================================================================
// Module: Scenario
// Description: One ordered test case of a contract suite.
// Purpose: Bundle a request template, expected outcome, and extraction rule.
// Dependencies: crate::core::{expect, extract, request}
// ============================================================================

//! ## Overview
//! A scenario is one ordered test case: a request template, the outcome the
//! contract expects, and an optional extraction rule. Scenarios are plain
//! data; the orchestrator resolves and executes them in registration order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::expect::ExpectedOutcome;
use crate::core::extract::ExtractionRule;
use crate::core::request::RequestTemplate;

// ============================================================================
// SECTION: Scenario
// ============================================================================

/// One ordered contract-test case.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    /// Scenario name used in step results and reports.
    pub name: String,
    /// Request template, resolved against the context just before execution.
    pub request: RequestTemplate,
    /// Declared contract for the response.
    pub expected: ExpectedOutcome,
    /// Optional extraction applied after successful validation.
    pub extract: Option<ExtractionRule>,
}

impl Scenario {
    /// Creates a scenario without an extraction rule.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        request: RequestTemplate,
        expected: ExpectedOutcome,
    ) -> Self {
        Self {
            name: name.into(),
            request,
            expected,
            extract: None,
        }
    }

    /// Attaches an extraction rule to the scenario.
    #[must_use]
    pub fn with_extraction(mut self, extract: ExtractionRule) -> Self {
        self.extract = Some(extract);
        self
    }
}

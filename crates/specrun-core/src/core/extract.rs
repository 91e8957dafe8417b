// crates/specrun-core/src/core/extract.rs
// ============================================================================
// Module: Extraction Rules
// Description: Derivation of context values from validated responses.
// Purpose: Persist response values for later scenarios to consume.
// Dependencies: crate::core::error, serde, serde_json
// ============================================================================

//! ## Overview
//! An extraction rule names a JSON path into the response body and the
//! context key the selected value is stored under. It is applied exactly
//! once, immediately after the expected outcome validated, and only on
//! success: a failed step never mutates the context. A step that declares an
//! extraction requires it to succeed, because a later scenario will need the
//! value.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::core::error::AssertionFailure;
use crate::core::expect::select_first;

// ============================================================================
// SECTION: Extraction Rule
// ============================================================================

/// Rule deriving one context value from a validated response body.
///
/// # Invariants
/// - Applied at most once per step, after every check passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRule {
    /// JSON path into the parsed body, for example `$.created.id`.
    pub path: String,
    /// Context key the selected value is stored under.
    pub name: String,
}

impl ExtractionRule {
    /// Creates a rule selecting `path` into context key `name`.
    #[must_use]
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
        }
    }

    /// Selects the configured value from the response body.
    ///
    /// The value is returned verbatim (no coercion), so a string identifier
    /// stays a string and reads back byte-exact from the context.
    ///
    /// # Errors
    ///
    /// Returns [`AssertionFailure::ExtractionFailed`] when the body is not
    /// valid JSON or the path selects no value.
    pub fn apply(&self, body: &str) -> Result<Value, AssertionFailure> {
        let parsed: Value =
            serde_json::from_str(body).map_err(|_| self.failure())?;
        let value = select_first(&parsed, &self.path).map_err(|_| self.failure())?;
        Ok(value.clone())
    }

    /// Builds the canonical failure for this rule.
    fn failure(&self) -> AssertionFailure {
        AssertionFailure::ExtractionFailed {
            name: self.name.clone(),
            path: self.path.clone(),
        }
    }
}

// crates/specrun-core/src/core/expect.rs
// ============================================================================
// Module: Expected Outcomes
// Description: Status and body assertions with fail-fast evaluation.
// Purpose: Validate a received response against the declared contract.
// Dependencies: crate::core::{context, error}, jsonpath_lib, serde, serde_json
// ============================================================================

//! ## Overview
//! An expected outcome is a status code plus an ordered list of body
//! assertions. The status check always runs first; body assertions run in
//! declared order only when the status check passed, and the first failing
//! assertion short-circuits the rest. Fail-fast keeps failure messages
//! unambiguous: one step reports one cause.
//!
//! Substring checks are case-sensitive and exact. That brittleness is
//! deliberate: the harness is a literal contract check, so any wording drift
//! in the API's error messages breaks the test.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::core::context::ScenarioContext;
use crate::core::error::AssertionFailure;
use crate::core::error::ConfigError;

// ============================================================================
// SECTION: Step Phase
// ============================================================================

/// Evaluation phase of a single step.
///
/// # Invariants
/// - Phases advance `Pending -> StatusChecked -> BodyChecked -> Extracted ->
///   Done`; any check failure transitions directly to `Failed`.
/// - `Done` and `Failed` are the only terminal phases; exactly one step
///   result is emitted per step regardless of path taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepPhase {
    /// No check has run yet.
    Pending,
    /// The status code matched.
    StatusChecked,
    /// Every body assertion passed.
    BodyChecked,
    /// The declared extraction produced a value.
    Extracted,
    /// The step completed successfully.
    Done,
    /// A check failed; remaining phases were skipped.
    Failed,
}

impl StepPhase {
    /// Returns true for the terminal phases.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}

// ============================================================================
// SECTION: Body Assertions
// ============================================================================

/// One ordered assertion against a received response body.
///
/// # Invariants
/// - Expected strings may carry `{name}` placeholders resolved against the
///   scenario context before evaluation; literal braces are escaped as `{{`
///   and `}}`, so expected text may be JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BodyAssertion {
    /// The serialized body equals the expected text exactly.
    Equals {
        /// Expected full body text.
        expected: String,
    },
    /// The serialized body contains the expected text as an exact substring.
    Contains {
        /// Expected substring.
        expected: String,
    },
    /// The value at a JSON path equals the expected JSON value.
    JsonPath {
        /// JSON path into the parsed body, for example `$.created.id`.
        path: String,
        /// Expected value at the path.
        expected: Value,
    },
}

impl BodyAssertion {
    /// Resolves placeholders in expected text against the context.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a placeholder names an unset key or the
    /// template is malformed.
    pub fn resolve(&self, ctx: &ScenarioContext) -> Result<Self, ConfigError> {
        match self {
            Self::Equals {
                expected,
            } => Ok(Self::Equals {
                expected: ctx.render(expected)?,
            }),
            Self::Contains {
                expected,
            } => Ok(Self::Contains {
                expected: ctx.render(expected)?,
            }),
            Self::JsonPath {
                path,
                expected,
            } => {
                let expected = match expected {
                    Value::String(text) => Value::String(ctx.render(text)?),
                    other => other.clone(),
                };
                Ok(Self::JsonPath {
                    path: path.clone(),
                    expected,
                })
            }
        }
    }
}

// ============================================================================
// SECTION: Expected Outcome
// ============================================================================

/// Declared contract for one response: status code plus ordered body checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectedOutcome {
    /// Expected HTTP status code; always checked first.
    pub status: u16,
    /// Ordered body assertions; evaluated fail-fast after the status check.
    pub body: Vec<BodyAssertion>,
}

impl ExpectedOutcome {
    /// Creates an outcome that only checks the status code.
    #[must_use]
    pub const fn status(status: u16) -> Self {
        Self {
            status,
            body: Vec::new(),
        }
    }

    /// Appends a whole-body equality assertion.
    #[must_use]
    pub fn body_equals(mut self, expected: impl Into<String>) -> Self {
        self.body.push(BodyAssertion::Equals {
            expected: expected.into(),
        });
        self
    }

    /// Appends a case-sensitive substring assertion.
    #[must_use]
    pub fn body_contains(mut self, expected: impl Into<String>) -> Self {
        self.body.push(BodyAssertion::Contains {
            expected: expected.into(),
        });
        self
    }

    /// Appends a JSON path value assertion.
    #[must_use]
    pub fn json_path(mut self, path: impl Into<String>, expected: Value) -> Self {
        self.body.push(BodyAssertion::JsonPath {
            path: path.into(),
            expected,
        });
        self
    }

    /// Resolves placeholders in every assertion against the context.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a placeholder names an unset key or a
    /// template is malformed.
    pub fn resolve(&self, ctx: &ScenarioContext) -> Result<Self, ConfigError> {
        let mut body = Vec::with_capacity(self.body.len());
        for assertion in &self.body {
            body.push(assertion.resolve(ctx)?);
        }
        Ok(Self {
            status: self.status,
            body,
        })
    }

    /// Checks the received status code.
    ///
    /// # Errors
    ///
    /// Returns [`AssertionFailure::StatusMismatch`] on any difference; the
    /// mismatch short-circuits every body assertion of the step.
    pub fn check_status(&self, actual: u16) -> Result<(), AssertionFailure> {
        if actual == self.status {
            Ok(())
        } else {
            Err(AssertionFailure::StatusMismatch {
                expected: self.status,
                actual,
            })
        }
    }

    /// Runs the body assertions in declared order, stopping at the first
    /// failure.
    ///
    /// # Errors
    ///
    /// Returns the first failing assertion as an [`AssertionFailure`].
    pub fn check_body(&self, body: &str) -> Result<(), AssertionFailure> {
        let mut parsed: Option<Value> = None;
        for assertion in &self.body {
            match assertion {
                BodyAssertion::Equals {
                    expected,
                } => {
                    if body != expected {
                        return Err(AssertionFailure::BodyMismatch {
                            detail: format!("body does not equal `{expected}`"),
                        });
                    }
                }
                BodyAssertion::Contains {
                    expected,
                } => {
                    if !body.contains(expected.as_str()) {
                        return Err(AssertionFailure::BodyMismatch {
                            detail: format!("body does not contain `{expected}`"),
                        });
                    }
                }
                BodyAssertion::JsonPath {
                    path,
                    expected,
                } => {
                    let json = parse_cached(&mut parsed, body)?;
                    let actual = select_first(json, path)?;
                    if *actual != *expected {
                        return Err(AssertionFailure::BodyMismatch {
                            detail: format!(
                                "json path `{path}` expected `{expected}`, found `{actual}`"
                            ),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Parses the body as JSON once and reuses the parse across assertions.
fn parse_cached<'a>(
    cache: &'a mut Option<Value>,
    body: &str,
) -> Result<&'a Value, AssertionFailure> {
    if cache.is_none() {
        let parsed = serde_json::from_str(body).map_err(|err| AssertionFailure::BodyNotJson {
            reason: err.to_string(),
        })?;
        *cache = Some(parsed);
    }
    cache.as_ref().ok_or(AssertionFailure::BodyNotJson {
        reason: "body parse cache empty".to_string(),
    })
}

/// Selects the first value at a JSON path.
pub(crate) fn select_first<'a>(
    json: &'a Value,
    path: &str,
) -> Result<&'a Value, AssertionFailure> {
    let matches = jsonpath_lib::select(json, path).map_err(|_| AssertionFailure::PathNotFound {
        path: path.to_string(),
    })?;
    matches.first().copied().ok_or_else(|| AssertionFailure::PathNotFound {
        path: path.to_string(),
    })
}

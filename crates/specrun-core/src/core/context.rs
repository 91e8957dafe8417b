// crates/specrun-core/src/core/context.rs
// ============================================================================
// Module: Scenario Context
// Description: Mutable store of values threaded across ordered scenarios.
// Purpose: Carry extracted values from one scenario into later requests.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! The scenario context is the only shared mutable state of a suite run. It
//! is created once per run, owned exclusively by the orchestrator, mutated
//! only by successful extraction, and dropped at suite end. Because scenarios
//! execute strictly sequentially, the ordering guarantee itself is the
//! concurrency control; no locking is involved.
//!
//! There is no delete operation. Writing an existing key again is permitted
//! and last-write-wins; a scenario may legitimately refresh a value after an
//! update step. That is caller discipline, not an enforced invariant.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde_json::Value;

use crate::core::error::ConfigError;

// ============================================================================
// SECTION: Scenario Context
// ============================================================================

/// Store of named values extracted from earlier scenario responses.
///
/// # Invariants
/// - Keys are opaque UTF-8 names; values are arbitrary JSON.
/// - Iteration order is deterministic (sorted by key).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScenarioContext {
    /// Extracted values keyed by logical name.
    values: BTreeMap<String, Value>,
}

impl ScenarioContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Stores `value` under `name`, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    /// Returns the number of stored values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true when no values have been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Resolves `{name}` placeholders in `template` against stored values.
    ///
    /// Substituted strings appear verbatim (no quoting); numbers and booleans
    /// render in their canonical display form, so an identifier extracted as
    /// `"42"` reappears byte-exact in a later URL segment. Literal braces are
    /// written escaped as `{{` and `}}`, so whole-body and substring
    /// assertions can carry JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingContextValue`] when a placeholder names
    /// a key that was never set, and [`ConfigError::InvalidSpec`] for
    /// unbalanced braces, empty placeholder names, or values that cannot be
    /// rendered into text (null, arrays, objects).
    pub fn render(&self, template: &str) -> Result<String, ConfigError> {
        let mut out = String::with_capacity(template.len());
        let mut chars = template.chars().peekable();
        while let Some(ch) = chars.next() {
            match ch {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    out.push('{');
                }
                '{' => {
                    let key = take_placeholder_name(&mut chars, template)?;
                    let value = self.get(&key).ok_or_else(|| {
                        ConfigError::MissingContextValue {
                            key: key.clone(),
                        }
                    })?;
                    out.push_str(&render_value(&key, value)?);
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    out.push('}');
                }
                '}' => {
                    return Err(ConfigError::InvalidSpec {
                        reason: format!("unmatched `}}` in template `{template}`"),
                    });
                }
                other => out.push(other),
            }
        }
        Ok(out)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Consumes a placeholder name up to the closing brace.
fn take_placeholder_name(
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
    template: &str,
) -> Result<String, ConfigError> {
    let mut key = String::new();
    for ch in chars.by_ref() {
        if ch == '}' {
            if key.is_empty() {
                return Err(ConfigError::InvalidSpec {
                    reason: format!("empty placeholder in template `{template}`"),
                });
            }
            return Ok(key);
        }
        if ch == '{' {
            return Err(ConfigError::InvalidSpec {
                reason: format!("nested `{{` in template `{template}`"),
            });
        }
        key.push(ch);
    }
    Err(ConfigError::InvalidSpec {
        reason: format!("unterminated placeholder in template `{template}`"),
    })
}

/// Renders a context value into placeholder text.
fn render_value(key: &str, value: &Value) -> Result<String, ConfigError> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => Err(ConfigError::InvalidSpec {
            reason: format!("context value `{key}` cannot be rendered into text"),
        }),
    }
}

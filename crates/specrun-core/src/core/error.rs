// crates/specrun-core/src/core/error.rs
// ============================================================================
// Module: Specrun Error Taxonomy
// Description: Transport, assertion, and configuration failure types.
// Purpose: Keep remote-API failures distinguishable from authoring bugs.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Every failure a step can produce belongs to exactly one of three families:
//! transport failures (the remote API was unreachable or slow), assertion
//! failures (the API answered but violated the contract), and configuration
//! errors (the suite itself is misauthored). The distinction is preserved all
//! the way into reported results so a test author can tell "my harness is
//! misconfigured" from "the API under test is wrong".
//!
//! Invariants:
//! - Variants are stable for programmatic handling.
//! - No failure is silently swallowed; each becomes a failed step result.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

// ============================================================================
// SECTION: Transport Failures
// ============================================================================

/// Failures raised by the HTTP transport before any assertion runs.
///
/// # Invariants
/// - Timeouts are terminal for the step and are never retried; contract tests
///   must observe real latency and availability rather than mask it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportFailure {
    /// The request exceeded the per-request timeout.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout {
        /// Timeout that was exceeded, in milliseconds.
        timeout_ms: u64,
    },
    /// The request could not be sent or the connection was dropped.
    #[error("connection failed: {reason}")]
    Connection {
        /// Human-readable transport error description.
        reason: String,
    },
}

// ============================================================================
// SECTION: Assertion Failures
// ============================================================================

/// Failures raised while validating a received response against the contract.
///
/// # Invariants
/// - The first failing check short-circuits the remaining checks of the step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssertionFailure {
    /// Actual status code differed from the expected status code.
    #[error("expected status {expected}, received {actual}")]
    StatusMismatch {
        /// Status code the contract expects.
        expected: u16,
        /// Status code the API returned.
        actual: u16,
    },
    /// The serialized body failed an equality or substring assertion.
    #[error("body mismatch: {detail}")]
    BodyMismatch {
        /// Description of the failed body check.
        detail: String,
    },
    /// A JSON path assertion referenced a path absent from the body.
    #[error("json path `{path}` not found in response body")]
    PathNotFound {
        /// The path that did not resolve.
        path: String,
    },
    /// A JSON assertion ran against a body that is not valid JSON.
    #[error("response body is not valid json: {reason}")]
    BodyNotJson {
        /// Parse error description.
        reason: String,
    },
    /// A declared extraction produced no value.
    #[error("extraction `{name}` failed: no value at `{path}`")]
    ExtractionFailed {
        /// Context key the extraction would have written.
        name: String,
        /// The path that produced no value.
        path: String,
    },
}

// ============================================================================
// SECTION: Configuration Errors
// ============================================================================

/// Local authoring errors detected before any request is sent.
///
/// # Invariants
/// - A configuration error never reaches the transport; a misauthored step
///   fails locally instead of producing a confusing remote response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A template referenced a context key no earlier scenario produced.
    #[error("missing context value `{key}`")]
    MissingContextValue {
        /// The context key that was not set.
        key: String,
    },
    /// The request template itself is malformed.
    #[error("invalid request spec: {reason}")]
    InvalidSpec {
        /// Description of the authoring problem.
        reason: String,
    },
}

// ============================================================================
// SECTION: Step Error Union
// ============================================================================

/// Union of every failure a single step can surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    /// The transport failed before a response arrived.
    #[error(transparent)]
    Transport(#[from] TransportFailure),
    /// The response violated the declared contract.
    #[error(transparent)]
    Assertion(#[from] AssertionFailure),
    /// The step was misauthored and never sent a request.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

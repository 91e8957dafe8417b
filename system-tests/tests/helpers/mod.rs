// system-tests/tests/helpers/mod.rs
// ============================================================================
// Module: System Test Helpers
// Description: Shared helpers for specrun system-tests.
// Purpose: Host the market stub server and fake-data generators.
// Dependencies: rand, serde_json, tiny_http
// ============================================================================

//! Shared helpers for the end-to-end contract suites.

pub mod fake;
pub mod market_stub;

// system-tests/src/lib.rs
// ============================================================================
// Module: Specrun System Tests Library
// Description: Shared configuration for end-to-end contract suites.
// Purpose: Provide common utilities for the system-test binaries.
// Dependencies: std
// ============================================================================

//! ## Overview
//! This crate hosts shared configuration used by the specrun system-test
//! binaries in `system-tests/tests`. Environment inputs are untrusted and
//! parsed strictly.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// crates/specrun-core/src/core/mod.rs
// ============================================================================
// Module: Specrun Core Data Model
// Description: Request, expectation, context, and result types.
// Purpose: Define the immutable data model shared by runner and orchestrator.
// Dependencies: crate submodules
// ============================================================================

//! ## Overview
//! The core data model is plain serializable data. Requests are authored as
//! templates and become immutable [`request::RequestSpec`] values only once
//! every placeholder has been resolved against the scenario context.

pub mod context;
pub mod error;
pub mod expect;
pub mod extract;
pub mod report;
pub mod request;
pub mod scenario;

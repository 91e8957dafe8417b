// crates/specrun-core/src/runtime/mod.rs
// ============================================================================
// Module: Specrun Runtime
// Description: Step execution and suite orchestration.
// Purpose: Drive scenarios sequentially through the phase machine.
// Dependencies: crate submodules
// ============================================================================

//! ## Overview
//! The runtime executes one step at a time: the runner walks a single step
//! through its phase machine, and the orchestrator sequences registered
//! scenarios, threads the context, and fans outcomes out to reporters.

pub mod orchestrator;
pub mod runner;

// crates/specrun-report/src/json_file.rs
// ============================================================================
// Module: JSON File Reporter
// Description: Canonical JSON report artifact written once at suite end.
// Purpose: Persist the aggregated report document deterministically.
// Dependencies: serde_jcs, specrun-core, std
// ============================================================================

//! ## Overview
//! The JSON file reporter accumulates the report document in memory and
//! performs the artifact I/O only in `on_suite_end`. The bytes are canonical
//! JCS, so identical runs produce identical artifacts. The flush is
//! idempotent: a second suite-end signal is a no-op and the artifact is
//! written at most once per run.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use specrun_core::ReportDocument;
use specrun_core::Reporter;
use specrun_core::ReporterError;
use specrun_core::StepResult;
use specrun_core::SuiteMeta;
use specrun_core::now_millis;

// ============================================================================
// SECTION: JSON File Reporter
// ============================================================================

/// Reporter writing the aggregated report as canonical JSON bytes.
///
/// # Invariants
/// - The artifact is written at most once; repeated flushes are no-ops.
#[derive(Debug)]
pub struct JsonFileReporter {
    /// Destination path of the report artifact.
    path: PathBuf,
    /// Report under construction; present once the suite started.
    document: Option<ReportDocument>,
    /// True once the artifact has been written.
    flushed: bool,
}

impl JsonFileReporter {
    /// Creates a reporter targeting the given artifact path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            document: None,
            flushed: false,
        }
    }

    /// Returns the artifact path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Reporter for JsonFileReporter {
    fn on_suite_start(&mut self, meta: &SuiteMeta) -> Result<(), ReporterError> {
        self.document = Some(ReportDocument::new(meta));
        Ok(())
    }

    fn on_step_result(&mut self, result: &StepResult) -> Result<(), ReporterError> {
        let document = self.document.as_mut().ok_or_else(|| ReporterError::WriteFailed {
            reason: "step result received before suite start".to_string(),
        })?;
        document.record(result.clone());
        Ok(())
    }

    fn on_suite_end(&mut self) -> Result<(), ReporterError> {
        if self.flushed {
            return Ok(());
        }
        let document = self.document.as_mut().ok_or_else(|| ReporterError::WriteFailed {
            reason: "suite end received before suite start".to_string(),
        })?;
        document.finalize(now_millis());
        let bytes =
            serde_jcs::to_vec(document).map_err(|err| ReporterError::SerializationFailed {
                reason: err.to_string(),
            })?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| ReporterError::WriteFailed {
                reason: err.to_string(),
            })?;
        }
        fs::write(&self.path, bytes).map_err(|err| ReporterError::WriteFailed {
            reason: err.to_string(),
        })?;
        self.flushed = true;
        Ok(())
    }
}

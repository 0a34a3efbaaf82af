//! Per-output admission diagnostics

use crate::errors::{DecodeError, VerifyError};
use thiserror::Error;

/// Why an output was not admitted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Locking script is not a PushDrop token
    #[error("Not a PushDrop token: {0}")]
    Decode(#[from] DecodeError),

    /// Token carries a different protocol namespace
    #[error("This transaction is not a valid TSP token (namespace: {found:?})")]
    NamespaceMismatch { found: Option<String> },

    /// Signature does not verify against the embedded key
    #[error("Signature check failed: {0}")]
    InvalidSignature(#[from] VerifyError),
}

/// An output the filter passed over
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedOutput {
    pub index: usize,
    pub reason: SkipReason,
}

/// Outcome of reviewing every output of a transaction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdmissionReport {
    /// Admitted output indices, ascending
    pub admitted: Vec<usize>,
    /// One entry per output that was not admitted, ascending by index
    pub skipped: Vec<SkippedOutput>,
}

impl AdmissionReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn admit(&mut self, index: usize) {
        self.admitted.push(index);
    }

    pub fn skip(&mut self, index: usize, reason: SkipReason) {
        self.skipped.push(SkippedOutput { index, reason });
    }

    pub fn is_empty(&self) -> bool {
        self.admitted.is_empty()
    }

    /// Total outputs reviewed
    pub fn outputs_reviewed(&self) -> usize {
        self.admitted.len() + self.skipped.len()
    }

    /// Get a human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "{}/{} outputs admitted ({} skipped)",
            self.admitted.len(),
            self.outputs_reviewed(),
            self.skipped.len()
        )
    }
}

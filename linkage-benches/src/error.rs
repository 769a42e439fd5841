//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of panicking
//! inside Criterion closures.

use crate::source::SyntheticError;
use linkage_core::LinkageError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic point generation failed.
    #[error("synthetic point generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Configuring or running the analyses failed.
    #[error("linkage operation failed: {0}")]
    Linkage(#[from] LinkageError),
}

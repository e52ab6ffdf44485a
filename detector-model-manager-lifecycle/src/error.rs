//! Error types for detector model lifecycle operations.

use thiserror::Error;

use crate::lifecycle::LifecyclePhase;

/// Failure kinds surfaced by the lifecycle controller.
///
/// Every operation either fully succeeds or fails with one of these and
/// leaves local bookkeeping at its last known-good state; the one exception
/// is create, where a failed confirmation read is reported inside
/// [`CreateOutcome`](crate::CreateOutcome) instead of rolling back.
#[derive(Debug, Error)]
pub enum DetectorModelError {
    /// The declared model is malformed or missing required fields. Raised
    /// before any remote call; never retried.
    #[error("invalid detector model: {0}")]
    Validation(String),

    /// The remote service rejected the call. Surfaced verbatim; retrying is
    /// not this layer's job.
    #[error("remote service error: {0}")]
    Remote(String),

    /// The identity does not exist remotely.
    #[error("detector model '{0}' not found")]
    NotFound(String),

    /// Network, timeout, or credential failure from the remote client,
    /// propagated unmodified.
    #[error("transport failure: {0}")]
    Transport(String),

    /// Adopting an existing remote resource failed.
    #[error("import of detector model '{name}' failed: {reason}")]
    Import { name: String, reason: String },

    /// The operation is not valid in the current lifecycle phase.
    #[error("{operation} is not allowed while the detector model is {phase}")]
    InvalidPhase {
        operation: &'static str,
        phase: LifecyclePhase,
    },
}

pub type DetectorModelResult<T> = Result<T, DetectorModelError>;

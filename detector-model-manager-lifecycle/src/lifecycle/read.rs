//! Read operation: describe the resource and surface what was observed.

use crate::error::{DetectorModelError, DetectorModelResult};
use crate::lifecycle::controller::lift_remote_error;
use crate::lifecycle::{DetectorModelController, LifecyclePhase};
use crate::model::ObservedModel;
use crate::remote::{DetectorModelClient, RemoteCallError};
use crate::translate;

/// Outcome of a read: the observed remote state, or the explicit signal
/// that the resource no longer exists remotely.
#[derive(Debug)]
pub enum ReadOutcome {
    Observed(ObservedModel),
    /// Terminal observation that the resource is gone; the caller
    /// transitions its bookkeeping to absent. Distinct from a transient
    /// failure, which is returned as `Err`.
    Missing,
}

impl<C: DetectorModelClient> DetectorModelController<C> {
    /// Describe the resource by its identity.
    ///
    /// Requires `Present` or `Importing`. A refresh read is pure
    /// observation: the phase is not mutated here even when the resource
    /// turns out to be missing.
    pub async fn read(&self) -> DetectorModelResult<ReadOutcome> {
        let name = match self.phase {
            LifecyclePhase::Present | LifecyclePhase::Importing => self
                .identity
                .clone()
                .ok_or(DetectorModelError::InvalidPhase {
                    operation: "read",
                    phase: self.phase,
                })?,
            phase => {
                return Err(DetectorModelError::InvalidPhase {
                    operation: "read",
                    phase,
                })
            }
        };

        log::debug!("reading detector model '{name}'");
        match self.client.describe_detector_model(&name).await {
            Ok(response) => Ok(ReadOutcome::Observed(translate::from_describe_response(
                response,
            )?)),
            Err(RemoteCallError::NotFound) => {
                log::debug!("detector model '{name}' no longer exists remotely");
                Ok(ReadOutcome::Missing)
            }
            Err(err) => Err(lift_remote_error(err, &name)),
        }
    }
}

//! Delete operation: idempotent removal by identity.

use crate::error::{DetectorModelError, DetectorModelResult};
use crate::lifecycle::controller::lift_remote_error;
use crate::lifecycle::{DetectorModelController, LifecyclePhase};
use crate::remote::{DetectorModelClient, RemoteCallError};

impl<C: DetectorModelClient> DetectorModelController<C> {
    /// Delete the resource remotely.
    ///
    /// Requires `Present`. A remote not-found is mapped to success: the
    /// desired end state, absence, already holds. On success the identity is
    /// cleared and the phase returns to `Absent`.
    pub async fn delete(&mut self) -> DetectorModelResult<()> {
        self.require_phase(LifecyclePhase::Present, "delete")?;
        let name = self
            .identity
            .clone()
            .ok_or(DetectorModelError::InvalidPhase {
                operation: "delete",
                phase: self.phase,
            })?;

        self.phase = LifecyclePhase::Deleting;
        log::debug!("deleting detector model '{name}'");
        match self.client.delete_detector_model(&name).await {
            Ok(()) | Err(RemoteCallError::NotFound) => {
                self.identity = None;
                self.phase = LifecyclePhase::Absent;
                Ok(())
            }
            Err(err) => {
                self.phase = LifecyclePhase::Present;
                Err(lift_remote_error(err, &name))
            }
        }
    }
}

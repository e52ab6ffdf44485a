//! Import: adopt an existing remote resource without creating it.

use crate::error::{DetectorModelError, DetectorModelResult};
use crate::lifecycle::{DetectorModelController, LifecyclePhase, ReadOutcome};
use crate::model::{validate_name, ObservedModel};
use crate::remote::DetectorModelClient;

impl<C: DetectorModelClient> DetectorModelController<C> {
    /// Adopt the remote detector model with the supplied identity.
    ///
    /// Requires `Absent`. On success the controller is `Present` with the
    /// supplied identity and the observed remote state is returned. When the
    /// identity does not exist remotely the import fails and the controller
    /// returns to `Absent` with no identity recorded; other failures also
    /// leave it `Absent`.
    pub async fn import(&mut self, identity: &str) -> DetectorModelResult<ObservedModel> {
        self.require_phase(LifecyclePhase::Absent, "import")?;
        validate_name(identity)?;

        self.identity = Some(identity.to_string());
        self.phase = LifecyclePhase::Importing;
        log::debug!("importing detector model '{identity}'");
        match self.read().await {
            Ok(ReadOutcome::Observed(observed)) => {
                self.phase = LifecyclePhase::Present;
                Ok(observed)
            }
            Ok(ReadOutcome::Missing) => {
                self.identity = None;
                self.phase = LifecyclePhase::Absent;
                Err(DetectorModelError::Import {
                    name: identity.to_string(),
                    reason: "the detector model does not exist remotely".to_string(),
                })
            }
            Err(err) => {
                self.identity = None;
                self.phase = LifecyclePhase::Absent;
                Err(err)
            }
        }
    }
}

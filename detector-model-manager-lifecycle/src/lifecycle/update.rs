//! Update operation: revalidate, push the new definition, refresh.

use crate::error::{DetectorModelError, DetectorModelResult};
use crate::lifecycle::controller::lift_remote_error;
use crate::lifecycle::{DetectorModelController, LifecyclePhase, ReadOutcome};
use crate::model::DetectorModel;
use crate::remote::DetectorModelClient;
use crate::translate;

impl<C: DetectorModelClient> DetectorModelController<C> {
    /// Push the declared definition to the existing resource.
    ///
    /// Requires `Present`, and the declared name must match the recorded
    /// identity: the name is immutable, so a rename is destroy + recreate.
    /// Validation mirrors create exactly, so a malformed definition fails
    /// before the remote state can change. On remote failure the resource
    /// keeps its prior remote configuration and stays `Present`; the update
    /// call itself is atomic on the remote side.
    pub async fn update(&mut self, model: &DetectorModel) -> DetectorModelResult<ReadOutcome> {
        self.require_phase(LifecyclePhase::Present, "update")?;
        let request = translate::to_update_request(model)?;
        if self.identity.as_deref() != Some(model.name.as_str()) {
            return Err(DetectorModelError::Validation(format!(
                "name '{}' does not match the managed identity; the name is immutable",
                model.name
            )));
        }

        self.phase = LifecyclePhase::Updating;
        log::debug!("updating detector model '{}'", model.name);
        let result = self.client.update_detector_model(request).await;
        self.phase = LifecyclePhase::Present;
        result.map_err(|err| lift_remote_error(err, &model.name))?;

        self.read().await
    }
}

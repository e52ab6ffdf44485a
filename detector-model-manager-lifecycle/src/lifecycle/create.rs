//! Create operation: validate, create remotely, confirm with a read.

use crate::error::DetectorModelResult;
use crate::lifecycle::controller::lift_remote_error;
use crate::lifecycle::{DetectorModelController, LifecyclePhase, ReadOutcome};
use crate::model::{DetectorModel, ObservedModel};
use crate::remote::DetectorModelClient;
use crate::translate;

/// Result of a create: the assigned identity, the confirming observation,
/// and a non-fatal note when the confirmation read did not succeed.
#[derive(Debug)]
pub struct CreateOutcome {
    pub identity: String,
    pub observed: Option<ObservedModel>,
    /// Set when the resource was created but the confirmation read failed.
    /// The resource is still `Present`; the caller decides whether to read
    /// again.
    pub confirmation_failure: Option<String>,
}

impl<C: DetectorModelClient> DetectorModelController<C> {
    /// Create the declared detector model remotely.
    ///
    /// Requires the `Absent` phase. The model is validated and encoded
    /// before any remote call; a remote rejection (name collision, invalid
    /// role, malformed state graph) leaves the phase at `Absent` and is
    /// surfaced verbatim, never retried. On success the identity becomes the
    /// model name and a confirmation read is attempted.
    pub async fn create(&mut self, model: &DetectorModel) -> DetectorModelResult<CreateOutcome> {
        self.require_phase(LifecyclePhase::Absent, "create")?;
        let request = translate::to_create_request(model)?;

        self.phase = LifecyclePhase::Creating;
        log::debug!("creating detector model '{}'", model.name);
        if let Err(err) = self.client.create_detector_model(request).await {
            self.phase = LifecyclePhase::Absent;
            return Err(lift_remote_error(err, &model.name));
        }

        self.identity = Some(model.name.clone());
        self.phase = LifecyclePhase::Present;

        match self.read().await {
            Ok(ReadOutcome::Observed(observed)) => Ok(CreateOutcome {
                identity: model.name.clone(),
                observed: Some(observed),
                confirmation_failure: None,
            }),
            Ok(ReadOutcome::Missing) => Ok(CreateOutcome {
                identity: model.name.clone(),
                observed: None,
                confirmation_failure: Some(
                    "remote service reported the detector model missing right after create"
                        .to_string(),
                ),
            }),
            Err(err) => Ok(CreateOutcome {
                identity: model.name.clone(),
                observed: None,
                confirmation_failure: Some(err.to_string()),
            }),
        }
    }
}

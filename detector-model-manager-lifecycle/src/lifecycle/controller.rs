//! Controller state: the injected remote client, the lifecycle phase, and
//! the resource identity.

use std::fmt;

use crate::error::{DetectorModelError, DetectorModelResult};
use crate::remote::{DetectorModelClient, RemoteCallError};

/// Where the managed resource sits in its lifecycle.
///
/// `Absent → Creating → Present → Updating → Present → Deleting → Absent`,
/// with `Importing` as the alternate entry edge from `Absent` straight to
/// `Present`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    Absent,
    Creating,
    Present,
    Updating,
    Deleting,
    Importing,
}

impl fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase = match self {
            Self::Absent => "absent",
            Self::Creating => "creating",
            Self::Present => "present",
            Self::Updating => "updating",
            Self::Deleting => "deleting",
            Self::Importing => "importing",
        };
        write!(f, "{phase}")
    }
}

/// Lifecycle controller for a single detector model.
///
/// Holds the injected remote client and owns the resource identity, which is
/// set only by a successful create or import and cleared only by a
/// successful delete. Each instance manages exactly one resource; every
/// mutating operation takes `&mut self`, so at most one is in flight at a
/// time.
pub struct DetectorModelController<C> {
    pub(crate) client: C,
    pub(crate) phase: LifecyclePhase,
    pub(crate) identity: Option<String>,
}

impl<C: DetectorModelClient> DetectorModelController<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            phase: LifecyclePhase::Absent,
            identity: None,
        }
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    /// The resource identity; equals the model name once the resource is
    /// created or imported.
    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    pub(crate) fn require_phase(
        &self,
        expected: LifecyclePhase,
        operation: &'static str,
    ) -> DetectorModelResult<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(DetectorModelError::InvalidPhase {
                operation,
                phase: self.phase,
            })
        }
    }
}

/// Map a remote client failure onto the controller's error vocabulary.
pub(crate) fn lift_remote_error(err: RemoteCallError, name: &str) -> DetectorModelError {
    match err {
        RemoteCallError::NotFound => DetectorModelError::NotFound(name.to_string()),
        RemoteCallError::Service(message) => DetectorModelError::Remote(message),
        RemoteCallError::Transport(message) => DetectorModelError::Transport(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_display() {
        assert_eq!(LifecyclePhase::Absent.to_string(), "absent");
        assert_eq!(LifecyclePhase::Importing.to_string(), "importing");
    }

    #[test]
    fn test_lift_remote_error_keeps_the_identity_in_not_found() {
        let err = lift_remote_error(RemoteCallError::NotFound, "detector-a");
        assert!(matches!(err, DetectorModelError::NotFound(ref name) if name == "detector-a"));
    }
}

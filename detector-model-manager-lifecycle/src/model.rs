//! Typed representation of a declared detector model.
//!
//! Attribute extraction happens once at this boundary: a [`DetectorModel`]
//! is either fully valid or rejected before anything touches the network.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{DetectorModelError, DetectorModelResult};

/// Detector model names are 1-128 characters and double as the resource
/// identity.
pub const DETECTOR_MODEL_NAME_MAX: usize = 128;

/// Initial state names are 1-200 characters.
pub const INITIAL_STATE_NAME_MAX: usize = 200;

static ARN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^arn:[a-z][a-z0-9-]*:[a-zA-Z0-9-]+:[a-z0-9-]*:\d{12}:.+$")
        .expect("ARN pattern compiles")
});

/// Declared desired state of a single remote detector model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectorModel {
    /// Immutable after creation; renaming is destroy + recreate.
    pub name: String,
    pub definition: Definition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Input attribute the service uses to route events to a detector
    /// instance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Execution role the service assumes.
    pub role_arn: String,
}

/// The nested state machine: an initial state plus at least one state block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub initial_state_name: String,
    pub states: Vec<StateDefinition>,
}

/// One state of the detector's state machine. The lifecycle blocks are
/// carried opaquely and round-tripped without interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_input: Option<LifecycleEvents>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_enter: Option<LifecycleEvents>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_exit: Option<LifecycleEvents>,
}

impl StateDefinition {
    /// A bare named state with no lifecycle blocks.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            on_input: None,
            on_enter: None,
            on_exit: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleEvents {
    #[serde(default)]
    pub events: Vec<EventRule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRule {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

/// What the remote service reports back for a detector model, in a form
/// comparable to the declared [`DetectorModel`] for drift detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObservedModel {
    pub name: String,
    pub definition: Definition,
    pub description: Option<String>,
    pub key: Option<String>,
    pub role_arn: Option<String>,
    /// Remote-assigned version of the definition.
    pub version: Option<String>,
    pub status: Option<String>,
}

impl DetectorModel {
    /// Check every declared field. Runs before any translation or remote
    /// call, so a model is never partially translated.
    pub fn validate(&self) -> DetectorModelResult<()> {
        validate_name(&self.name)?;
        let initial = &self.definition.initial_state_name;
        if initial.is_empty() || initial.chars().count() > INITIAL_STATE_NAME_MAX {
            return Err(DetectorModelError::Validation(format!(
                "initial_state_name must be 1-{INITIAL_STATE_NAME_MAX} characters"
            )));
        }
        if self.definition.states.is_empty() {
            return Err(DetectorModelError::Validation(
                "definition must declare at least one state".to_string(),
            ));
        }
        for state in &self.definition.states {
            if state.name.is_empty() {
                return Err(DetectorModelError::Validation(
                    "state names must not be empty".to_string(),
                ));
            }
        }
        if !ARN_PATTERN.is_match(&self.role_arn) {
            return Err(DetectorModelError::Validation(format!(
                "role_arn '{}' is not a valid ARN",
                self.role_arn
            )));
        }
        Ok(())
    }
}

pub(crate) fn validate_name(name: &str) -> DetectorModelResult<()> {
    if name.is_empty() || name.chars().count() > DETECTOR_MODEL_NAME_MAX {
        return Err(DetectorModelError::Validation(format!(
            "name must be 1-{DETECTOR_MODEL_NAME_MAX} characters"
        )));
    }
    Ok(())
}

//! This crate provides the core logic for managing an AWS IoT Events
//! detector model declaratively:
//! - a typed, boundary-validated definition model
//! - translation to and from the remote API's request/response vocabulary
//! - a lifecycle controller driving create/read/update/delete/import
//!   against an injected remote client
//!

mod error;
mod lifecycle;
mod model;
mod remote;
mod translate;

// Re-exports for a small, focused public API
pub use error::{DetectorModelError, DetectorModelResult};
pub use lifecycle::{CreateOutcome, DetectorModelController, LifecyclePhase, ReadOutcome};
pub use model::{
    Definition, DetectorModel, EventRule, LifecycleEvents, ObservedModel, StateDefinition,
    DETECTOR_MODEL_NAME_MAX, INITIAL_STATE_NAME_MAX,
};
pub use remote::{
    CreateDetectorModelRequest, DefinitionPayload, DescribeDetectorModelResponse,
    DetectorModelClient, EventPayload, EventsPayload, IotEventsClient, RemoteCallError,
    RemoteCallResult, StatePayload, UpdateDetectorModelRequest,
};
pub use translate::{from_describe_response, to_create_request, to_update_request};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_model_parses_from_json() {
        let raw = r#"{
            "name": "detector-a",
            "definition": {
                "initial_state_name": "start",
                "states": [{ "name": "start" }]
            },
            "role_arn": "arn:aws:iam::123456789012:role/x"
        }"#;
        let model: DetectorModel = serde_json::from_str(raw).expect("should parse");
        assert_eq!(model.name, "detector-a");
        assert_eq!(model.definition.initial_state_name, "start");
        assert!(model.validate().is_ok());
    }
}

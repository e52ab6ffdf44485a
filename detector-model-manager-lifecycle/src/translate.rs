//! Mapping between the declared model and the remote API vocabulary.
//!
//! Both directions are total once validation has passed; a model is never
//! partially translated. Create and update share one definition encoder, so
//! the states collection is encoded in the same structured form on both
//! paths.

use crate::error::{DetectorModelError, DetectorModelResult};
use crate::model::{
    Definition, DetectorModel, EventRule, LifecycleEvents, ObservedModel, StateDefinition,
};
use crate::remote::{
    CreateDetectorModelRequest, DefinitionPayload, DescribeDetectorModelResponse, EventPayload,
    EventsPayload, StatePayload, UpdateDetectorModelRequest,
};

/// Encode a declared model as a create request. Validates first; no request
/// is produced from a malformed model.
pub fn to_create_request(model: &DetectorModel) -> DetectorModelResult<CreateDetectorModelRequest> {
    model.validate()?;
    Ok(CreateDetectorModelRequest {
        name: model.name.clone(),
        definition: encode_definition(&model.definition),
        role_arn: model.role_arn.clone(),
        description: model.description.clone(),
        key: model.key.clone(),
    })
}

/// Encode a declared model as an update request, validating exactly as the
/// create path does. The immutable name only addresses the resource; an
/// absent description leaves the remote description unchanged.
pub fn to_update_request(model: &DetectorModel) -> DetectorModelResult<UpdateDetectorModelRequest> {
    model.validate()?;
    Ok(UpdateDetectorModelRequest {
        name: model.name.clone(),
        definition: encode_definition(&model.definition),
        role_arn: model.role_arn.clone(),
        description: model.description.clone(),
    })
}

/// Surface what the remote service reported, in model vocabulary.
///
/// A definition read back with no states or no initial state is a
/// validation failure, never a valid observation.
pub fn from_describe_response(
    response: DescribeDetectorModelResponse,
) -> DetectorModelResult<ObservedModel> {
    let DescribeDetectorModelResponse {
        name,
        definition,
        role_arn,
        description,
        key,
        version,
        status,
    } = response;

    if definition.initial_state_name.is_empty() {
        return Err(DetectorModelError::Validation(format!(
            "remote definition for '{name}' has no initial state"
        )));
    }
    if definition.states.is_empty() {
        return Err(DetectorModelError::Validation(format!(
            "remote definition for '{name}' contains no states"
        )));
    }

    Ok(ObservedModel {
        name,
        definition: decode_definition(definition),
        description,
        key,
        role_arn,
        version,
        status,
    })
}

fn encode_definition(definition: &Definition) -> DefinitionPayload {
    DefinitionPayload {
        initial_state_name: definition.initial_state_name.clone(),
        states: definition.states.iter().map(encode_state).collect(),
    }
}

fn encode_state(state: &StateDefinition) -> StatePayload {
    StatePayload {
        state_name: state.name.clone(),
        on_input: state.on_input.as_ref().map(encode_events),
        on_enter: state.on_enter.as_ref().map(encode_events),
        on_exit: state.on_exit.as_ref().map(encode_events),
    }
}

fn encode_events(events: &LifecycleEvents) -> EventsPayload {
    EventsPayload {
        events: events
            .events
            .iter()
            .map(|rule| EventPayload {
                event_name: rule.name.clone(),
                condition: rule.condition.clone(),
            })
            .collect(),
    }
}

fn decode_definition(definition: DefinitionPayload) -> Definition {
    Definition {
        initial_state_name: definition.initial_state_name,
        states: definition.states.into_iter().map(decode_state).collect(),
    }
}

fn decode_state(state: StatePayload) -> StateDefinition {
    StateDefinition {
        name: state.state_name,
        on_input: state.on_input.map(decode_events),
        on_enter: state.on_enter.map(decode_events),
        on_exit: state.on_exit.map(decode_events),
    }
}

fn decode_events(events: EventsPayload) -> LifecycleEvents {
    LifecycleEvents {
        events: events
            .events
            .into_iter()
            .map(|event| EventRule {
                name: event.event_name,
                condition: event.condition,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_model() -> DetectorModel {
        DetectorModel {
            name: "detector-a".to_string(),
            definition: Definition {
                initial_state_name: "start".to_string(),
                states: vec![
                    StateDefinition {
                        name: "start".to_string(),
                        on_input: Some(LifecycleEvents {
                            events: vec![EventRule {
                                name: "over_threshold".to_string(),
                                condition: Some("$input.telemetry.value > 10".to_string()),
                            }],
                        }),
                        on_enter: None,
                        on_exit: None,
                    },
                    StateDefinition::named("done"),
                ],
            },
            description: Some("threshold detector".to_string()),
            key: Some("deviceId".to_string()),
            role_arn: "arn:aws:iam::123456789012:role/x".to_string(),
        }
    }

    #[test]
    fn test_create_request_carries_all_declared_fields() {
        let request = to_create_request(&sample_model()).expect("should translate");
        assert_eq!(request.name, "detector-a");
        assert_eq!(request.definition.initial_state_name, "start");
        assert_eq!(request.definition.states.len(), 2);
        assert_eq!(request.description.as_deref(), Some("threshold detector"));
        assert_eq!(request.key.as_deref(), Some("deviceId"));
        assert_eq!(request.role_arn, "arn:aws:iam::123456789012:role/x");
    }

    #[test]
    fn test_create_and_update_encode_the_definition_identically() {
        let model = sample_model();
        let create = to_create_request(&model).expect("create request");
        let update = to_update_request(&model).expect("update request");
        assert_eq!(create.definition, update.definition);
    }

    #[test]
    fn test_update_without_description_leaves_it_unchanged() {
        let mut model = sample_model();
        model.description = None;
        let request = to_update_request(&model).expect("update request");
        assert!(request.description.is_none());
    }

    #[test]
    fn test_translation_fails_before_encoding_a_malformed_model() {
        let mut model = sample_model();
        model.definition.states.clear();
        let err = to_create_request(&model).expect_err("must fail validation");
        assert!(matches!(err, DetectorModelError::Validation(_)));
        let err = to_update_request(&model).expect_err("must fail validation");
        assert!(matches!(err, DetectorModelError::Validation(_)));
    }

    #[test]
    fn test_describe_response_with_empty_states_is_rejected() {
        let response = DescribeDetectorModelResponse {
            name: "detector-a".to_string(),
            definition: DefinitionPayload {
                initial_state_name: "start".to_string(),
                states: vec![],
            },
            role_arn: None,
            description: None,
            key: None,
            version: None,
            status: None,
        };
        let err = from_describe_response(response).expect_err("empty states must fail");
        assert!(matches!(err, DetectorModelError::Validation(_)));
    }

    #[test]
    fn test_describe_response_round_trips_state_structure() {
        let model = sample_model();
        let request = to_create_request(&model).expect("request");
        let observed = from_describe_response(DescribeDetectorModelResponse {
            name: model.name.clone(),
            definition: request.definition,
            role_arn: Some(model.role_arn.clone()),
            description: model.description.clone(),
            key: model.key.clone(),
            version: Some("1".to_string()),
            status: Some("ACTIVE".to_string()),
        })
        .expect("observed model");
        assert_eq!(observed.definition, model.definition);
        assert_eq!(observed.role_arn.as_deref(), Some(model.role_arn.as_str()));
    }
}

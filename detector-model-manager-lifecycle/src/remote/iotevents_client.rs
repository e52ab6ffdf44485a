//! AWS IoT Events client adapter for the remote detector model contract.

use async_trait::async_trait;
use aws_sdk_iotevents::types;
use aws_sdk_iotevents::Client;

use crate::remote::{
    CreateDetectorModelRequest, DefinitionPayload, DescribeDetectorModelResponse,
    DetectorModelClient, EventPayload, EventsPayload, RemoteCallError, RemoteCallResult,
    StatePayload, UpdateDetectorModelRequest,
};

/// Thin wrapper over the IoT Events SDK client.
///
/// The controller receives this (or any other [`DetectorModelClient`]) as an
/// injected dependency; nothing here reaches for a process-wide handle.
pub struct IotEventsClient {
    client: Client,
}

impl IotEventsClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client from the standard credential provider chain.
    pub async fn from_default_chain() -> Self {
        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .load()
            .await;
        Self::new(Client::new(&config))
    }
}

#[async_trait]
impl DetectorModelClient for IotEventsClient {
    async fn create_detector_model(
        &self,
        request: CreateDetectorModelRequest,
    ) -> RemoteCallResult<()> {
        let definition = encode_definition(&request.definition)?;
        let mut call = self
            .client
            .create_detector_model()
            .detector_model_name(&request.name)
            .detector_model_definition(definition)
            .role_arn(&request.role_arn);
        if let Some(description) = &request.description {
            call = call.detector_model_description(description);
        }
        if let Some(key) = &request.key {
            call = call.key(key);
        }
        call.send().await.map_err(|err| {
            if let Some(service_err) = err.as_service_error() {
                return RemoteCallError::Service(format!(
                    "failed to create detector model '{}': {service_err}",
                    request.name
                ));
            }
            RemoteCallError::Transport(format!("{err:?}"))
        })?;
        Ok(())
    }

    async fn describe_detector_model(
        &self,
        name: &str,
    ) -> RemoteCallResult<DescribeDetectorModelResponse> {
        let output = self
            .client
            .describe_detector_model()
            .detector_model_name(name)
            .send()
            .await
            .map_err(|err| {
                if let Some(service_err) = err.as_service_error() {
                    if service_err.is_resource_not_found_exception() {
                        return RemoteCallError::NotFound;
                    }
                    return RemoteCallError::Service(format!(
                        "failed to describe detector model '{name}': {service_err}"
                    ));
                }
                RemoteCallError::Transport(format!("{err:?}"))
            })?;

        let detector_model = output.detector_model.ok_or_else(|| {
            RemoteCallError::Service(format!(
                "describe response for '{name}' did not include a detector model"
            ))
        })?;
        let definition = detector_model.detector_model_definition.ok_or_else(|| {
            RemoteCallError::Service(format!(
                "describe response for '{name}' did not include a definition"
            ))
        })?;

        let (model_name, role_arn, description, key, version, status) =
            match detector_model.detector_model_configuration {
                Some(configuration) => (
                    configuration.detector_model_name,
                    configuration.role_arn,
                    configuration.detector_model_description,
                    configuration.key,
                    configuration.detector_model_version,
                    configuration
                        .status
                        .map(|status| status.as_str().to_string()),
                ),
                None => (None, None, None, None, None, None),
            };

        Ok(DescribeDetectorModelResponse {
            name: model_name.unwrap_or_else(|| name.to_string()),
            definition: decode_definition(definition),
            role_arn,
            description,
            key,
            version,
            status,
        })
    }

    async fn update_detector_model(
        &self,
        request: UpdateDetectorModelRequest,
    ) -> RemoteCallResult<()> {
        let definition = encode_definition(&request.definition)?;
        let mut call = self
            .client
            .update_detector_model()
            .detector_model_name(&request.name)
            .detector_model_definition(definition)
            .role_arn(&request.role_arn);
        if let Some(description) = &request.description {
            call = call.detector_model_description(description);
        }
        call.send().await.map_err(|err| {
            if let Some(service_err) = err.as_service_error() {
                if service_err.is_resource_not_found_exception() {
                    return RemoteCallError::NotFound;
                }
                return RemoteCallError::Service(format!(
                    "failed to update detector model '{}': {service_err}",
                    request.name
                ));
            }
            RemoteCallError::Transport(format!("{err:?}"))
        })?;
        Ok(())
    }

    async fn delete_detector_model(&self, name: &str) -> RemoteCallResult<()> {
        self.client
            .delete_detector_model()
            .detector_model_name(name)
            .send()
            .await
            .map_err(|err| {
                if let Some(service_err) = err.as_service_error() {
                    if service_err.is_resource_not_found_exception() {
                        return RemoteCallError::NotFound;
                    }
                    return RemoteCallError::Service(format!(
                        "failed to delete detector model '{name}': {service_err}"
                    ));
                }
                RemoteCallError::Transport(format!("{err:?}"))
            })?;
        Ok(())
    }
}

fn encode_definition(
    definition: &DefinitionPayload,
) -> RemoteCallResult<types::DetectorModelDefinition> {
    let states = definition
        .states
        .iter()
        .map(encode_state)
        .collect::<RemoteCallResult<Vec<_>>>()?;
    types::DetectorModelDefinition::builder()
        .initial_state_name(&definition.initial_state_name)
        .set_states(Some(states))
        .build()
        .map_err(|err| {
            RemoteCallError::Service(format!("invalid detector model definition: {err}"))
        })
}

fn encode_state(state: &StatePayload) -> RemoteCallResult<types::State> {
    let mut builder = types::State::builder().state_name(&state.state_name);
    if let Some(on_input) = &state.on_input {
        builder = builder.on_input(
            types::OnInputLifecycle::builder()
                .set_events(Some(encode_events(on_input)?))
                .build(),
        );
    }
    if let Some(on_enter) = &state.on_enter {
        builder = builder.on_enter(
            types::OnEnterLifecycle::builder()
                .set_events(Some(encode_events(on_enter)?))
                .build(),
        );
    }
    if let Some(on_exit) = &state.on_exit {
        builder = builder.on_exit(
            types::OnExitLifecycle::builder()
                .set_events(Some(encode_events(on_exit)?))
                .build(),
        );
    }
    builder.build().map_err(|err| {
        RemoteCallError::Service(format!("invalid state '{}': {err}", state.state_name))
    })
}

fn encode_events(events: &EventsPayload) -> RemoteCallResult<Vec<types::Event>> {
    events
        .events
        .iter()
        .map(|event| {
            types::Event::builder()
                .event_name(&event.event_name)
                .set_condition(event.condition.clone())
                .build()
                .map_err(|err| {
                    RemoteCallError::Service(format!(
                        "invalid event '{}': {err}",
                        event.event_name
                    ))
                })
        })
        .collect()
}

fn decode_definition(definition: types::DetectorModelDefinition) -> DefinitionPayload {
    DefinitionPayload {
        initial_state_name: definition.initial_state_name,
        states: definition.states.into_iter().map(decode_state).collect(),
    }
}

fn decode_state(state: types::State) -> StatePayload {
    StatePayload {
        state_name: state.state_name,
        on_input: state
            .on_input
            .map(|lifecycle| decode_events(lifecycle.events)),
        on_enter: state
            .on_enter
            .map(|lifecycle| decode_events(lifecycle.events)),
        on_exit: state
            .on_exit
            .map(|lifecycle| decode_events(lifecycle.events)),
    }
}

fn decode_events(events: Option<Vec<types::Event>>) -> EventsPayload {
    EventsPayload {
        events: events
            .unwrap_or_default()
            .into_iter()
            .map(|event| EventPayload {
                event_name: event.event_name,
                condition: event.condition,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_payload() -> DefinitionPayload {
        DefinitionPayload {
            initial_state_name: "start".to_string(),
            states: vec![
                StatePayload {
                    state_name: "start".to_string(),
                    on_input: Some(EventsPayload {
                        events: vec![EventPayload {
                            event_name: "over_threshold".to_string(),
                            condition: Some("$input.telemetry.value > 10".to_string()),
                        }],
                    }),
                    on_enter: None,
                    on_exit: None,
                },
                StatePayload {
                    state_name: "done".to_string(),
                    on_input: None,
                    on_enter: None,
                    on_exit: None,
                },
            ],
        }
    }

    #[test]
    fn test_encode_definition_builds_sdk_shapes() {
        let definition = encode_definition(&sample_payload()).expect("payload should encode");
        assert_eq!(definition.initial_state_name(), "start");
        assert_eq!(definition.states().len(), 2);
        assert_eq!(definition.states()[0].state_name(), "start");
    }

    #[test]
    fn test_decode_reverses_encode() {
        let payload = sample_payload();
        let decoded = decode_definition(encode_definition(&payload).expect("encodes"));
        assert_eq!(decoded, payload);
    }
}

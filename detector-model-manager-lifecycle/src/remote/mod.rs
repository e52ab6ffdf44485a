//! Remote control-plane contract: request/response records and the client
//! trait the lifecycle controller is built on.
//!
//! The controller only ever talks to the remote service through
//! [`DetectorModelClient`]; the AWS-backed implementation lives in
//! [`IotEventsClient`]. Retry and backoff policy, if any, belong below this
//! boundary.

mod iotevents_client;

pub use iotevents_client::IotEventsClient;

use async_trait::async_trait;
use thiserror::Error;

/// Failure classification for a single remote call.
#[derive(Debug, Error)]
pub enum RemoteCallError {
    /// The named detector model does not exist remotely.
    #[error("detector model not found")]
    NotFound,
    /// The remote service rejected the call.
    #[error("remote service error: {0}")]
    Service(String),
    /// The call never completed: network, timeout, or credential failure.
    #[error("transport failure: {0}")]
    Transport(String),
}

pub type RemoteCallResult<T> = Result<T, RemoteCallError>;

/// Detector model definition as the remote API speaks it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionPayload {
    pub initial_state_name: String,
    pub states: Vec<StatePayload>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatePayload {
    pub state_name: String,
    pub on_input: Option<EventsPayload>,
    pub on_enter: Option<EventsPayload>,
    pub on_exit: Option<EventsPayload>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventsPayload {
    pub events: Vec<EventPayload>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventPayload {
    pub event_name: String,
    pub condition: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDetectorModelRequest {
    pub name: String,
    pub definition: DefinitionPayload,
    pub role_arn: String,
    pub description: Option<String>,
    pub key: Option<String>,
}

/// Update request. `name` only addresses the resource (it is immutable),
/// and an absent description means "leave unchanged".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateDetectorModelRequest {
    pub name: String,
    pub definition: DefinitionPayload,
    pub role_arn: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeDetectorModelResponse {
    pub name: String,
    pub definition: DefinitionPayload,
    pub role_arn: Option<String>,
    pub description: Option<String>,
    pub key: Option<String>,
    pub version: Option<String>,
    pub status: Option<String>,
}

/// The four remote operations, keyed by detector model name.
///
/// Implementations perform one network call per method and classify the
/// failure into [`RemoteCallError`]; they do not retry.
#[async_trait]
pub trait DetectorModelClient: Send + Sync {
    async fn create_detector_model(
        &self,
        request: CreateDetectorModelRequest,
    ) -> RemoteCallResult<()>;

    async fn describe_detector_model(
        &self,
        name: &str,
    ) -> RemoteCallResult<DescribeDetectorModelResponse>;

    async fn update_detector_model(
        &self,
        request: UpdateDetectorModelRequest,
    ) -> RemoteCallResult<()>;

    async fn delete_detector_model(&self, name: &str) -> RemoteCallResult<()>;
}

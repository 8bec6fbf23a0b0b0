//! Request types for the API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::payload::ResponsePayload;

/// Ask the daemon to raise an error and render it
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RaiseErrorRequest {
    /// HTTP status code to raise with
    pub status: u16,
    /// Payload handed to the body helper
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub response: Option<ResponsePayload>,
    /// Description used as default message or `error` field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Error kind type name, e.g. `NotFoundError`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

//! Generated error body shape

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::payload::ResponsePayload;

/// JSON error body produced when the caller does not supply its own object
///
/// Two shapes share this type:
/// - default: `{ "statusCode": 404, "message": "Not Found" }`
/// - payload: `{ "statusCode": 400, "message": <payload>, "error": "Bad Request" }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// HTTP status code
    pub status_code: u16,
    /// Description or caller payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub message: Option<Value>,
    /// Description, present when `message` carries a caller payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Default shape: status code plus description
    #[must_use]
    pub fn new(status_code: u16, description: Option<&str>) -> Self {
        Self {
            status_code,
            message: description.map(|d| Value::String(d.to_string())),
            error: None,
        }
    }

    /// Payload shape: the caller's value as message, description as error
    #[must_use]
    pub fn with_payload(status_code: u16, payload: Value, description: Option<&str>) -> Self {
        Self {
            status_code,
            message: Some(payload),
            error: description.map(str::to_string),
        }
    }
}

impl From<ErrorBody> for Map<String, Value> {
    fn from(body: ErrorBody) -> Self {
        let mut map = Map::new();
        map.insert("statusCode".to_string(), Value::from(body.status_code));
        if let Some(message) = body.message {
            map.insert("message".to_string(), message);
        }
        if let Some(error) = body.error {
            map.insert("error".to_string(), Value::String(error));
        }
        map
    }
}

impl From<ErrorBody> for ResponsePayload {
    fn from(body: ErrorBody) -> Self {
        ResponsePayload::Structured(body.into())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_default_shape() {
        let body = ErrorBody::new(404, Some("Not Found"));
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"statusCode": 404, "message": "Not Found"})
        );
    }

    #[test]
    fn test_missing_description_is_omitted() {
        let map: Map<String, Value> = ErrorBody::new(500, None).into();
        assert_eq!(Value::Object(map), json!({"statusCode": 500}));
    }

    #[test]
    fn test_payload_shape() {
        let map: Map<String, Value> =
            ErrorBody::with_payload(400, json!("bad input"), Some("Bad Request")).into();

        assert_eq!(map.len(), 3);
        assert_eq!(map["statusCode"], json!(400));
        assert_eq!(map["message"], json!("bad input"));
        assert_eq!(map["error"], json!("Bad Request"));
    }

    #[test]
    fn test_decode_client_side() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"statusCode":409,"message":["a","b"],"error":"Conflict"}"#)
                .unwrap();
        assert_eq!(body.status_code, 409);
        assert_eq!(body.message, Some(json!(["a", "b"])));
        assert_eq!(body.error.as_deref(), Some("Conflict"));
    }
}

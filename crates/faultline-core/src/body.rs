//! Response body construction

use faultline_api::{ErrorBody, ResponsePayload};

/// Build the JSON body for an error response
///
/// - no payload, or a falsy one: `{ statusCode, message: description }`
/// - a JSON object: returned unchanged
/// - anything else, arrays included: `{ statusCode, message: payload, error: description }`
#[must_use]
pub fn create_body(
    object_or_error: Option<ResponsePayload>,
    description: Option<&str>,
    status_code: u16,
) -> ResponsePayload {
    match object_or_error {
        None => ErrorBody::new(status_code, description).into(),
        Some(payload) if payload.is_falsy() => ErrorBody::new(status_code, description).into(),
        Some(payload) if payload.is_passthrough() => payload,
        Some(payload) => ErrorBody::with_payload(status_code, payload.into(), description).into(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn to_json(payload: ResponsePayload) -> Value {
        payload.into()
    }

    #[test]
    fn test_absent_payload_uses_description() {
        let body = create_body(None, Some("Not Found"), 404);
        assert_eq!(to_json(body), json!({"statusCode": 404, "message": "Not Found"}));
    }

    #[test]
    fn test_falsy_payloads_use_description() {
        for falsy in [json!(""), json!(0), json!(false), json!(null)] {
            let body = create_body(Some(falsy.into()), Some("Bad Request"), 400);
            assert_eq!(
                to_json(body),
                json!({"statusCode": 400, "message": "Bad Request"})
            );
        }
    }

    #[test]
    fn test_object_passes_through() {
        let body = create_body(Some(json!({"foo": 1}).into()), Some("ignored"), 400);
        assert_eq!(to_json(body), json!({"foo": 1}));
    }

    #[test]
    fn test_object_held_as_other_passes_through() {
        let body = create_body(
            Some(ResponsePayload::Other(json!({"foo": 1}))),
            Some("ignored"),
            400,
        );
        assert_eq!(to_json(body), json!({"foo": 1}));
    }

    #[test]
    fn test_string_becomes_message() {
        let body = create_body(Some("bad input".into()), Some("Bad Request"), 400);
        assert_eq!(
            to_json(body),
            json!({"statusCode": 400, "message": "bad input", "error": "Bad Request"})
        );
    }

    #[test]
    fn test_array_is_not_passed_through() {
        let body = create_body(Some(json!([1, 2, 3]).into()), Some("Bad Request"), 400);
        assert_eq!(
            to_json(body),
            json!({"statusCode": 400, "message": [1, 2, 3], "error": "Bad Request"})
        );
    }

    #[test]
    fn test_empty_array_is_truthy() {
        let body = create_body(Some(json!([]).into()), None, 422);
        assert_eq!(to_json(body), json!({"statusCode": 422, "message": []}));
    }

    #[test]
    fn test_missing_description() {
        assert_eq!(to_json(create_body(None, None, 500)), json!({"statusCode": 500}));
    }
}

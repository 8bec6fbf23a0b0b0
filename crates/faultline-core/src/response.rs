//! Conversion of errors into HTTP responses

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use faultline_api::ErrorBody;
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::error::HttpError;

impl HttpError {
    /// Status to respond with
    ///
    /// Falls back to 500 when the stored status is not a valid HTTP status.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status()).unwrap_or_else(|_| {
            warn!(status = self.status(), "invalid HTTP status, responding with 500");
            StatusCode::INTERNAL_SERVER_ERROR
        })
    }

    /// JSON body to respond with
    ///
    /// Object payloads are sent as-is; anything else is wrapped as
    /// `{ statusCode, message: payload }`.
    #[must_use]
    pub fn body(&self) -> Value {
        if let Some(map) = self.response().as_object() {
            return Value::Object(map.clone());
        }
        let body = ErrorBody {
            status_code: self.status(),
            message: Some(self.response().clone().into()),
            error: None,
        };
        Value::Object(body.into())
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(
                status = self.status(),
                name = self.name(),
                message = self.message(),
                cause = ?self.cause(),
                "request failed"
            );
        } else {
            debug!(
                status = self.status(),
                name = self.name(),
                message = self.message(),
                "request rejected"
            );
        }

        (status, Json(self.body())).into_response()
    }
}

//! Error preview endpoints
//!
//! Every handler here answers with an `HttpError`, rendered the same way an
//! application handler's error would be.

use axum::{
    Json,
    extract::{Path, rejection::JsonRejection},
    http::{Method, StatusCode, Uri},
};
use faultline_api::requests::RaiseErrorRequest;
use faultline_core::{ErrorKind, HttpError, create_body};
use tracing::{debug, instrument};

/// Raise the error associated with a status code
///
/// Built-in kinds use their default body. Other statuses raise a generic
/// error described by the status' reason phrase.
#[utoipa::path(
    get,
    path = "/errors/{status}",
    params(("status" = u16, Path, description = "HTTP status code to raise")),
    responses(
        (status = 404, description = "Error body for the requested status", body = faultline_api::ErrorBody),
        (status = 400, description = "Status is not a number", body = faultline_api::ErrorBody),
    )
)]
#[instrument]
pub async fn raise_status(Path(raw): Path<String>) -> HttpError {
    let Ok(status) = raw.parse::<u16>() else {
        return HttpError::bad_request(format!("invalid status code: {raw}"));
    };

    if let Some(kind) = ErrorKind::from_status(status) {
        debug!(%kind, "raising built-in error");
        return HttpError::from_kind(kind, None, None);
    }

    let kind = ErrorKind::Http;
    let description = StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .map_or_else(|| kind.default_phrase().into_owned(), str::to_string);
    HttpError::with_kind(kind, create_body(None, Some(&description), status), status)
}

/// Raise an error built from the request
#[utoipa::path(
    post,
    path = "/errors",
    request_body = RaiseErrorRequest,
    responses((status = 400, description = "Error body built from the request", body = faultline_api::ErrorBody))
)]
pub async fn raise(payload: Result<Json<RaiseErrorRequest>, JsonRejection>) -> HttpError {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let kind =
                ErrorKind::from_status(rejection.status().as_u16()).unwrap_or(ErrorKind::BadRequest);
            return HttpError::from_kind(kind, Some(rejection.body_text().into()), None);
        }
    };

    let kind = req
        .kind
        .as_deref()
        .map_or(ErrorKind::Http, ErrorKind::from_name);
    debug!(status = req.status, %kind, "raising requested error");

    let body = create_body(req.response, req.description.as_deref(), req.status);
    HttpError::with_kind(kind, body, req.status)
}

/// Fallback for unknown routes
pub async fn route_not_found(method: Method, uri: Uri) -> HttpError {
    HttpError::not_found(format!("Cannot {method} {}", uri.path()))
}

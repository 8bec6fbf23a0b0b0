//! HTTP error type

use std::sync::Arc;

use faultline_api::ResponsePayload;
use thiserror::Error;

use crate::body::create_body;
use crate::kind::ErrorKind;

/// Shared source error attached to an `HttpError`
pub type Cause = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// An error to be reported as an HTTP response
///
/// `message` and `name` are derived once when the error is created. The
/// payload cannot be changed afterwards, so they never go stale.
#[derive(Error, Debug, Clone)]
#[error("{message}")]
pub struct HttpError {
    kind: ErrorKind,
    response: ResponsePayload,
    status: u16,
    message: String,
    #[source]
    cause: Option<Cause>,
}

impl HttpError {
    /// Create a generic HTTP error
    ///
    /// ```
    /// use faultline_core::HttpError;
    ///
    /// let err = HttpError::new("Forbidden resource", 403);
    /// assert_eq!(err.message(), "Forbidden resource");
    /// assert_eq!(err.name(), "HttpError");
    /// ```
    pub fn new(response: impl Into<ResponsePayload>, status: u16) -> Self {
        Self::with_kind(ErrorKind::Http, response, status)
    }

    /// Create an error of the given kind
    ///
    /// The status is taken as given, even when it differs from the kind's
    /// own status.
    pub fn with_kind(kind: ErrorKind, response: impl Into<ResponsePayload>, status: u16) -> Self {
        let response = response.into();
        let message = response
            .message_text()
            .map_or_else(|| kind.default_phrase().into_owned(), str::to_string);

        Self {
            kind,
            response,
            status,
            message,
            cause: None,
        }
    }

    /// Create an error of a built-in kind with a generated body
    ///
    /// The body is `create_body(object_or_error, description, status)`,
    /// where `description` defaults to the kind's reason phrase and
    /// `status` is the kind's status (500 for kinds without one).
    pub fn from_kind(
        kind: ErrorKind,
        object_or_error: Option<ResponsePayload>,
        description: Option<&str>,
    ) -> Self {
        let status = kind.status().unwrap_or(500);
        let description = description.or_else(|| kind.description());
        let body = create_body(object_or_error, description, status);
        Self::with_kind(kind, body, status)
    }

    /// 400 with the payload as message
    pub fn bad_request(object_or_error: impl Into<ResponsePayload>) -> Self {
        Self::from_kind(ErrorKind::BadRequest, Some(object_or_error.into()), None)
    }

    /// 401 with the payload as message
    pub fn unauthorized(object_or_error: impl Into<ResponsePayload>) -> Self {
        Self::from_kind(ErrorKind::Unauthorized, Some(object_or_error.into()), None)
    }

    /// 403 with the payload as message
    pub fn forbidden(object_or_error: impl Into<ResponsePayload>) -> Self {
        Self::from_kind(ErrorKind::Forbidden, Some(object_or_error.into()), None)
    }

    /// 404 with the payload as message
    pub fn not_found(object_or_error: impl Into<ResponsePayload>) -> Self {
        Self::from_kind(ErrorKind::NotFound, Some(object_or_error.into()), None)
    }

    /// 409 with the payload as message
    pub fn conflict(object_or_error: impl Into<ResponsePayload>) -> Self {
        Self::from_kind(ErrorKind::Conflict, Some(object_or_error.into()), None)
    }

    /// 500 with the payload as message
    pub fn internal(object_or_error: impl Into<ResponsePayload>) -> Self {
        Self::from_kind(
            ErrorKind::InternalServerError,
            Some(object_or_error.into()),
            None,
        )
    }

    /// Attach the error that caused this one
    #[must_use]
    pub fn with_cause(mut self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.cause = Some(Arc::new(cause));
        self
    }

    /// Payload exactly as supplied at construction
    #[must_use]
    pub fn response(&self) -> &ResponsePayload {
        &self.response
    }

    /// Status exactly as supplied at construction
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Type name of the error's kind
    #[must_use]
    pub fn name(&self) -> &str {
        self.kind.name()
    }

    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    #[must_use]
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }
}

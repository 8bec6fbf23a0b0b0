//! Error kinds
//!
//! Each kind carries the type name it is reported under and, for the
//! built-in kinds, the status code and reason phrase it stands for.

use std::borrow::Cow;
use std::fmt;

use axum::http::StatusCode;

use crate::phrase::split_type_name;

/// Kind of an HTTP error
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Generic error with no fixed status
    #[default]
    Http,
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    MethodNotAllowed,
    NotAcceptable,
    RequestTimeout,
    Conflict,
    Gone,
    PreconditionFailed,
    PayloadTooLarge,
    UnsupportedMediaType,
    ImATeapot,
    MisdirectedRequest,
    UnprocessableEntity,
    InternalServerError,
    NotImplemented,
    BadGateway,
    ServiceUnavailable,
    GatewayTimeout,
    HttpVersionNotSupported,
    /// Application-defined kind, identified by its type name
    Custom(Cow<'static, str>),
}

/// Built-in kinds with a fixed status, in status order
const BUILTIN: [ErrorKind; 21] = [
    ErrorKind::BadRequest,
    ErrorKind::Unauthorized,
    ErrorKind::Forbidden,
    ErrorKind::NotFound,
    ErrorKind::MethodNotAllowed,
    ErrorKind::NotAcceptable,
    ErrorKind::RequestTimeout,
    ErrorKind::Conflict,
    ErrorKind::Gone,
    ErrorKind::PreconditionFailed,
    ErrorKind::PayloadTooLarge,
    ErrorKind::UnsupportedMediaType,
    ErrorKind::ImATeapot,
    ErrorKind::MisdirectedRequest,
    ErrorKind::UnprocessableEntity,
    ErrorKind::InternalServerError,
    ErrorKind::NotImplemented,
    ErrorKind::BadGateway,
    ErrorKind::ServiceUnavailable,
    ErrorKind::GatewayTimeout,
    ErrorKind::HttpVersionNotSupported,
];

impl ErrorKind {
    /// Custom kind with the given type name
    #[must_use]
    pub fn custom(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Custom(name.into())
    }

    /// Type name the kind is reported under
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Http => "HttpError",
            Self::BadRequest => "BadRequestError",
            Self::Unauthorized => "UnauthorizedError",
            Self::Forbidden => "ForbiddenError",
            Self::NotFound => "NotFoundError",
            Self::MethodNotAllowed => "MethodNotAllowedError",
            Self::NotAcceptable => "NotAcceptableError",
            Self::RequestTimeout => "RequestTimeoutError",
            Self::Conflict => "ConflictError",
            Self::Gone => "GoneError",
            Self::PreconditionFailed => "PreconditionFailedError",
            Self::PayloadTooLarge => "PayloadTooLargeError",
            Self::UnsupportedMediaType => "UnsupportedMediaTypeError",
            Self::ImATeapot => "ImATeapotError",
            Self::MisdirectedRequest => "MisdirectedRequestError",
            Self::UnprocessableEntity => "UnprocessableEntityError",
            Self::InternalServerError => "InternalServerError",
            Self::NotImplemented => "NotImplementedError",
            Self::BadGateway => "BadGatewayError",
            Self::ServiceUnavailable => "ServiceUnavailableError",
            Self::GatewayTimeout => "GatewayTimeoutError",
            Self::HttpVersionNotSupported => "HttpVersionNotSupportedError",
            Self::Custom(name) => name.as_ref(),
        }
    }

    /// Message used when the response payload carries no text
    ///
    /// This is the type name broken into words, e.g. `Not Found Error`.
    /// Only custom kinds split their name at runtime.
    #[must_use]
    pub fn default_phrase(&self) -> Cow<'static, str> {
        let phrase = match self {
            Self::Http => "Http Error",
            Self::BadRequest => "Bad Request Error",
            Self::Unauthorized => "Unauthorized Error",
            Self::Forbidden => "Forbidden Error",
            Self::NotFound => "Not Found Error",
            Self::MethodNotAllowed => "Method Not Allowed Error",
            Self::NotAcceptable => "Not Acceptable Error",
            Self::RequestTimeout => "Request Timeout Error",
            Self::Conflict => "Conflict Error",
            Self::Gone => "Gone Error",
            Self::PreconditionFailed => "Precondition Failed Error",
            Self::PayloadTooLarge => "Payload Too Large Error",
            Self::UnsupportedMediaType => "Unsupported Media Type Error",
            Self::ImATeapot => "Im Teapot Error",
            Self::MisdirectedRequest => "Misdirected Request Error",
            Self::UnprocessableEntity => "Unprocessable Entity Error",
            Self::InternalServerError => "Internal Server Error",
            Self::NotImplemented => "Not Implemented Error",
            Self::BadGateway => "Bad Gateway Error",
            Self::ServiceUnavailable => "Service Unavailable Error",
            Self::GatewayTimeout => "Gateway Timeout Error",
            Self::HttpVersionNotSupported => "Http Version Not Supported Error",
            Self::Custom(name) => return Cow::Owned(split_type_name(name)),
        };
        Cow::Borrowed(phrase)
    }

    /// Status code of a built-in kind
    ///
    /// `None` for the generic and custom kinds.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        let status = match self {
            Self::Http | Self::Custom(_) => return None,
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::NotAcceptable => StatusCode::NOT_ACCEPTABLE,
            Self::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
            Self::Conflict => StatusCode::CONFLICT,
            Self::Gone => StatusCode::GONE,
            Self::PreconditionFailed => StatusCode::PRECONDITION_FAILED,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::ImATeapot => StatusCode::IM_A_TEAPOT,
            Self::MisdirectedRequest => StatusCode::MISDIRECTED_REQUEST,
            Self::UnprocessableEntity => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotImplemented => StatusCode::NOT_IMPLEMENTED,
            Self::BadGateway => StatusCode::BAD_GATEWAY,
            Self::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::GatewayTimeout => StatusCode::GATEWAY_TIMEOUT,
            Self::HttpVersionNotSupported => StatusCode::HTTP_VERSION_NOT_SUPPORTED,
        };
        Some(status.as_u16())
    }

    /// Default body description of a built-in kind, e.g. `Not Found`
    #[must_use]
    pub fn description(&self) -> Option<&'static str> {
        let status = StatusCode::from_u16(self.status()?).ok()?;
        status.canonical_reason()
    }

    /// Built-in kind for a status code
    #[must_use]
    pub fn from_status(status: u16) -> Option<Self> {
        BUILTIN.into_iter().find(|kind| kind.status() == Some(status))
    }

    /// Kind for a type name, falling back to a custom kind
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name == Self::Http.name() {
            return Self::Http;
        }
        BUILTIN
            .into_iter()
            .find(|kind| kind.name() == name)
            .unwrap_or_else(|| Self::Custom(Cow::Owned(name.to_string())))
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! faultline-core: HTTP error type and body shaping
//!
//! Implements `HttpError`, the catalogue of built-in `ErrorKind`s, the
//! `create_body` helper and the conversion of errors into axum responses.

pub mod body;
pub mod error;
pub mod kind;
pub mod phrase;
pub mod response;

pub use body::create_body;
pub use error::HttpError;
pub use faultline_api::{ErrorBody, ResponsePayload};
pub use kind::ErrorKind;
pub use phrase::split_type_name;

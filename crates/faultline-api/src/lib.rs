//! faultline-api: Shared wire types
//!
//! Contains the error payload and body shapes plus request/response types
//! used by the core error type and the daemon.

pub mod body;
pub mod payload;
pub mod requests;
pub mod responses;

pub use body::ErrorBody;
pub use payload::ResponsePayload;

//! API route handlers

use utoipa::OpenApi;

pub mod errors;
pub mod system;

/// OpenAPI description of the daemon
#[derive(OpenApi)]
#[openapi(
    paths(system::health, errors::raise_status, errors::raise),
    components(schemas(
        faultline_api::ErrorBody,
        faultline_api::requests::RaiseErrorRequest,
        faultline_api::responses::HealthResponse,
    ))
)]
pub struct ApiDoc;

//! HTTP router configuration

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::{errors, system};

/// Create the application router
pub fn create_router() -> Router {
    Router::new()
        // System endpoints
        .route("/health", get(system::health))
        .route("/openapi.json", get(system::openapi))
        // Error previews
        .route("/errors", post(errors::raise))
        .route("/errors/{status}", get(errors::raise_status))
        .fallback(errors::route_not_found)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
        response::Response,
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;

    async fn send(request: Request<Body>) -> Response {
        create_router().oneshot(request).await.unwrap()
    }

    async fn read_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_unknown_route_uses_fallback() {
        let response = send(Request::get("/nope").body(Body::empty()).unwrap()).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            read_json(response).await,
            json!({"statusCode": 404, "message": "Cannot GET /nope", "error": "Not Found"})
        );
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let request = Request::post("/errors")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"status\": "))
            .unwrap();
        let response = send(request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert_eq!(body["statusCode"], json!(400));
        assert_eq!(body["error"], json!("Bad Request"));
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn test_missing_content_type_is_unsupported_media_type() {
        let request = Request::post("/errors")
            .body(Body::from(r#"{"status": 400}"#))
            .unwrap();
        let response = send(request).await;

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        let body = read_json(response).await;
        assert_eq!(body["statusCode"], json!(415));
        assert_eq!(body["error"], json!("Unsupported Media Type"));
    }

    #[tokio::test]
    async fn test_post_errors_round_trip() {
        let request = Request::post("/errors")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"status": 400, "response": "bad input", "description": "Bad Request"}"#,
            ))
            .unwrap();
        let response = send(request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            read_json(response).await,
            json!({"statusCode": 400, "message": "bad input", "error": "Bad Request"})
        );
    }

    #[tokio::test]
    async fn test_get_errors_by_status() {
        let response = send(Request::get("/errors/503").body(Body::empty()).unwrap()).await;

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            read_json(response).await,
            json!({"statusCode": 503, "message": "Service Unavailable"})
        );
    }

    #[tokio::test]
    async fn test_openapi_and_health_routes() {
        let response = send(Request::get("/health").body(Body::empty()).unwrap()).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await, json!({"status": "ok"}));

        let response = send(Request::get("/openapi.json").body(Body::empty()).unwrap()).await;
        assert_eq!(response.status(), StatusCode::OK);
        let doc = read_json(response).await;
        assert!(doc["paths"]["/errors/{status}"].is_object());
        assert!(doc["components"]["schemas"]["ErrorBody"].is_object());
    }
}

use axum::{
    body::Body,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::any::Any;

use super::ErrorResponse;

/// Handler for unmatched routes.
///
/// Use as the router's fallback handler.
pub async fn not_found() -> Response {
    let body = Json(ErrorResponse::new("Route not found"));

    (StatusCode::NOT_FOUND, body).into_response()
}

/// Turn an uncaught handler panic into a 500 JSON response.
///
/// Wired into `tower_http::catch_panic::CatchPanicLayer` by
/// [`crate::server::create_router`].
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!("Handler panicked: {}", detail);

    let body = ErrorResponse::new("Something broke!").with_details(detail);
    let json = serde_json::to_string(&body)
        .unwrap_or_else(|_| r#"{"error":"Something broke!"}"#.to_string());

    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

//! Fallback handlers shared by all APIs.

use super::ErrorResponse;
use axum::{Json, http::StatusCode, http::Uri, response::IntoResponse};

/// Fallback handler for unmatched routes.
///
/// Wired into the router by `create_router` so unknown paths get the
/// standard error response shape instead of an empty 404.
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    tracing::debug!("No route matched: {}", uri);
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new(format!("No route found for {}", uri))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_not_found_returns_standard_body() {
        let app = Router::new().fallback(not_found);

        let request = axum::http::Request::builder()
            .uri("/does-not-exist")
            .body(axum::body::Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["message"].as_str().unwrap().contains("/does-not-exist"));
    }
}

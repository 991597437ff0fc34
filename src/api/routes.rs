//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{health, root, AppState};

/// Create the API router.
///
/// Exactly two routes; anything else is a 404.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Liveness banner
        .route("/", get(root))
        // Health report with store connectivity
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::store::{MockStore, StoreHandle};

    fn test_router(store: MockStore) -> Router {
        create_router(AppState::new(StoreHandle::mock(store)))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn root_endpoint_returns_running_message() {
        let app = test_router(MockStore::healthy());

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"message": "ML Service is running"})
        );
    }

    #[tokio::test]
    async fn health_endpoint_reports_connected_store() {
        let app = test_router(MockStore::healthy());

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"status": "ok", "redis": "connected"})
        );
    }

    #[tokio::test]
    async fn health_endpoint_stays_200_when_store_is_down() {
        let app = test_router(MockStore::unreachable());

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"status": "ok", "redis": "disconnected"})
        );
    }

    #[tokio::test]
    async fn root_endpoint_ignores_store_state() {
        let app = test_router(MockStore::unreachable());

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"message": "ML Service is running"})
        );
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let app = test_router(MockStore::healthy());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

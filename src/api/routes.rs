//! API Routes
//!
//! Configures the Axum router with all lookup endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    class_handler, event_type_handler, health_handler, invalidate_handler, job_handler,
    stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /classes?crm=` - ALIADA class of a CRM class
/// - `GET /event-types?crm=` - ALIADA class of a CRM event type
/// - `GET /jobs/:id` - Job configuration
/// - `DELETE /jobs/:id` - Drop a cached job configuration
/// - `GET /stats` - Job cache statistics
/// - `GET /health` - Health check endpoint
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/classes", get(class_handler))
        .route("/event-types", get(event_type_handler))
        .route("/jobs/:id", get(job_handler).delete(invalidate_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    use crate::datasource::{MemJobRepository, MemRdfStore};
    use crate::lookup::DatasourceCache;

    fn create_test_app() -> Router {
        let cache = DatasourceCache::new(
            Arc::new(MemRdfStore::new()),
            Arc::new(MemJobRepository::new()),
            10,
        )
        .unwrap();
        create_router(AppState::new(cache))
    }

    async fn status_of(uri: &str) -> StatusCode {
        create_test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        assert_eq!(status_of("/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_stats_endpoint() {
        assert_eq!(status_of("/stats").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_class_endpoint() {
        assert_eq!(status_of("/classes?crm=E22").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_class_endpoint_missing_query() {
        assert_eq!(status_of("/classes").await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_job_not_found() {
        assert_eq!(status_of("/jobs/99").await, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_job_id_not_numeric() {
        assert_eq!(status_of("/jobs/abc").await, StatusCode::BAD_REQUEST);
    }
}

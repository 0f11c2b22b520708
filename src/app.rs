use std::sync::Arc;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::core::error::AppError;
use crate::core::middleware;
use crate::features::categories::{routes as categories_routes, CategoryService};
use crate::features::events::{routes as events_routes, EventService};
use crate::modules::store::RecordStore;

/// Services shared by the route handlers, all backed by one record store
#[derive(Clone)]
pub struct AppServices {
    pub categories: Arc<CategoryService>,
    pub events: Arc<EventService>,
}

impl AppServices {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            categories: Arc::new(CategoryService::new(Arc::clone(&store))),
            events: Arc::new(EventService::new(store)),
        }
    }
}

async fn health_check() -> axum::http::StatusCode {
    axum::http::StatusCode::OK
}

async fn route_not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

/// Build the API router with tracing, request IDs and CORS applied
pub fn build_router(services: AppServices, cors_allowed_origins: Vec<String>) -> Router {
    Router::new()
        .merge(categories_routes::routes(services.categories))
        .merge(events_routes::routes(services.events))
        .route("/health", axum::routing::get(health_check))
        .fallback(route_not_found)
        .layer(
            ServiceBuilder::new()
                // Generate X-Request-Id using UUID v7 (or use client-provided one)
                .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(middleware::MakeSpanWithRequestId)
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(middleware::cors_layer(cors_allowed_origins)),
        )
}

#[cfg(test)]
mod tests {
    use crate::shared::test_helpers::{test_server, test_store};
    use axum::http::{HeaderName, HeaderValue};
    use serde_json::Value;

    #[tokio::test]
    async fn test_health_check() {
        let server = test_server(test_store());
        server.get("/health").await.assert_status_ok();
    }

    #[tokio::test]
    async fn test_unknown_route_uses_error_envelope() {
        let server = test_server(test_store());

        let response = server.get("/products").await;
        response.assert_status_not_found();
        let body: Value = response.json();
        assert_eq!(body["error"], "Route not found");
    }

    #[tokio::test]
    async fn test_response_carries_request_id() {
        let server = test_server(test_store());

        let response = server.get("/categories").await;
        let request_id = response.header("x-request-id");
        assert!(!request_id.is_empty());
    }

    #[tokio::test]
    async fn test_client_request_id_is_propagated() {
        let server = test_server(test_store());

        let response = server
            .get("/categories")
            .add_header(
                HeaderName::from_static("x-request-id"),
                HeaderValue::from_static("client-supplied-id"),
            )
            .await;
        assert_eq!(response.header("x-request-id"), "client-supplied-id");
    }
}

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::events::handlers;
use crate::features::events::services::EventService;

/// Create routes for the events feature
pub fn routes(service: Arc<EventService>) -> Router {
    Router::new()
        .route("/events", get(handlers::list_events))
        .route("/events/{category_code}", get(handlers::list_events_by_category))
        .with_state(service)
}

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::features::events::dtos::{EventListDto, EventResponseDto};
use crate::features::events::services::EventService;
use crate::shared::types::ErrorBody;

/// List all events
#[utoipa::path(
    get,
    path = "/events",
    responses(
        (status = 200, description = "List of events", body = EventListDto),
    ),
    tag = "events"
)]
pub async fn list_events(State(service): State<Arc<EventService>>) -> Result<Json<EventListDto>> {
    let events = service.list().await?;
    Ok(Json(EventListDto { events }))
}

/// List events of a category
///
/// Responds 404 when no event references the code, including codes with no
/// matching category.
#[utoipa::path(
    get,
    path = "/events/{category_code}",
    params(
        ("category_code" = String, Path, description = "Category code the events reference")
    ),
    responses(
        (status = 200, description = "Events of the category", body = Vec<EventResponseDto>),
        (status = 404, description = "No events for this category code", body = ErrorBody)
    ),
    tag = "events"
)]
pub async fn list_events_by_category(
    State(service): State<Arc<EventService>>,
    Path(category_code): Path<String>,
) -> Result<Json<Vec<EventResponseDto>>> {
    let events = service
        .list_by_category_code(&category_code)
        .await?
        .or_not_found(|| format!("No events found for category '{}'", category_code))?;
    Ok(Json(events))
}

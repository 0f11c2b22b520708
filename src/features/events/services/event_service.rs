use std::sync::Arc;

use crate::core::error::Result;
use crate::features::events::dtos::EventResponseDto;
use crate::modules::store::RecordStore;
use crate::shared::types::Lookup;

/// Service for event operations
pub struct EventService {
    store: Arc<dyn RecordStore>,
}

impl EventService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// List every event ordered by start date
    pub async fn list(&self) -> Result<Vec<EventResponseDto>> {
        let events = self.store.list_events().await?;
        Ok(events.into_iter().map(|e| e.into()).collect())
    }

    /// Events belonging to a category code.
    ///
    /// No matching events is `NotFound`, whether or not the category itself
    /// exists.
    pub async fn list_by_category_code(
        &self,
        category_code: &str,
    ) -> Result<Lookup<Vec<EventResponseDto>>> {
        let events = self.store.find_events_by_category_code(category_code).await?;
        Ok(Lookup::non_empty(events)
            .map(|events| events.into_iter().map(EventResponseDto::from).collect()))
    }
}

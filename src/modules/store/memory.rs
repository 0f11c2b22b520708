use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::RecordStore;
use crate::core::error::{AppError, Result};
use crate::features::categories::models::{Category, CreateCategory};
use crate::features::events::models::{CreateEvent, Event};
use crate::shared::validation::validate_input;

/// In-memory record store.
///
/// Mirrors the PostgreSQL validation, ordering (byte-wise, like the `"C"`
/// collation the queries use) and uniqueness rules so both backends
/// answer the same queries identically.
#[derive(Default)]
pub struct MemoryStore {
    categories: RwLock<Vec<Category>>,
    events: RwLock<Vec<Event>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        let mut categories = self.categories.read().await.clone();
        categories.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.code.cmp(&b.code)));
        Ok(categories)
    }

    async fn find_category_by_code(&self, code: &str) -> Result<Option<Category>> {
        Ok(self
            .categories
            .read()
            .await
            .iter()
            .find(|c| c.code == code)
            .cloned())
    }

    async fn insert_category(&self, input: CreateCategory) -> Result<Category> {
        validate_input(&input)?;

        let mut categories = self.categories.write().await;
        if categories.iter().any(|c| c.code == input.code) {
            return Err(AppError::Conflict(format!(
                "Category '{}' already exists",
                input.code
            )));
        }

        let category = input.into_category(Uuid::now_v7());
        categories.push(category.clone());
        tracing::debug!("Category stored in memory: code={}", category.code);
        Ok(category)
    }

    async fn delete_all_categories(&self) -> Result<u64> {
        let mut categories = self.categories.write().await;
        let removed = categories.len() as u64;
        categories.clear();
        Ok(removed)
    }

    async fn list_events(&self) -> Result<Vec<Event>> {
        let mut events = self.events.read().await.clone();
        events.sort_by(|a, b| a.start_date.cmp(&b.start_date).then_with(|| a.id.cmp(&b.id)));
        Ok(events)
    }

    async fn find_events_by_category_code(&self, category_code: &str) -> Result<Vec<Event>> {
        let mut events: Vec<Event> = self
            .events
            .read()
            .await
            .iter()
            .filter(|e| e.category_code == category_code)
            .cloned()
            .collect();
        events.sort_by(|a, b| a.start_date.cmp(&b.start_date).then_with(|| a.id.cmp(&b.id)));
        Ok(events)
    }

    async fn insert_event(&self, input: CreateEvent) -> Result<Event> {
        validate_input(&input)?;

        let event = input.into_event(Uuid::now_v7());
        self.events.write().await.push(event.clone());
        tracing::debug!(
            "Event stored in memory: category_code={}",
            event.category_code
        );
        Ok(event)
    }

    async fn delete_all_events(&self) -> Result<u64> {
        let mut events = self.events.write().await;
        let removed = events.len() as u64;
        events.clear();
        Ok(removed)
    }

    async fn close(&self) {}
}

//! Record store for categories and events
//!
//! A single [`RecordStore`] context is built at startup, shared by the
//! services as `Arc<dyn RecordStore>` and closed on shutdown. Two backends
//! exist: PostgreSQL through a `sqlx` pool, and an in-memory store used for
//! local development and tests.

mod memory;
mod postgres;
mod seed;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::categories::models::{Category, CreateCategory};
use crate::features::events::models::{CreateEvent, Event};

pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use seed::load_seed_file;

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All categories ordered by title, then code
    async fn list_categories(&self) -> Result<Vec<Category>>;

    /// Exact match on `code`
    async fn find_category_by_code(&self, code: &str) -> Result<Option<Category>>;

    /// Save a new category; a duplicate code is a conflict
    async fn insert_category(&self, input: CreateCategory) -> Result<Category>;

    /// Bulk delete, used for test teardown
    #[allow(dead_code)]
    async fn delete_all_categories(&self) -> Result<u64>;

    /// All events ordered by start date
    async fn list_events(&self) -> Result<Vec<Event>>;

    /// Exact match on `category_code`, ordered by start date
    async fn find_events_by_category_code(&self, category_code: &str) -> Result<Vec<Event>>;

    async fn insert_event(&self, input: CreateEvent) -> Result<Event>;

    #[allow(dead_code)]
    async fn delete_all_events(&self) -> Result<u64>;

    /// Release connections held by the store
    async fn close(&self);
}

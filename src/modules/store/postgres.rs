use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::RecordStore;
use crate::core::error::{AppError, Result};
use crate::features::categories::models::{Category, CreateCategory};
use crate::features::events::models::{CreateEvent, Event};
use crate::shared::validation::validate_input;

/// PostgreSQL-backed record store
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map constraint violations on insert to conflict / validation errors
fn map_insert_error(e: sqlx::Error, what: &str) -> AppError {
    if let sqlx::Error::Database(ref db) = e {
        if db.is_unique_violation() {
            return AppError::Conflict(format!("{} already exists", what));
        }
        if db.is_check_violation() {
            return AppError::Validation(format!("{} violates {}", what, db.message()));
        }
    }
    tracing::error!("Failed to insert {}: {:?}", what, e);
    AppError::Database(e)
}

#[async_trait]
impl RecordStore for PgStore {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, title, sub_title, code, image_url
            FROM categories
            ORDER BY title COLLATE "C", code COLLATE "C"
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn find_category_by_code(&self, code: &str) -> Result<Option<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, title, sub_title, code, image_url
            FROM categories
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get category by code: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn insert_category(&self, input: CreateCategory) -> Result<Category> {
        validate_input(&input)?;

        let code = input.code.clone();
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (id, title, sub_title, code, image_url)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, sub_title, code, image_url
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(input.title)
        .bind(input.sub_title)
        .bind(input.code)
        .bind(input.image_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, &format!("Category '{}'", code)))?;

        tracing::info!("Category created: id={}, code={}", category.id, category.code);
        Ok(category)
    }

    async fn delete_all_categories(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM categories")
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn list_events(&self) -> Result<Vec<Event>> {
        sqlx::query_as::<_, Event>(
            r#"
            SELECT id, title, description, start_date, end_date, image_url, category_code
            FROM events
            ORDER BY start_date, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list events: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn find_events_by_category_code(&self, category_code: &str) -> Result<Vec<Event>> {
        sqlx::query_as::<_, Event>(
            r#"
            SELECT id, title, description, start_date, end_date, image_url, category_code
            FROM events
            WHERE category_code = $1
            ORDER BY start_date, id
            "#,
        )
        .bind(category_code)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list events by category code: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn insert_event(&self, input: CreateEvent) -> Result<Event> {
        validate_input(&input)?;

        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (id, title, description, start_date, end_date, image_url, category_code)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, title, description, start_date, end_date, image_url, category_code
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(input.title)
        .bind(input.description)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(input.image_url)
        .bind(input.category_code)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, "Event"))?;

        tracing::info!(
            "Event created: id={}, category_code={}",
            event.id,
            event.category_code
        );
        Ok(event)
    }

    async fn delete_all_events(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM events").execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{test_category_input, test_event_input};

    // These run against a throwaway database created by `sqlx::test`; they need
    // DATABASE_URL pointing at a PostgreSQL server.

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_pg_category_lookup(pool: PgPool) {
        let store = PgStore::new(pool);
        store.insert_category(test_category_input()).await.unwrap();

        let found = store.find_category_by_code("TEST").await.unwrap();
        assert_eq!(found.map(|c| c.title), Some("Test Category".to_string()));
        assert!(store
            .find_category_by_code("INVALID_CODE")
            .await
            .unwrap()
            .is_none());
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_pg_duplicate_code_is_conflict(pool: PgPool) {
        let store = PgStore::new(pool);
        store.insert_category(test_category_input()).await.unwrap();

        let err = store
            .insert_category(test_category_input())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_pg_inverted_event_dates_are_rejected(pool: PgPool) {
        let store = PgStore::new(pool);
        let mut input = test_event_input("TEST");
        input.end_date = input.start_date - chrono::Duration::days(3);

        let err = store.insert_event(input).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_pg_titles_sort_byte_wise(pool: PgPool) {
        let store = PgStore::new(pool);
        for (title, code) in [("apple", "A"), ("Zebra", "B"), ("Banana", "C")] {
            let mut input = test_category_input();
            input.title = title.to_string();
            input.code = code.to_string();
            store.insert_category(input).await.unwrap();
        }

        let titles: Vec<String> = store
            .list_categories()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.title)
            .collect();
        assert_eq!(titles, vec!["Banana", "Zebra", "apple"]);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_pg_events_by_category_code(pool: PgPool) {
        let store = PgStore::new(pool);
        store.insert_event(test_event_input("TEST")).await.unwrap();
        store.insert_event(test_event_input("OTHER")).await.unwrap();

        let events = store.find_events_by_category_code("TEST").await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].category_code, "TEST");

        assert_eq!(store.delete_all_events().await.unwrap(), 2);
        assert!(store.list_events().await.unwrap().is_empty());
    }
}

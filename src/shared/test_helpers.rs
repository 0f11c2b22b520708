#![cfg(test)]

use std::sync::Arc;

use axum_test::TestServer;
use chrono::{TimeZone, Utc};
use fake::faker::lorem::en::{Sentence, Word};
use fake::Fake;

use crate::app::{build_router, AppServices};
use crate::features::categories::models::CreateCategory;
use crate::features::events::models::CreateEvent;
use crate::modules::store::{MemoryStore, RecordStore};

/// The category used throughout the HTTP tests
pub fn test_category_input() -> CreateCategory {
    CreateCategory {
        title: "Test Category".to_string(),
        sub_title: "Test SubTitle".to_string(),
        code: "TEST".to_string(),
        image_url: "http://example.com/test_image.jpg".to_string(),
    }
}

/// A category with generated text and a random alphanumeric code
pub fn random_category_input() -> CreateCategory {
    let code = uuid::Uuid::new_v4().simple().to_string()[..12].to_uppercase();
    CreateCategory {
        title: Sentence(1..4).fake(),
        sub_title: Sentence(2..6).fake(),
        code,
        image_url: format!("http://example.com/{}.jpg", Word().fake::<String>()),
    }
}

/// An event in the 2024-11-25..2024-11-29 window for `category_code`
pub fn test_event_input(category_code: &str) -> CreateEvent {
    CreateEvent {
        title: "Test Event".to_string(),
        description: "Test Description".to_string(),
        start_date: Utc.with_ymd_and_hms(2024, 11, 25, 0, 0, 0).unwrap(),
        end_date: Utc.with_ymd_and_hms(2024, 11, 29, 23, 59, 59).unwrap(),
        image_url: Some("http://example.com/test_event_image.jpg".to_string()),
        category_code: category_code.to_string(),
    }
}

/// Fresh store per test so cases never see each other's records
pub fn test_store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new())
}

pub fn test_server(store: Arc<MemoryStore>) -> TestServer {
    let store: Arc<dyn RecordStore> = store;
    let router = build_router(AppServices::new(store), vec!["*".to_string()]);
    TestServer::new(router).unwrap()
}

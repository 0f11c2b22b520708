use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::features::categories::dtos::{CategoryListDto, CategoryResponseDto};
use crate::features::categories::services::CategoryService;
use crate::shared::types::ErrorBody;

/// List all categories
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "List of categories", body = CategoryListDto),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<CategoryListDto>> {
    let categories = service.list().await?;
    Ok(Json(CategoryListDto { categories }))
}

/// Get category by code
#[utoipa::path(
    get,
    path = "/categories/{code}",
    params(
        ("code" = String, Path, description = "Category code")
    ),
    responses(
        (status = 200, description = "Category found", body = CategoryResponseDto),
        (status = 404, description = "Category not found", body = ErrorBody)
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(service): State<Arc<CategoryService>>,
    Path(code): Path<String>,
) -> Result<Json<CategoryResponseDto>> {
    let category = service
        .get_by_code(&code)
        .await?
        .or_not_found(|| format!("Category '{}' not found", code))?;
    Ok(Json(category))
}

#[cfg(test)]
mod tests {
    use crate::modules::store::RecordStore;
    use crate::shared::test_helpers::{
        random_category_input, test_category_input, test_server, test_store,
    };
    use serde_json::Value;

    #[tokio::test]
    async fn test_get_category_by_code() {
        let store = test_store();
        store.insert_category(test_category_input()).await.unwrap();
        let server = test_server(store);

        let response = server.get("/categories/TEST").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["title"], "Test Category");
        assert_eq!(body["subTitle"], "Test SubTitle");
        assert_eq!(body["code"], "TEST");
        assert_eq!(body["imageUrl"], "http://example.com/test_image.jpg");
        assert!(body["id"].is_string());
    }

    #[tokio::test]
    async fn test_get_category_by_code_not_found() {
        let store = test_store();
        store.insert_category(test_category_input()).await.unwrap();
        let server = test_server(store);

        let response = server.get("/categories/INVALID_CODE").await;
        response.assert_status_not_found();

        let body: Value = response.json();
        assert_eq!(body["error"], "Category 'INVALID_CODE' not found");
    }

    #[tokio::test]
    async fn test_get_category_code_is_case_sensitive() {
        let store = test_store();
        store.insert_category(test_category_input()).await.unwrap();
        let server = test_server(store);

        server.get("/categories/test").await.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_get_categories() {
        let store = test_store();
        store.insert_category(test_category_input()).await.unwrap();
        store.insert_category(random_category_input()).await.unwrap();
        let server = test_server(store);

        let response = server.get("/categories").await;
        response.assert_status_ok();

        let body: Value = response.json();
        let categories = body["categories"].as_array().unwrap();
        assert_eq!(categories.len(), 2);
        assert!(categories.iter().any(|c| c["code"] == "TEST"));
    }

    #[tokio::test]
    async fn test_get_categories_empty() {
        let server = test_server(test_store());

        let response = server.get("/categories").await;
        response.assert_status_ok();
        response.assert_json(&serde_json::json!({ "categories": [] }));
    }

    #[tokio::test]
    async fn test_repeated_requests_are_identical() {
        let store = test_store();
        store.insert_category(test_category_input()).await.unwrap();
        for _ in 0..3 {
            store.insert_category(random_category_input()).await.unwrap();
        }
        let server = test_server(store);

        let first = server.get("/categories").await.text();
        let second = server.get("/categories").await.text();
        assert_eq!(first, second);

        let first = server.get("/categories/TEST").await.text();
        let second = server.get("/categories/TEST").await.text();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_category_removed_after_teardown() {
        let store = test_store();
        store.insert_category(test_category_input()).await.unwrap();
        let server = test_server(store.clone());

        server.get("/categories/TEST").await.assert_status_ok();

        store.delete_all_categories().await.unwrap();
        server.get("/categories/TEST").await.assert_status_not_found();
    }
}

use std::sync::Arc;

use crate::core::error::Result;
use crate::features::categories::dtos::CategoryResponseDto;
use crate::modules::store::RecordStore;
use crate::shared::types::Lookup;

/// Service for category operations
pub struct CategoryService {
    store: Arc<dyn RecordStore>,
}

impl CategoryService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// List all categories (flat list, possibly empty)
    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = self.store.list_categories().await?;
        Ok(categories.into_iter().map(|c| c.into()).collect())
    }

    /// Get category by its code
    pub async fn get_by_code(&self, code: &str) -> Result<Lookup<CategoryResponseDto>> {
        let category = self.store.find_category_by_code(code).await?;
        Ok(Lookup::from(category).map(CategoryResponseDto::from))
    }
}

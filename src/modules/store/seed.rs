use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use validator::Validate;

use super::RecordStore;
use crate::core::error::{AppError, Result};
use crate::features::categories::models::CreateCategory;
use crate::features::events::models::CreateEvent;

/// Records loaded into an empty store at startup
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedData {
    #[serde(default)]
    pub categories: Vec<CreateCategory>,
    #[serde(default)]
    pub events: Vec<CreateEvent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedReport {
    Applied { categories: usize, events: usize },
    /// The store already held records, nothing was written
    Skipped,
}

impl SeedData {
    /// Validate every record before writing any of them
    pub fn validate_all(&self) -> Result<()> {
        let mut codes = HashSet::new();
        for (i, category) in self.categories.iter().enumerate() {
            category
                .validate()
                .map_err(|e| AppError::Validation(format!("categories[{}]: {}", i, e)))?;
            if !codes.insert(category.code.as_str()) {
                return Err(AppError::Validation(format!(
                    "categories[{}]: duplicate code '{}'",
                    i, category.code
                )));
            }
        }
        for (i, event) in self.events.iter().enumerate() {
            event
                .validate()
                .map_err(|e| AppError::Validation(format!("events[{}]: {}", i, e)))?;
        }
        Ok(())
    }

    pub async fn apply(self, store: &dyn RecordStore) -> Result<SeedReport> {
        self.validate_all()?;

        if !store.list_categories().await?.is_empty() || !store.list_events().await?.is_empty() {
            return Ok(SeedReport::Skipped);
        }

        let categories = self.categories.len();
        let events = self.events.len();
        for category in self.categories {
            store.insert_category(category).await?;
        }
        for event in self.events {
            store.insert_event(event).await?;
        }

        Ok(SeedReport::Applied { categories, events })
    }
}

/// Read a JSON seed file and load it into `store`
pub async fn load_seed_file(path: &Path, store: &dyn RecordStore) -> anyhow::Result<SeedReport> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    let seed: SeedData = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid seed file {}", path.display()))?;

    let report = seed
        .apply(store)
        .await
        .with_context(|| format!("Failed to apply seed file {}", path.display()))?;

    match report {
        SeedReport::Applied { categories, events } => tracing::info!(
            "Seed applied from {}: categories={}, events={}",
            path.display(),
            categories,
            events
        ),
        SeedReport::Skipped => {
            tracing::info!("Seed skipped: store already contains records")
        }
    }

    Ok(report)
}

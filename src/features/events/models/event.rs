use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::FromRow;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::shared::validation::CATEGORY_CODE_REGEX;

/// Stored event record
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub image_url: Option<String>,
    /// Code of the owning category; not checked against the categories table
    pub category_code: String,
}

/// Input for saving a new event
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
#[validate(schema(function = "validate_date_range", skip_on_field_errors = false))]
pub struct CreateEvent {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 5000, message = "Description must be 1-5000 characters"))]
    pub description: String,

    pub start_date: DateTime<Utc>,

    pub end_date: DateTime<Utc>,

    #[serde(default)]
    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: Option<String>,

    #[validate(
        length(min = 1, max = 64, message = "Category code must be 1-64 characters"),
        regex(
            path = *CATEGORY_CODE_REGEX,
            message = "Category code must be letters and digits separated by single '-' or '_'"
        )
    )]
    pub category_code: String,
}

fn validate_date_range(event: &CreateEvent) -> Result<(), ValidationError> {
    if event.end_date < event.start_date {
        let mut err = ValidationError::new("date_range");
        err.message = Some("End date must not be before start date".into());
        return Err(err);
    }
    Ok(())
}

impl CreateEvent {
    pub fn into_event(self, id: Uuid) -> Event {
        Event {
            id,
            title: self.title,
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
            image_url: self.image_url,
            category_code: self.category_code,
        }
    }
}

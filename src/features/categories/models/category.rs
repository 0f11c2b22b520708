use serde::Deserialize;
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::shared::validation::CATEGORY_CODE_REGEX;

/// Stored category record
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Category {
    pub id: Uuid,
    pub title: String,
    pub sub_title: String,
    pub code: String,
    pub image_url: String,
}

/// Input for saving a new category.
///
/// Unknown fields are rejected on deserialization and every field is required.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateCategory {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 255, message = "Sub title must be 1-255 characters"))]
    pub sub_title: String,

    #[validate(
        length(min = 1, max = 64, message = "Code must be 1-64 characters"),
        regex(
            path = *CATEGORY_CODE_REGEX,
            message = "Code must be letters and digits separated by single '-' or '_'"
        )
    )]
    pub code: String,

    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: String,
}

impl CreateCategory {
    pub fn into_category(self, id: Uuid) -> Category {
        Category {
            id,
            title: self.title,
            sub_title: self.sub_title,
            code: self.code,
            image_url: self.image_url,
        }
    }
}

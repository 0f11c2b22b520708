use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::events::{dtos as events_dtos, handlers as events_handlers};
use crate::shared::types::ErrorBody;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories
        categories_handlers::list_categories,
        categories_handlers::get_category,
        // Events
        events_handlers::list_events,
        events_handlers::list_events_by_category,
    ),
    components(
        schemas(
            ErrorBody,
            // Categories
            categories_dtos::CategoryResponseDto,
            categories_dtos::CategoryListDto,
            // Events
            events_dtos::EventResponseDto,
            events_dtos::EventListDto,
        )
    ),
    tags(
        (name = "categories", description = "Categories looked up by their code"),
        (name = "events", description = "Events grouped by category code"),
    ),
    info(
        title = "Eventboard API",
        version = "0.1.0",
        description = "Read-only API for categories and their events",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_read_endpoints() {
        let doc = ApiDoc::openapi();
        for path in [
            "/categories",
            "/categories/{code}",
            "/events",
            "/events/{category_code}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn test_swagger_info_modifier() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Custom".to_string(),
            version: "9.9.9".to_string(),
            description: "Overridden".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Custom");
        assert_eq!(doc.info.version, "9.9.9");
        assert_eq!(doc.info.description.as_deref(), Some("Overridden"));
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::error::{AppError, Result};

/// Error envelope returned by every failing request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

// =============================================================================
// LOOKUP OUTCOME
// =============================================================================

/// Outcome of a lookup against the record store.
///
/// Services return this instead of deciding on HTTP status themselves; handlers
/// turn `NotFound` into a 404 through [`Lookup::or_not_found`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

impl<T> Lookup<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lookup<U> {
        match self {
            Lookup::Found(value) => Lookup::Found(f(value)),
            Lookup::NotFound => Lookup::NotFound,
        }
    }

    /// Unwrap the record or produce the 404 error carrying `message`
    pub fn or_not_found(self, message: impl FnOnce() -> String) -> Result<T> {
        match self {
            Lookup::Found(value) => Ok(value),
            Lookup::NotFound => Err(AppError::NotFound(message())),
        }
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Lookup::Found(v),
            None => Lookup::NotFound,
        }
    }
}

impl<T> Lookup<Vec<T>> {
    /// An empty result set counts as not found
    pub fn non_empty(values: Vec<T>) -> Self {
        if values.is_empty() {
            Lookup::NotFound
        } else {
            Lookup::Found(values)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_from_option() {
        assert_eq!(Lookup::from(Some(3)), Lookup::Found(3));
        assert_eq!(Lookup::<i32>::from(None), Lookup::NotFound);
    }

    #[test]
    fn test_lookup_non_empty() {
        assert_eq!(Lookup::non_empty(vec![1, 2]), Lookup::Found(vec![1, 2]));
        assert_eq!(Lookup::<Vec<i32>>::non_empty(vec![]), Lookup::NotFound);
    }

    #[test]
    fn test_lookup_or_not_found() {
        let found = Lookup::Found("a").map(|s| s.to_uppercase());
        assert_eq!(found.or_not_found(|| "missing".into()).unwrap(), "A");

        let missing: Lookup<&str> = Lookup::NotFound;
        match missing.or_not_found(|| "Category 'X' not found".into()) {
            Err(AppError::NotFound(msg)) => assert_eq!(msg, "Category 'X' not found"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_error_body_shape() {
        let value = serde_json::to_value(ErrorBody::new("boom")).unwrap();
        assert_eq!(value, serde_json::json!({ "error": "boom" }));
    }
}

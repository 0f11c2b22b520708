use lazy_static::lazy_static;
use regex::Regex;
use validator::Validate;

use crate::core::error::{AppError, Result};

lazy_static! {
    /// Regex for validating category codes (and event category references)
    /// Letters and digits, optionally separated by single hyphens or underscores
    /// - Valid: "TEST", "music-live", "EVT_2024", "a"
    /// - Invalid: "-TEST", "TEST_", "A--B", "A B", "café"
    pub static ref CATEGORY_CODE_REGEX: Regex =
        Regex::new(r"^[A-Za-z0-9]+(?:[-_][A-Za-z0-9]+)*$").unwrap();
}

/// Run the derived validation rules, rejecting the input with a 400
pub fn validate_input<T: Validate>(input: &T) -> Result<()> {
    input
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_code_regex_valid() {
        assert!(CATEGORY_CODE_REGEX.is_match("TEST"));
        assert!(CATEGORY_CODE_REGEX.is_match("music-live"));
        assert!(CATEGORY_CODE_REGEX.is_match("EVT_2024"));
        assert!(CATEGORY_CODE_REGEX.is_match("a"));
        assert!(CATEGORY_CODE_REGEX.is_match("INVALID_CODE"));
    }

    #[test]
    fn test_category_code_regex_invalid() {
        assert!(!CATEGORY_CODE_REGEX.is_match("-TEST"));
        assert!(!CATEGORY_CODE_REGEX.is_match("TEST_"));
        assert!(!CATEGORY_CODE_REGEX.is_match("A--B"));
        assert!(!CATEGORY_CODE_REGEX.is_match("A B"));
        assert!(!CATEGORY_CODE_REGEX.is_match("café"));
        assert!(!CATEGORY_CODE_REGEX.is_match(""));
    }
}

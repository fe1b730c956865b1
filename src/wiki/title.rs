//! Page title validation module
//!
//! Titles double as filenames, so the allow-list pattern here is the
//! system's only defense against path traversal. Every `Title` value is
//! produced by `TitleValidator::validate`; nothing else constructs one,
//! which keeps unvalidated input away from path construction.

use regex_lite::Regex;
use thiserror::Error;

/// Pattern a page identifier must match in full
const TITLE_PATTERN: &str = "^[a-zA-Z0-9]+$";

/// Title validation failure
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TitleError {
    #[error("invalid page title: {0:?}")]
    Invalid(String),
}

/// A validated page title: non-empty, alphanumeric only
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Title(String);

impl Title {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Title {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compiled allow-list validator, built once at startup and shared via
/// `AppState`
pub struct TitleValidator {
    pattern: Regex,
}

impl TitleValidator {
    /// Compile the title pattern
    pub fn new() -> Self {
        // The pattern is a fixed literal, compilation cannot fail
        let pattern = Regex::new(TITLE_PATTERN).unwrap_or_else(|e| {
            unreachable!("title pattern failed to compile: {e}");
        });
        Self { pattern }
    }

    /// Validate a raw path segment into a `Title`
    ///
    /// # Returns
    /// * `Ok(Title)` - the segment matches `^[a-zA-Z0-9]+$`
    /// * `Err(TitleError)` - empty, or contains any other character
    pub fn validate(&self, raw: &str) -> Result<Title, TitleError> {
        if self.pattern.is_match(raw) {
            Ok(Title(raw.to_string()))
        } else {
            Err(TitleError::Invalid(raw.to_string()))
        }
    }
}

impl Default for TitleValidator {
    fn default() -> Self {
        Self::new()
    }
}

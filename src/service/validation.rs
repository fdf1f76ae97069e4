//! Business rules checked before anything is written.

use crate::error::{AppError, PublisherNameError};
use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d").expect("valid leading digit regex"));

/// Publisher names must not start with a numeric character.
pub fn validate_publisher_name(name: &str) -> Result<(), AppError> {
    if LEADING_DIGIT_RE.is_match(name) {
        return Err(PublisherNameError::starts_with_number(name).into());
    }
    Ok(())
}

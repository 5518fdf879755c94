//! Validation rules for movie create and update payloads.

use serde_json::Value;

use crate::error::CoreError;
use crate::stats;

/// Lower bound of the movie rating scale.
pub const MOVIE_MIN_RATING: f64 = 0.0;

/// Upper bound of the movie rating scale.
///
/// Movies are rated 0-10; reviews use a separate 1-5 scale (see
/// [`crate::review`]). The two scales are intentionally kept distinct.
pub const MOVIE_MAX_RATING: f64 = 10.0;

/// Validate that a required text field is present and non-empty.
pub fn validate_required_text(
    field: &'static str,
    value: Option<&str>,
) -> Result<String, CoreError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(missing_field(field)),
    }
}

/// Validate that a required field is present, without further constraints.
pub fn validate_required<T>(field: &'static str, value: Option<T>) -> Result<T, CoreError> {
    value.ok_or_else(|| missing_field(field))
}

/// Validate a genre tag set: at least one non-empty tag.
pub fn validate_genres(tags: &[String]) -> Result<(), CoreError> {
    if tags.is_empty() || tags.iter().any(|t| t.trim().is_empty()) {
        return Err(missing_field("genre"));
    }
    Ok(())
}

/// Validate a rating on a new write.
///
/// The stored column tolerates legacy dirt, but new writes must coerce to a
/// number within the 0-10 scale. Returns the coerced value.
pub fn validate_new_rating(raw: &Value) -> Result<f64, CoreError> {
    let rating = stats::coerce_rating(raw).ok_or_else(|| {
        CoreError::Validation(format!("rating must be a number, got {raw}"))
    })?;
    if !(MOVIE_MIN_RATING..=MOVIE_MAX_RATING).contains(&rating) {
        return Err(CoreError::Validation(format!(
            "rating must be between {MOVIE_MIN_RATING} and {MOVIE_MAX_RATING}, got {rating}"
        )));
    }
    Ok(rating)
}

fn missing_field(field: &'static str) -> CoreError {
    CoreError::Validation(format!("Missing required field: {field}"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn required_text_trims_and_accepts() {
        assert_eq!(
            validate_required_text("title", Some("  Dune  ")).unwrap(),
            "Dune"
        );
    }

    #[test]
    fn required_text_rejects_missing_and_blank() {
        assert!(validate_required_text("title", None).is_err());
        assert!(validate_required_text("title", Some("   ")).is_err());
    }

    #[test]
    fn missing_field_message_names_the_field() {
        let err = validate_required_text("posterUrl", None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: Missing required field: posterUrl"
        );
    }

    #[test]
    fn genres_require_at_least_one_tag() {
        assert!(validate_genres(&[]).is_err());
        assert!(validate_genres(&["".to_string()]).is_err());
        assert!(validate_genres(&["Action".to_string()]).is_ok());
    }

    #[test]
    fn new_rating_accepts_numbers_and_numeric_strings() {
        assert_eq!(validate_new_rating(&json!(8.5)).unwrap(), 8.5);
        assert_eq!(validate_new_rating(&json!("7")).unwrap(), 7.0);
    }

    #[test]
    fn new_rating_rejects_garbage_and_out_of_range() {
        assert!(validate_new_rating(&json!("great")).is_err());
        assert!(validate_new_rating(&json!(null)).is_err());
        assert!(validate_new_rating(&json!(10.5)).is_err());
        assert!(validate_new_rating(&json!(-1)).is_err());
    }
}

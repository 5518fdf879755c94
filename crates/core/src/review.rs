//! Validation rules for reviews.

use crate::error::CoreError;

/// Lowest accepted review rating.
pub const REVIEW_MIN_RATING: i16 = 1;

/// Highest accepted review rating.
///
/// Reviews use a 1-5 scale, distinct from the 0-10 movie rating scale.
pub const REVIEW_MAX_RATING: i16 = 5;

/// Fallback display name when the identity provider supplies none.
pub const ANONYMOUS_REVIEWER: &str = "Anonymous";

/// Validate a review rating against the inclusive 1-5 range.
pub fn validate_review_rating(rating: i16) -> Result<(), CoreError> {
    if !(REVIEW_MIN_RATING..=REVIEW_MAX_RATING).contains(&rating) {
        return Err(CoreError::Validation(format!(
            "Rating must be between {REVIEW_MIN_RATING} and {REVIEW_MAX_RATING}"
        )));
    }
    Ok(())
}

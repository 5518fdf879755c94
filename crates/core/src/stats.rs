//! Catalog statistics: rating cleanup and aggregation.
//!
//! Stored ratings are dirty: legacy documents carry numeric strings, nulls,
//! or garbage where a 0-10 number belongs. Every aggregate here coerces
//! first and silently drops whatever fails coercion; a malformed record
//! must never abort a whole computation.

use serde_json::Value;

/// Coerce a raw stored rating to a float.
///
/// Numbers pass through, strings are parsed, everything else (null, bool,
/// array, object, unparsable text) is discarded.
pub fn coerce_rating(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Keep the ratings that coerce to a finite value strictly greater than
/// zero.
pub fn clean_ratings<'a, I>(values: I) -> Vec<f64>
where
    I: IntoIterator<Item = &'a Value>,
{
    values
        .into_iter()
        .filter_map(coerce_rating)
        .filter(|r| r.is_finite() && *r > 0.0)
        .collect()
}

/// Round a value to one decimal place.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Catalog-wide average rating: mean of the cleaned values rounded to one
/// decimal, or `0.0` when nothing survives cleaning.
pub fn catalog_average(values: &[Value]) -> f64 {
    let cleaned = clean_ratings(values);
    if cleaned.is_empty() {
        return 0.0;
    }
    round_to_tenth(cleaned.iter().sum::<f64>() / cleaned.len() as f64)
}

/// Mean of a movie's review ratings rounded to one decimal.
///
/// Returns `None` for an empty review set; the caller leaves the stored
/// average untouched in that case.
pub fn review_average(ratings: &[i16]) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }
    let sum: i64 = ratings.iter().map(|r| i64::from(*r)).sum();
    Some(round_to_tenth(sum as f64 / ratings.len() as f64))
}

/// Distinct genre tags across per-movie tag lists, flattened and sorted.
pub fn distinct_tags<I, T>(genres: I) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: IntoIterator<Item = String>,
{
    let mut tags: Vec<String> = genres.into_iter().flatten().collect();
    tags.sort();
    tags.dedup();
    tags
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

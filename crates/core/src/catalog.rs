//! Movie listing query plan: filters, sort key, page window.
//!
//! Translates the loosely-typed listing parameters from the query string
//! into a normalized [`MovieQuery`] that the repository layer executes.
//! Parsing is a per-parameter parse-or-default contract: a value that fails
//! to parse imposes no constraint (or falls back to its default) instead of
//! failing the request.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// First page when no `page` parameter is supplied.
pub const DEFAULT_PAGE: i64 = 1;

/// Default page size for the main listing.
pub const DEFAULT_PAGE_SIZE: i64 = 12;

/// Number of movies returned by the featured carousel listing.
pub const FEATURED_LIMIT: i64 = 5;

/// Number of movies returned by the top-rated listing.
pub const TOP_RATED_LIMIT: i64 = 5;

/// Minimum stored rating for a movie to count as top-rated.
pub const TOP_RATED_MIN_RATING: f64 = 8.0;

/// Number of movies returned by the recently-added listing.
pub const RECENT_LIMIT: i64 = 6;

// ---------------------------------------------------------------------------
// Sort
// ---------------------------------------------------------------------------

/// Whitelisted sort fields, named as they appear on the wire.
///
/// An unknown `sortBy` value degrades to [`SortField::AddedDate`] rather
/// than failing the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    AddedDate,
    Title,
    Rating,
    AverageRating,
    ReleaseYear,
}

impl SortField {
    /// Parse a `sortBy` parameter, degrading to the default on anything
    /// outside the whitelist.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("title") => SortField::Title,
            Some("rating") => SortField::Rating,
            Some("averageRating") => SortField::AverageRating,
            Some("releaseYear") => SortField::ReleaseYear,
            _ => SortField::AddedDate,
        }
    }
}

/// Sort direction. Anything other than `asc` sorts descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("asc") => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }

    pub fn is_descending(self) -> bool {
        matches!(self, SortOrder::Desc)
    }
}

// ---------------------------------------------------------------------------
// Listing parameters
// ---------------------------------------------------------------------------

/// Raw query-string parameters for `GET /movies`.
///
/// Every field is an optional string; numeric fields are parsed permissively
/// by [`MovieQuery::from_params`].
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    /// Comma-separated genre tags.
    pub genre: Option<String>,
    pub min_rating: Option<String>,
    pub max_rating: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

/// Normalized query plan: the AND of all supplied predicates, a whitelisted
/// sort key, and a page window.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieQuery {
    /// Set-membership genre filter; empty means no constraint.
    pub genres: Vec<String>,
    /// Inclusive lower rating bound.
    pub min_rating: Option<f64>,
    /// Inclusive upper rating bound.
    pub max_rating: Option<f64>,
    /// Case-insensitive substring over title, director, and cast.
    pub search: Option<String>,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
    pub page: i64,
    pub limit: i64,
}

impl MovieQuery {
    /// Build a query plan from raw listing parameters.
    pub fn from_params(params: &MovieListParams) -> Self {
        Self {
            genres: parse_genres(params.genre.as_deref()),
            min_rating: parse_rating_bound(params.min_rating.as_deref()),
            max_rating: parse_rating_bound(params.max_rating.as_deref()),
            search: params
                .search
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            sort_field: SortField::parse(params.sort_by.as_deref()),
            sort_order: SortOrder::parse(params.sort_order.as_deref()),
            page: parse_positive(params.page.as_deref(), DEFAULT_PAGE),
            limit: parse_positive(params.limit.as_deref(), DEFAULT_PAGE_SIZE),
        }
    }

    /// Number of rows to skip for the requested page.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }
}

// ---------------------------------------------------------------------------
// Parameter parsing
// ---------------------------------------------------------------------------

/// Parse a positive integer parameter, falling back to `default` when the
/// value is missing, unparsable, or not strictly positive.
pub fn parse_positive(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(default)
}

/// Parse a rating bound. A missing or unparsable value imposes no
/// constraint.
pub fn parse_rating_bound(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|n| n.is_finite())
}

/// Split a comma-separated genre parameter into trimmed, non-empty tags.
pub fn parse_genres(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// Total page count for a result set: `ceil(total / limit)`.
///
/// `limit` must be at least 1, which [`MovieQuery::from_params`] guarantees.
pub fn total_pages(total: i64, limit: i64) -> i64 {
    (total + limit - 1) / limit
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

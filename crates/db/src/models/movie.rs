//! Movie entity model and DTOs.

use movieverse_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A movie row from the `movies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    /// Normalized set of genre tags.
    pub genre: Vec<String>,
    pub release_year: Option<i32>,
    pub director: Option<String>,
    #[serde(rename = "cast")]
    pub cast_members: Option<String>,
    pub plot_summary: Option<String>,
    pub poster_url: Option<String>,
    /// Raw stored value; may be a number or a legacy numeric string.
    pub rating: Option<serde_json::Value>,
    /// Derived from the review set; absent until the first review lands.
    pub average_rating: Option<f64>,
    pub featured: bool,
    /// Owner email; immutable after creation.
    pub added_by: String,
    pub added_date: Timestamp,
}

/// Genre input: clients send either a single tag or a list of tags.
/// Either way it is normalized into a tag set.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum GenreInput {
    One(String),
    Many(Vec<String>),
}

impl GenreInput {
    /// Normalize into trimmed, non-empty tags.
    pub fn into_tags(self) -> Vec<String> {
        let raw = match self {
            GenreInput::One(tag) => vec![tag],
            GenreInput::Many(tags) => tags,
        };
        raw.into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect()
    }
}

/// DTO for creating a movie.
///
/// Required fields are `Option` so the handler can report which one is
/// missing instead of failing JSON deserialization wholesale.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovie {
    pub title: Option<String>,
    pub genre: Option<GenreInput>,
    pub release_year: Option<i32>,
    pub director: Option<String>,
    #[serde(rename = "cast")]
    pub cast_members: Option<String>,
    pub plot_summary: Option<String>,
    pub poster_url: Option<String>,
    pub rating: Option<serde_json::Value>,
    pub featured: Option<bool>,
}

/// A validated movie insert with server-assigned ownership fields.
#[derive(Debug, Clone)]
pub struct NewMovie {
    pub title: String,
    pub genre: Vec<String>,
    pub release_year: i32,
    pub director: String,
    pub cast_members: Option<String>,
    pub plot_summary: String,
    pub poster_url: String,
    pub rating: serde_json::Value,
    pub featured: bool,
    pub added_by: String,
}

/// DTO for partially updating a movie. All fields are optional.
///
/// `addedBy` and `addedDate` are deliberately absent: ownership and the
/// creation timestamp are immutable, so any such keys in the payload are
/// dropped on deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMovie {
    pub title: Option<String>,
    pub genre: Option<GenreInput>,
    pub release_year: Option<i32>,
    pub director: Option<String>,
    #[serde(rename = "cast")]
    pub cast_members: Option<String>,
    pub plot_summary: Option<String>,
    pub poster_url: Option<String>,
    pub rating: Option<serde_json::Value>,
    pub featured: Option<bool>,
}

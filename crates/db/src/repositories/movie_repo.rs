//! Repository for the `movies` table.
//!
//! Listing executes the normalized [`MovieQuery`] plan from the core crate:
//! the WHERE clause is the AND of every supplied predicate, the sort key is
//! whitelist-mapped to a column expression, and the page window becomes
//! OFFSET/LIMIT. `list` and `count` share the same predicate builder so the
//! reported total always matches the filter.

use movieverse_core::catalog::{
    MovieQuery, SortField, FEATURED_LIMIT, RECENT_LIMIT, TOP_RATED_LIMIT, TOP_RATED_MIN_RATING,
};
use movieverse_core::types::DbId;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::models::movie::{GenreInput, Movie, NewMovie, UpdateMovie};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, genre, release_year, director, cast_members, plot_summary, \
     poster_url, rating, average_rating, featured, added_by, added_date";

/// SQL expression yielding the stored rating as a number, or NULL when the
/// stored value is not a JSON number. Legacy string ratings therefore never
/// match a numeric range filter, matching the source store's behaviour.
const RATING_NUMERIC: &str =
    "(CASE WHEN jsonb_typeof(rating) = 'number' THEN (rating #>> '{}')::double precision END)";

/// Provides CRUD and listing operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a validated movie, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (title, genre, release_year, director, cast_members,
                                 plot_summary, poster_url, rating, featured, added_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(&input.genre)
            .bind(input.release_year)
            .bind(&input.director)
            .bind(&input.cast_members)
            .bind(&input.plot_summary)
            .bind(&input.poster_url)
            .bind(&input.rating)
            .bind(input.featured)
            .bind(&input.added_by)
            .fetch_one(pool)
            .await
    }

    /// Find a movie by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Execute a listing query plan: filters, sort, page window.
    pub async fn list(pool: &PgPool, query: &MovieQuery) -> Result<Vec<Movie>, sqlx::Error> {
        let mut builder = QueryBuilder::<Postgres>::new(format!("SELECT {COLUMNS} FROM movies"));
        push_filters(&mut builder, query);
        builder.push(" ORDER BY ");
        builder.push(order_expression(query.sort_field));
        builder.push(if query.sort_order.is_descending() {
            " DESC"
        } else {
            " ASC"
        });
        builder.push(" OFFSET ");
        builder.push_bind(query.offset());
        builder.push(" LIMIT ");
        builder.push_bind(query.limit);

        builder.build_query_as::<Movie>().fetch_all(pool).await
    }

    /// Count the movies matching a query plan's filters, ignoring its page
    /// window.
    pub async fn count(pool: &PgPool, query: &MovieQuery) -> Result<i64, sqlx::Error> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM movies");
        push_filters(&mut builder, query);
        builder.build_query_scalar::<i64>().fetch_one(pool).await
    }

    /// Movies flagged for the promotional carousel.
    pub async fn featured(pool: &PgPool) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE featured LIMIT $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(FEATURED_LIMIT)
            .fetch_all(pool)
            .await
    }

    /// Best numerically-rated movies, highest first.
    pub async fn top_rated(pool: &PgPool) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM movies
             WHERE {RATING_NUMERIC} >= $1
             ORDER BY {RATING_NUMERIC} DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(TOP_RATED_MIN_RATING)
            .bind(TOP_RATED_LIMIT)
            .fetch_all(pool)
            .await
    }

    /// Most recently added movies.
    pub async fn recent(pool: &PgPool) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY added_date DESC LIMIT $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(RECENT_LIMIT)
            .fetch_all(pool)
            .await
    }

    /// All movies added by one owner, newest first. Unpaginated.
    pub async fn list_by_owner(pool: &PgPool, email: &str) -> Result<Vec<Movie>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM movies WHERE added_by = $1 ORDER BY added_date DESC");
        sqlx::query_as::<_, Movie>(&query)
            .bind(email)
            .fetch_all(pool)
            .await
    }

    /// Fetch movies by ID set (watchlist resolution).
    pub async fn find_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = ANY($1)");
        sqlx::query_as::<_, Movie>(&query)
            .bind(ids.to_vec())
            .fetch_all(pool)
            .await
    }

    /// Update a movie. Only non-`None` fields in `input` are applied;
    /// ownership and the creation timestamp are not updatable.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMovie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let genre: Option<Vec<String>> = input.genre.clone().map(GenreInput::into_tags);
        let query = format!(
            "UPDATE movies SET
                title = COALESCE($2, title),
                genre = COALESCE($3, genre),
                release_year = COALESCE($4, release_year),
                director = COALESCE($5, director),
                cast_members = COALESCE($6, cast_members),
                plot_summary = COALESCE($7, plot_summary),
                poster_url = COALESCE($8, poster_url),
                rating = COALESCE($9, rating),
                featured = COALESCE($10, featured)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(genre)
            .bind(input.release_year)
            .bind(&input.director)
            .bind(&input.cast_members)
            .bind(&input.plot_summary)
            .bind(&input.poster_url)
            .bind(&input.rating)
            .bind(input.featured)
            .fetch_optional(pool)
            .await
    }

    /// Delete a movie by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Store a recomputed review average for one movie.
    pub async fn set_average_rating(
        pool: &PgPool,
        id: DbId,
        average: f64,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE movies SET average_rating = $2 WHERE id = $1")
            .bind(id)
            .bind(average)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count every movie in the catalog.
    pub async fn count_all(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM movies")
            .fetch_one(pool)
            .await
    }

    /// Raw `rating` values for the whole catalog, dirt included.
    ///
    /// The statistics aggregator coerces and filters these in memory; rows
    /// with a NULL rating come back as `None`.
    pub async fn rating_values(
        pool: &PgPool,
    ) -> Result<Vec<Option<serde_json::Value>>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<serde_json::Value>>("SELECT rating FROM movies")
            .fetch_all(pool)
            .await
    }

    /// Genre tag lists for the whole catalog, one entry per movie.
    pub async fn genre_rows(pool: &PgPool) -> Result<Vec<Vec<String>>, sqlx::Error> {
        sqlx::query_scalar::<_, Vec<String>>("SELECT genre FROM movies")
            .fetch_all(pool)
            .await
    }
}

// ---------------------------------------------------------------------------
// Predicate / sort helpers
// ---------------------------------------------------------------------------

/// Append the WHERE clause for a query plan: the AND of every supplied
/// predicate. Absent filters impose no constraint.
fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, query: &MovieQuery) {
    let mut sep = " WHERE ";

    if !query.genres.is_empty() {
        builder.push(sep);
        sep = " AND ";
        // Array overlap: set-membership on tags, never substring.
        builder.push("genre && ");
        builder.push_bind(query.genres.clone());
    }

    if let Some(min) = query.min_rating {
        builder.push(sep);
        sep = " AND ";
        builder.push(RATING_NUMERIC);
        builder.push(" >= ");
        builder.push_bind(min);
    }

    if let Some(max) = query.max_rating {
        builder.push(sep);
        sep = " AND ";
        builder.push(RATING_NUMERIC);
        builder.push(" <= ");
        builder.push_bind(max);
    }

    if let Some(search) = &query.search {
        builder.push(sep);
        let pattern = format!("%{}%", escape_like(search));
        builder.push("(title ILIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR director ILIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR cast_members ILIKE ");
        builder.push_bind(pattern);
        builder.push(")");
    }
}

/// Map a whitelisted sort field to its ORDER BY expression.
fn order_expression(field: SortField) -> &'static str {
    match field {
        SortField::AddedDate => "added_date",
        SortField::Title => "title",
        SortField::Rating => RATING_NUMERIC,
        SortField::AverageRating => "average_rating",
        SortField::ReleaseYear => "release_year",
    }
}

/// Escape LIKE metacharacters so a search term only ever matches literally.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_like_neutralizes_metacharacters() {
        assert_eq!(escape_like("100%_done"), "100\\%\\_done");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
        assert_eq!(escape_like("plain"), "plain");
    }

    #[test]
    fn rating_sort_uses_the_numeric_expression() {
        assert_eq!(order_expression(SortField::Rating), RATING_NUMERIC);
        assert_eq!(order_expression(SortField::AddedDate), "added_date");
    }
}

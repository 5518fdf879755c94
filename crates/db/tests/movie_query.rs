//! Repository-level tests for the movie listing query plan.
//!
//! Exercises filter combinations, the list/count pairing, sort, the page
//! window, and how dirty legacy ratings behave in numeric filters.

use movieverse_core::catalog::{MovieListParams, MovieQuery, SortField, SortOrder};
use movieverse_db::models::movie::NewMovie;
use movieverse_db::repositories::MovieRepo;
use serde_json::json;
use sqlx::PgPool;

fn new_movie(title: &str, genres: &[&str], rating: serde_json::Value, added_by: &str) -> NewMovie {
    NewMovie {
        title: title.to_string(),
        genre: genres.iter().map(|g| g.to_string()).collect(),
        release_year: 2020,
        director: "Director".to_string(),
        cast_members: Some("Lead Actor".to_string()),
        plot_summary: "Plot".to_string(),
        poster_url: "https://example.com/poster.png".to_string(),
        rating,
        featured: false,
        added_by: added_by.to_string(),
    }
}

fn default_query() -> MovieQuery {
    MovieQuery::from_params(&MovieListParams::default())
}

async fn seed(pool: &PgPool) {
    for (title, genres, rating) in [
        ("Alpha", &["Action", "Drama"][..], json!(8.5)),
        ("Beta", &["Drama"][..], json!(6.0)),
        ("Gamma", &["Comedy"][..], json!(4.5)),
        // Legacy dirt: a numeric string and a null-ish rating.
        ("Delta", &["Action"][..], json!("9.0")),
        ("Epsilon", &["Documentary"][..], json!(7.0)),
    ] {
        MovieRepo::create(pool, &new_movie(title, genres, rating, "seed@example.com"))
            .await
            .unwrap();
    }
}

fn titles(movies: &[movieverse_db::models::movie::Movie]) -> Vec<&str> {
    movies.iter().map(|m| m.title.as_str()).collect()
}

#[sqlx::test(migrations = "./migrations")]
async fn list_and_count_agree_for_every_filter_combination(pool: PgPool) {
    seed(&pool).await;

    let queries = [
        default_query(),
        MovieQuery {
            genres: vec!["Drama".to_string()],
            ..default_query()
        },
        MovieQuery {
            min_rating: Some(6.0),
            ..default_query()
        },
        MovieQuery {
            genres: vec!["Action".to_string(), "Comedy".to_string()],
            max_rating: Some(8.5),
            ..default_query()
        },
        MovieQuery {
            search: Some("alph".to_string()),
            min_rating: Some(1.0),
            ..default_query()
        },
    ];

    for query in queries {
        let movies = MovieRepo::list(&pool, &query).await.unwrap();
        let total = MovieRepo::count(&pool, &query).await.unwrap();
        assert_eq!(
            movies.len() as i64,
            total,
            "list/count mismatch for {query:?}"
        );

        for movie in &movies {
            if !query.genres.is_empty() {
                assert!(
                    movie.genre.iter().any(|g| query.genres.contains(g)),
                    "{} fails the genre predicate",
                    movie.title
                );
            }
            if let Some(min) = query.min_rating {
                let numeric = movie.rating.as_ref().and_then(|r| r.as_f64());
                assert!(numeric.is_some_and(|r| r >= min));
            }
            if let Some(max) = query.max_rating {
                let numeric = movie.rating.as_ref().and_then(|r| r.as_f64());
                assert!(numeric.is_some_and(|r| r <= max));
            }
        }
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn string_ratings_never_match_numeric_range_filters(pool: PgPool) {
    seed(&pool).await;

    // Delta stores "9.0" as a string; a minRating filter must not see it.
    let query = MovieQuery {
        min_rating: Some(8.0),
        ..default_query()
    };
    let movies = MovieRepo::list(&pool, &query).await.unwrap();
    assert_eq!(titles(&movies), vec!["Alpha"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn sort_by_title_ascending(pool: PgPool) {
    seed(&pool).await;

    let query = MovieQuery {
        sort_field: SortField::Title,
        sort_order: SortOrder::Asc,
        ..default_query()
    };
    let movies = MovieRepo::list(&pool, &query).await.unwrap();
    assert_eq!(
        titles(&movies),
        vec!["Alpha", "Beta", "Delta", "Epsilon", "Gamma"]
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn page_window_skips_and_limits(pool: PgPool) {
    seed(&pool).await;

    let query = MovieQuery {
        sort_field: SortField::Title,
        sort_order: SortOrder::Asc,
        page: 2,
        limit: 2,
        ..default_query()
    };
    let movies = MovieRepo::list(&pool, &query).await.unwrap();
    assert_eq!(titles(&movies), vec!["Delta", "Epsilon"]);

    // The pre-pagination total is unaffected by the window.
    let total = MovieRepo::count(&pool, &query).await.unwrap();
    assert_eq!(total, 5);
}

#[sqlx::test(migrations = "./migrations")]
async fn top_rated_ignores_string_ratings(pool: PgPool) {
    seed(&pool).await;

    // Alpha (8.5) qualifies; Delta's "9.0" is a string and does not.
    let movies = MovieRepo::top_rated(&pool).await.unwrap();
    assert_eq!(titles(&movies), vec!["Alpha"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn list_by_owner_is_scoped_and_newest_first(pool: PgPool) {
    MovieRepo::create(
        &pool,
        &new_movie("Mine One", &["Drama"], json!(5.0), "a@example.com"),
    )
    .await
    .unwrap();
    MovieRepo::create(
        &pool,
        &new_movie("Theirs", &["Drama"], json!(5.0), "b@example.com"),
    )
    .await
    .unwrap();
    MovieRepo::create(
        &pool,
        &new_movie("Mine Two", &["Drama"], json!(5.0), "a@example.com"),
    )
    .await
    .unwrap();

    let movies = MovieRepo::list_by_owner(&pool, "a@example.com").await.unwrap();
    assert_eq!(titles(&movies), vec!["Mine Two", "Mine One"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn update_applies_only_supplied_fields(pool: PgPool) {
    let created = MovieRepo::create(
        &pool,
        &new_movie("Fixed", &["Drama"], json!(5.0), "a@example.com"),
    )
    .await
    .unwrap();

    let patch = movieverse_db::models::movie::UpdateMovie {
        title: Some("Renamed".to_string()),
        genre: None,
        release_year: None,
        director: None,
        cast_members: None,
        plot_summary: None,
        poster_url: None,
        rating: None,
        featured: Some(true),
    };
    let updated = MovieRepo::update(&pool, created.id, &patch)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.title, "Renamed");
    assert!(updated.featured);
    // Untouched fields survive.
    assert_eq!(updated.genre, vec!["Drama"]);
    assert_eq!(updated.added_by, "a@example.com");
    assert_eq!(updated.rating, Some(json!(5.0)));
}

#[sqlx::test(migrations = "./migrations")]
async fn rating_values_and_genre_rows_cover_the_catalog(pool: PgPool) {
    seed(&pool).await;

    let ratings = MovieRepo::rating_values(&pool).await.unwrap();
    assert_eq!(ratings.len(), 5);

    let genres = MovieRepo::genre_rows(&pool).await.unwrap();
    assert_eq!(genres.len(), 5);
    assert!(genres.iter().any(|g| g.len() == 2));
}

//! Repository for the `users` table.

use sqlx::PgPool;

use crate::models::user::{CreateUserProfile, User};

const COLUMNS: &str = "id, uid, name, email, photo_url, created_at, last_login";

/// Provides profile lookup and login bookkeeping.
pub struct UserRepo;

impl UserRepo {
    /// Find a user by identity-provider uid.
    pub async fn find_by_uid(pool: &PgPool, uid: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE uid = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(uid)
            .fetch_optional(pool)
            .await
    }

    /// Insert a profile for a first-time login, returning the created row.
    ///
    /// Two concurrent first logins race to insert; the loser lands on the
    /// `uq_users_uid` conflict branch and just records the login.
    pub async fn create(
        pool: &PgPool,
        uid: &str,
        profile: &CreateUserProfile,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (uid, name, email, photo_url)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT ON CONSTRAINT uq_users_uid
             DO UPDATE SET last_login = now()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(uid)
            .bind(&profile.name)
            .bind(&profile.email)
            .bind(&profile.photo_url)
            .fetch_one(pool)
            .await
    }

    /// Bump `last_login` for a returning user, returning the updated row.
    pub async fn touch_last_login(pool: &PgPool, uid: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET last_login = now() WHERE uid = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(uid)
            .fetch_optional(pool)
            .await
    }
}

use crate::auth::password::PasswordHasher;
use crate::auth::Credentials;
use crate::error::AppError;
use crate::models::User;
use sqlx::PgPool;
use std::sync::Arc;

/// Identity component: owns user records, credential hashing, and
/// credential validation. Built once at startup with the pool handle and a
/// hasher, then shared with handlers through `web::Data`.
pub struct UserRepository {
    pool: PgPool,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserRepository {
    pub fn new(pool: PgPool, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { pool, hasher }
    }

    /// Creates a new user with a freshly generated salt and the salted hash
    /// of the supplied password. A duplicate username surfaces as
    /// `AppError::Conflict` via the storage layer's uniqueness constraint;
    /// any other persistence failure surfaces as an internal error.
    pub async fn sign_up(&self, credentials: &Credentials) -> Result<User, AppError> {
        let salt = self.hasher.generate_salt();
        let password_hash = self.hasher.hash_password(&credentials.password, &salt)?;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, password_hash, salt)
             VALUES ($1, $2, $3)
             RETURNING id, username, password_hash, salt, created_at",
        )
        .bind(&credentials.username)
        .bind(&password_hash)
        .bind(&salt)
        .fetch_one(&self.pool)
        .await?;

        log::info!("Registered new user {}", user.username);
        Ok(user)
    }

    /// Checks the supplied credentials against the stored salted hash.
    ///
    /// A pure read-only check: an unknown username and a wrong password
    /// both collapse to `Ok(None)` so callers cannot distinguish the two
    /// cases. The uniform failure message is the caller's responsibility.
    pub async fn validate_credentials(
        &self,
        credentials: &Credentials,
    ) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash, salt, created_at
             FROM users WHERE username = $1",
        )
        .bind(&credentials.username)
        .fetch_optional(&self.pool)
        .await?;

        match user {
            Some(user) if user.validate_password(&credentials.password, self.hasher.as_ref())? => {
                Ok(Some(user))
            }
            _ => Ok(None),
        }
    }
}

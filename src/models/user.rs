use crate::auth::password::PasswordHasher;
use crate::error::AppError;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A user record as stored in the database. Deliberately not `Serialize`:
/// the hash and salt never leave the backend.
#[derive(Debug, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub salt: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Recomputes the salted hash of `password` with this user's stored
    /// salt and compares it against the stored hash. This equality check is
    /// the sole basis of authentication; no plaintext is ever compared.
    pub fn validate_password(
        &self,
        password: &str,
        hasher: &dyn PasswordHasher,
    ) -> Result<bool, AppError> {
        let computed = hasher.hash_password(password, &self.salt)?;
        Ok(computed == self.password_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Deterministic stand-in for the bcrypt hasher, injected the same way
    // production code injects the real one.
    struct FakeHasher;

    impl PasswordHasher for FakeHasher {
        fn generate_salt(&self) -> String {
            "TestSalt".to_string()
        }

        fn hash_password(&self, password: &str, salt: &str) -> Result<String, AppError> {
            Ok(format!("{}:{}", password, salt))
        }
    }

    fn test_user(password_hash: &str) -> User {
        User {
            id: 1,
            username: "TestUsername".to_string(),
            password_hash: password_hash.to_string(),
            salt: "TestSalt".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_returns_true_as_password_is_valid() {
        let user = test_user("123456:TestSalt");
        assert!(user.validate_password("123456", &FakeHasher).unwrap());
    }

    #[test]
    fn test_returns_false_as_password_is_invalid() {
        let user = test_user("123456:TestSalt");
        assert!(!user.validate_password("234567", &FakeHasher).unwrap());
    }
}

use crate::error::AppError;
use uuid::Uuid;

/// The hashing seam between the identity component and the crypto crate.
/// Hashing must be deterministic per (password, salt) pair so the same
/// function serves both sign-up and validation; tests substitute a
/// deterministic fake.
pub trait PasswordHasher: Send + Sync {
    /// Produces a fresh random salt for a new user. Generated once at
    /// sign-up and never changed afterwards.
    fn generate_salt(&self) -> String;

    /// Computes the one-way salted hash of `password`.
    fn hash_password(&self, password: &str, salt: &str) -> Result<String, AppError>;
}

/// bcrypt-backed implementation. The salt is carried as a UUID string whose
/// 16 bytes feed bcrypt directly, so recomputing with the stored salt and
/// the fixed cost yields the exact stored hash string.
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptHasher {
    fn generate_salt(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }

    fn hash_password(&self, password: &str, salt: &str) -> Result<String, AppError> {
        let salt_bytes = Uuid::parse_str(salt)
            .map_err(|e| AppError::InternalServerError(format!("Invalid salt: {}", e)))?
            .into_bytes();
        bcrypt::hash_with_salt(password, self.cost, salt_bytes)
            .map(|parts| parts.to_string())
            .map_err(|e| AppError::InternalServerError(format!("Failed to hash password: {}", e)))
    }
}

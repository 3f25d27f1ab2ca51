pub mod extractors;
pub mod middleware;
pub mod password;
pub mod token;
pub mod users;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

// Re-export necessary items
pub use extractors::AuthenticatedUser;
pub use middleware::AuthMiddleware;
pub use password::{BcryptHasher, PasswordHasher};
pub use token::{generate_token, verify_token, Claims};
pub use users::UserRepository;

lazy_static! {
    // Regex for username validation: alphanumeric, underscores, hyphens
    static ref USERNAME_REGEX: regex::Regex = regex::Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap();
}

/// Username/password pair used for both sign-up and sign-in.
#[derive(Debug, Deserialize, Validate)]
pub struct Credentials {
    /// Must be between 4 and 20 characters, alphanumeric, and can include
    /// underscores or hyphens.
    #[validate(
        length(min = 4, max = 20),
        regex(
            path = "USERNAME_REGEX",
            message = "Username must be alphanumeric, underscores, or hyphens"
        )
    )]
    pub username: String,
    /// Must be 8 to 20 characters and mix upper case, lower case, and a
    /// digit or special character.
    #[validate(length(min = 8, max = 20), custom = "validate_password_strength")]
    pub password: String,
}

/// The password policy from the original deployment: at least one upper
/// case letter, one lower case letter, and one digit or non-alphanumeric
/// character. Implemented as a function because the regex crate has no
/// lookahead.
fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_digit_or_special = password.chars().any(|c| c.is_numeric() || !c.is_alphanumeric());

    if has_upper && has_lower && has_digit_or_special {
        Ok(())
    } else {
        let mut error = ValidationError::new("password_strength");
        error.message = Some("Password too weak".into());
        Err(error)
    }
}

/// Response structure after successful authentication (sign-up or sign-in).
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The JWT for session authentication.
    pub token: String,
    /// The unique identifier of the authenticated user.
    pub user_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_credentials_validation() {
        let valid = Credentials {
            username: "test_user-123".to_string(),
            password: "Password123".to_string(),
        };
        assert!(valid.validate().is_ok());

        let invalid_username = Credentials {
            username: "test user!".to_string(), // Contains space and exclamation
            password: "Password123".to_string(),
        };
        assert!(invalid_username.validate().is_err());

        let short_username = Credentials {
            username: "tu".to_string(),
            password: "Password123".to_string(),
        };
        assert!(short_username.validate().is_err());

        let long_username = Credentials {
            username: "a".repeat(21),
            password: "Password123".to_string(),
        };
        assert!(long_username.validate().is_err());

        let short_password = Credentials {
            username: "test_user".to_string(),
            password: "Pw1".to_string(),
        };
        assert!(short_password.validate().is_err());
    }

    #[test]
    fn test_password_strength() {
        // Special character instead of a digit is also acceptable
        assert!(validate_password_strength("Password!").is_ok());
        assert!(validate_password_strength("Password1").is_ok());

        // No upper case
        assert!(validate_password_strength("password123").is_err());
        // No lower case
        assert!(validate_password_strength("PASSWORD123").is_err());
        // Letters only
        assert!(validate_password_strength("PasswordOnly").is_err());
    }
}

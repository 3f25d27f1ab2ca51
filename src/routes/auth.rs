use crate::{
    auth::{generate_token, AuthResponse, Credentials, UserRepository},
    error::AppError,
};
use actix_web::{post, web, HttpResponse, Responder};
use validator::Validate;

/// Register a new user
///
/// Creates a new user account and returns an authentication token. A
/// duplicate username is a 409; the uniqueness check is delegated to the
/// storage layer's constraint rather than a racy pre-query.
#[post("/signup")]
pub async fn signup(
    users: web::Data<UserRepository>,
    credentials: web::Json<Credentials>,
) -> Result<impl Responder, AppError> {
    credentials.validate()?;

    let user = users.sign_up(&credentials).await?;
    let token = generate_token(user.id, &user.username)?;

    Ok(HttpResponse::Created().json(AuthResponse {
        token,
        user_id: user.id,
    }))
}

/// Sign in an existing user
///
/// Validates the supplied credentials and returns an authentication token.
/// An unknown username and a wrong password produce the same 401 response
/// so callers cannot enumerate accounts.
#[post("/signin")]
pub async fn signin(
    users: web::Data<UserRepository>,
    credentials: web::Json<Credentials>,
) -> Result<impl Responder, AppError> {
    credentials.validate()?;

    match users.validate_credentials(&credentials).await? {
        Some(user) => {
            let token = generate_token(user.id, &user.username)?;
            Ok(HttpResponse::Ok().json(AuthResponse {
                token,
                user_id: user.id,
            }))
        }
        None => Err(AppError::Unauthorized("Invalid credentials".into())),
    }
}

use actix_web::dev::Payload;
use actix_web::{Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};

use crate::auth::token::Claims;
use crate::error::AppError;

/// Extracts the authenticated caller's identity from request extensions.
///
/// Intended for routes protected by `AuthMiddleware`, which validates the
/// JWT and inserts the verified `Claims` into request extensions. Every
/// task operation takes this identity to scope queries and mutations to
/// the caller's own records.
///
/// If no claims are present (e.g. the middleware did not run), the
/// extractor returns `AppError::Unauthorized`.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: i32,
    pub username: String,
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<Claims>().cloned() {
            Some(claims) => ready(Ok(AuthenticatedUser {
                id: claims.sub,
                username: claims.username,
            })),
            None => {
                // Unreachable when AuthMiddleware is correctly applied;
                // Unauthorized is the safe default if it is not.
                let err = AppError::Unauthorized(
                    "Caller identity not found in request. Ensure AuthMiddleware is active."
                        .to_string(),
                );
                ready(Err(err.into()))
            }
        }
    }
}

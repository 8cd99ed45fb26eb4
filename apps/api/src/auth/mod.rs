// Credential management: Argon2 password hashing, HS256 bearer tokens,
// the Axum bearer-token extractor and the register/login/me handlers.

pub mod extractor;
pub mod handlers;
pub mod password;
pub mod tokens;

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::{User, UserRole};

/// Resolves a token-asserted user id against the store. A dangling id means
/// the token outlived its account, so it reads as unauthorized.
pub async fn require_user(db: &PgPool, user_id: Uuid) -> Result<User, AppError> {
    User::find_by_id(db, user_id)
        .await?
        .ok_or(AppError::Unauthorized)
}

/// Like `require_user`, but forbids non-student roles.
pub async fn require_student(db: &PgPool, user_id: Uuid) -> Result<User, AppError> {
    let user = require_user(db, user_id).await?;
    if user.role != UserRole::Student {
        return Err(AppError::Forbidden);
    }
    Ok(user)
}

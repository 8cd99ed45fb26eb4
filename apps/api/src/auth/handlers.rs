use axum::{extract::State, Json};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::auth::extractor::AuthUser;
use crate::auth::password::{hash_password, verify_password};
use crate::auth::require_user;
use crate::errors::AppError;
use crate::models::profile::StudentProfile;
use crate::models::user::{Language, NewUser, User, UserRole};
use crate::state::AppState;

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: UserRole,
    #[serde(default)]
    pub preferred_language: Language,
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response for register and login: a bearer token plus the public user view.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub user: User,
}

fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

fn validate_registration(req: &RegisterRequest) -> Result<(), AppError> {
    if !is_valid_email(&req.email) {
        return Err(AppError::Validation("Invalid email address".into()));
    }
    if req.password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(
            "Password must be at least 6 characters long".into(),
        ));
    }
    if req.full_name.trim().is_empty() {
        return Err(AppError::Validation("Full name is required".into()));
    }
    Ok(())
}

/// POST /api/auth/register
pub async fn handle_register(
    State(state): State<AppState>,
    Json(mut req): Json<RegisterRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    req.email = req.email.trim().to_lowercase();
    validate_registration(&req)?;

    if User::find_by_email(&state.db, &req.email).await?.is_some() {
        warn!(email = %req.email, "registration with taken email");
        return Err(AppError::Conflict("Email already registered".into()));
    }

    let password_hash = hash_password(&req.password)?;
    let user = User::create(
        &state.db,
        NewUser {
            email: &req.email,
            full_name: &req.full_name,
            role: req.role,
            preferred_language: req.preferred_language,
            phone: req.phone.as_deref(),
            password_hash: &password_hash,
        },
    )
    .await
    .map_err(|e| {
        // Unique-index race with a concurrent registration of the same email.
        if e.as_database_error()
            .map(|d| d.is_unique_violation())
            .unwrap_or(false)
        {
            AppError::Conflict("Email already registered".into())
        } else {
            AppError::Database(e)
        }
    })?;

    if user.role == UserRole::Student {
        StudentProfile::create_empty(&state.db, user.id).await?;
    }

    let access_token = state.auth.issue(user.id)?;
    info!(user_id = %user.id, role = ?user.role, "user registered");

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer",
        user,
    }))
}

/// POST /api/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(mut req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    req.email = req.email.trim().to_lowercase();

    // Unknown email and wrong password are indistinguishable to the caller.
    let user = User::find_by_email(&state.db, &req.email)
        .await?
        .ok_or(AppError::Unauthorized)?;

    if !verify_password(&req.password, &user.password_hash) {
        warn!(user_id = %user.id, "login with invalid password");
        return Err(AppError::Unauthorized);
    }

    let access_token = state.auth.issue(user.id)?;
    info!(user_id = %user.id, "user logged in");

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer",
        user,
    }))
}

/// GET /api/auth/me
pub async fn handle_me(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<User>, AppError> {
    let user = require_user(&state.db, user_id).await?;
    Ok(Json(user))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_request(email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            full_name: "Test Student".to_string(),
            role: UserRole::Student,
            preferred_language: Language::En,
            phone: None,
        }
    }

    #[test]
    fn six_char_password_is_boundary_valid() {
        assert!(validate_registration(&register_request("s@edu.org", "abc123")).is_ok());
    }

    #[test]
    fn five_char_password_is_rejected() {
        let err = validate_registration(&register_request("s@edu.org", "abc12")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["", "plain", "a@b", "a b@c.org", "@c.org"] {
            let err = validate_registration(&register_request(email, "abc123")).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "{email}");
        }
    }

    #[test]
    fn blank_full_name_is_rejected() {
        let mut req = register_request("s@edu.org", "abc123");
        req.full_name = "   ".to_string();
        assert!(validate_registration(&req).is_err());
    }

    #[test]
    fn token_response_exposes_no_password_hash() {
        let user = User {
            id: uuid::Uuid::new_v4(),
            email: "s@edu.org".into(),
            full_name: "Test Student".into(),
            role: UserRole::Student,
            preferred_language: Language::En,
            phone: None,
            password_hash: "$argon2id$hidden".into(),
            is_active: true,
            created_at: chrono::Utc::now(),
        };
        let response = TokenResponse {
            access_token: "tok".into(),
            token_type: "bearer",
            user,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"token_type\":\"bearer\""));
        assert!(!json.contains("argon2id"));
    }
}

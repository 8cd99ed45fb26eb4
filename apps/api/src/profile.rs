use axum::{extract::State, Json};
use tracing::info;

use crate::auth::extractor::AuthUser;
use crate::auth::require_student;
use crate::errors::AppError;
use crate::models::profile::{StudentProfile, StudentProfileUpdate};
use crate::state::AppState;

/// GET /api/profile/student
pub async fn handle_get_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<StudentProfile>, AppError> {
    let user = require_student(&state.db, user_id).await?;
    let profile = StudentProfile::find_by_user(&state.db, user.id)
        .await?
        .ok_or_else(|| AppError::NotFound("Student profile not found".into()))?;
    Ok(Json(profile))
}

/// PUT /api/profile/student
///
/// Upsert keyed on the token's user id; the payload cannot retarget another
/// user's profile.
pub async fn handle_update_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(update): Json<StudentProfileUpdate>,
) -> Result<Json<StudentProfile>, AppError> {
    let user = require_student(&state.db, user_id).await?;
    let profile = StudentProfile::upsert(&state.db, user.id, &update).await?;
    info!(user_id = %user.id, "student profile updated");
    Ok(Json(profile))
}

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::auth::extractor::AuthUser;
use crate::auth::require_user;
use crate::errors::AppError;
use crate::models::profile::StudentProfile;
use crate::models::recommendation::CareerRecommendation;
use crate::models::user::{User, UserRole};
use crate::state::AppState;

/// GET /api/dashboard/stats
///
/// Role-aware statistics. The shape varies by role, so the payload is built
/// as loose JSON rather than one struct per role.
pub async fn handle_stats(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Value>, AppError> {
    let user = require_user(&state.db, user_id).await?;

    let stats = match user.role {
        UserRole::Student => {
            let recommendations_received =
                CareerRecommendation::count_by_user(&state.db, user.id).await?;
            let profile_completion = StudentProfile::find_by_user(&state.db, user.id)
                .await?
                .map(|p| p.completion_percentage())
                .unwrap_or(0);
            json!({
                "role": user.role,
                "recommendations_received": recommendations_received,
                "profile_completion": profile_completion,
            })
        }
        UserRole::Counselor => {
            let total_students = User::count_by_role(&state.db, UserRole::Student).await?;
            json!({
                "role": user.role,
                "total_students": total_students,
            })
        }
        _ => json!({ "role": user.role }),
    };

    Ok(Json(stats))
}

use axum::{extract::State, Json};
use tracing::info;

use crate::auth::extractor::AuthUser;
use crate::errors::AppError;
use crate::models::recommendation::{CareerRecommendation, CareerRecommendationRequest};
use crate::state::AppState;

const HISTORY_LIMIT: i64 = 10;

/// POST /api/career/recommendations
///
/// The advisor itself never fails; only persistence can error here.
pub async fn handle_recommend(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(request): Json<CareerRecommendationRequest>,
) -> Result<Json<CareerRecommendation>, AppError> {
    let entries = state.advisor.recommend(&request).await;
    let record = CareerRecommendation::insert(&state.db, user_id, &request, &entries).await?;
    info!(
        user_id = %user_id,
        recommendation_id = %record.id,
        entries = entries.len(),
        "recommendations stored"
    );
    Ok(Json(record))
}

/// GET /api/career/recommendations/history
pub async fn handle_history(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<CareerRecommendation>>, AppError> {
    let records = CareerRecommendation::list_by_user(&state.db, user_id, HISTORY_LIMIT).await?;
    Ok(Json(records))
}

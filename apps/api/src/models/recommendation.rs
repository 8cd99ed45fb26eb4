use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// Input for a recommendation run. Not persisted on its own; embedded
/// verbatim into the resulting record for audit/history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerRecommendationRequest {
    pub interests: Vec<String>,
    pub academic_level: String,
    pub subjects: Vec<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub career_goals: Vec<String>,
}

/// One recommended career, either model-generated or from the fallback set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationEntry {
    pub career_title: String,
    pub description: String,
    pub education_path: String,
    pub local_opportunities: String,
    pub skills_needed: Vec<String>,
    pub salary_range: String,
    pub growth_prospects: String,
    pub match_percentage: i32,
}

/// Persisted recommendation run. Immutable once created; queryable by owner,
/// newest-first.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CareerRecommendation {
    pub id: Uuid,
    pub user_id: Uuid,
    pub request_data: Json<CareerRecommendationRequest>,
    pub recommendations: Json<Vec<RecommendationEntry>>,
    pub created_at: DateTime<Utc>,
}

impl CareerRecommendation {
    pub async fn insert(
        db: &PgPool,
        user_id: Uuid,
        request: &CareerRecommendationRequest,
        entries: &[RecommendationEntry],
    ) -> Result<CareerRecommendation, sqlx::Error> {
        sqlx::query_as::<_, CareerRecommendation>(
            r#"
            INSERT INTO career_recommendations (id, user_id, request_data, recommendations)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, request_data, recommendations, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(Json(request))
        .bind(Json(entries))
        .fetch_one(db)
        .await
    }

    pub async fn list_by_user(
        db: &PgPool,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<CareerRecommendation>, sqlx::Error> {
        sqlx::query_as::<_, CareerRecommendation>(
            r#"
            SELECT id, user_id, request_data, recommendations, created_at
            FROM career_recommendations
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(db)
        .await
    }

    pub async fn count_by_user(db: &PgPool, user_id: Uuid) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM career_recommendations WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_one(db)
        .await
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

pub const UNSPECIFIED_ACADEMIC_LEVEL: &str = "Not specified";

/// Student academic profile, one-to-one with a student-role user.
/// Created empty at registration and filled in via profile updates.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StudentProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub academic_level: String,
    pub subjects: Vec<String>,
    pub interests: Vec<String>,
    pub career_goals: Vec<String>,
    pub strengths: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Client-supplied profile fields. The owning user id always comes from the
/// bearer token, never from the payload.
#[derive(Debug, Deserialize)]
pub struct StudentProfileUpdate {
    #[serde(default = "default_academic_level")]
    pub academic_level: String,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub career_goals: Vec<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
}

fn default_academic_level() -> String {
    UNSPECIFIED_ACADEMIC_LEVEL.to_string()
}

impl StudentProfile {
    pub async fn find_by_user(
        db: &PgPool,
        user_id: Uuid,
    ) -> Result<Option<StudentProfile>, sqlx::Error> {
        sqlx::query_as::<_, StudentProfile>(
            r#"
            SELECT id, user_id, academic_level, subjects, interests,
                   career_goals, strengths, created_at
            FROM student_profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(db)
        .await
    }

    /// Creates the empty profile attached to a freshly registered student.
    pub async fn create_empty(db: &PgPool, user_id: Uuid) -> Result<StudentProfile, sqlx::Error> {
        sqlx::query_as::<_, StudentProfile>(
            r#"
            INSERT INTO student_profiles (id, user_id)
            VALUES ($1, $2)
            RETURNING id, user_id, academic_level, subjects, interests,
                      career_goals, strengths, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .fetch_one(db)
        .await
    }

    /// Upsert keyed on `user_id`: inserts the profile if the registration-time
    /// row is missing, otherwise overwrites the editable fields.
    pub async fn upsert(
        db: &PgPool,
        user_id: Uuid,
        update: &StudentProfileUpdate,
    ) -> Result<StudentProfile, sqlx::Error> {
        sqlx::query_as::<_, StudentProfile>(
            r#"
            INSERT INTO student_profiles
                (id, user_id, academic_level, subjects, interests, career_goals, strengths)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (user_id) DO UPDATE SET
                academic_level = EXCLUDED.academic_level,
                subjects = EXCLUDED.subjects,
                interests = EXCLUDED.interests,
                career_goals = EXCLUDED.career_goals,
                strengths = EXCLUDED.strengths
            RETURNING id, user_id, academic_level, subjects, interests,
                      career_goals, strengths, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&update.academic_level)
        .bind(&update.subjects)
        .bind(&update.interests)
        .bind(&update.career_goals)
        .bind(&update.strengths)
        .fetch_one(db)
        .await
    }

    /// Share of the five editable fields that have been filled in, as a
    /// 0-100 percentage for the dashboard.
    pub fn completion_percentage(&self) -> u32 {
        let mut filled = 0u32;
        if self.academic_level != UNSPECIFIED_ACADEMIC_LEVEL && !self.academic_level.is_empty() {
            filled += 1;
        }
        for list in [
            &self.subjects,
            &self.interests,
            &self.career_goals,
            &self.strengths,
        ] {
            if !list.is_empty() {
                filled += 1;
            }
        }
        filled * 100 / 5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(academic_level: &str, lists: [Vec<String>; 4]) -> StudentProfile {
        let [subjects, interests, career_goals, strengths] = lists;
        StudentProfile {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            academic_level: academic_level.to_string(),
            subjects,
            interests,
            career_goals,
            strengths,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn empty_profile_scores_zero() {
        let p = profile(UNSPECIFIED_ACADEMIC_LEVEL, Default::default());
        assert_eq!(p.completion_percentage(), 0);
    }

    #[test]
    fn full_profile_scores_hundred() {
        let p = profile(
            "12th",
            [
                vec!["Math".into()],
                vec!["Coding".into()],
                vec!["Engineer".into()],
                vec!["Logic".into()],
            ],
        );
        assert_eq!(p.completion_percentage(), 100);
    }

    #[test]
    fn partial_profile_scores_in_between() {
        let p = profile(
            "Graduate",
            [vec!["Biology".into()], vec![], vec![], vec![]],
        );
        assert_eq!(p.completion_percentage(), 40);
    }

    #[test]
    fn update_defaults_match_registration_state() {
        let update: StudentProfileUpdate = serde_json::from_str("{}").unwrap();
        assert_eq!(update.academic_level, UNSPECIFIED_ACADEMIC_LEVEL);
        assert!(update.subjects.is_empty());
        assert!(update.strengths.is_empty());
    }
}

// Prompt constants and builders for the career advisor. All provider calls
// made by this module use SYSTEM_PROMPT plus a per-request user prompt.

use crate::models::recommendation::CareerRecommendationRequest;

/// System instruction binding the model to the counseling domain.
pub const SYSTEM_PROMPT: &str = "You are an expert career counselor specializing in \
    education and career guidance in the Kashmir region. Provide personalized, practical \
    career recommendations based on user input. Focus on opportunities available in Kashmir \
    and nearby regions, including traditional careers, emerging fields, and entrepreneurship \
    opportunities. Always provide specific, actionable advice.";

/// The response-shape contract appended to every recommendation prompt.
/// The parser in `extract.rs` depends on the `recommendations` array and
/// the entry field names below.
const RESPONSE_FORMAT: &str = r#"Please provide:
1. Top 5 career recommendations with detailed explanations
2. Educational pathways for each career
3. Local opportunities in Kashmir/India
4. Skills to develop
5. Expected salary ranges
6. Growth prospects

Format your response as a structured JSON with the following structure:
{
    "recommendations": [
        {
            "career_title": "Career Name",
            "description": "Detailed description",
            "education_path": "Required education",
            "local_opportunities": "Opportunities in Kashmir/nearby regions",
            "skills_needed": ["skill1", "skill2"],
            "salary_range": "Expected salary range",
            "growth_prospects": "Career growth information",
            "match_percentage": 85
        }
    ]
}"#;

/// Builds the per-request user prompt from a validated request.
pub fn build_recommendation_prompt(request: &CareerRecommendationRequest) -> String {
    format!(
        "Please provide career recommendations for a student with the following profile:\n\n\
         Academic Level: {}\n\
         Subjects: {}\n\
         Interests: {}\n\
         Strengths: {}\n\
         Career Goals: {}\n\n\
         {}",
        request.academic_level,
        request.subjects.join(", "),
        request.interests.join(", "),
        join_or(&request.strengths, "Not specified"),
        join_or(&request.career_goals, "Exploring options"),
        RESPONSE_FORMAT,
    )
}

fn join_or(items: &[String], sentinel: &str) -> String {
    if items.is_empty() {
        sentinel.to_string()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CareerRecommendationRequest {
        CareerRecommendationRequest {
            interests: vec!["coding".into(), "design".into()],
            academic_level: "12th".into(),
            subjects: vec!["Math".into(), "Physics".into()],
            strengths: vec![],
            career_goals: vec![],
        }
    }

    #[test]
    fn prompt_embeds_profile_fields() {
        let prompt = build_recommendation_prompt(&request());
        assert!(prompt.contains("Academic Level: 12th"));
        assert!(prompt.contains("Subjects: Math, Physics"));
        assert!(prompt.contains("Interests: coding, design"));
    }

    #[test]
    fn empty_optional_fields_use_sentinels() {
        let prompt = build_recommendation_prompt(&request());
        assert!(prompt.contains("Strengths: Not specified"));
        assert!(prompt.contains("Career Goals: Exploring options"));
    }

    #[test]
    fn populated_optional_fields_are_joined() {
        let mut req = request();
        req.strengths = vec!["Logic".into(), "Patience".into()];
        req.career_goals = vec!["Engineer".into()];
        let prompt = build_recommendation_prompt(&req);
        assert!(prompt.contains("Strengths: Logic, Patience"));
        assert!(prompt.contains("Career Goals: Engineer"));
    }

    #[test]
    fn prompt_demands_the_json_contract() {
        let prompt = build_recommendation_prompt(&request());
        assert!(prompt.contains("\"recommendations\""));
        assert!(prompt.contains("\"career_title\""));
        assert!(prompt.contains("\"match_percentage\""));
    }
}

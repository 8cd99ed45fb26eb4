//! Deterministic fallback recommendations — the availability guarantee when
//! the provider path cannot produce a usable result. Always returns the same
//! three careers; interests only reorder the set, never filter it.

use crate::models::recommendation::{CareerRecommendationRequest, RecommendationEntry};

const TECHNOLOGY_KEYWORDS: &[&str] = &["computer", "technology", "coding", "programming"];
const BUSINESS_KEYWORDS: &[&str] = &["marketing", "business", "creative"];
const HEALTH_KEYWORDS: &[&str] = &["health", "medical", "biology", "helping"];

// Baseline order: software, marketing, healthcare.
const SOFTWARE: usize = 0;
const MARKETING: usize = 1;
const HEALTHCARE: usize = 2;

/// Returns the fixed three-entry set, reordered by the request's interests.
/// When several keyword categories match at once, the first category in
/// fixed priority order wins: technology, then business, then health.
pub fn fallback_recommendations(
    request: &CareerRecommendationRequest,
) -> Vec<RecommendationEntry> {
    let careers = baseline_careers();
    let interests: Vec<String> = request
        .interests
        .iter()
        .map(|i| i.trim().to_lowercase())
        .collect();
    let matches_any = |keywords: &[&str]| {
        interests
            .iter()
            .any(|interest| keywords.contains(&interest.as_str()))
    };

    let order: [usize; 3] = if matches_any(TECHNOLOGY_KEYWORDS) {
        [SOFTWARE, MARKETING, HEALTHCARE]
    } else if matches_any(BUSINESS_KEYWORDS) {
        [MARKETING, SOFTWARE, HEALTHCARE]
    } else if matches_any(HEALTH_KEYWORDS) {
        [HEALTHCARE, SOFTWARE, MARKETING]
    } else {
        [SOFTWARE, MARKETING, HEALTHCARE]
    };

    order.into_iter().map(|i| careers[i].clone()).collect()
}

fn baseline_careers() -> [RecommendationEntry; 3] {
    [
        RecommendationEntry {
            career_title: "Software Development".into(),
            description: "Design and develop software applications, websites, and systems".into(),
            education_path: "Bachelor's in Computer Science or related field".into(),
            local_opportunities: "Growing IT sector in Srinagar, remote work opportunities".into(),
            skills_needed: vec![
                "Programming".into(),
                "Problem-solving".into(),
                "Logical thinking".into(),
            ],
            salary_range: "₹3-15 LPA".into(),
            growth_prospects: "High demand, excellent growth potential".into(),
            match_percentage: 75,
        },
        RecommendationEntry {
            career_title: "Digital Marketing".into(),
            description: "Promote businesses and products through digital channels".into(),
            education_path: "Any graduation + Digital Marketing courses".into(),
            local_opportunities: "Tourism, handicrafts, local businesses need digital presence"
                .into(),
            skills_needed: vec![
                "Creativity".into(),
                "Analytics".into(),
                "Communication".into(),
            ],
            salary_range: "₹2-8 LPA".into(),
            growth_prospects: "Growing field with entrepreneurship opportunities".into(),
            match_percentage: 70,
        },
        RecommendationEntry {
            career_title: "Healthcare Professional".into(),
            description: "Provide medical care and health services to communities".into(),
            education_path: "Medical degree (MBBS/BDS) or allied health courses".into(),
            local_opportunities: "Government hospitals, private clinics, healthcare startups"
                .into(),
            skills_needed: vec![
                "Empathy".into(),
                "Science knowledge".into(),
                "Problem-solving".into(),
            ],
            salary_range: "₹5-25 LPA".into(),
            growth_prospects: "Always in demand, respect in society".into(),
            match_percentage: 80,
        },
    ]
}

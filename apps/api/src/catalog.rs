//! Curated lookup data: scholarships and nearby institutions. Served from
//! static tables for now; the handlers keep the query/filter surface so a
//! database-backed catalog can slot in behind them later.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::auth::extractor::AuthUser;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct Scholarship {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub amount: &'static str,
    pub eligibility: &'static str,
    pub category: &'static str,
    pub deadline: &'static str,
    pub provider: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Institution {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub location: &'static str,
    pub distance: &'static str,
    pub courses: &'static [&'static str],
    pub rating: f32,
    pub contact: &'static str,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScholarshipFilter {
    pub category: Option<String>,
    pub eligibility: Option<String>,
}

/// Accepted for interface stability; the curated list is not yet
/// geo-indexed, so the values do not narrow the result.
#[derive(Debug, Deserialize)]
pub struct NearbyQuery {
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
    #[serde(default = "default_radius_km")]
    pub radius: u32,
}

// Srinagar
fn default_latitude() -> f64 {
    34.0837
}
fn default_longitude() -> f64 {
    74.7973
}
fn default_radius_km() -> u32 {
    50
}

fn scholarships() -> Vec<Scholarship> {
    vec![
        Scholarship {
            id: "1",
            title: "Kashmir Merit Scholarship",
            description: "For meritorious students from Kashmir region",
            amount: "₹50,000 per year",
            eligibility: "12th pass with 85%+ marks",
            category: "merit",
            deadline: "2024-03-31",
            provider: "J&K Government",
        },
        Scholarship {
            id: "2",
            title: "Technical Education Scholarship",
            description: "For students pursuing engineering and technical courses",
            amount: "₹75,000 per year",
            eligibility: "Enrolled in engineering/technical course",
            category: "technical",
            deadline: "2024-04-15",
            provider: "AICTE",
        },
        Scholarship {
            id: "3",
            title: "Minority Community Scholarship",
            description: "Financial assistance for minority community students",
            amount: "₹30,000 per year",
            eligibility: "Minority community, family income < ₹2 LPA",
            category: "minority",
            deadline: "2024-05-01",
            provider: "Minority Affairs Ministry",
        },
    ]
}

fn institutions() -> Vec<Institution> {
    vec![
        Institution {
            id: "1",
            name: "National Institute of Technology Srinagar",
            kind: "Engineering College",
            location: "Srinagar, J&K",
            distance: "5 km",
            courses: &["B.Tech", "M.Tech", "PhD"],
            rating: 4.2,
            contact: "+91-194-2422032",
        },
        Institution {
            id: "2",
            name: "Kashmir University",
            kind: "University",
            location: "Srinagar, J&K",
            distance: "8 km",
            courses: &["Arts", "Science", "Commerce", "Engineering"],
            rating: 4.0,
            contact: "+91-194-2420073",
        },
        Institution {
            id: "3",
            name: "Government Polytechnic Srinagar",
            kind: "Polytechnic",
            location: "Srinagar, J&K",
            distance: "3 km",
            courses: &["Diploma in Engineering", "Diploma in Technology"],
            rating: 3.8,
            contact: "+91-194-2452516",
        },
    ]
}

/// Category matches exactly; eligibility matches as a case-insensitive
/// substring.
fn filter_scholarships(list: Vec<Scholarship>, filter: &ScholarshipFilter) -> Vec<Scholarship> {
    list.into_iter()
        .filter(|s| match &filter.category {
            Some(category) => s.category == category,
            None => true,
        })
        .filter(|s| match &filter.eligibility {
            Some(eligibility) => s
                .eligibility
                .to_lowercase()
                .contains(&eligibility.to_lowercase()),
            None => true,
        })
        .collect()
}

/// GET /api/scholarships
pub async fn handle_scholarships(
    State(_state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    Query(filter): Query<ScholarshipFilter>,
) -> Result<Json<Vec<Scholarship>>, AppError> {
    Ok(Json(filter_scholarships(scholarships(), &filter)))
}

/// GET /api/opportunities/nearby
pub async fn handle_nearby_opportunities(
    State(_state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    Query(_query): Query<NearbyQuery>,
) -> Result<Json<Vec<Institution>>, AppError> {
    Ok(Json(institutions()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_filter_returns_everything() {
        let result = filter_scholarships(scholarships(), &ScholarshipFilter::default());
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn category_filter_is_exact() {
        let filter = ScholarshipFilter {
            category: Some("merit".into()),
            eligibility: None,
        };
        let result = filter_scholarships(scholarships(), &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Kashmir Merit Scholarship");

        let near_miss = ScholarshipFilter {
            category: Some("Merit".into()),
            eligibility: None,
        };
        assert!(filter_scholarships(scholarships(), &near_miss).is_empty());
    }

    #[test]
    fn eligibility_filter_is_case_insensitive_substring() {
        let filter = ScholarshipFilter {
            category: None,
            eligibility: Some("ENGINEERING".into()),
        };
        let result = filter_scholarships(scholarships(), &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].category, "technical");
    }

    #[test]
    fn filters_compose() {
        let filter = ScholarshipFilter {
            category: Some("minority".into()),
            eligibility: Some("income".into()),
        };
        assert_eq!(filter_scholarships(scholarships(), &filter).len(), 1);

        let contradictory = ScholarshipFilter {
            category: Some("merit".into()),
            eligibility: Some("engineering".into()),
        };
        assert!(filter_scholarships(scholarships(), &contradictory).is_empty());
    }

    #[test]
    fn nearby_query_defaults_to_srinagar() {
        let query: NearbyQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.latitude, 34.0837);
        assert_eq!(query.longitude, 74.7973);
        assert_eq!(query.radius, 50);
    }

    #[test]
    fn institution_kind_serializes_as_type() {
        let json = serde_json::to_string(&institutions()[0]).unwrap();
        assert!(json.contains("\"type\":\"Engineering College\""));
    }
}

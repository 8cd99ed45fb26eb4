//! Heuristic JSON extraction from free-form model output.
//!
//! Precedence: a ```json fenced block wins; otherwise the span from the
//! first `{` to the last `}`; otherwise there is no candidate. The heuristic
//! is deliberately isolated here as pure functions so the whole surface is
//! unit-testable without a provider.

use serde_json::Value;

use crate::models::recommendation::RecommendationEntry;

const JSON_FENCE: &str = "```json";

/// Finds the JSON candidate substring in raw model text, or None.
pub fn extract_json(text: &str) -> Option<&str> {
    if let Some(fence) = text.find(JSON_FENCE) {
        let interior = &text[fence + JSON_FENCE.len()..];
        let interior = match interior.find("```") {
            Some(end) => &interior[..end],
            // Unterminated fence: take everything after the opener.
            None => interior,
        };
        return Some(interior.trim());
    }

    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end >= start).then(|| &text[start..=end])
}

/// Parses the extracted candidate and pulls out the `recommendations` array.
/// Returns None when there is no candidate, the candidate is malformed JSON,
/// or the entries do not match the expected shape; a well-formed object
/// without a `recommendations` field yields an empty list.
pub fn parse_recommendations(text: &str) -> Option<Vec<RecommendationEntry>> {
    let candidate = extract_json(text)?;
    let value: Value = serde_json::from_str(candidate).ok()?;
    let object = value.as_object()?;
    match object.get("recommendations") {
        None => Some(Vec::new()),
        Some(list) => serde_json::from_value(list.clone()).ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRY: &str = r#"{
        "career_title": "Software Development",
        "description": "Build software",
        "education_path": "B.Tech CS",
        "local_opportunities": "IT sector in Srinagar",
        "skills_needed": ["Programming"],
        "salary_range": "₹3-15 LPA",
        "growth_prospects": "High demand",
        "match_percentage": 85
    }"#;

    fn payload(entries: usize) -> String {
        let list = vec![ENTRY; entries].join(",");
        format!("{{\"recommendations\": [{list}]}}")
    }

    #[test]
    fn fenced_block_takes_precedence() {
        let text = format!(
            "Here are your results:\n```json\n{}\n```\nAnd also {{\"decoy\": true}}",
            payload(1)
        );
        let extracted = extract_json(&text).unwrap();
        assert!(extracted.starts_with("{\"recommendations\""));
        assert!(!extracted.contains("decoy"));
    }

    #[test]
    fn unterminated_fence_still_extracts() {
        let text = format!("```json\n{}", payload(1));
        let entries = parse_recommendations(&text).unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn brace_scan_spans_first_to_last() {
        let text = format!("Sure! {} Hope this helps.", payload(2));
        let extracted = extract_json(&text).unwrap();
        assert!(extracted.starts_with('{'));
        assert!(extracted.ends_with('}'));
        assert_eq!(parse_recommendations(&text).unwrap().len(), 2);
    }

    #[test]
    fn no_braces_means_no_candidate() {
        assert_eq!(extract_json("I cannot produce JSON today."), None);
        assert_eq!(parse_recommendations("plain prose"), None);
    }

    #[test]
    fn closing_brace_before_opening_is_rejected() {
        assert_eq!(extract_json("} oops {"), None);
    }

    #[test]
    fn malformed_json_candidate_yields_none() {
        assert_eq!(parse_recommendations("{\"recommendations\": [unterminated"), None);
    }

    #[test]
    fn entries_pass_through_unmodified() {
        let entries = parse_recommendations(&payload(3)).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].career_title, "Software Development");
        assert_eq!(entries[0].match_percentage, 85);
        assert_eq!(entries[0].skills_needed, vec!["Programming".to_string()]);
    }

    #[test]
    fn missing_recommendations_field_is_empty_list() {
        assert_eq!(
            parse_recommendations("{\"status\": \"ok\"}"),
            Some(Vec::new())
        );
    }

    #[test]
    fn non_object_json_is_rejected() {
        assert_eq!(parse_recommendations("```json\n[1, 2, 3]\n```"), None);
    }

    #[test]
    fn entries_with_wrong_shape_are_rejected() {
        let text = r#"{"recommendations": [{"career_title": 42}]}"#;
        assert_eq!(parse_recommendations(text), None);
    }
}

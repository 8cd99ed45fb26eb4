//! Recommendation orchestrator: build a prompt, make one provider call,
//! parse the semi-structured reply, fall back to the deterministic set when
//! anything on the provider path fails.

pub mod extract;
pub mod fallback;
pub mod handlers;
pub mod prompts;

use std::sync::Arc;

use tracing::{error, warn};
use uuid::Uuid;

use crate::llm_client::ChatProvider;
use crate::models::recommendation::{CareerRecommendationRequest, RecommendationEntry};

/// The career advisor. Holds only a read-only provider handle, so concurrent
/// requests share no mutable state.
#[derive(Clone)]
pub struct CareerAdvisor {
    provider: Arc<dyn ChatProvider>,
}

impl CareerAdvisor {
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        Self { provider }
    }

    /// Produces recommendations for a validated request. Never errors: every
    /// provider or parse failure is logged and absorbed by the fallback set.
    pub async fn recommend(
        &self,
        request: &CareerRecommendationRequest,
    ) -> Vec<RecommendationEntry> {
        // Fresh session per request keeps provider-side context isolated.
        let session_id = format!("career_session_{}", Uuid::new_v4());
        let prompt = prompts::build_recommendation_prompt(request);

        let text = match self
            .provider
            .chat(&session_id, prompts::SYSTEM_PROMPT, &prompt)
            .await
        {
            Ok(text) => text,
            Err(e) => {
                error!(error = %e, session_id, "provider call failed; using fallback");
                return fallback::fallback_recommendations(request);
            }
        };

        match extract::parse_recommendations(&text) {
            Some(entries) => entries,
            None => {
                warn!(session_id, "unparseable provider response; using fallback");
                fallback::fallback_recommendations(request)
            }
        }
    }
}

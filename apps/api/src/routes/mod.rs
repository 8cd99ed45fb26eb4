pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::{advisor, auth, catalog, dashboard, profile};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api", get(health::root_handler))
        .route("/api/health", get(health::health_handler))
        // Auth
        .route("/api/auth/register", post(auth::handlers::handle_register))
        .route("/api/auth/login", post(auth::handlers::handle_login))
        .route("/api/auth/me", get(auth::handlers::handle_me))
        // Career recommendations
        .route(
            "/api/career/recommendations",
            post(advisor::handlers::handle_recommend),
        )
        .route(
            "/api/career/recommendations/history",
            get(advisor::handlers::handle_history),
        )
        // Student profile
        .route(
            "/api/profile/student",
            get(profile::handle_get_profile).put(profile::handle_update_profile),
        )
        // Dashboard and lookup data
        .route("/api/dashboard/stats", get(dashboard::handle_stats))
        .route("/api/scholarships", get(catalog::handle_scholarships))
        .route(
            "/api/opportunities/nearby",
            get(catalog::handle_nearby_opportunities),
        )
        .with_state(state)
}

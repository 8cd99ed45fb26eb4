use sqlx::PgPool;

use crate::advisor::CareerAdvisor;
use crate::auth::tokens::AuthKeys;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Everything here is read-only after startup: the pool, the signing keys and
/// the advisor's provider handle are initialized once in `main` and never
/// mutated, so concurrent requests share no mutable state.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub auth: AuthKeys,
    pub advisor: CareerAdvisor,
}

use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_MODEL;

/// Application configuration loaded from environment variables.
/// Loaded once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_ttl_minutes: i64,
    pub anthropic_api_key: String,
    pub advisor_model: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            jwt_secret: require_env("JWT_SECRET_KEY")?,
            jwt_ttl_minutes: std::env::var("JWT_ACCESS_TOKEN_EXPIRE_MINUTES")
                .unwrap_or_else(|_| "1440".to_string())
                .parse::<i64>()
                .context("JWT_ACCESS_TOKEN_EXPIRE_MINUTES must be an integer")?,
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            advisor_model: std::env::var("ADVISOR_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

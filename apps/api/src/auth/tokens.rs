use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

/// Token resolution failures. Route-level code collapses both variants into
/// a single 401 response; the distinction exists for logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("invalid token")]
    InvalidToken,
    #[error("token expired")]
    Expired,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub iat: i64,
    pub exp: i64,
}

/// HS256 signing and verification keys plus the default token lifetime.
/// Built once at startup from config and shared read-only via `AppState`.
#[derive(Clone)]
pub struct AuthKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl AuthKeys {
    pub fn new(secret: &str, ttl_minutes: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::minutes(ttl_minutes),
        }
    }

    /// Issues a token asserting `sub = user_id` with the configured lifetime.
    pub fn issue(&self, user_id: Uuid) -> anyhow::Result<String> {
        self.issue_with_ttl(user_id, self.ttl)
    }

    pub fn issue_with_ttl(&self, user_id: Uuid, ttl: Duration) -> anyhow::Result<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(user_id = %user_id, "token issued");
        Ok(token)
    }

    /// Verifies signature and expiry and returns the asserted user id.
    /// Pure computation; identity resolution against the store is the
    /// caller's concern.
    pub fn resolve(&self, token: &str) -> Result<Uuid, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        match decode::<Claims>(token, &self.decoding, &validation) {
            Ok(data) => Ok(data.claims.sub),
            Err(e) => match e.kind() {
                ErrorKind::ExpiredSignature => Err(AuthError::Expired),
                _ => Err(AuthError::InvalidToken),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> AuthKeys {
        AuthKeys::new("test-secret", 1440)
    }

    #[test]
    fn issue_then_resolve_returns_subject() {
        let keys = keys();
        let user_id = Uuid::new_v4();
        let token = keys.issue(user_id).expect("issue");
        assert_eq!(keys.resolve(&token), Ok(user_id));
    }

    #[test]
    fn expired_token_resolves_to_expired() {
        let keys = keys();
        let token = keys
            .issue_with_ttl(Uuid::new_v4(), Duration::seconds(-10))
            .expect("issue");
        assert_eq!(keys.resolve(&token), Err(AuthError::Expired));
    }

    #[test]
    fn garbage_and_empty_tokens_are_invalid() {
        let keys = keys();
        assert_eq!(keys.resolve("not-a-token"), Err(AuthError::InvalidToken));
        assert_eq!(keys.resolve(""), Err(AuthError::InvalidToken));
        assert_eq!(
            keys.resolve("aaaa.bbbb.cccc"),
            Err(AuthError::InvalidToken)
        );
    }

    #[test]
    fn token_signed_with_other_key_is_invalid() {
        let token = AuthKeys::new("other-secret", 1440)
            .issue(Uuid::new_v4())
            .expect("issue");
        assert_eq!(keys().resolve(&token), Err(AuthError::InvalidToken));
    }

    #[test]
    fn tampered_token_is_invalid() {
        let keys = keys();
        let mut token = keys.issue(Uuid::new_v4()).expect("issue");
        token.push('x');
        assert_eq!(keys.resolve(&token), Err(AuthError::InvalidToken));
    }
}

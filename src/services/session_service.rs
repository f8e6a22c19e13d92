//! Session service - signed session tokens backed by server-side records.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::config::Config;
use crate::domain::User;
use crate::errors::{AppError, AppResult};
use crate::infra::{SessionRecord, SessionStore};

/// Session token claims
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    /// Server-side session record id
    pub sid: Uuid,
    pub exp: i64,
    pub iat: i64,
}

#[async_trait]
pub trait SessionService: Send + Sync {
    /// Open a session for `user` and return the cookie token.
    async fn start(&self, user: &User) -> AppResult<String>;

    /// Validate a cookie token against its signature and the live record.
    async fn resolve(&self, token: &str) -> AppResult<SessionRecord>;

    /// Close a session. Returns whether it was still open.
    async fn end(&self, session_id: Uuid) -> bool;
}

pub struct SessionManager {
    store: Arc<dyn SessionStore>,
    config: Config,
}

impl SessionManager {
    pub fn new(store: Arc<dyn SessionStore>, config: Config) -> Self {
        Self { store, config }
    }
}

fn encode_token(claims: &Claims, config: &Config) -> AppResult<String> {
    Ok(encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(config.secret_key_bytes()),
    )?)
}

fn decode_token(token: &str, config: &Config) -> AppResult<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret_key_bytes()),
        &Validation::default(),
    )?;

    Ok(token_data.claims)
}

#[async_trait]
impl SessionService for SessionManager {
    async fn start(&self, user: &User) -> AppResult<String> {
        let purged = self.store.purge_expired();
        if purged > 0 {
            tracing::debug!(purged, "Expired sessions removed");
        }

        let now = Utc::now();
        let expires_at = now + Duration::hours(self.config.session_ttl_hours);
        let record = SessionRecord {
            id: Uuid::new_v4(),
            user_id: user.id,
            expires_at,
        };

        let token = encode_token(
            &Claims {
                sub: user.id,
                sid: record.id,
                exp: expires_at.timestamp(),
                iat: now.timestamp(),
            },
            &self.config,
        )?;

        self.store.insert(record);
        Ok(token)
    }

    async fn resolve(&self, token: &str) -> AppResult<SessionRecord> {
        let claims = decode_token(token, &self.config)?;

        match self.store.get(claims.sid) {
            Some(record) if record.user_id == claims.sub => Ok(record),
            _ => Err(AppError::Unauthorized),
        }
    }

    async fn end(&self, session_id: Uuid) -> bool {
        self.store.remove(session_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{InMemorySessionStore, MockSessionStore};

    fn user() -> User {
        User::new(
            Uuid::new_v4(),
            "alice".to_string(),
            "alice@example.com".to_string(),
            "hash".to_string(),
        )
    }

    fn manager() -> (Arc<InMemorySessionStore>, SessionManager) {
        let store = Arc::new(InMemorySessionStore::new());
        let manager = SessionManager::new(store.clone(), Config::default());
        (store, manager)
    }

    #[tokio::test]
    async fn test_start_then_resolve() {
        let (store, sessions) = manager();
        let user = user();

        let token = sessions.start(&user).await.unwrap();
        let record = sessions.resolve(&token).await.unwrap();

        assert_eq!(record.user_id, user.id);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_ended_session_no_longer_resolves() {
        let (_, sessions) = manager();
        let token = sessions.start(&user()).await.unwrap();
        let record = sessions.resolve(&token).await.unwrap();

        assert!(sessions.end(record.id).await);
        assert!(matches!(
            sessions.resolve(&token).await,
            Err(AppError::Unauthorized)
        ));
        assert!(!sessions.end(record.id).await);
    }

    #[tokio::test]
    async fn test_tampered_token_rejected() {
        let (_, sessions) = manager();
        let token = sessions.start(&user()).await.unwrap();

        let result = sessions.resolve(&format!("{}x", token)).await;
        assert!(matches!(result, Err(AppError::Jwt(_))));
    }

    #[tokio::test]
    async fn test_token_signed_with_other_secret_rejected() {
        let (_, sessions) = manager();
        let other = SessionManager::new(
            Arc::new(InMemorySessionStore::new()),
            Config::default().with_secret_key("a-completely-different-secret-key-value"),
        );
        let token = other.start(&user()).await.unwrap();

        assert!(sessions.resolve(&token).await.is_err());
    }

    #[tokio::test]
    async fn test_start_purges_expired_records() {
        let mut store = MockSessionStore::new();
        store.expect_purge_expired().times(1).returning(|| 2);
        store.expect_insert().times(1).return_const(());

        let sessions = SessionManager::new(Arc::new(store), Config::default());
        assert!(sessions.start(&user()).await.is_ok());
    }
}

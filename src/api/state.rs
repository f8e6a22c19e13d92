//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{Database, RateLimiter};
use crate::services::{AuthService, DashboardService, ServiceContainer, Services, SessionService};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub session_service: Arc<dyn SessionService>,
    pub dashboard_service: Arc<DashboardService>,
    /// Per-client request budget
    pub rate_limiter: Arc<RateLimiter>,
    /// Whether forwarding headers identify the client
    pub trust_proxy_headers: bool,
    pub database: Arc<Database>,
}

impl AppState {
    /// Production wiring: every service built from the database and config.
    pub fn from_config(database: Arc<Database>, config: &Config) -> AppResult<Self> {
        let container = Services::from_connection(database.get_connection(), config)?;
        Ok(Self::from_container(
            &container,
            Arc::new(RateLimiter::default()),
            database,
        )
        .with_trusted_proxy_headers(config.trust_proxy_headers))
    }

    pub fn from_container(
        container: &dyn ServiceContainer,
        rate_limiter: Arc<RateLimiter>,
        database: Arc<Database>,
    ) -> Self {
        Self::new(
            container.auth(),
            container.sessions(),
            container.dashboard(),
            rate_limiter,
            database,
        )
    }

    /// Create application state with manually injected services.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        session_service: Arc<dyn SessionService>,
        dashboard_service: Arc<DashboardService>,
        rate_limiter: Arc<RateLimiter>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            auth_service,
            session_service,
            dashboard_service,
            rate_limiter,
            trust_proxy_headers: false,
            database,
        }
    }

    /// Key rate limits on proxy headers rather than the peer address.
    pub fn with_trusted_proxy_headers(mut self, trust: bool) -> Self {
        self.trust_proxy_headers = trust;
        self
    }
}

//! Service Container - one place that wires every service together.

use std::sync::Arc;

use super::{AuthService, Authenticator, DashboardService, SessionManager, SessionService};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{InMemorySessionStore, UserStore};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    fn auth(&self) -> Arc<dyn AuthService>;

    fn sessions(&self) -> Arc<dyn SessionService>;

    fn dashboard(&self) -> Arc<DashboardService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    session_service: Arc<dyn SessionService>,
    dashboard_service: Arc<DashboardService>,
}

impl Services {
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        session_service: Arc<dyn SessionService>,
        dashboard_service: Arc<DashboardService>,
    ) -> Self {
        Self {
            auth_service,
            session_service,
            dashboard_service,
        }
    }

    /// Build the production services: SQL-backed users, in-process sessions,
    /// HTTP data sources.
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: &Config) -> AppResult<Self> {
        let users = Arc::new(UserStore::new(db));
        let store = Arc::new(InMemorySessionStore::new());

        Ok(Self {
            auth_service: Arc::new(Authenticator::new(users)),
            session_service: Arc::new(SessionManager::new(store, config.clone())),
            dashboard_service: Arc::new(DashboardService::from_config(config)?),
        })
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn sessions(&self) -> Arc<dyn SessionService> {
        self.session_service.clone()
    }

    fn dashboard(&self) -> Arc<DashboardService> {
        self.dashboard_service.clone()
    }
}

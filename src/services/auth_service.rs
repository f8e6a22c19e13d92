//! Authentication service - registration and credential checks.
//!
//! Password hashing lives in the domain `Password` value object; this
//! service only decides who may have an account and who may sign in.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::{EMAIL_TAKEN_MESSAGE, USERNAME_TAKEN_MESSAGE};
use crate::domain::{CreateUser, Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Create an account. Username uniqueness is checked before email.
    async fn register(&self, input: CreateUser) -> AppResult<User>;

    /// Check credentials. Unknown users and wrong passwords fail identically.
    async fn login(&self, username: &str, password: &str) -> AppResult<User>;

    /// Load a user for an existing session
    async fn find_user(&self, id: Uuid) -> AppResult<Option<User>>;
}

/// Concrete implementation of AuthService backed by a user repository.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
}

impl Authenticator {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(&self, input: CreateUser) -> AppResult<User> {
        if self.users.find_by_username(&input.username).await?.is_some() {
            return Err(AppError::conflict(USERNAME_TAKEN_MESSAGE));
        }
        if self.users.find_by_email(&input.email).await?.is_some() {
            return Err(AppError::conflict(EMAIL_TAKEN_MESSAGE));
        }

        let password_hash = Password::new(&input.password)?.into_string();
        let user = self
            .users
            .create(input.username, input.email, password_hash)
            .await?;

        tracing::info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    async fn login(&self, username: &str, password: &str) -> AppResult<User> {
        match self.users.find_by_username(username).await? {
            Some(user) if Password::from_hash(user.password_hash.clone()).verify(password) => {
                tracing::info!(user_id = %user.id, "User logged in");
                Ok(user)
            }
            Some(_) => Err(AppError::InvalidCredentials),
            None => {
                // Same hashing cost as a real account
                Password::verify_dummy(password);
                Err(AppError::InvalidCredentials)
            }
        }
    }

    async fn find_user(&self, id: Uuid) -> AppResult<Option<User>> {
        self.users.find_by_id(id).await
    }
}

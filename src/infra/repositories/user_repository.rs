//! User repository backed by SeaORM.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set, SqlErr,
};
use uuid::Uuid;

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::config::{EMAIL_TAKEN_MESSAGE, USERNAME_TAKEN_MESSAGE};
use crate::domain::User;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find user by exact username
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Find user by exact email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a new user. The password must already be hashed.
    async fn create(&self, username: String, email: String, password_hash: String)
        -> AppResult<User>;

    /// Number of registered users
    async fn count(&self) -> AppResult<u64>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn create(
        &self,
        username: String,
        email: String,
        password_hash: String,
    ) -> AppResult<User> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(username),
            email: Set(email),
            password_hash: Set(password_hash),
            created_at: Set(chrono::Utc::now()),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(map_insert_error)?;
        Ok(User::from(model))
    }

    async fn count(&self) -> AppResult<u64> {
        UserEntity::find()
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }
}

/// A concurrent registration can slip past the service's existence checks;
/// the unique index still rejects it and we report it the same way.
fn map_insert_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            if detail.contains("email") {
                AppError::conflict(EMAIL_TAKEN_MESSAGE)
            } else {
                AppError::conflict(USERNAME_TAKEN_MESSAGE)
            }
        }
        _ => AppError::from(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::Database;

    async fn store() -> UserStore {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        UserStore::new(db.get_connection())
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let store = store().await;
        let created = store
            .create(
                "alice".to_string(),
                "alice@example.com".to_string(),
                "hash".to_string(),
            )
            .await
            .unwrap();

        let by_name = store.find_by_username("alice").await.unwrap().unwrap();
        let by_email = store
            .find_by_email("alice@example.com")
            .await
            .unwrap()
            .unwrap();
        let by_id = store.find_by_id(created.id).await.unwrap().unwrap();

        assert_eq!(by_name.id, created.id);
        assert_eq!(by_email.id, created.id);
        assert_eq!(by_id.username, "alice");
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_unique_username_enforced_by_index() {
        let store = store().await;
        store
            .create("bob".to_string(), "bob@example.com".to_string(), "h".to_string())
            .await
            .unwrap();

        let result = store
            .create("bob".to_string(), "other@example.com".to_string(), "h".to_string())
            .await;

        assert!(matches!(result, Err(AppError::Conflict(ref m)) if m == USERNAME_TAKEN_MESSAGE));
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_unique_email_enforced_by_index() {
        let store = store().await;
        store
            .create("carol".to_string(), "carol@example.com".to_string(), "h".to_string())
            .await
            .unwrap();

        let result = store
            .create("caroline".to_string(), "carol@example.com".to_string(), "h".to_string())
            .await;

        assert!(matches!(result, Err(AppError::Conflict(ref m)) if m == EMAIL_TAKEN_MESSAGE));
    }

    #[tokio::test]
    async fn test_missing_user() {
        let store = store().await;
        assert!(store.find_by_username("nobody").await.unwrap().is_none());
        assert_eq!(store.count().await.unwrap(), 0);
    }
}

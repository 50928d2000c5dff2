//! User service - Drives the account lifecycle.
//!
//! SOLID (SRP): Handles user-related use cases only.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::{UpdateUser, User};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a new account (password already hashed)
    async fn register(
        &self,
        username: String,
        password_hash: String,
        birth_date: Option<NaiveDate>,
    ) -> AppResult<User>;

    /// Get user by ID
    async fn get_user(&self, id: i64) -> AppResult<User>;

    /// Apply account changes to an existing user
    async fn update_user(&self, id: i64, changes: UpdateUser) -> AppResult<User>;

    /// Permanently delete user
    async fn delete_user(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn register(
        &self,
        username: String,
        password_hash: String,
        birth_date: Option<NaiveDate>,
    ) -> AppResult<User> {
        // The unique index still has the final say under concurrent inserts
        if self.repo.find_by_username(&username).await?.is_some() {
            return Err(AppError::conflict("Username"));
        }

        let mut user = User::new(username, password_hash);
        user.set_birth_date(birth_date);

        let user = self.repo.create(user).await?;
        tracing::info!(user_id = ?user.id(), username = user.username(), "User registered");
        Ok(user)
    }

    async fn get_user(&self, id: i64) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn update_user(&self, id: i64, changes: UpdateUser) -> AppResult<User> {
        let mut user = self.get_user(id).await?;
        if changes.is_empty() {
            return Ok(user);
        }

        changes.apply_to(&mut user);
        let user = self.repo.update(&user).await?;
        tracing::info!(user_id = id, "User updated");
        Ok(user)
    }

    async fn delete_user(&self, id: i64) -> AppResult<()> {
        self.repo.delete(id).await?;
        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;
    use mockall::predicate::eq;

    fn stored_user(id: i64, username: &str) -> User {
        let mut user = User::new(username, "hashed");
        user.set_id(Some(id));
        user
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username()
            .with(eq("alice"))
            .returning(|_| Ok(None));
        repo.expect_create().returning(|mut user| {
            user.set_id(Some(1));
            Ok(user)
        });

        let service = UserManager::new(Arc::new(repo));
        let birth = NaiveDate::from_ymd_opt(1943, 4, 12).unwrap();
        let user = service
            .register("alice".to_string(), "hashed".to_string(), Some(birth))
            .await
            .unwrap();

        assert_eq!(user.id(), Some(1));
        assert_eq!(user.username(), "alice");
        assert_eq!(user.birth_date(), Some(birth));
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username()
            .returning(|name| Ok(Some(stored_user(1, name))));
        repo.expect_create().never();

        let service = UserManager::new(Arc::new(repo));
        let result = service
            .register("alice".to_string(), "hashed".to_string(), None)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = UserManager::new(Arc::new(repo));
        let result = service.get_user(9).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn test_update_user_applies_changes() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(eq(5))
            .returning(|id| Ok(Some(stored_user(id, "alice"))));
        repo.expect_update()
            .withf(|user| user.id() == Some(5) && user.username() == "alicia")
            .returning(|user| Ok(user.clone()));

        let service = UserManager::new(Arc::new(repo));
        let changes = UpdateUser {
            username: Some("alicia".to_string()),
            ..Default::default()
        };
        let user = service.update_user(5, changes).await.unwrap();

        assert_eq!(user.username(), "alicia");
        assert_eq!(user.password_hash(), "hashed");
    }

    #[tokio::test]
    async fn test_empty_update_skips_write() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(stored_user(id, "alice"))));
        repo.expect_update().never();

        let service = UserManager::new(Arc::new(repo));
        let user = service.update_user(5, UpdateUser::default()).await.unwrap();

        assert_eq!(user.username(), "alice");
    }

    #[tokio::test]
    async fn test_delete_user_propagates_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete()
            .with(eq(3))
            .returning(|_| Err(AppError::NotFound));

        let service = UserManager::new(Arc::new(repo));
        let result = service.delete_user(3).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }
}

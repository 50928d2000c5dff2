//! User repository implementation backed by the `APP_USER` table.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter,
    Set, SqlErr,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use common::{AppError, AppResult};
use domain::User;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Identifiers are assigned by the store; callers never choose them.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert an unpersisted user and return it with its assigned id
    async fn create(&self, user: User) -> AppResult<User>;

    /// Find user by primary key
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Find user by its unique username
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Write every mutable column of a persisted user
    async fn update(&self, user: &User) -> AppResult<User>;

    /// Permanently delete user by ID
    async fn delete(&self, id: i64) -> AppResult<()>;
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

/// Unique violations can only come from `username`; a row removed between
/// read and write surfaces as not found.
fn map_write_error(err: DbErr) -> AppError {
    if matches!(err, DbErr::RecordNotUpdated) {
        return AppError::NotFound;
    }
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict("Username"),
        _ => AppError::from(err),
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, user: User) -> AppResult<User> {
        if user.is_persisted() {
            return Err(AppError::validation("User is already persisted"));
        }
        user.ensure_storable()?;

        let active_model = ActiveModel {
            id: NotSet,
            username: Set(user.username().to_string()),
            birth_date: Set(user.birth_date()),
            password_hash: Set(user.password_hash().to_string()),
            created_at: Set(user.created_at()),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(map_write_error)?;
        Ok(User::from(model))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
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

    async fn update(&self, user: &User) -> AppResult<User> {
        let id = user.persisted_id()?;
        user.ensure_storable()?;

        let existing = UserEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        // Primary key stays untouched
        let mut active: ActiveModel = existing.into();
        active.username = Set(user.username().to_string());
        active.birth_date = Set(user.birth_date());
        active.password_hash = Set(user.password_hash().to_string());
        active.created_at = Set(user.created_at());

        let model = active.update(&self.db).await.map_err(map_write_error)?;
        Ok(User::from(model))
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vanished_row_maps_to_not_found() {
        assert!(matches!(
            map_write_error(DbErr::RecordNotUpdated),
            AppError::NotFound
        ));
    }

    #[test]
    fn test_other_errors_stay_database_errors() {
        let err = map_write_error(DbErr::Custom("connection reset".to_string()));
        assert!(matches!(err, AppError::Database(_)));
        assert_eq!(err.code(), "DATABASE_ERROR");
    }
}

//! User Service Library
//!
//! This crate maps the `User` record onto the `APP_USER` table and drives
//! its lifecycle: register, read, update, delete.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::io::Write;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use common::{AppError, AppResult};
use domain::{UpdateUser, User};

use crate::config::UserServiceConfig;
use crate::infra::Database;
use crate::repository::UserStore;
use crate::service::{UserManager, UserService};

/// Administrative action against the user store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminAction {
    InitSchema,
    Create {
        username: String,
        password_hash: String,
        birth_date: Option<NaiveDate>,
    },
    Show {
        id: i64,
    },
    Update {
        id: i64,
        changes: UpdateUser,
    },
    Delete {
        id: i64,
    },
}

/// Connect to the store and wire the repository into a `UserManager`.
pub async fn connect(config: &UserServiceConfig) -> AppResult<(Database, UserManager)> {
    let db = Database::connect(&config.database).await?;
    let user_repo = Arc::new(UserStore::new(db.get_connection()));
    let user_service = UserManager::new(user_repo);
    Ok((db, user_service))
}

/// Run one admin action (for CLI commands), printing users to stdout.
pub async fn run_admin(config: &UserServiceConfig, action: AdminAction) -> AppResult<()> {
    let (db, users) = connect(config).await?;
    let mut stdout = std::io::stdout().lock();
    execute(&db, &users, action, &mut stdout).await
}

/// Run one admin action against an open store, writing users as JSON to `out`.
pub async fn execute<W: Write>(
    db: &Database,
    users: &dyn UserService,
    action: AdminAction,
    out: &mut W,
) -> AppResult<()> {
    match action {
        AdminAction::InitSchema => {
            db.create_schema().await?;
            info!("User table ready");
        }
        AdminAction::Create {
            username,
            password_hash,
            birth_date,
        } => {
            let user = users.register(username, password_hash, birth_date).await?;
            write_user(out, &user)?;
        }
        AdminAction::Show { id } => {
            let user = users.get_user(id).await?;
            write_user(out, &user)?;
        }
        AdminAction::Update { id, changes } => {
            let user = users.update_user(id, changes).await?;
            write_user(out, &user)?;
        }
        AdminAction::Delete { id } => {
            users.delete_user(id).await?;
            info!(user_id = id, "Deleted");
        }
    }

    Ok(())
}

fn write_user<W: Write>(out: &mut W, user: &User) -> AppResult<()> {
    let json = serde_json::to_string_pretty(user)
        .map_err(|e| AppError::internal(format!("Failed to serialize user: {}", e)))?;
    writeln!(out, "{}", json)
        .map_err(|e| AppError::internal(format!("Failed to write output: {}", e)))
}

//! Database connection and initialization.

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr, Schema,
    Statement,
};

use common::DatabaseConfig;

use crate::repository::entities::UserEntity;

/// Database wrapper for connection management
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Open a connection pool using the configured limits.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.url.clone());
        options
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .sqlx_logging(config.sql_logging);

        let connection = SeaDatabase::connect(options).await?;
        tracing::info!(
            backend = ?connection.get_database_backend(),
            "Database connected"
        );

        Ok(Self { connection })
    }

    /// Get a clone of the database connection.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Create the `APP_USER` table from the entity definition if it is missing.
    pub async fn create_schema(&self) -> Result<(), DbErr> {
        let backend = self.connection.get_database_backend();
        let schema = Schema::new(backend);

        let mut statement = schema.create_table_from_entity(UserEntity);
        statement.if_not_exists();

        self.connection.execute(backend.build(&statement)).await?;
        tracing::info!(table = domain::USER_TABLE, "Schema ensured");
        Ok(())
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}

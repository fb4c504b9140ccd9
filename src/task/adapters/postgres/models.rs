//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning user identifier.
    pub owner_id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Optional deadline.
    pub deadline: Option<DateTime<Utc>>,
    /// Completion flag.
    pub is_completed: bool,
    /// Completion timestamp.
    pub completed_at: Option<DateTime<Utc>>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning user identifier.
    pub owner_id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Optional deadline.
    pub deadline: Option<DateTime<Utc>>,
    /// Completion flag.
    pub is_completed: bool,
    /// Completion timestamp.
    pub completed_at: Option<DateTime<Utc>>,
}

/// Changeset for mutable task columns. `None` clears the column.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Optional deadline.
    pub deadline: Option<DateTime<Utc>>,
    /// Completion flag.
    pub is_completed: bool,
    /// Completion timestamp.
    pub completed_at: Option<DateTime<Utc>>,
}

//! Domain model for task management.
//!
//! Tasks belong to exactly one user and move between open and completed
//! states independently of their optional deadline.

mod deadline;
mod description;
mod error;
mod ids;
mod task;
mod title;

pub use deadline::Deadline;
pub use description::Description;
pub use error::TaskDomainError;
pub use ids::TaskId;
pub use task::{PersistedTaskData, Task};
pub use title::Title;

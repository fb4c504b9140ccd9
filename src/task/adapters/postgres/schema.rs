//! Diesel schema for task persistence.

diesel::table! {
    /// Tasks owned by registered users.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Owning user, references `users.id`.
        owner_id -> Uuid,
        /// Task title.
        #[max_length = 50]
        title -> Varchar,
        /// Task description, possibly empty.
        description -> Text,
        /// Optional deadline.
        deadline -> Nullable<Timestamptz>,
        /// Completion flag.
        is_completed -> Bool,
        /// Completion timestamp, set exactly when completed.
        completed_at -> Nullable<Timestamptz>,
    }
}

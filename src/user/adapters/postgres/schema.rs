//! Diesel schema for user account persistence.

diesel::table! {
    /// Registered user accounts.
    users (id) {
        /// User identifier.
        id -> Uuid,
        /// Display name.
        #[max_length = 30]
        username -> Varchar,
        /// Unique email address.
        #[max_length = 255]
        email -> Varchar,
        /// bcrypt password hash.
        #[max_length = 255]
        password_hash -> Varchar,
    }
}

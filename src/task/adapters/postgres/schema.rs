//! Diesel schema for task persistence.

diesel::table! {
    /// Task records, one row per task, keyed by opaque identifier.
    tasks (id) {
        /// Opaque task identifier.
        #[max_length = 255]
        id -> Varchar,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Task description.
        description -> Text,
        /// Completion flag.
        completed -> Bool,
    }
}

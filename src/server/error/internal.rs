use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored enum-like column holds a value the server does not recognize.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown {field} value '{value}' stored in database")]
    UnknownStoredValue {
        /// Column the value was read from
        field: &'static str,
        /// The unrecognized value
        value: String,
    },

    /// Stored exercise options are not a valid JSON string array.
    #[error("Failed to decode options of exercise {exercise_id}: {source}")]
    InvalidExerciseOptions {
        exercise_id: i32,
        #[source]
        source: serde_json::Error,
    },

    /// A flashcard interval pushed its due date past the representable range.
    #[error("Due date {interval_days} days out is out of range")]
    DueDateOutOfRange { interval_days: i32 },

    /// Password hashing failed.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),
}

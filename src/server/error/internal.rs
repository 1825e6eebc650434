use thiserror::Error;

/// Internal issues with stored data indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A level row breaks the tier rules.
    ///
    /// The schema rejects such rows, so this only fires if the database was edited by
    /// hand. Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Level {id} violates tier rules: {reason}")]
    InvalidLevel {
        /// Primary key of the offending level
        id: i32,
        /// Which rule was broken
        reason: String,
    },

    /// No level rows exist, so new accounts cannot be assigned one.
    #[error("No levels are seeded; run migrations before accepting logins")]
    NoLevelsSeeded,
}

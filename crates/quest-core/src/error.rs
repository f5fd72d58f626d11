// error.rs — Error types for the goal tracking subsystem.

use thiserror::Error;

/// Errors that can occur during goal store and persistence operations.
///
/// Nothing here is fatal to the process: a `NotFound` leaves the store
/// untouched, and an `Io` failure on save/load leaves the in-memory
/// state exactly as it was. Malformed persisted lines are not an error
/// at all — the codec skips them and keeps going.
#[derive(Debug, Error)]
pub enum GoalError {
    /// A completion was recorded against a goal name the store
    /// doesn't contain.
    #[error("goal not found: {0}")]
    NotFound(String),

    /// A file I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

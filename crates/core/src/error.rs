//! Error types for the value domain.
//!
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations. These errors are internal detail: the command protocol
//! collapses every one of them to a single `incorrect` line at the session
//! boundary, so variants exist for logging and tests, not for callers to
//! branch on.

use thiserror::Error;

/// Result type alias for value-domain operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Literal parse and validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Integer literal is empty, has stray characters, or overflows i32.
    #[error("invalid integer literal: {text:?}")]
    InvalidInt {
        /// The offending literal text.
        text: String,
    },

    /// Text literal is missing quotes, empty, or too long.
    #[error("invalid text literal: {reason}")]
    InvalidText {
        /// What rule the literal broke.
        reason: String,
    },

    /// Plate literal violates the structural format.
    #[error("invalid plate literal: {text:?}")]
    InvalidPlate {
        /// The offending literal text.
        text: String,
    },

    /// Date literal is malformed or outside the calendar.
    #[error("invalid date literal: {text:?}")]
    InvalidDate {
        /// The offending literal text.
        text: String,
    },

    /// Status literal is not one of the five exact names.
    #[error("invalid status literal: {text:?}")]
    InvalidStatus {
        /// The offending literal text.
        text: String,
    },

    /// Field name does not resolve against the schema.
    #[error("unknown field: {name:?}")]
    UnknownField {
        /// The unresolved name.
        name: String,
    },
}

//! Error types for command parsing and execution.
//!
//! The protocol surfaces exactly one failure shape (`incorrect:'<prefix>'`);
//! these variants exist so logs and tests can tell failures apart. No
//! variant ever reaches a protocol line.

use thiserror::Error;

/// Command parsing and execution errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Line does not start with a known keyword followed by a space.
    #[error("unrecognized command line")]
    UnknownCommand,

    /// Keyword present but the argument text is empty.
    #[error("missing arguments")]
    EmptyArguments,

    /// Literal or field-name failure from the value domain.
    #[error(transparent)]
    Value(#[from] fleetdb_core::Error),

    /// An assignment token has no `=`, or an empty name/value side.
    #[error("malformed assignment: {clause:?}")]
    MalformedAssignment {
        /// The offending token.
        clause: String,
    },

    /// A field appears more than once in an assignment list.
    #[error("duplicate field: {name}")]
    DuplicateField {
        /// The repeated field name.
        name: &'static str,
    },

    /// A required insert field is absent.
    #[error("missing field: {name}")]
    MissingField {
        /// The absent field name.
        name: &'static str,
    },

    /// A field-name or assignment list is empty where one is required.
    #[error("empty field list")]
    EmptyFieldList,

    /// `delete` was given no condition clauses.
    #[error("empty condition list")]
    EmptyConditionList,

    /// No operator token found in a condition clause.
    #[error("no operator in clause: {clause:?}")]
    UnknownOperator {
        /// The offending clause.
        clause: String,
    },

    /// `/in/` or `/not_in/` used on a field other than `status`.
    #[error("set operator on non-status field: {field}")]
    SetOperatorOnNonStatus {
        /// The offending field name.
        field: &'static str,
    },

    /// A bracketed status list used with a relational operator.
    #[error("status list requires /in/ or /not_in/: {clause:?}")]
    RelationalOnStatusSet {
        /// The offending clause.
        clause: String,
    },

    /// `/in/` or `/not_in/` value is not a bracketed list.
    #[error("malformed status set: {text:?}")]
    MalformedStatusSet {
        /// The offending value text.
        text: String,
    },

    /// `status` used as a sort key.
    #[error("status is not sortable")]
    StatusSortKey,

    /// Sort direction is not exactly `asc` or `desc`.
    #[error("invalid sort direction: {text:?}")]
    InvalidSortDirection {
        /// The offending direction text.
        text: String,
    },

    /// Internal error (bug or invariant violation).
    #[error("internal error: {reason}")]
    Internal {
        /// Human-readable description.
        reason: String,
    },
}

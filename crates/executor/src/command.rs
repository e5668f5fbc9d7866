//! Command enum defining the six store operations.
//!
//! Commands are pure data: everything a handler needs is carried in the
//! variant, fully parsed and validated. A `Command` that exists is a
//! command that can execute; all syntax and value validation happens in
//! [`crate::parse_line`] before one is built.

use serde::{Deserialize, Serialize};

use fleetdb_core::{FieldId, FieldValue, Record};

use crate::condition::Condition;

/// Sort direction of one sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// `asc`
    Ascending,
    /// `desc`
    Descending,
}

/// One `field=asc|desc` sort key. Keys apply in listed priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    /// Field to order by. Never `status`; the parser rejects it.
    pub field: FieldId,
    /// Requested direction.
    pub order: SortOrder,
}

/// One validated `field=value` pair of an update list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Field to overwrite.
    pub field: FieldId,
    /// New value, already parsed against the field's type.
    pub value: FieldValue,
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Append one fully validated record.
    /// Returns: `Output::Inserted`
    Insert {
        /// The record to append.
        record: Record,
    },

    /// Project fields of every record matching the conditions.
    /// Returns: `Output::Selected`
    Select {
        /// Fields to print, in requested order.
        fields: Vec<FieldId>,
        /// Filter; empty means every record.
        conditions: Vec<Condition>,
    },

    /// Remove every record matching the conditions.
    /// Returns: `Output::Deleted`
    Delete {
        /// Filter; the parser guarantees it is non-empty.
        conditions: Vec<Condition>,
    },

    /// Overwrite listed fields of every record matching the conditions.
    /// Returns: `Output::Updated`
    Update {
        /// Fields to overwrite, each at most once.
        assignments: Vec<Assignment>,
        /// Filter; empty means every record.
        conditions: Vec<Condition>,
    },

    /// Keep only the last-inserted record per distinct key.
    /// Returns: `Output::Deduplicated`
    Uniq {
        /// Fields forming the equality key.
        fields: Vec<FieldId>,
    },

    /// Stable multi-key sort of the whole store.
    /// Returns: `Output::Sorted`
    Sort {
        /// Sort keys in priority order, each field at most once.
        keys: Vec<SortKey>,
    },
}

impl Command {
    /// The protocol keyword of this command.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Insert { .. } => "insert",
            Command::Select { .. } => "select",
            Command::Delete { .. } => "delete",
            Command::Update { .. } => "update",
            Command::Uniq { .. } => "uniq",
            Command::Sort { .. } => "sort",
        }
    }

    /// Returns `true` if this command mutates the store.
    pub fn is_write(&self) -> bool {
        !matches!(self, Command::Select { .. })
    }
}

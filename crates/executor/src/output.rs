//! Output enum for command execution results.
//!
//! Each [`Command`](crate::Command) variant maps to exactly one `Output`
//! variant. Rendering is separate from execution: handlers return
//! structured outputs, and [`Output::write_lines`] turns one into protocol
//! text — zero or more result rows, then exactly one `<command>:<count>`
//! summary line.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

/// Successful command execution results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Output {
    /// Record appended; carries the ever-appended counter, not the current
    /// store length.
    Inserted {
        /// Count of records ever appended, including this one.
        appended: u64,
    },

    /// Query result: one pre-rendered projection row per match.
    Selected {
        /// `name=literal` rows in store order.
        rows: Vec<String>,
        /// Number of matching records.
        matched: u64,
    },

    /// Records removed by condition.
    Deleted {
        /// Number of records removed.
        removed: u64,
    },

    /// Fields overwritten in place.
    Updated {
        /// Number of records touched.
        touched: u64,
    },

    /// Duplicates removed, last-inserted survivor per key.
    Deduplicated {
        /// Number of records removed.
        removed: u64,
    },

    /// Store reordered.
    Sorted {
        /// Total store size after the sort.
        size: u64,
    },
}

impl Output {
    /// The trailing `<command>:<count>` summary line, without newline.
    pub fn summary(&self) -> String {
        match self {
            Output::Inserted { appended } => format!("insert:{appended}"),
            Output::Selected { matched, .. } => format!("select:{matched}"),
            Output::Deleted { removed } => format!("delete:{removed}"),
            Output::Updated { touched } => format!("update:{touched}"),
            Output::Deduplicated { removed } => format!("uniq:{removed}"),
            Output::Sorted { size } => format!("sort:{size}"),
        }
    }

    /// Write result rows (if any) and the summary line to the sink.
    pub fn write_lines<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if let Output::Selected { rows, .. } = self {
            for row in rows {
                writeln!(out, "{row}")?;
            }
        }
        writeln!(out, "{}", self.summary())
    }
}

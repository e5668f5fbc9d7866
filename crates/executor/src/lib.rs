//! # fleetdb executor
//!
//! Command parsing and execution for the unit-check record store.
//!
//! One input line is one command. The [`Session`] drives raw lines through
//! the pipeline: the parser classifies the line by its leading keyword and
//! builds a pure-data [`Command`]; the [`Executor`] dispatches it to a
//! handler that mutates or queries the record store; the handler's
//! [`Output`] is rendered as protocol lines on the caller's sink.
//!
//! Every parse or validation failure, whatever its internal cause, degrades
//! to a single `incorrect:'<prefix>'` line and leaves the store untouched.
//!
//! ## Quick start
//!
//! ```
//! use fleetdb_executor::Session;
//!
//! let mut session = Session::new();
//! let mut out = Vec::new();
//! session
//!     .process_line(
//!         "insert unit_id=1, unit_model=\"M1\", car_id='A123BC45', \
//!          chk_date='01.02.2020', status='well', mechanic=\"X\", driver=\"Y\"",
//!         &mut out,
//!     )
//!     .unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "insert:1\n");
//! ```

#![warn(missing_docs)]

mod command;
mod condition;
mod error;
mod executor;
mod output;
mod parser;
mod session;
pub mod token;

// Handler modules
mod handlers;

// Test modules
#[cfg(test)]
mod tests;

pub use command::{Assignment, Command, SortKey, SortOrder};
pub use condition::{matches_all, CompareOp, Condition};
pub use error::Error;
pub use executor::Executor;
pub use output::Output;
pub use parser::parse_line;
pub use session::Session;

// Re-export the store and core types so users don't need the inner crates.
pub use fleetdb_core::{Date, FieldId, FieldType, FieldValue, Plate, Record, Status};
pub use fleetdb_engine::RecordStore;

/// Result type for executor operations.
pub type Result<T> = std::result::Result<T, Error>;

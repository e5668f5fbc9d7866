//! fleetdb - in-memory unit-check record store driven by a line-oriented
//! command protocol.
//!
//! One input line is one command (`insert`, `select`, `delete`, `update`,
//! `uniq`, `sort`) over a fixed 7-field record. See [`Session`] for the
//! line-processing entry point.
//!
//! # Quick Start
//!
//! ```
//! use fleetdb::Session;
//!
//! let mut session = Session::new();
//! let mut out = Vec::new();
//! session.process_line("select unit_id", &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "select:0\n");
//! ```

// Re-export the public API from fleetdb-executor
pub use fleetdb_executor::*;

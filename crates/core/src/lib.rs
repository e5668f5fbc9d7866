//! Core types for fleetdb
//!
//! This crate defines the foundational types used throughout the system:
//! - Status, Date, Plate: the domain-specific field types and their literal syntaxes
//! - FieldValue: unified value enum over the five field kinds
//! - FieldId / FieldType: the fixed 7-field schema and name resolution
//! - Record: one validated unit-check entry
//! - Error: literal parse/validation errors
//!
//! All literal parsers fail closed: any deviation from the exact
//! delimiter/length/charset rule rejects the whole literal.

#![warn(missing_docs)]

pub mod error;
pub mod limits;
pub mod record;
pub mod schema;
pub mod types;
pub mod value;

pub use error::{Error, Result};
pub use limits::{MAX_TEXT_LEN, MAX_YEAR, MIN_YEAR, PLATE_LETTERS};
pub use record::Record;
pub use schema::{FieldId, FieldType, ALL_FIELDS, FIELD_COUNT};
pub use types::{Date, Plate, Status};
pub use value::FieldValue;

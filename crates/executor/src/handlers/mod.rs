//! Command handlers.
//!
//! One module per protocol command. Handlers receive fully parsed
//! arguments, compose the store's mutation primitives with the condition
//! engine, and return a structured [`crate::Output`]. They never touch raw
//! protocol text.

pub mod delete;
pub mod insert;
pub mod select;
pub mod sort;
pub mod uniq;
pub mod update;

//! In-memory record store for fleetdb.
//!
//! The store is an insertion-ordered sequence with an ever-appended counter
//! and the mutation shapes the command handlers need: append,
//! conditional removal, conditional in-place rewrite, stable sort, and
//! last-wins deduplication. It is exclusively owned by the command loop for
//! the process lifetime; there is no durability and no shared access.

#![warn(missing_docs)]

mod store;

pub use store::RecordStore;

//! The Executor - single entry point to the record store.
//!
//! A stateless dispatcher over a stateful store: it routes each command to
//! the matching handler and owns nothing else. Handlers fully serialize;
//! one command completes before the next is dispatched, so no command ever
//! observes a partially applied effect of another.

use fleetdb_engine::RecordStore;

use crate::{handlers, Command, Output, Result};

/// Executes commands against an exclusively owned record store.
#[derive(Debug, Default)]
pub struct Executor {
    store: RecordStore,
}

impl Executor {
    /// Create an executor over an empty store.
    pub fn new() -> Executor {
        Executor::default()
    }

    /// Read access to the store, mainly for tests and inspection.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Execute a single command.
    pub fn execute(&mut self, cmd: Command) -> Result<Output> {
        match cmd {
            Command::Insert { record } => handlers::insert::insert(&mut self.store, record),
            Command::Select { fields, conditions } => {
                handlers::select::select(&self.store, &fields, &conditions)
            }
            Command::Delete { conditions } => {
                handlers::delete::delete(&mut self.store, &conditions)
            }
            Command::Update {
                assignments,
                conditions,
            } => handlers::update::update(&mut self.store, &assignments, &conditions),
            Command::Uniq { fields } => handlers::uniq::uniq(&mut self.store, &fields),
            Command::Sort { keys } => handlers::sort::sort(&mut self.store, &keys),
        }
    }
}

//! Insert handler.

use fleetdb_core::Record;
use fleetdb_engine::RecordStore;
use tracing::debug;

use crate::{Output, Result};

/// Append one validated record; the acknowledged count is the store's
/// ever-appended counter (the new record's sequence number), not its
/// current length.
pub fn insert(store: &mut RecordStore, record: Record) -> Result<Output> {
    let appended = store.append(record);
    debug!(appended, "record inserted");
    Ok(Output::Inserted { appended })
}

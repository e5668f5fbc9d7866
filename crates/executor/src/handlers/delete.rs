//! Delete handler.

use fleetdb_engine::RecordStore;
use tracing::debug;

use crate::condition::{matches_all, Condition};
use crate::{Output, Result};

/// Remove every record satisfying the conditions, preserving the relative
/// order of survivors. The parser guarantees a non-empty condition list.
pub fn delete(store: &mut RecordStore, conditions: &[Condition]) -> Result<Output> {
    let removed = store.remove_where(|r| matches_all(conditions, r)) as u64;
    debug!(removed, remaining = store.len(), "records deleted");
    Ok(Output::Deleted { removed })
}

//! Uniq (deduplication) handler.

use fleetdb_core::FieldId;
use fleetdb_engine::RecordStore;
use tracing::debug;

use crate::{Output, Result};

/// Remove duplicates under the given equality key, keeping the
/// last-inserted record of each group.
///
/// Key equality goes through [`fleetdb_core::FieldValue::dedup_eq`], which
/// compares plate region digits numerically — deliberately different from
/// the three-level plate ordering used by conditions and sort keys.
pub fn uniq(store: &mut RecordStore, fields: &[FieldId]) -> Result<Output> {
    let removed = store.dedup_keep_last(|a, b| {
        fields.iter().all(|f| a.get(*f).dedup_eq(b.get(*f)))
    }) as u64;
    debug!(removed, remaining = store.len(), "duplicates removed");
    Ok(Output::Deduplicated { removed })
}

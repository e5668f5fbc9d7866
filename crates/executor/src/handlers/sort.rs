//! Sort handler.

use std::cmp::Ordering;

use fleetdb_engine::RecordStore;

use crate::command::{SortKey, SortOrder};
use crate::{Output, Result};

/// Stable multi-key sort of the whole store. Keys apply in listed priority
/// order; records equal on every key keep their current relative order.
pub fn sort(store: &mut RecordStore, keys: &[SortKey]) -> Result<Output> {
    store.sort_by(|a, b| {
        for key in keys {
            let ord = a
                .get(key.field)
                .compare(b.get(key.field))
                .unwrap_or(Ordering::Equal);
            let ord = match key.order {
                SortOrder::Ascending => ord,
                SortOrder::Descending => ord.reverse(),
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    });
    Ok(Output::Sorted {
        size: store.len() as u64,
    })
}

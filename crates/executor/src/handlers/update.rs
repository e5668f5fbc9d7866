//! Update handler.

use fleetdb_engine::RecordStore;
use tracing::debug;

use crate::command::Assignment;
use crate::condition::{matches_all, Condition};
use crate::{Output, Result};

/// Overwrite the listed fields of every matching record in place; fields
/// not listed stay untouched. With no conditions, every record matches.
pub fn update(
    store: &mut RecordStore,
    assignments: &[Assignment],
    conditions: &[Condition],
) -> Result<Output> {
    let touched = store.update_where(
        |r| matches_all(conditions, r),
        |r| {
            for a in assignments {
                r.set(a.field, a.value.clone());
            }
        },
    ) as u64;
    debug!(touched, "records updated");
    Ok(Output::Updated { touched })
}

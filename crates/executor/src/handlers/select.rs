//! Select handler.

use fleetdb_core::{FieldId, Record};
use fleetdb_engine::RecordStore;

use crate::condition::{matches_all, Condition};
use crate::{Output, Result};

/// Project the requested fields of every matching record, in store order.
/// With no conditions, every record matches.
pub fn select(
    store: &RecordStore,
    fields: &[FieldId],
    conditions: &[Condition],
) -> Result<Output> {
    let rows: Vec<String> = store
        .iter()
        .filter(|r| matches_all(conditions, r))
        .map(|r| render_row(r, fields))
        .collect();
    Ok(Output::Selected {
        matched: rows.len() as u64,
        rows,
    })
}

/// Space-separated `name=literal` pairs in the caller-requested order,
/// using the same literal syntaxes the insert parser accepts.
fn render_row(record: &Record, fields: &[FieldId]) -> String {
    fields
        .iter()
        .map(|f| format!("{}={}", f.name(), record.get(*f)))
        .collect::<Vec<_>>()
        .join(" ")
}

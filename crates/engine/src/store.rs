//! The ordered record store.

use std::cmp::Ordering;

use fleetdb_core::Record;
use tracing::trace;

/// Insertion-ordered sequence of records.
///
/// Backed by a growable vector (the contiguous redesign of the original
/// singly linked sequence): O(1) tail append, stable in-place sort, and
/// order-preserving filtered removal. The `appended` counter counts records
/// ever appended; it never decreases and is never reused, and it is what
/// `insert` acknowledges.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    appended: u64,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> RecordStore {
        RecordStore::default()
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Count of records ever appended.
    pub fn appended(&self) -> u64 {
        self.appended
    }

    /// Iterate records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Append a record at the tail, returning the new ever-appended count.
    pub fn append(&mut self, record: Record) -> u64 {
        self.records.push(record);
        self.appended += 1;
        trace!(appended = self.appended, "record appended");
        self.appended
    }

    /// Remove every record matching the predicate, preserving the relative
    /// order of survivors. Returns the number removed.
    pub fn remove_where<F>(&mut self, mut pred: F) -> usize
    where
        F: FnMut(&Record) -> bool,
    {
        let before = self.records.len();
        self.records.retain(|r| !pred(r));
        before - self.records.len()
    }

    /// Apply `mutate` to every record matching the predicate. Returns the
    /// number of records touched.
    pub fn update_where<P, M>(&mut self, mut pred: P, mut mutate: M) -> usize
    where
        P: FnMut(&Record) -> bool,
        M: FnMut(&mut Record),
    {
        let mut touched = 0;
        for record in &mut self.records {
            if pred(record) {
                mutate(record);
                touched += 1;
            }
        }
        touched
    }

    /// Stable sort of the whole store by the given comparator. Records that
    /// compare equal keep their current relative order.
    pub fn sort_by<F>(&mut self, cmp: F)
    where
        F: FnMut(&Record, &Record) -> Ordering,
    {
        self.records.sort_by(cmp);
    }

    /// Remove duplicates under `same_key`, keeping the latest-inserted
    /// record of each group and preserving the relative order of survivors.
    /// Returns the number removed.
    ///
    /// Scans in reverse insertion order so later insertions win ties; the
    /// distinct check against already-kept records is O(n²), which is fine
    /// at the record counts this store sees.
    pub fn dedup_keep_last<F>(&mut self, mut same_key: F) -> usize
    where
        F: FnMut(&Record, &Record) -> bool,
    {
        let n = self.records.len();
        let mut keep = vec![true; n];
        for i in (0..n).rev() {
            for j in (i + 1..n).rev() {
                if keep[j] && same_key(&self.records[i], &self.records[j]) {
                    keep[i] = false;
                    break;
                }
            }
        }
        let mut it = keep.iter();
        self.records.retain(|_| *it.next().unwrap_or(&true));
        keep.iter().filter(|k| !**k).count()
    }
}

//! Period-key derivation.
//!
//! Stamps each raw record with its year, quarter, and month buckets so the
//! downstream stages can group without touching the calendar again.

use tracing::debug;
use vahan_spi::{DerivedRecord, RawRecord};

/// Derive period keys for a batch of raw records.
///
/// Pure: the input is untouched and the output is freshly built. Call again
/// after any filter pass; derived records are never patched in place.
pub fn derive(records: &[RawRecord]) -> Vec<DerivedRecord> {
    let derived: Vec<DerivedRecord> = records.iter().map(DerivedRecord::from_raw).collect();
    debug!(records = derived.len(), "derived period keys");
    derived
}

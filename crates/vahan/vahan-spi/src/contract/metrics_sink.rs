//! Metrics sink trait definition.

use crate::error::Result;
use crate::model::{Granularity, GrowthRecord, MarketShareRecord};

/// Trait for collaborators that persist computed metrics.
///
/// Storage is keyed by (granularity, period label, group values) for growth
/// rows and (granularity, period label, category, manufacturer) for share
/// rows. Writes must upsert: recomputing the same input yields the same
/// rows, and a second write with an identical key overwrites rather than
/// duplicates.
pub trait MetricsSink {
    /// Store a batch of growth records.
    fn store_growth(&mut self, granularity: Granularity, records: &[GrowthRecord]) -> Result<()>;

    /// Store a batch of market share records.
    fn store_share(
        &mut self,
        granularity: Granularity,
        records: &[MarketShareRecord],
    ) -> Result<()>;
}

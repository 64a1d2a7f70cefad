//! Grouped period aggregation.

use std::collections::HashMap;
use vahan_spi::{AggregatedRecord, DerivedRecord, Dimension, Granularity, PeriodKey};

/// Sum registrations per (period, dimension-values) bucket.
///
/// `dimensions` is an ordered grouping list; empty collapses all records
/// into one group per period. Duplicate records for the same bucket are
/// summed. Output is sorted by period ordinal then group values, so
/// identical input always yields identical output.
pub fn aggregate(
    records: &[DerivedRecord],
    granularity: Granularity,
    dimensions: &[Dimension],
) -> Vec<AggregatedRecord> {
    let mut sums: HashMap<(PeriodKey, Vec<String>), f64> = HashMap::new();

    for record in records {
        let period = record.period_key(granularity);
        let group: Vec<String> = dimensions
            .iter()
            .map(|d| match d {
                Dimension::Category => record.category.clone(),
                Dimension::Manufacturer => record.manufacturer.clone(),
            })
            .collect();
        *sums.entry((period, group)).or_insert(0.0) += record.registrations as f64;
    }

    let mut out: Vec<AggregatedRecord> = sums
        .into_iter()
        .map(|((period, group), registrations)| AggregatedRecord {
            period,
            group,
            registrations,
        })
        .collect();

    out.sort_by(|a, b| {
        a.period
            .ordinal()
            .cmp(&b.period.ordinal())
            .then_with(|| a.group.cmp(&b.group))
    });
    out
}

//! Period-over-period growth alignment.
//!
//! One shift-by-one algorithm serves YoY, QoQ, and MoM; only the period key
//! changes. Rows are ordered per group by the numeric period ordinal, never
//! by label text.

use std::collections::HashMap;
use tracing::debug;
use vahan_spi::{AggregatedRecord, Dimension, Granularity, GrowthRecord, RawRecord};

/// Align each group's consecutive periods and compute absolute and
/// percentage change.
///
/// The chronologically first row of a group carries no predecessor: its
/// `previous`, `growth_abs`, and `growth_pct` stay `None`. A predecessor of
/// zero still yields `growth_abs`, but the percentage is undefined and stays
/// `None`; no infinity or NaN ever reaches the caller.
pub fn growth(aggregated: &[AggregatedRecord]) -> Vec<GrowthRecord> {
    let mut groups: HashMap<Vec<String>, Vec<&AggregatedRecord>> = HashMap::new();
    for record in aggregated {
        groups.entry(record.group.clone()).or_default().push(record);
    }

    let mut keys: Vec<Vec<String>> = groups.keys().cloned().collect();
    keys.sort();

    let mut out = Vec::with_capacity(aggregated.len());
    for key in keys {
        let mut rows = groups.remove(&key).unwrap_or_default();
        rows.sort_by_key(|r| r.period.ordinal());

        let mut previous: Option<f64> = None;
        for row in rows {
            let (growth_abs, growth_pct) = match previous {
                None => (None, None),
                Some(prev) => {
                    let abs = row.registrations - prev;
                    let pct = if prev == 0.0 {
                        None
                    } else {
                        let value = abs / prev * 100.0;
                        value.is_finite().then_some(value)
                    };
                    (Some(abs), pct)
                }
            };
            out.push(GrowthRecord {
                period: row.period,
                group: row.group.clone(),
                registrations: row.registrations,
                previous,
                growth_abs,
                growth_pct,
            });
            previous = Some(row.registrations);
        }
    }

    debug!(records = out.len(), "computed growth records");
    out
}

/// Year-over-year growth from raw records.
pub fn yoy_growth(records: &[RawRecord], dimensions: &[Dimension]) -> Vec<GrowthRecord> {
    growth_at(records, Granularity::Year, dimensions)
}

/// Quarter-over-quarter growth from raw records.
pub fn qoq_growth(records: &[RawRecord], dimensions: &[Dimension]) -> Vec<GrowthRecord> {
    growth_at(records, Granularity::Quarter, dimensions)
}

/// Month-over-month growth from raw records.
pub fn mom_growth(records: &[RawRecord], dimensions: &[Dimension]) -> Vec<GrowthRecord> {
    growth_at(records, Granularity::Month, dimensions)
}

fn growth_at(
    records: &[RawRecord],
    granularity: Granularity,
    dimensions: &[Dimension],
) -> Vec<GrowthRecord> {
    let derived = crate::derive::derive(records);
    let aggregated = crate::aggregate::aggregate(&derived, granularity, dimensions);
    growth(&aggregated)
}

//! Scalar summary statistics and benchmark reporting.

use std::collections::{BTreeSet, HashMap};
use vahan_spi::{
    DerivedRecord, Granularity, GrowthBenchmarks, PeriodKey, RankingEntry, SummaryStats,
};

/// Digest a record set into the scalar statistics used for status reporting.
///
/// Empty input yields the explicit empty digest, never an error.
pub fn summarize(records: &[DerivedRecord]) -> SummaryStats {
    if records.is_empty() {
        return SummaryStats::empty();
    }

    let mut categories = BTreeSet::new();
    let mut manufacturers = BTreeSet::new();
    let mut years = BTreeSet::new();
    let mut monthly_totals: HashMap<(i32, u32), f64> = HashMap::new();
    let mut total_registrations: u64 = 0;
    let mut min_date = records[0].date;
    let mut max_date = records[0].date;

    for record in records {
        categories.insert(record.category.clone());
        manufacturers.insert(record.manufacturer.clone());
        years.insert(record.year);
        total_registrations += record.registrations;
        *monthly_totals
            .entry((record.year, record.month))
            .or_insert(0.0) += record.registrations as f64;
        if record.date < min_date {
            min_date = record.date;
        }
        if record.date > max_date {
            max_date = record.date;
        }
    }

    let avg_monthly =
        monthly_totals.values().sum::<f64>() / monthly_totals.len() as f64;

    SummaryStats {
        total_records: records.len(),
        total_registrations,
        date_range: Some((min_date, max_date)),
        categories: categories.into_iter().collect(),
        manufacturers: manufacturers.into_iter().collect(),
        years: years.into_iter().collect(),
        avg_monthly_registrations: Some(avg_monthly),
    }
}

/// Percentile benchmarks over a growth-rate series.
///
/// Non-finite values are skipped; `None` when nothing finite remains.
/// Percentiles use linear interpolation between closest ranks.
pub fn growth_benchmarks(series: &[f64]) -> Option<GrowthBenchmarks> {
    let mut clean: Vec<f64> = series.iter().copied().filter(|v| v.is_finite()).collect();
    if clean.is_empty() {
        return None;
    }
    clean.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mean = clean.iter().sum::<f64>() / clean.len() as f64;
    let std = if clean.len() < 2 {
        0.0
    } else {
        let variance = clean.iter().map(|v| (v - mean).powi(2)).sum::<f64>()
            / (clean.len() - 1) as f64;
        variance.sqrt()
    };

    Some(GrowthBenchmarks {
        p25: percentile_sorted(&clean, 25.0),
        median: percentile_sorted(&clean, 50.0),
        p75: percentile_sorted(&clean, 75.0),
        p90: percentile_sorted(&clean, 90.0),
        mean,
        std,
        min: clean[0],
        max: clean[clean.len() - 1],
    })
}

/// Linear-interpolation percentile over an already sorted slice.
fn percentile_sorted(sorted: &[f64], percentile: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let rank = percentile / 100.0 * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = (lower + 1).min(n - 1);
    let fraction = rank - lower as f64;
    sorted[lower] * (1.0 - fraction) + sorted[upper] * fraction
}

/// Top manufacturers by volume in the latest period at the granularity.
pub fn manufacturer_rankings(
    records: &[DerivedRecord],
    granularity: Granularity,
    top_n: usize,
) -> Vec<RankingEntry> {
    let latest: Option<PeriodKey> = records
        .iter()
        .map(|r| r.period_key(granularity))
        .max_by_key(|k| k.ordinal());
    let latest = match latest {
        Some(key) => key,
        None => return Vec::new(),
    };

    let mut sums: HashMap<String, f64> = HashMap::new();
    for record in records {
        if record.period_key(granularity) == latest {
            *sums.entry(record.manufacturer.clone()).or_insert(0.0) +=
                record.registrations as f64;
        }
    }

    let mut out: Vec<RankingEntry> = sums
        .into_iter()
        .map(|(manufacturer, registrations)| RankingEntry {
            manufacturer,
            registrations,
        })
        .collect();
    out.sort_by(|a, b| {
        b.registrations
            .partial_cmp(&a.registrations)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.manufacturer.cmp(&b.manufacturer))
    });
    out.truncate(top_n);
    out
}

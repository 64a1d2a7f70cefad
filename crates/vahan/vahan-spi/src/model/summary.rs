//! Summary, benchmark, and trend statistic types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall trend direction of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Slope above +5% of the series mean
    Increasing,
    /// Slope below -5% of the series mean
    Decreasing,
    /// Slope within the threshold band
    Stable,
    /// Fewer clean observations than requested
    InsufficientData,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TrendDirection::Increasing => "increasing",
            TrendDirection::Decreasing => "decreasing",
            TrendDirection::Stable => "stable",
            TrendDirection::InsufficientData => "insufficient_data",
        };
        write!(f, "{}", s)
    }
}

/// Scalar digest of a record set for status reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Number of input records
    pub total_records: usize,
    /// Sum of registrations over all records
    pub total_registrations: u64,
    /// Inclusive (earliest, latest) observation dates
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    /// Distinct categories, sorted
    pub categories: Vec<String>,
    /// Distinct manufacturers, sorted
    pub manufacturers: Vec<String>,
    /// Distinct years covered, ascending
    pub years: Vec<i32>,
    /// Mean of the per-month registration totals
    pub avg_monthly_registrations: Option<f64>,
}

impl SummaryStats {
    /// Digest of an empty record set.
    pub fn empty() -> Self {
        Self {
            total_records: 0,
            total_registrations: 0,
            date_range: None,
            categories: Vec::new(),
            manufacturers: Vec::new(),
            years: Vec::new(),
            avg_monthly_registrations: None,
        }
    }
}

/// Percentile benchmarks over a growth-rate series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthBenchmarks {
    /// 25th percentile
    pub p25: f64,
    /// 50th percentile
    pub median: f64,
    /// 75th percentile
    pub p75: f64,
    /// 90th percentile
    pub p90: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Sample standard deviation
    pub std: f64,
    /// Minimum
    pub min: f64,
    /// Maximum
    pub max: f64,
}

/// Stability statistics for a growth-rate series.
///
/// All fields are `None` when fewer than two clean growth values exist.
/// When the mean is exactly zero with non-zero spread, the coefficient of
/// variation is unbounded: it is reported as `None` and the score as zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyStats {
    /// Mean growth rate
    pub mean: Option<f64>,
    /// Sample standard deviation of growth rates
    pub std_dev: Option<f64>,
    /// std_dev / |mean|; `None` when unbounded or not computable
    pub coefficient_of_variation: Option<f64>,
    /// Share of periods with positive growth, in percent
    pub percent_positive: Option<f64>,
    /// 1 / (1 + CV); zero when the CV is unbounded
    pub consistency_score: Option<f64>,
}

impl ConsistencyStats {
    /// Statistics for a series with fewer than two clean values.
    pub fn insufficient() -> Self {
        Self {
            mean: None,
            std_dev: None,
            coefficient_of_variation: None,
            percent_positive: None,
            consistency_score: None,
        }
    }
}

/// One row of a manufacturer volume ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    /// Manufacturer
    pub manufacturer: String,
    /// Registration sum over the ranked period
    pub registrations: f64,
}

/// Seasonal index for one calendar month.
///
/// An index of 1.0 means the month performs at the overall monthly average.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonalIndex {
    /// Calendar month (1-12)
    pub month: u32,
    /// Month average divided by the grand monthly average
    pub index: f64,
}

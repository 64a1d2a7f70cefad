//! Vahan API
//!
//! Configuration types and the common-surface prelude for the
//! vehicle-registration analytics stack.

pub mod config;

pub use config::{AnalysisConfig, AnalysisConfigBuilder};

// Re-export SPI and core so dependents get the full surface from one crate
pub use vahan_core::*;

/// Convenient single-import surface.
pub mod prelude {
    pub use crate::config::{AnalysisConfig, AnalysisConfigBuilder};
    pub use vahan_core::{
        aggregate, consistency, derive, filter_records, growth, growth_benchmarks,
        manufacturer_rankings, market_share, mom_growth, moving_average, qoq_growth,
        seasonal_indices, summarize, volatility, yoy_growth, LeastSquaresTrend,
    };
    pub use vahan_spi::{
        parse_date, AggregatedRecord, ConsistencyStats, DerivedRecord, Dimension, Granularity,
        GrowthBenchmarks, GrowthRecord, MarketShareRecord, MetricsSink, PeriodKey, RankingEntry,
        RawRecord, RecordFilter, RegistrationSource, Result, SeasonalIndex, SummaryStats,
        TrendClassifier, TrendDirection, VahanError,
    };
}

//! Vahan Core
//!
//! Deterministic transformations that turn a raw registration time series
//! into period-aligned growth, market-share, trend, and summary metrics.
//! Every stage is a pure function over immutable input; no stage holds or
//! mutates shared state.

pub mod aggregate;
pub mod derive;
pub mod filter;
pub mod growth;
pub mod seasonal;
pub mod share;
pub mod summary;
pub mod trend;

// Re-export SPI types for implementations
pub use vahan_spi::{
    parse_date, AggregatedRecord, ConsistencyStats, DerivedRecord, Dimension, Granularity,
    GrowthBenchmarks, GrowthRecord, MarketShareRecord, MetricsSink, PeriodKey, RankingEntry,
    RawRecord, RecordFilter, RegistrationSource, Result, SeasonalIndex, SummaryStats,
    TrendClassifier, TrendDirection, VahanError,
};

// Re-export main entry points
pub use aggregate::aggregate;
pub use derive::derive;
pub use filter::filter_records;
pub use growth::{growth, mom_growth, qoq_growth, yoy_growth};
pub use seasonal::seasonal_indices;
pub use share::market_share;
pub use summary::{growth_benchmarks, manufacturer_rankings, summarize};
pub use trend::{
    cagr, consistency, growth_acceleration, moving_average, volatility, LeastSquaresTrend,
};

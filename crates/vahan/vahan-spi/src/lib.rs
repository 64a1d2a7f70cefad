//! Vahan Service Provider Interface
//!
//! Defines the contracts, error taxonomy, and model types shared by the
//! vehicle-registration analytics stack.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{MetricsSink, RegistrationSource, TrendClassifier};
pub use error::{Result, VahanError};
pub use model::{
    parse_date, AggregatedRecord, ConsistencyStats, DerivedRecord, Dimension, Granularity,
    GrowthBenchmarks, GrowthRecord, MarketShareRecord, PeriodKey, RankingEntry, RawRecord,
    RecordFilter, SeasonalIndex, SummaryStats, TrendDirection,
};

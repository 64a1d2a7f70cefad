//! Model module containing data structures

mod filter;
mod growth;
mod period;
mod record;
mod share;
mod summary;

pub use filter::RecordFilter;
pub use growth::{AggregatedRecord, GrowthRecord};
pub use period::{Dimension, Granularity, PeriodKey};
pub use record::{parse_date, DerivedRecord, RawRecord};
pub use share::MarketShareRecord;
pub use summary::{
    ConsistencyStats, GrowthBenchmarks, RankingEntry, SeasonalIndex, SummaryStats, TrendDirection,
};

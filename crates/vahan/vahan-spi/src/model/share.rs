//! Market share records.

use crate::model::PeriodKey;
use serde::{Deserialize, Serialize};

/// One manufacturer's share of its category for one period.
///
/// Within a fixed (period, category), `share_pct` sums to 100 across the
/// manufacturers present in that bucket. Buckets whose total is zero are
/// never emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketShareRecord {
    /// Period bucket
    pub period: PeriodKey,
    /// Vehicle category defining the market
    pub category: String,
    /// Manufacturer
    pub manufacturer: String,
    /// Manufacturer's registration sum in the bucket
    pub registrations: f64,
    /// Total registrations over all manufacturers in the bucket
    pub category_total: f64,
    /// registrations / category_total * 100
    pub share_pct: f64,
}

//! Aggregated and period-over-period growth records.

use crate::model::PeriodKey;
use serde::{Deserialize, Serialize};

/// A grouped registration sum for one period.
///
/// `group` holds the dimension values in the order the aggregation was asked
/// for (e.g., `["2W", "Hero MotoCorp"]` for category + manufacturer). An
/// empty vec means all records collapsed into one group per period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedRecord {
    /// Period bucket
    pub period: PeriodKey,
    /// Dimension values, in grouping order
    pub group: Vec<String>,
    /// Sum of registrations over the group and period
    pub registrations: f64,
}

/// An aggregated record aligned with its immediate predecessor period.
///
/// `previous`, `growth_abs`, and `growth_pct` are `None` for the
/// chronologically first period of a group (insufficient history), which is
/// distinct from a genuine zero growth of `Some(0.0)`. `growth_pct` is also
/// `None` when the predecessor registered zero; infinities never appear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthRecord {
    /// Period bucket
    pub period: PeriodKey,
    /// Dimension values, in grouping order
    pub group: Vec<String>,
    /// Sum of registrations for this period
    pub registrations: f64,
    /// Predecessor period's sum, if the group has one
    pub previous: Option<f64>,
    /// Absolute change versus the predecessor
    pub growth_abs: Option<f64>,
    /// Percentage change versus the predecessor
    pub growth_pct: Option<f64>,
}

impl GrowthRecord {
    /// True when this record is the first period observed for its group.
    pub fn is_first_period(&self) -> bool {
        self.previous.is_none()
    }
}

//! Period granularity and canonical period keys.

use crate::error::VahanError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Period granularity for aggregation and growth comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Granularity {
    /// Calendar month buckets ("YYYY-MM")
    Month,
    /// Calendar quarter buckets ("YYYY-Qn")
    Quarter,
    /// Calendar year buckets ("YYYY")
    Year,
}

impl Granularity {
    /// Storage identifier used by persistence collaborators.
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Month => "monthly",
            Granularity::Quarter => "quarterly",
            Granularity::Year => "yearly",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Granularity::Month => "month",
            Granularity::Quarter => "quarter",
            Granularity::Year => "year",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Granularity {
    type Err = VahanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "month" | "monthly" => Ok(Granularity::Month),
            "quarter" | "quarterly" => Ok(Granularity::Quarter),
            "year" | "yearly" => Ok(Granularity::Year),
            other => Err(VahanError::InvalidGranularity(other.to_string())),
        }
    }
}

/// Grouping dimension for aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// Vehicle category (e.g., "2W", "4W")
    Category,
    /// Manufacturer name
    Manufacturer,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Dimension::Category => "category",
            Dimension::Manufacturer => "manufacturer",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Dimension {
    type Err = VahanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "category" | "vehicle_category" => Ok(Dimension::Category),
            "manufacturer" => Ok(Dimension::Manufacturer),
            other => Err(VahanError::InvalidParameter {
                name: "dimension".to_string(),
                reason: format!("unknown dimension '{}'", other),
            }),
        }
    }
}

/// Canonical identifier for a calendar bucket.
///
/// The ordinal is the chronological sort key; labels such as "2020-Q4" must
/// never be compared as strings to order periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodKey {
    /// A calendar year
    Year(i32),
    /// A calendar quarter (1-4) of a year
    Quarter { year: i32, quarter: u32 },
    /// A calendar month (1-12) of a year
    Month { year: i32, month: u32 },
}

impl PeriodKey {
    /// Numeric key that increases monotonically with real time within a
    /// granularity: `year`, `year*10 + quarter`, or `year*12 + month`.
    pub fn ordinal(&self) -> i64 {
        match *self {
            PeriodKey::Year(year) => year as i64,
            PeriodKey::Quarter { year, quarter } => year as i64 * 10 + quarter as i64,
            PeriodKey::Month { year, month } => year as i64 * 12 + month as i64,
        }
    }

    /// Display/storage label: "2021", "2021-Q2", or "2021-03".
    pub fn label(&self) -> String {
        match *self {
            PeriodKey::Year(year) => format!("{}", year),
            PeriodKey::Quarter { year, quarter } => format!("{}-Q{}", year, quarter),
            PeriodKey::Month { year, month } => format!("{}-{:02}", year, month),
        }
    }

    /// Granularity this key belongs to.
    pub fn granularity(&self) -> Granularity {
        match self {
            PeriodKey::Year(_) => Granularity::Year,
            PeriodKey::Quarter { .. } => Granularity::Quarter,
            PeriodKey::Month { .. } => Granularity::Month,
        }
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

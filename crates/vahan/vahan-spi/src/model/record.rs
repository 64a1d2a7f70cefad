//! Raw and period-keyed registration records.

use crate::error::{Result, VahanError};
use crate::model::{Granularity, PeriodKey};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single registration count observation.
///
/// Duplicates on (date, category, manufacturer) are legal input and are
/// summed during aggregation, never deduplicated away.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Observation date
    pub date: NaiveDate,
    /// Vehicle category (e.g., "2W", "3W", "4W")
    #[serde(alias = "vehicle_category")]
    pub category: String,
    /// Manufacturer name
    pub manufacturer: String,
    /// Registration count for the observation
    pub registrations: u64,
}

impl RawRecord {
    /// Create a new RawRecord.
    pub fn new(date: NaiveDate, category: &str, manufacturer: &str, registrations: u64) -> Self {
        Self {
            date,
            category: category.to_string(),
            manufacturer: manufacturer.to_string(),
            registrations,
        }
    }

    /// Create a RawRecord from a "YYYY-MM-DD" date string.
    pub fn parse(
        date: &str,
        category: &str,
        manufacturer: &str,
        registrations: u64,
    ) -> Result<Self> {
        Ok(Self::new(
            parse_date(date)?,
            category,
            manufacturer,
            registrations,
        ))
    }
}

/// Parse a "YYYY-MM-DD" string into a calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|e| VahanError::InvalidDate {
        value: s.to_string(),
        reason: e.to_string(),
    })
}

/// A RawRecord extended with canonical period keys.
///
/// Derived once per analysis pass; re-derived from scratch whenever the
/// underlying record set changes (e.g., after filtering).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedRecord {
    /// Observation date
    pub date: NaiveDate,
    /// Vehicle category
    pub category: String,
    /// Manufacturer name
    pub manufacturer: String,
    /// Registration count
    pub registrations: u64,
    /// Calendar year
    pub year: i32,
    /// Calendar month (1-12)
    pub month: u32,
    /// Calendar quarter (1-4)
    pub quarter: u32,
    /// "YYYY-Qn" label
    pub year_quarter: String,
    /// "YYYY-MM" label
    pub year_month: String,
}

impl DerivedRecord {
    /// Derive period keys from a raw record.
    pub fn from_raw(raw: &RawRecord) -> Self {
        let year = raw.date.year();
        let month = raw.date.month();
        let quarter = (month - 1) / 3 + 1;
        Self {
            date: raw.date,
            category: raw.category.clone(),
            manufacturer: raw.manufacturer.clone(),
            registrations: raw.registrations,
            year,
            month,
            quarter,
            year_quarter: format!("{}-Q{}", year, quarter),
            year_month: format!("{}-{:02}", year, month),
        }
    }

    /// Period key for this record at the given granularity.
    pub fn period_key(&self, granularity: Granularity) -> PeriodKey {
        match granularity {
            Granularity::Year => PeriodKey::Year(self.year),
            Granularity::Quarter => PeriodKey::Quarter {
                year: self.year,
                quarter: self.quarter,
            },
            Granularity::Month => PeriodKey::Month {
                year: self.year,
                month: self.month,
            },
        }
    }
}

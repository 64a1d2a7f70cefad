//! Record filtering criteria.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Criteria for narrowing a record set before analysis.
///
/// Absent criteria are no-ops; date bounds are inclusive; category and
/// manufacturer lists are allow-lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordFilter {
    /// Earliest date to keep, inclusive
    pub start_date: Option<NaiveDate>,
    /// Latest date to keep, inclusive
    pub end_date: Option<NaiveDate>,
    /// Categories to keep
    pub categories: Option<Vec<String>>,
    /// Manufacturers to keep
    pub manufacturers: Option<Vec<String>>,
}

impl RecordFilter {
    /// Filter that keeps everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inclusive start date.
    pub fn from_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Set the inclusive end date.
    pub fn to_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Keep only the given categories.
    pub fn with_categories(mut self, categories: &[&str]) -> Self {
        self.categories = Some(categories.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Keep only the given manufacturers.
    pub fn with_manufacturers(mut self, manufacturers: &[&str]) -> Self {
        self.manufacturers = Some(manufacturers.iter().map(|s| s.to_string()).collect());
        self
    }

    /// True when no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none()
            && self.end_date.is_none()
            && self.categories.is_none()
            && self.manufacturers.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_is_empty() {
        assert!(RecordFilter::new().is_empty());
    }

    #[test]
    fn test_builder_chain() {
        let filter = RecordFilter::new()
            .from_date(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap())
            .to_date(NaiveDate::from_ymd_opt(2021, 12, 31).unwrap())
            .with_categories(&["2W", "4W"])
            .with_manufacturers(&["Hero MotoCorp"]);

        assert!(!filter.is_empty());
        assert_eq!(filter.categories.as_deref().unwrap().len(), 2);
        assert_eq!(
            filter.manufacturers.as_deref().unwrap(),
            ["Hero MotoCorp".to_string()]
        );
    }
}

//! Record filtering.

use vahan_spi::{RawRecord, RecordFilter};

/// Keep the records matching the filter.
///
/// Date bounds are inclusive; category and manufacturer lists are
/// allow-lists; absent criteria keep everything. The caller re-derives
/// period keys from the returned subset.
pub fn filter_records(records: &[RawRecord], filter: &RecordFilter) -> Vec<RawRecord> {
    records
        .iter()
        .filter(|r| {
            if let Some(start) = filter.start_date {
                if r.date < start {
                    return false;
                }
            }
            if let Some(end) = filter.end_date {
                if r.date > end {
                    return false;
                }
            }
            if let Some(categories) = &filter.categories {
                if !categories.iter().any(|c| c == &r.category) {
                    return false;
                }
            }
            if let Some(manufacturers) = &filter.manufacturers {
                if !manufacturers.iter().any(|m| m == &r.manufacturer) {
                    return false;
                }
            }
            true
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_records() -> Vec<RawRecord> {
        vec![
            RawRecord::parse("2021-01-15", "2W", "Hero MotoCorp", 100).unwrap(),
            RawRecord::parse("2021-06-15", "2W", "TVS Motor", 80).unwrap(),
            RawRecord::parse("2022-01-15", "4W", "Maruti Suzuki", 250).unwrap(),
            RawRecord::parse("2022-06-15", "4W", "Tata Motors", 120).unwrap(),
        ]
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let records = sample_records();
        let kept = filter_records(&records, &RecordFilter::new());
        assert_eq!(kept, records);
    }

    #[test]
    fn test_date_bounds_are_inclusive() {
        let records = sample_records();
        let filter = RecordFilter::new()
            .from_date(NaiveDate::from_ymd_opt(2021, 6, 15).unwrap())
            .to_date(NaiveDate::from_ymd_opt(2022, 1, 15).unwrap());

        let kept = filter_records(&records, &filter);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].manufacturer, "TVS Motor");
        assert_eq!(kept[1].manufacturer, "Maruti Suzuki");
    }

    #[test]
    fn test_category_allow_list() {
        let records = sample_records();
        let filter = RecordFilter::new().with_categories(&["4W"]);

        let kept = filter_records(&records, &filter);
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|r| r.category == "4W"));
    }

    #[test]
    fn test_manufacturer_allow_list() {
        let records = sample_records();
        let filter = RecordFilter::new().with_manufacturers(&["Hero MotoCorp", "Tata Motors"]);

        let kept = filter_records(&records, &filter);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_combined_criteria() {
        let records = sample_records();
        let filter = RecordFilter::new()
            .from_date(NaiveDate::from_ymd_opt(2022, 1, 1).unwrap())
            .with_categories(&["4W"])
            .with_manufacturers(&["Tata Motors"]);

        let kept = filter_records(&records, &filter);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].manufacturer, "Tata Motors");
    }

    #[test]
    fn test_no_match_returns_empty() {
        let records = sample_records();
        let filter = RecordFilter::new().with_categories(&["3W"]);
        assert!(filter_records(&records, &filter).is_empty());
    }
}

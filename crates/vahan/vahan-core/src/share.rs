//! Market share within category and period.

use std::collections::HashMap;
use vahan_spi::{DerivedRecord, Dimension, Granularity, MarketShareRecord, PeriodKey};

/// Compute each manufacturer's share of its category per period.
///
/// A (period, category) bucket whose total is zero is excluded from the
/// output entirely; no division by zero takes place.
pub fn market_share(
    records: &[DerivedRecord],
    granularity: Granularity,
) -> Vec<MarketShareRecord> {
    let grouped = crate::aggregate::aggregate(
        records,
        granularity,
        &[Dimension::Category, Dimension::Manufacturer],
    );

    let mut totals: HashMap<(PeriodKey, String), f64> = HashMap::new();
    for row in &grouped {
        *totals
            .entry((row.period, row.group[0].clone()))
            .or_insert(0.0) += row.registrations;
    }

    grouped
        .into_iter()
        .filter_map(|row| {
            let category = row.group[0].clone();
            let manufacturer = row.group[1].clone();
            let category_total = totals[&(row.period, category.clone())];
            if category_total == 0.0 {
                return None;
            }
            Some(MarketShareRecord {
                period: row.period,
                category,
                manufacturer,
                registrations: row.registrations,
                category_total,
                share_pct: row.registrations / category_total * 100.0,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::derive;
    use vahan_spi::RawRecord;

    fn sample_derived() -> Vec<DerivedRecord> {
        derive(&[
            RawRecord::parse("2021-03-10", "2W", "Hero MotoCorp", 300).unwrap(),
            RawRecord::parse("2021-05-10", "2W", "TVS Motor", 100).unwrap(),
            RawRecord::parse("2021-04-10", "4W", "Maruti Suzuki", 400).unwrap(),
            RawRecord::parse("2022-03-10", "2W", "Hero MotoCorp", 250).unwrap(),
            RawRecord::parse("2022-03-15", "2W", "TVS Motor", 250).unwrap(),
        ])
    }

    #[test]
    fn test_yearly_shares() {
        let out = market_share(&sample_derived(), Granularity::Year);

        let hero_2021 = out
            .iter()
            .find(|r| {
                r.period == PeriodKey::Year(2021)
                    && r.manufacturer == "Hero MotoCorp"
            })
            .unwrap();
        assert_eq!(hero_2021.category_total, 400.0);
        assert!((hero_2021.share_pct - 75.0).abs() < 1e-9);

        let maruti_2021 = out
            .iter()
            .find(|r| r.period == PeriodKey::Year(2021) && r.category == "4W")
            .unwrap();
        // Sole manufacturer owns the whole category
        assert!((maruti_2021.share_pct - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_shares_sum_to_hundred_per_bucket() {
        let out = market_share(&sample_derived(), Granularity::Year);

        let mut sums: HashMap<(PeriodKey, String), f64> = HashMap::new();
        for r in &out {
            *sums.entry((r.period, r.category.clone())).or_insert(0.0) += r.share_pct;
        }
        for (bucket, sum) in sums {
            assert!((sum - 100.0).abs() < 1e-6, "bucket {:?} sums to {}", bucket, sum);
        }
    }

    #[test]
    fn test_zero_total_bucket_is_excluded() {
        let records = derive(&[
            RawRecord::parse("2021-01-10", "2W", "Hero MotoCorp", 0).unwrap(),
            RawRecord::parse("2021-01-10", "2W", "TVS Motor", 0).unwrap(),
            RawRecord::parse("2021-01-10", "4W", "Maruti Suzuki", 10).unwrap(),
        ]);
        let out = market_share(&records, Granularity::Year);

        assert!(out.iter().all(|r| r.category != "2W"));
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_all_zero_input_gives_empty_output() {
        let records = derive(&[
            RawRecord::parse("2021-01-10", "2W", "Hero MotoCorp", 0).unwrap(),
        ]);
        assert!(market_share(&records, Granularity::Month).is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(market_share(&[], Granularity::Quarter).is_empty());
    }
}

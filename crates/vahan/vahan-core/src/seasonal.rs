//! Monthly seasonal indices.

use std::collections::HashMap;
use vahan_spi::{DerivedRecord, SeasonalIndex};

/// Seasonal index per calendar month.
///
/// Registrations are summed per (year, month), averaged across years for
/// each calendar month, and divided by the grand mean of those monthly
/// averages. An index above 1.0 marks a stronger-than-average month.
/// Months never observed are absent from the output.
pub fn seasonal_indices(records: &[DerivedRecord]) -> Vec<SeasonalIndex> {
    let mut month_year_sums: HashMap<(i32, u32), f64> = HashMap::new();
    for record in records {
        *month_year_sums
            .entry((record.year, record.month))
            .or_insert(0.0) += record.registrations as f64;
    }
    if month_year_sums.is_empty() {
        return Vec::new();
    }

    let mut per_month: HashMap<u32, Vec<f64>> = HashMap::new();
    for ((_, month), sum) in month_year_sums {
        per_month.entry(month).or_default().push(sum);
    }

    let monthly_avgs: HashMap<u32, f64> = per_month
        .into_iter()
        .map(|(month, sums)| (month, sums.iter().sum::<f64>() / sums.len() as f64))
        .collect();

    let grand_mean = monthly_avgs.values().sum::<f64>() / monthly_avgs.len() as f64;
    if grand_mean == 0.0 {
        return Vec::new();
    }

    let mut out: Vec<SeasonalIndex> = monthly_avgs
        .into_iter()
        .map(|(month, avg)| SeasonalIndex {
            month,
            index: avg / grand_mean,
        })
        .collect();
    out.sort_by_key(|s| s.month);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::derive;
    use vahan_spi::RawRecord;

    #[test]
    fn test_uniform_months_have_unit_index() {
        let records = derive(&[
            RawRecord::parse("2021-01-15", "2W", "A", 100).unwrap(),
            RawRecord::parse("2021-02-15", "2W", "A", 100).unwrap(),
            RawRecord::parse("2022-01-15", "2W", "A", 100).unwrap(),
            RawRecord::parse("2022-02-15", "2W", "A", 100).unwrap(),
        ]);
        let indices = seasonal_indices(&records);

        assert_eq!(indices.len(), 2);
        for s in indices {
            assert!((s.index - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_strong_month_stands_out() {
        let records = derive(&[
            RawRecord::parse("2021-01-15", "2W", "A", 100).unwrap(),
            RawRecord::parse("2021-02-15", "2W", "A", 300).unwrap(),
            RawRecord::parse("2022-01-15", "2W", "A", 100).unwrap(),
            RawRecord::parse("2022-02-15", "2W", "A", 300).unwrap(),
        ]);
        let indices = seasonal_indices(&records);

        let jan = indices.iter().find(|s| s.month == 1).unwrap();
        let feb = indices.iter().find(|s| s.month == 2).unwrap();
        assert!((jan.index - 0.5).abs() < 1e-9);
        assert!((feb.index - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_averaging_across_years() {
        // January totals 100 and 200 across two years: monthly average 150
        let records = derive(&[
            RawRecord::parse("2021-01-15", "2W", "A", 100).unwrap(),
            RawRecord::parse("2022-01-15", "2W", "A", 200).unwrap(),
            RawRecord::parse("2021-06-15", "2W", "A", 150).unwrap(),
        ]);
        let indices = seasonal_indices(&records);

        let jan = indices.iter().find(|s| s.month == 1).unwrap();
        assert!((jan.index - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_and_zero_inputs() {
        assert!(seasonal_indices(&[]).is_empty());

        let zeros = derive(&[RawRecord::parse("2021-01-15", "2W", "A", 0).unwrap()]);
        assert!(seasonal_indices(&zeros).is_empty());
    }
}

//! Trend statistics over derived growth series.
//!
//! Series-level missing values are `f64::NAN` (the warm-up / edge marker);
//! every function here skips non-finite inputs and never returns an
//! infinity. Record-level results use `Option` instead.

use vahan_spi::{ConsistencyStats, Result, TrendClassifier, TrendDirection, VahanError};

/// Centered rolling mean.
///
/// Positions whose full window does not fit inside the series come back as
/// NaN; edges are never clamped to a partial average. The window reaches
/// `(window-1)/2` positions back and `window/2` forward, matching a
/// centered rolling mean with an even-window right bias.
pub fn moving_average(series: &[f64], window: usize) -> Result<Vec<f64>> {
    if window == 0 {
        return Err(VahanError::InvalidParameter {
            name: "window".to_string(),
            reason: "must be positive".to_string(),
        });
    }

    let n = series.len();
    let back = (window - 1) / 2;
    let forward = window / 2;
    let mut out = vec![f64::NAN; n];

    for i in 0..n {
        if i < back || i + forward >= n {
            continue;
        }
        let slice = &series[i - back..=i + forward];
        out[i] = slice.iter().sum::<f64>() / window as f64;
    }
    Ok(out)
}

/// Least-squares trend direction classifier.
///
/// Fits an ordinary least-squares line over the finite values of the series
/// (x = 0..n-1 of the clean values) and compares the slope against a band of
/// ±`threshold_ratio` of the clean mean's magnitude.
#[derive(Debug, Clone)]
pub struct LeastSquaresTrend {
    threshold_ratio: f64,
}

impl LeastSquaresTrend {
    pub fn new() -> Self {
        Self { threshold_ratio: 0.05 }
    }

    pub fn with_threshold(threshold_ratio: f64) -> Self {
        Self { threshold_ratio }
    }

    fn slope(values: &[f64]) -> f64 {
        let n = values.len() as f64;
        let mut sum_x = 0.0;
        let mut sum_y = 0.0;
        let mut sum_xy = 0.0;
        let mut sum_xx = 0.0;

        for (i, &y) in values.iter().enumerate() {
            let x = i as f64;
            sum_x += x;
            sum_y += y;
            sum_xy += x * y;
            sum_xx += x * x;
        }

        let denominator = n * sum_xx - sum_x * sum_x;
        if denominator.abs() < 1e-10 {
            0.0
        } else {
            (n * sum_xy - sum_x * sum_y) / denominator
        }
    }
}

impl Default for LeastSquaresTrend {
    fn default() -> Self {
        Self::new()
    }
}

impl TrendClassifier for LeastSquaresTrend {
    fn classify(&self, series: &[f64], min_periods: usize) -> TrendDirection {
        let clean: Vec<f64> = series.iter().copied().filter(|v| v.is_finite()).collect();
        if clean.len() < min_periods {
            return TrendDirection::InsufficientData;
        }

        let slope = Self::slope(&clean);
        let mean = clean.iter().sum::<f64>() / clean.len() as f64;
        let threshold = (mean * self.threshold_ratio).abs();

        if slope > threshold {
            TrendDirection::Increasing
        } else if slope < -threshold {
            TrendDirection::Decreasing
        } else {
            TrendDirection::Stable
        }
    }
}

/// Classify with the default 5% slope band.
pub fn classify_trend(series: &[f64], min_periods: usize) -> TrendDirection {
    LeastSquaresTrend::new().classify(series, min_periods)
}

/// Rolling volatility of the percent-change series, as a percentage.
///
/// Percent changes with a zero or non-finite base are dropped. The estimate
/// is the sample standard deviation over the trailing `min(window, len)`
/// changes. `None` below two usable changes or for a zero window.
pub fn volatility(series: &[f64], window: usize) -> Option<f64> {
    if window == 0 {
        return None;
    }

    let mut changes = Vec::new();
    for pair in series.windows(2) {
        let (prev, curr) = (pair[0], pair[1]);
        if !prev.is_finite() || !curr.is_finite() || prev == 0.0 {
            continue;
        }
        changes.push((curr - prev) / prev);
    }

    if changes.len() < 2 {
        return None;
    }

    let w = window.min(changes.len());
    let tail = &changes[changes.len() - w..];
    Some(sample_std(tail) * 100.0)
}

/// Stability statistics for a growth-rate series.
///
/// Below two finite values everything is `None`. A zero mean makes the
/// coefficient of variation unbounded; it is reported as `None` with a
/// consistency score of zero.
pub fn consistency(growth: &[f64]) -> ConsistencyStats {
    let clean: Vec<f64> = growth.iter().copied().filter(|v| v.is_finite()).collect();
    if clean.len() < 2 {
        return ConsistencyStats::insufficient();
    }

    let mean = clean.iter().sum::<f64>() / clean.len() as f64;
    let std_dev = sample_std(&clean);
    let positive = clean.iter().filter(|&&v| v > 0.0).count();
    let percent_positive = positive as f64 / clean.len() as f64 * 100.0;

    let (cv, score) = if mean == 0.0 {
        (None, Some(0.0))
    } else {
        let cv = std_dev / mean.abs();
        (Some(cv), Some(1.0 / (1.0 + cv)))
    };

    ConsistencyStats {
        mean: Some(mean),
        std_dev: Some(std_dev),
        coefficient_of_variation: cv,
        percent_positive: Some(percent_positive),
        consistency_score: score,
    }
}

/// Change in growth rate between consecutive periods.
///
/// First position is NaN; NaN inputs propagate.
pub fn growth_acceleration(series: &[f64]) -> Vec<f64> {
    let mut out = vec![f64::NAN; series.len()];
    for i in 1..series.len() {
        out[i] = series[i] - series[i - 1];
    }
    out
}

/// Compound annual growth rate, as a percentage.
pub fn cagr(start_value: f64, end_value: f64, periods: f64) -> Option<f64> {
    if start_value <= 0.0 || end_value <= 0.0 || periods <= 0.0 {
        return None;
    }
    Some(((end_value / start_value).powf(1.0 / periods) - 1.0) * 100.0)
}

fn sample_std(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moving_average_window_three() {
        let out = moving_average(&[10.0, 20.0, 30.0, 40.0, 50.0], 3).unwrap();

        assert!(out[0].is_nan());
        assert_eq!(out[1], 20.0);
        assert_eq!(out[2], 30.0);
        assert_eq!(out[3], 40.0);
        assert!(out[4].is_nan());
    }

    #[test]
    fn test_moving_average_window_one_is_identity() {
        let data = [3.0, 7.0, 11.0];
        let out = moving_average(&data, 1).unwrap();
        assert_eq!(out, data);
    }

    #[test]
    fn test_moving_average_even_window() {
        // window 4 reaches one back and two forward
        let out = moving_average(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 4).unwrap();
        assert!(out[0].is_nan());
        assert_eq!(out[1], 2.5); // mean(1,2,3,4)
        assert_eq!(out[2], 3.5);
        assert_eq!(out[3], 4.5);
        assert!(out[4].is_nan());
        assert!(out[5].is_nan());
    }

    #[test]
    fn test_moving_average_window_larger_than_series() {
        let out = moving_average(&[1.0, 2.0], 5).unwrap();
        assert!(out.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_moving_average_zero_window_rejected() {
        let result = moving_average(&[1.0], 0);
        assert!(matches!(result, Err(VahanError::InvalidParameter { .. })));
    }

    #[test]
    fn test_classify_increasing() {
        let direction = classify_trend(&[100.0, 110.0, 120.0, 130.0, 140.0], 3);
        assert_eq!(direction, TrendDirection::Increasing);
    }

    #[test]
    fn test_classify_stable() {
        let direction = classify_trend(&[100.0, 101.0, 99.0, 100.0, 101.0], 3);
        assert_eq!(direction, TrendDirection::Stable);
    }

    #[test]
    fn test_classify_decreasing() {
        let direction = classify_trend(&[140.0, 130.0, 120.0, 110.0, 100.0], 3);
        assert_eq!(direction, TrendDirection::Decreasing);
    }

    #[test]
    fn test_classify_insufficient_data() {
        assert_eq!(
            classify_trend(&[100.0, 110.0], 3),
            TrendDirection::InsufficientData
        );
        // NaN values do not count toward the minimum
        assert_eq!(
            classify_trend(&[100.0, f64::NAN, 110.0], 3),
            TrendDirection::InsufficientData
        );
    }

    #[test]
    fn test_classify_skips_nan_values() {
        let series = [100.0, f64::NAN, 110.0, 120.0, f64::NAN, 130.0];
        assert_eq!(classify_trend(&series, 3), TrendDirection::Increasing);
    }

    #[test]
    fn test_classifier_custom_threshold() {
        // Slope 1 on mean ~102: stable at 5%, increasing at 0.1%
        let series = [100.0, 101.0, 102.0, 103.0, 104.0];
        assert_eq!(classify_trend(&series, 3), TrendDirection::Stable);
        assert_eq!(
            LeastSquaresTrend::with_threshold(0.001).classify(&series, 3),
            TrendDirection::Increasing
        );
    }

    #[test]
    fn test_volatility_constant_series_is_zero() {
        let vol = volatility(&[100.0, 100.0, 100.0, 100.0], 12).unwrap();
        assert_eq!(vol, 0.0);
    }

    #[test]
    fn test_volatility_known_changes() {
        // changes: +10%, -10%
        let vol = volatility(&[100.0, 110.0, 99.0], 12).unwrap();
        let expected = sample_std(&[0.1, -0.1]) * 100.0;
        assert!((vol - expected).abs() < 1e-9);
    }

    #[test]
    fn test_volatility_insufficient_changes() {
        assert!(volatility(&[100.0, 110.0], 12).is_none());
        assert!(volatility(&[], 12).is_none());
        // zero bases drop both surrounding changes
        assert!(volatility(&[0.0, 100.0, 0.0], 12).is_none());
    }

    #[test]
    fn test_volatility_window_limits_lookback() {
        let series = [100.0, 200.0, 100.0, 101.0, 102.0, 103.0];
        let wide = volatility(&series, 100).unwrap();
        let narrow = volatility(&series, 2).unwrap();
        // the early 100% swing should only show up in the wide window
        assert!(wide > narrow);
    }

    #[test]
    fn test_consistency_known_series() {
        let stats = consistency(&[10.0, 20.0, 30.0]);

        assert_eq!(stats.mean, Some(20.0));
        assert_eq!(stats.std_dev, Some(10.0));
        assert_eq!(stats.coefficient_of_variation, Some(0.5));
        assert_eq!(stats.percent_positive, Some(100.0));
        assert!((stats.consistency_score.unwrap() - 1.0 / 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_consistency_insufficient() {
        assert_eq!(consistency(&[5.0]), ConsistencyStats::insufficient());
        assert_eq!(
            consistency(&[5.0, f64::NAN]),
            ConsistencyStats::insufficient()
        );
    }

    #[test]
    fn test_consistency_zero_mean_has_zero_score() {
        let stats = consistency(&[-10.0, 10.0]);
        assert_eq!(stats.mean, Some(0.0));
        assert!(stats.coefficient_of_variation.is_none());
        assert_eq!(stats.consistency_score, Some(0.0));
        assert_eq!(stats.percent_positive, Some(50.0));
    }

    #[test]
    fn test_consistency_skips_nan() {
        let stats = consistency(&[f64::NAN, 10.0, 20.0, f64::NAN, 30.0]);
        assert_eq!(stats.mean, Some(20.0));
    }

    #[test]
    fn test_growth_acceleration() {
        let out = growth_acceleration(&[5.0, 8.0, 6.0]);
        assert!(out[0].is_nan());
        assert_eq!(out[1], 3.0);
        assert_eq!(out[2], -2.0);
    }

    #[test]
    fn test_growth_acceleration_propagates_nan() {
        let out = growth_acceleration(&[5.0, f64::NAN, 6.0]);
        assert!(out[1].is_nan());
        assert!(out[2].is_nan());
    }

    #[test]
    fn test_cagr_doubling_over_one_period() {
        let value = cagr(100.0, 200.0, 1.0).unwrap();
        assert!((value - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_cagr_two_periods() {
        // 100 -> 121 over 2 periods is 10% per period
        let value = cagr(100.0, 121.0, 2.0).unwrap();
        assert!((value - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_cagr_rejects_non_positive_inputs() {
        assert!(cagr(0.0, 100.0, 2.0).is_none());
        assert!(cagr(100.0, -1.0, 2.0).is_none());
        assert!(cagr(100.0, 100.0, 0.0).is_none());
    }
}

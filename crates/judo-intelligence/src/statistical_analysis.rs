// ABOUTME: Statistical helpers for test and training histories
// ABOUTME: Improvement deltas, short-window trend classification, and basic statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Judo Coach
#![allow(clippy::cast_precision_loss)] // Safe: series lengths are small

use crate::config::intelligence::TrendConfig;
use crate::config::IntelligenceConfig;
use serde::{Deserialize, Serialize};

/// Round to 2 decimals
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Change between two measurements
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Improvement {
    /// `current - previous`, rounded to 2 decimals
    pub absolute: f64,
    /// Change relative to `previous` (%), 0 when `previous` is 0
    pub percentage: f64,
}

/// Improvement from `previous` to `current`, `None` if either is missing
///
/// ```rust
/// use judo_intelligence::statistical_analysis::calculate_improvement;
///
/// let delta = calculate_improvement(Some(80.0), Some(100.0)).unwrap();
/// assert!((delta.absolute - 20.0).abs() < f64::EPSILON);
/// assert!((delta.percentage - 25.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn calculate_improvement(previous: Option<f64>, current: Option<f64>) -> Option<Improvement> {
    let (previous, current) = (previous?, current?);
    let absolute = current - previous;
    let percentage = if previous == 0.0 {
        0.0
    } else {
        absolute / previous * 100.0
    };
    Some(Improvement {
        absolute: round2(absolute),
        percentage: round2(percentage),
    })
}

/// Direction of a short series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrendDirection {
    /// Values are rising
    Improving,
    /// Values are flat within the threshold
    Stable,
    /// Values are falling
    Worsening,
}

/// Classify the trend of a series ordered oldest to newest
///
/// Uses the process-wide trend configuration.
#[must_use]
pub fn calculate_trend(values: &[f64]) -> TrendDirection {
    calculate_trend_with(values, &IntelligenceConfig::global().trend)
}

/// Classify the trend of a series with explicit parameters
///
/// Only the last `window` values count. The mean of their consecutive
/// differences is compared against `±stable_threshold`.
#[must_use]
pub fn calculate_trend_with(values: &[f64], config: &TrendConfig) -> TrendDirection {
    let recent = &values[values.len().saturating_sub(config.window)..];
    if recent.len() < 2 {
        return TrendDirection::Stable;
    }

    let diffs: Vec<f64> = recent.windows(2).map(|pair| pair[1] - pair[0]).collect();
    let mean_diff = diffs.iter().sum::<f64>() / diffs.len() as f64;

    if mean_diff > config.stable_threshold {
        TrendDirection::Improving
    } else if mean_diff < -config.stable_threshold {
        TrendDirection::Worsening
    } else {
        TrendDirection::Stable
    }
}

/// Summary statistics of a series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BasicStats {
    /// Largest value
    pub max: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Smallest value
    pub min: f64,
    /// Most recent value
    pub last: f64,
    /// Number of values present
    pub count: usize,
}

/// Statistics over the present values, `None` when every value is missing
#[must_use]
pub fn basic_stats(values: &[Option<f64>]) -> Option<BasicStats> {
    let present: Vec<f64> = values.iter().flatten().copied().collect();
    let last = *present.last()?;

    let max = present.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = present.iter().copied().fold(f64::INFINITY, f64::min);
    let mean = present.iter().sum::<f64>() / present.len() as f64;

    Some(BasicStats {
        max: round2(max),
        mean: round2(mean),
        min: round2(min),
        last: round2(last),
        count: present.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2_half_up() {
        assert!((round2(50.597_4) - 50.6).abs() < f64::EPSILON);
        assert!((round2(28.571_428) - 28.57).abs() < f64::EPSILON);
    }

    #[test]
    fn test_trend_uses_only_the_window() {
        let config = TrendConfig::default();
        // Early collapse is outside the 3-value window
        let values = [30.0, 10.0, 10.0, 11.0, 12.5];
        assert_eq!(
            calculate_trend_with(&values, &config),
            TrendDirection::Improving
        );
    }
}

// ABOUTME: Athlete profile classification configuration
// ABOUTME: Normalization ranges, score weights, level cutoffs, recency, and load adjustments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Judo Coach

//! Profile Classifier Configuration
//!
//! Expected ranges are empirical values for competitive judokas and should be
//! reviewed against current strength and conditioning literature.

use serde::{Deserialize, Serialize};

/// Profile classifier configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Expected range of each measurement
    pub ranges: NormalizationRanges,
    /// Weights and cutoffs of the composite scores
    pub scoring: ScoringConfig,
    /// Load adjustments applied per profile
    pub adjustments: AdjustmentConfig,
    /// Age used by the shuttle-run equation when the athlete's age is unknown
    pub assumed_age: u32,
    /// Tests older than this many calendar months are ignored
    pub recency_months: i32,
}

/// Inclusive expected range used to map a raw value onto 0-100
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreRange {
    /// Value mapped to 0
    pub min: f64,
    /// Value mapped to 100
    pub max: f64,
}

impl ScoreRange {
    /// Build a range
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Linear interpolation clamped to 0-100
    #[must_use]
    pub fn normalize(&self, value: f64) -> f64 {
        if self.max <= self.min {
            return 0.0;
        }
        ((value - self.min) / (self.max - self.min) * 100.0).clamp(0.0, 100.0)
    }
}

/// Expected ranges for every scored measurement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizationRanges {
    /// Bench press, kg
    pub bench_press_kg: ScoreRange,
    /// Prone pull, kg
    pub pull_kg: ScoreRange,
    /// Back squat, kg
    pub squat_kg: ScoreRange,
    /// Pull-ups, reps
    pub pull_ups: ScoreRange,
    /// Dips, reps
    pub dips: ScoreRange,
    /// Shuttle-run stage
    pub shuttle_stage: ScoreRange,
    /// `VO2max`, ml/kg/min
    pub vo2max: ScoreRange,
}

impl Default for NormalizationRanges {
    fn default() -> Self {
        Self {
            bench_press_kg: ScoreRange::new(40.0, 150.0),
            pull_kg: ScoreRange::new(40.0, 140.0),
            squat_kg: ScoreRange::new(60.0, 200.0),
            pull_ups: ScoreRange::new(0.0, 25.0),
            dips: ScoreRange::new(0.0, 30.0),
            shuttle_stage: ScoreRange::new(5.0, 15.0),
            vo2max: ScoreRange::new(35.0, 65.0),
        }
    }
}

/// Composite score weights and level cutoffs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Weight of maximal strength in the strength score
    pub max_strength_weight: f64,
    /// Weight of strength endurance in the strength score
    pub strength_endurance_weight: f64,
    /// Score from which a level is HIGH
    pub high_level_threshold: f64,
    /// Score from which a level is MEDIUM
    pub medium_level_threshold: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            max_strength_weight: 0.6,
            strength_endurance_weight: 0.4,
            high_level_threshold: 70.0,
            medium_level_threshold: 50.0,
        }
    }
}

/// Volume/intensity percentage changes per profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustmentConfig {
    /// Explosive profile volume change (%)
    pub fast_volume_percent: f64,
    /// Explosive profile intensity change (%)
    pub fast_intensity_percent: f64,
    /// Endurance profile volume change (%)
    pub endurance_volume_percent: f64,
    /// Endurance profile intensity change (%)
    pub endurance_intensity_percent: f64,
    /// Nudge (%) applied towards the weaker side of a balanced athlete
    pub balanced_nudge_percent: f64,
}

impl Default for AdjustmentConfig {
    fn default() -> Self {
        Self {
            fast_volume_percent: -10.0,
            fast_intensity_percent: 10.0,
            endurance_volume_percent: 10.0,
            endurance_intensity_percent: -10.0,
            balanced_nudge_percent: 5.0,
        }
    }
}

impl ProfileConfig {
    /// Default assumed age for the shuttle-run equation
    pub const DEFAULT_ASSUMED_AGE: u32 = 18;
    /// Default recency window in months
    pub const DEFAULT_RECENCY_MONTHS: i32 = 3;
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            ranges: NormalizationRanges::default(),
            scoring: ScoringConfig::default(),
            adjustments: AdjustmentConfig::default(),
            assumed_age: Self::DEFAULT_ASSUMED_AGE,
            recency_months: Self::DEFAULT_RECENCY_MONTHS,
        }
    }
}

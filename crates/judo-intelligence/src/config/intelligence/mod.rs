// ABOUTME: Intelligence configuration for judo recommendations and athlete profiling
// ABOUTME: Orchestrates the threshold tables and provides validation and environment loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Judo Coach

//! Intelligence Configuration Module
//!
//! Threshold tables are plain data with compiled-in defaults. They are
//! loaded once per process (defaults, then `JUDO_*` environment overrides,
//! then validation) and never mutated afterwards.
//!
//! # Module Structure
//!
//! - `comparison` - significant/critical change cutoffs
//! - `vo2max` - classification bands, gender targets, aerobic alerts
//! - `strength` - expected squat/press balance
//! - `profile` - normalization ranges, score weights, load adjustments
//! - `trend` - trend window and stability threshold
//! - `post_training` - fatigue and intensity thresholds

/// Significant and critical change cutoffs
pub mod comparison;
/// Configuration error types
pub mod error;
/// Post-training fatigue and intensity thresholds
pub mod post_training;
/// Profile normalization ranges, score weights, and load adjustments
pub mod profile;
/// Expected squat/press balance
pub mod strength;
/// Trend window and stability threshold
pub mod trend;
/// `VO2max` classification bands, gender targets, and aerobic alerts
pub mod vo2max;

pub use comparison::ComparisonConfig;
pub use error::ConfigError;
pub use post_training::PostTrainingConfig;
pub use profile::{
    AdjustmentConfig, NormalizationRanges, ProfileConfig, ScoreRange, ScoringConfig,
};
pub use strength::StrengthBalanceConfig;
pub use trend::TrendConfig;
pub use vo2max::{SimpleVo2maxBands, Vo2maxAlerts, Vo2maxBands, Vo2maxConfig, Vo2maxTargets};

use serde::{Deserialize, Serialize};
use std::env::{self, VarError};
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Change cutoffs for test comparisons
    pub comparison: ComparisonConfig,
    /// `VO2max` bands, targets, and alerts
    pub vo2max: Vo2maxConfig,
    /// Squat/press balance expectation
    pub strength_balance: StrengthBalanceConfig,
    /// Profile classifier ranges and adjustments
    pub profile: ProfileConfig,
    /// Trend classification
    pub trend: TrendConfig,
    /// Post-training monitoring
    pub post_training: PostTrainingConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from the environment on top of the defaults
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate ordering and weight invariants
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant
    pub fn validate(&self) -> Result<(), ConfigError> {
        let comparison = &self.comparison;
        if comparison.significant_change_percent <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "significant_change_percent must be positive",
            ));
        }
        if comparison.significant_change_percent > comparison.critical_change_percent {
            return Err(ConfigError::InvalidRange(
                "significant_change_percent must be <= critical_change_percent",
            ));
        }

        let bands = &self.vo2max.bands;
        if !(bands.excellent > bands.very_good
            && bands.very_good > bands.good
            && bands.good > bands.average
            && bands.average > bands.poor)
        {
            return Err(ConfigError::InvalidRange(
                "VO2max bands must be in descending order",
            ));
        }
        if self.vo2max.simple_bands.high_performance <= self.vo2max.simple_bands.intermediate {
            return Err(ConfigError::InvalidRange(
                "simple VO2max high_performance must be > intermediate",
            ));
        }
        if !(0.0..=1.0).contains(&self.vo2max.alerts.target_ratio) {
            return Err(ConfigError::ValueOutOfRange(
                "VO2max target_ratio must be between 0 and 1",
            ));
        }
        if self.vo2max.targets.male <= 0.0 || self.vo2max.targets.female <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "VO2max targets must be positive",
            ));
        }

        if self.strength_balance.expected_squat_press_ratio <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "expected_squat_press_ratio must be positive",
            ));
        }

        self.validate_profile()?;

        if self.trend.window < 2 {
            return Err(ConfigError::ValueOutOfRange("trend window must be >= 2"));
        }
        if self.post_training.window == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "post-training window must be >= 1",
            ));
        }

        Ok(())
    }

    fn validate_profile(&self) -> Result<(), ConfigError> {
        let scoring = &self.profile.scoring;
        let weight_sum = scoring.max_strength_weight + scoring.strength_endurance_weight;
        if (weight_sum - 1.0).abs() > 0.01 {
            return Err(ConfigError::InvalidWeights(
                "Strength score weights must sum to 1.0",
            ));
        }
        if scoring.medium_level_threshold >= scoring.high_level_threshold {
            return Err(ConfigError::InvalidRange(
                "medium_level_threshold must be < high_level_threshold",
            ));
        }

        let ranges = &self.profile.ranges;
        let all = [
            ranges.bench_press_kg,
            ranges.pull_kg,
            ranges.squat_kg,
            ranges.pull_ups,
            ranges.dips,
            ranges.shuttle_stage,
            ranges.vo2max,
        ];
        if all.iter().any(|range| range.min >= range.max) {
            return Err(ConfigError::InvalidRange(
                "normalization ranges must have min < max",
            ));
        }

        if self.profile.recency_months < 0 {
            return Err(ConfigError::ValueOutOfRange(
                "recency_months must not be negative",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        let val = match env::var(env_var_name) {
            Ok(val) => val,
            Err(VarError::NotPresent) => return Ok(()),
            Err(e) => return Err(e.into()),
        };
        *target = val
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "JUDO_COMPARISON_SIGNIFICANT_PERCENT",
            &mut self.comparison.significant_change_percent,
        )?;
        Self::apply_env_var(
            "JUDO_COMPARISON_CRITICAL_PERCENT",
            &mut self.comparison.critical_change_percent,
        )?;

        Self::apply_env_var("JUDO_VO2MAX_TARGET_MALE", &mut self.vo2max.targets.male)?;
        Self::apply_env_var("JUDO_VO2MAX_TARGET_FEMALE", &mut self.vo2max.targets.female)?;
        Self::apply_env_var("JUDO_VO2MAX_LOW_ALERT", &mut self.vo2max.alerts.low_vo2max)?;
        Self::apply_env_var(
            "JUDO_VO2MAX_TARGET_RATIO",
            &mut self.vo2max.alerts.target_ratio,
        )?;

        Self::apply_env_var(
            "JUDO_STRENGTH_EXPECTED_RATIO",
            &mut self.strength_balance.expected_squat_press_ratio,
        )?;
        Self::apply_env_var(
            "JUDO_STRENGTH_MAX_DEVIATION_PERCENT",
            &mut self.strength_balance.max_deviation_percent,
        )?;

        Self::apply_env_var(
            "JUDO_PROFILE_HIGH_THRESHOLD",
            &mut self.profile.scoring.high_level_threshold,
        )?;
        Self::apply_env_var(
            "JUDO_PROFILE_MEDIUM_THRESHOLD",
            &mut self.profile.scoring.medium_level_threshold,
        )?;
        Self::apply_env_var(
            "JUDO_PROFILE_RECENCY_MONTHS",
            &mut self.profile.recency_months,
        )?;
        Self::apply_env_var("JUDO_DEFAULT_AGE", &mut self.profile.assumed_age)?;

        Self::apply_env_var("JUDO_TREND_THRESHOLD", &mut self.trend.stable_threshold)?;
        Self::apply_env_var(
            "JUDO_FATIGUE_RPE_THRESHOLD",
            &mut self.post_training.fatigue_rpe_threshold,
        )?;

        Ok(self)
    }
}

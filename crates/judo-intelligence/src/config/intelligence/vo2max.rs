// ABOUTME: VO2max reference bands, gender targets, and aerobic alert thresholds
// ABOUTME: Consumed by the VO2max classifiers and the aerobic recommendation rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Judo Coach

//! `VO2max` thresholds
//!
//! Bands are lower bounds in ml/kg/min evaluated from the top down; the
//! first band whose bound is reached wins.

use judo_core::models::Gender;
use serde::{Deserialize, Serialize};

/// `VO2max` configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vo2maxConfig {
    /// Bands for the age-adjusted shuttle-run estimate
    pub bands: Vo2maxBands,
    /// Coarse bands for the quick shuttle-run estimate
    pub simple_bands: SimpleVo2maxBands,
    /// Target `VO2max` by gender
    pub targets: Vo2maxTargets,
    /// Alert thresholds used by the aerobic rules
    pub alerts: Vo2maxAlerts,
}

/// Lower bounds of the six classification bands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vo2maxBands {
    /// Excellent from this value
    pub excellent: f64,
    /// Very good from this value
    pub very_good: f64,
    /// Good from this value
    pub good: f64,
    /// Average from this value
    pub average: f64,
    /// Poor from this value; anything lower is very poor
    pub poor: f64,
}

impl Default for Vo2maxBands {
    fn default() -> Self {
        Self {
            excellent: 55.0,
            very_good: 50.0,
            good: 45.0,
            average: 40.0,
            poor: 35.0,
        }
    }
}

/// Lower bounds of the three coarse levels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleVo2maxBands {
    /// High performance from this value
    pub high_performance: f64,
    /// Intermediate from this value; anything lower is beginner
    pub intermediate: f64,
}

impl Default for SimpleVo2maxBands {
    fn default() -> Self {
        Self {
            high_performance: 60.0,
            intermediate: 45.0,
        }
    }
}

/// Target `VO2max` for competitive judokas
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vo2maxTargets {
    /// Target for male (and unspecified) athletes
    pub male: f64,
    /// Target for female athletes
    pub female: f64,
}

impl Vo2maxTargets {
    /// Target for the given gender; unspecified uses the male target
    #[must_use]
    pub const fn for_gender(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Female => self.female,
            Gender::Male | Gender::Unspecified => self.male,
        }
    }
}

impl Default for Vo2maxTargets {
    fn default() -> Self {
        Self {
            male: 60.0,
            female: 53.0,
        }
    }
}

/// Aerobic alert thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vo2maxAlerts {
    /// Values below this raise the low aerobic capacity alert
    pub low_vo2max: f64,
    /// Fraction of the target below which the gap-to-target rule fires
    pub target_ratio: f64,
}

impl Default for Vo2maxAlerts {
    fn default() -> Self {
        Self {
            low_vo2max: 45.0,
            target_ratio: 0.70,
        }
    }
}

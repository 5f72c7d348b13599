// ABOUTME: VO2max estimation from the shuttle-run test and the 1500 m run
// ABOUTME: Implements the quick stage formula, the age-adjusted Léger equation, and classification bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Judo Coach

use crate::config::intelligence::{SimpleVo2maxBands, Vo2maxBands};
use crate::physiological_constants::{leger, running, simple_shuttle};
use crate::statistical_analysis::round2;
use serde::{Deserialize, Serialize};

/// `VO2max` estimation algorithm selection
///
/// Two shuttle-run formulas coexist on purpose: the quick formula feeds the
/// test summary, the age-adjusted Léger equation feeds profiling.
///
/// - `SimpleShuttle`: `30 + stage x 2`
/// - `Leger`: age-adjusted 20 m shuttle-run equation
/// - `Run1500m`: oxygen cost of the mean 1500 m speed
///
/// # Scientific References
///
/// - Léger, L.A., et al. (1988). "The multistage 20 metre shuttle run test for aerobic fitness."
///   *Journal of Sports Sciences*, 6(2), 93-101.
/// - Léger, L. & Mercier, D. (1984). "Gross energy cost of horizontal treadmill and track running."
///   *Sports Medicine*, 1(4), 270-277.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vo2maxAlgorithm {
    /// Quick estimate from the stage reached
    SimpleShuttle {
        /// Stage reached (1-based)
        stage: f64,
    },
    /// Age-adjusted Léger equation
    ///
    /// Formula: `31.025 + 3.238 x speed - 3.248 x age + 0.1536 x age x speed`
    /// with `age` capped at 18
    Leger {
        /// Stage reached (1-based)
        stage: f64,
        /// Age in years
        age: u32,
    },
    /// Mean speed over 1500 m
    Run1500m {
        /// Total time in seconds
        time_seconds: u32,
    },
}

impl Vo2maxAlgorithm {
    /// Estimate `VO2max` in ml/kg/min, `None` when the input is unusable
    #[must_use]
    pub fn estimate_vo2max(&self) -> Option<f64> {
        match *self {
            Self::SimpleShuttle { stage } => vo2max_simple(stage),
            Self::Leger { stage, age } => vo2max_leger(stage, age),
            Self::Run1500m { time_seconds } => vo2max_from_1500m(time_seconds),
        }
    }
}

/// Running speed (km/h) of a shuttle-run stage
///
/// ```rust
/// use judo_intelligence::algorithms::stage_to_speed_kmh;
///
/// assert!((stage_to_speed_kmh(1.0) - 8.5).abs() < f64::EPSILON);
/// assert!((stage_to_speed_kmh(3.0) - 9.5).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn stage_to_speed_kmh(stage: f64) -> f64 {
    leger::SPEED_INCREMENT_KMH.mul_add(stage - 1.0, leger::STAGE_ONE_SPEED_KMH)
}

/// Quick shuttle-run estimate: `30 + stage x 2`
#[must_use]
pub fn vo2max_simple(stage: f64) -> Option<f64> {
    if !stage.is_finite() || stage < 0.0 {
        return None;
    }
    Some(simple_shuttle::VO2MAX_PER_STAGE.mul_add(stage, simple_shuttle::BASE_VO2MAX))
}

/// Age-adjusted Léger estimate rounded to 2 decimals
///
/// Ages above 18 use the adult form of the equation, so every adult age
/// yields the same value for a given stage.
#[must_use]
pub fn vo2max_leger(stage: f64, age: u32) -> Option<f64> {
    if !stage.is_finite() || stage < 1.0 {
        return None;
    }
    let speed = stage_to_speed_kmh(stage);
    let age = f64::from(age.min(leger::MAX_AGE));

    let vo2max = leger::AGE_SPEED_COEF.mul_add(
        age * speed,
        leger::AGE_COEF.mul_add(-age, leger::SPEED_COEF.mul_add(speed, leger::INTERCEPT)),
    );
    Some(round2(vo2max))
}

/// Estimate from a 1500 m run time, rounded to 2 decimals
#[must_use]
pub fn vo2max_from_1500m(time_seconds: u32) -> Option<f64> {
    if time_seconds == 0 {
        return None;
    }
    let speed_kmh =
        running::MIDDLE_DISTANCE_KM / (f64::from(time_seconds) / running::SECONDS_PER_HOUR);
    Some(round2(speed_kmh * running::VO2_PER_KMH))
}

/// Six-band classification of the Léger estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Vo2maxClassification {
    /// Top band
    Excellent,
    /// Second band
    VeryGood,
    /// Third band
    Good,
    /// Fourth band
    Average,
    /// Fifth band
    Poor,
    /// Below every band
    VeryPoor,
}

impl Vo2maxClassification {
    /// Classify a `VO2max` value, first matching band from the top wins
    #[must_use]
    pub fn from_vo2max(vo2max: f64, bands: &Vo2maxBands) -> Self {
        if vo2max >= bands.excellent {
            Self::Excellent
        } else if vo2max >= bands.very_good {
            Self::VeryGood
        } else if vo2max >= bands.good {
            Self::Good
        } else if vo2max >= bands.average {
            Self::Average
        } else if vo2max >= bands.poor {
            Self::Poor
        } else {
            Self::VeryPoor
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excelente",
            Self::VeryGood => "Muy bueno",
            Self::Good => "Bueno",
            Self::Average => "Promedio",
            Self::Poor => "Bajo",
            Self::VeryPoor => "Muy bajo",
        }
    }
}

/// Coarse level of the quick shuttle-run estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimpleFitnessLevel {
    /// High performance
    HighPerformance,
    /// Intermediate
    Intermediate,
    /// Beginner
    Beginner,
}

impl SimpleFitnessLevel {
    /// Classify a quick `VO2max` estimate
    #[must_use]
    pub fn from_vo2max(vo2max: f64, bands: &SimpleVo2maxBands) -> Self {
        if vo2max >= bands.high_performance {
            Self::HighPerformance
        } else if vo2max >= bands.intermediate {
            Self::Intermediate
        } else {
            Self::Beginner
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HighPerformance => "Alto rendimiento",
            Self::Intermediate => "Intermedio",
            Self::Beginner => "Principiante",
        }
    }
}

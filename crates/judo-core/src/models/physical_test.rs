// ABOUTME: Physical test record capturing one athlete's measurements on one date
// ABOUTME: PhysicalTestRecord and the TestField catalogue used for comparisons
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Judo Coach

use crate::constants::{labels, test_fields, units};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One athlete's measurements on one date
///
/// Every measurement is optional: coaches rarely run the full battery in a
/// single session. Records are created by the test-recording collaborator
/// and are never mutated by the rule engine.
///
/// # Examples
///
/// ```rust
/// use judo_core::models::PhysicalTestRecord;
///
/// let record = PhysicalTestRecord {
///     bench_press_kg: Some(100.0),
///     squat_kg: Some(140.0),
///     ..PhysicalTestRecord::default()
/// };
/// assert!(record.shuttle_vo2max.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalTestRecord {
    /// Unique identifier of the record
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Athlete the test belongs to
    #[serde(default)]
    pub athlete_id: Uuid,
    /// When the test was taken
    #[serde(default = "Utc::now")]
    pub test_date: DateTime<Utc>,
    /// Bench press, kg
    #[serde(default, alias = "pressBanca")]
    pub bench_press_kg: Option<f64>,
    /// Prone pull, kg
    #[serde(default, alias = "traccion")]
    pub pull_kg: Option<f64>,
    /// Back squat, kg
    #[serde(default, alias = "sentadilla")]
    pub squat_kg: Option<f64>,
    /// Pull-ups, repetitions
    #[serde(default, alias = "dominadas")]
    pub pull_ups: Option<f64>,
    /// Dips, repetitions
    #[serde(default, alias = "fondos")]
    pub dips: Option<f64>,
    /// Shuttle-run stage reached
    #[serde(default, alias = "navettePalier")]
    pub shuttle_stage: Option<f64>,
    /// VO2max recorded with the shuttle-run test, ml/kg/min
    #[serde(default, alias = "navetteVO2max")]
    pub shuttle_vo2max: Option<f64>,
    /// 1500 m run time as "MM:SS" or "HH:MM:SS"
    #[serde(default, alias = "test1500m", skip_serializing_if = "Option::is_none")]
    pub run_1500m_time: Option<String>,
}

impl Default for PhysicalTestRecord {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            athlete_id: Uuid::nil(),
            test_date: Utc::now(),
            bench_press_kg: None,
            pull_kg: None,
            squat_kg: None,
            pull_ups: None,
            dips: None,
            shuttle_stage: None,
            shuttle_vo2max: None,
            run_1500m_time: None,
        }
    }
}

impl PhysicalTestRecord {
    /// Value recorded for a tracked field
    #[must_use]
    pub const fn measurement(&self, field: TestField) -> Option<f64> {
        match field {
            TestField::BenchPress => self.bench_press_kg,
            TestField::Pull => self.pull_kg,
            TestField::Squat => self.squat_kg,
            TestField::PullUps => self.pull_ups,
            TestField::Dips => self.dips,
            TestField::ShuttleStage => self.shuttle_stage,
            TestField::ShuttleVo2max => self.shuttle_vo2max,
        }
    }

    /// Upper-body press reference: bench press, falling back to the pull
    #[must_use]
    pub fn press_reference_kg(&self) -> Option<f64> {
        self.bench_press_kg.or(self.pull_kg)
    }
}

/// Measurements compared between two consecutive tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestField {
    /// Bench press, kg
    BenchPress,
    /// Prone pull, kg
    Pull,
    /// Back squat, kg
    Squat,
    /// Pull-ups, repetitions
    PullUps,
    /// Dips, repetitions
    Dips,
    /// Shuttle-run stage
    ShuttleStage,
    /// Shuttle-run VO2max
    ShuttleVo2max,
}

impl TestField {
    /// Comparison order used in messages and analysis payloads
    pub const ALL: [Self; 7] = [
        Self::BenchPress,
        Self::Pull,
        Self::Squat,
        Self::PullUps,
        Self::Dips,
        Self::ShuttleStage,
        Self::ShuttleVo2max,
    ];

    /// Stable identifier
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::BenchPress => test_fields::BENCH_PRESS,
            Self::Pull => test_fields::PULL,
            Self::Squat => test_fields::SQUAT,
            Self::PullUps => test_fields::PULL_UPS,
            Self::Dips => test_fields::DIPS,
            Self::ShuttleStage => test_fields::SHUTTLE_STAGE,
            Self::ShuttleVo2max => test_fields::SHUTTLE_VO2MAX,
        }
    }

    /// Human readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BenchPress => labels::BENCH_PRESS,
            Self::Pull => labels::PULL,
            Self::Squat => labels::SQUAT,
            Self::PullUps => labels::PULL_UPS,
            Self::Dips => labels::DIPS,
            Self::ShuttleStage => labels::SHUTTLE_STAGE,
            Self::ShuttleVo2max => labels::SHUTTLE_VO2MAX,
        }
    }

    /// Measurement unit
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::BenchPress | Self::Pull | Self::Squat => units::KG,
            Self::PullUps | Self::Dips => units::REPS,
            Self::ShuttleStage => units::STAGE,
            Self::ShuttleVo2max => units::VO2MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_legacy_field_names() {
        let record: PhysicalTestRecord =
            serde_json::from_str(r#"{"pressBanca": 100, "navetteVO2max": 40}"#).unwrap();

        assert_eq!(record.bench_press_kg, Some(100.0));
        assert_eq!(record.shuttle_vo2max, Some(40.0));
        assert_eq!(record.squat_kg, None);
    }

    #[test]
    fn test_press_reference_falls_back_to_pull() {
        let record = PhysicalTestRecord {
            pull_kg: Some(90.0),
            ..PhysicalTestRecord::default()
        };
        assert_eq!(record.press_reference_kg(), Some(90.0));
    }
}

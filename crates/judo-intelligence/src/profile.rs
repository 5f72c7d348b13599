// ABOUTME: Athlete training-style profile classification from the latest physical test
// ABOUTME: Strength and endurance scoring, profile decision table, and load adjustments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Judo Coach
#![allow(clippy::cast_precision_loss)] // Safe: at most three values per group

//! # Profile Classifier
//!
//! Buckets an athlete into one of four training styles from two composite
//! scores computed on the most recent physical test:
//!
//! - **Strength**: `0.6 x max strength + 0.4 x strength endurance`, each
//!   the mean of the normalized values present.
//! - **Endurance**: mean of the normalized shuttle stage and `VO2max`.
//!
//! Decision order, first match wins:
//!
//! 1. no test, or a test older than the recency window: `NUEVO`
//! 2. strength HIGH, endurance LOW: `VELOZ`
//! 3. endurance HIGH, strength LOW: `RESISTENTE`
//! 4. both at least MEDIUM: `EQUILIBRADO`, nudged towards the weaker side
//! 5. anything else: `EQUILIBRADO` in development, no adjustment

use crate::algorithms::{vo2max_from_1500m, vo2max_leger};
use crate::config::intelligence::{AdjustmentConfig, ProfileConfig, ScoringConfig};
use crate::config::IntelligenceConfig;
use crate::statistical_analysis::round2;
use crate::time_format::parse_time_to_seconds;
use chrono::{Datelike, NaiveDate, Utc};
use judo_core::models::PhysicalTestRecord;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Level of a composite score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoreLevel {
    /// Below the medium cutoff
    Low,
    /// Between the medium and high cutoffs
    Medium,
    /// At or above the high cutoff
    High,
}

impl ScoreLevel {
    /// Level of a 0-100 score
    #[must_use]
    pub fn from_score(score: f64, scoring: &ScoringConfig) -> Self {
        if score >= scoring.high_level_threshold {
            Self::High
        } else if score >= scoring.medium_level_threshold {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Strength composite score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthEvaluation {
    /// Weighted score, 0-100
    pub score: f64,
    /// Level of `score`
    pub level: ScoreLevel,
    /// Mean normalized bench, pull, and squat
    pub max_strength_score: f64,
    /// Mean normalized pull-ups and dips
    pub strength_endurance_score: f64,
}

/// Where the estimated `VO2max` came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vo2maxSource {
    /// Léger equation on the shuttle stage
    ShuttleStage,
    /// Value recorded with the test
    Recorded,
    /// 1500 m run time
    Run1500m,
}

/// Endurance composite score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnduranceEvaluation {
    /// Mean of the metric scores present, 0-100
    pub score: f64,
    /// Level of `score`
    pub level: ScoreLevel,
    /// Normalized shuttle stage
    pub stage_score: Option<f64>,
    /// Normalized `VO2max`
    pub vo2max_score: Option<f64>,
    /// `VO2max` used for scoring, ml/kg/min
    pub estimated_vo2max: Option<f64>,
    /// Origin of `estimated_vo2max`
    pub vo2max_source: Option<Vo2maxSource>,
}

/// Training-style profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProfileType {
    /// Explosive: strong but with limited endurance
    Veloz,
    /// Endurance-oriented: aerobic base over strength
    Resistente,
    /// Balanced, or still developing both capacities
    Equilibrado,
    /// Not evaluated recently
    Nuevo,
}

impl ProfileType {
    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Veloz => "Veloz",
            Self::Resistente => "Resistente",
            Self::Equilibrado => "Equilibrado",
            Self::Nuevo => "Nuevo",
        }
    }
}

/// Load change applied to planned sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadAdjustment {
    /// Volume change (%)
    pub volume_percent: f64,
    /// Intensity change (%)
    pub intensity_percent: f64,
    /// Training emphasis tags
    pub emphasis: Vec<String>,
}

impl LoadAdjustment {
    fn new(volume_percent: f64, intensity_percent: f64, emphasis: &[&str]) -> Self {
        Self {
            volume_percent,
            intensity_percent,
            emphasis: emphasis.iter().map(|&tag| tag.to_owned()).collect(),
        }
    }

    /// Whether volume or intensity change at all
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        self.volume_percent == 0.0 && self.intensity_percent == 0.0
    }
}

/// Result of a classification, overwritten on every new test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteProfile {
    /// Resulting profile
    pub profile_type: ProfileType,
    /// Strength score, absent for `NUEVO`
    pub strength: Option<StrengthEvaluation>,
    /// Endurance score, absent for `NUEVO`
    pub endurance: Option<EnduranceEvaluation>,
    /// Capacity tags at HIGH level
    pub strengths: Vec<String>,
    /// Capacity tags at LOW level
    pub weaknesses: Vec<String>,
    /// Load change for planned sessions
    pub adjustment: LoadAdjustment,
    /// Estimated `VO2max`, ml/kg/min
    pub estimated_vo2max: Option<f64>,
    /// Human-readable explanation
    pub justification: String,
    /// Test the profile was computed from
    pub test_id: Option<Uuid>,
}

impl AthleteProfile {
    fn new_athlete(justification: impl Into<String>) -> Self {
        Self {
            profile_type: ProfileType::Nuevo,
            strength: None,
            endurance: None,
            strengths: Vec::new(),
            weaknesses: Vec::new(),
            adjustment: LoadAdjustment::new(0.0, 0.0, &["evaluacion_inicial", "trabajo_general"]),
            estimated_vo2max: None,
            justification: justification.into(),
            test_id: None,
        }
    }
}

fn mean_or_zero(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Score the strength measurements of a test
#[must_use]
pub fn evaluate_strength(test: &PhysicalTestRecord, config: &ProfileConfig) -> StrengthEvaluation {
    let ranges = &config.ranges;
    let max_strength: Vec<f64> = [
        test.bench_press_kg.map(|v| ranges.bench_press_kg.normalize(v)),
        test.pull_kg.map(|v| ranges.pull_kg.normalize(v)),
        test.squat_kg.map(|v| ranges.squat_kg.normalize(v)),
    ]
    .into_iter()
    .flatten()
    .collect();
    let strength_endurance: Vec<f64> = [
        test.pull_ups.map(|v| ranges.pull_ups.normalize(v)),
        test.dips.map(|v| ranges.dips.normalize(v)),
    ]
    .into_iter()
    .flatten()
    .collect();

    let max_strength_score = mean_or_zero(&max_strength);
    let strength_endurance_score = mean_or_zero(&strength_endurance);
    let score = round2(config.scoring.max_strength_weight.mul_add(
        max_strength_score,
        config.scoring.strength_endurance_weight * strength_endurance_score,
    ));

    StrengthEvaluation {
        score,
        level: ScoreLevel::from_score(score, &config.scoring),
        max_strength_score: round2(max_strength_score),
        strength_endurance_score: round2(strength_endurance_score),
    }
}

/// Best available `VO2max` of a test: shuttle stage, then recorded value, then 1500 m
#[must_use]
pub fn estimate_vo2max(test: &PhysicalTestRecord, age: u32) -> Option<(f64, Vo2maxSource)> {
    test.shuttle_stage
        .and_then(|stage| vo2max_leger(stage, age))
        .map(|v| (v, Vo2maxSource::ShuttleStage))
        .or_else(|| test.shuttle_vo2max.map(|v| (v, Vo2maxSource::Recorded)))
        .or_else(|| {
            test.run_1500m_time
                .as_deref()
                .and_then(parse_time_to_seconds)
                .and_then(vo2max_from_1500m)
                .map(|v| (v, Vo2maxSource::Run1500m))
        })
}

/// Score the endurance measurements of a test
#[must_use]
pub fn evaluate_endurance(
    test: &PhysicalTestRecord,
    age: u32,
    config: &ProfileConfig,
) -> EnduranceEvaluation {
    let ranges = &config.ranges;
    let estimate = estimate_vo2max(test, age);
    let stage_score = test.shuttle_stage.map(|s| ranges.shuttle_stage.normalize(s));
    let vo2max_score = estimate.map(|(v, _)| ranges.vo2max.normalize(v));

    let present: Vec<f64> = [stage_score, vo2max_score].into_iter().flatten().collect();
    let score = round2(mean_or_zero(&present));

    EnduranceEvaluation {
        score,
        level: ScoreLevel::from_score(score, &config.scoring),
        stage_score: stage_score.map(round2),
        vo2max_score: vo2max_score.map(round2),
        estimated_vo2max: estimate.map(|(v, _)| v),
        vo2max_source: estimate.map(|(_, source)| source),
    }
}

/// Whether a test falls inside the recency window, counted in calendar months
#[must_use]
pub fn is_recent(test_date: NaiveDate, today: NaiveDate, recency_months: i32) -> bool {
    let month_index = |date: NaiveDate| i64::from(date.year()) * 12 + i64::from(date.month());
    month_index(today) - month_index(test_date) <= i64::from(recency_months)
}

/// Classify with the process-wide configuration as of today
///
/// `age` feeds the shuttle-run equation; unknown ages use the configured default.
#[must_use]
pub fn classify_athlete_profile(
    test: Option<&PhysicalTestRecord>,
    age: Option<u32>,
) -> AthleteProfile {
    classify_athlete_profile_at(
        test,
        age,
        Utc::now().date_naive(),
        IntelligenceConfig::global(),
    )
}

/// Classify as of a given date with explicit configuration
#[must_use]
pub fn classify_athlete_profile_at(
    test: Option<&PhysicalTestRecord>,
    age: Option<u32>,
    today: NaiveDate,
    config: &IntelligenceConfig,
) -> AthleteProfile {
    let profile_config = &config.profile;

    let Some(test) = test else {
        return AthleteProfile::new_athlete(
            "Sin test físico registrado: se recomienda una evaluación inicial.",
        );
    };

    let test_day = test.test_date.date_naive();
    if !is_recent(test_day, today, profile_config.recency_months) {
        debug!(test_id = %test.id, %test_day, "Latest test outside the recency window");
        let mut profile = AthleteProfile::new_athlete(format!(
            "El último test ({test_day}) tiene más de {} meses: se recomienda reevaluar.",
            profile_config.recency_months
        ));
        profile.test_id = Some(test.id);
        return profile;
    }

    let age = age.unwrap_or(profile_config.assumed_age);
    let strength = evaluate_strength(test, profile_config);
    let endurance = evaluate_endurance(test, age, profile_config);
    let (profile_type, adjustment, justification) =
        decide(&strength, &endurance, &profile_config.adjustments);

    let (strengths, weaknesses) = capacity_tags(&strength, &endurance);

    debug!(
        test_id = %test.id,
        profile = ?profile_type,
        strength = strength.score,
        endurance = endurance.score,
        "Athlete profile classified"
    );

    AthleteProfile {
        profile_type,
        estimated_vo2max: endurance.estimated_vo2max,
        strength: Some(strength),
        endurance: Some(endurance),
        strengths,
        weaknesses,
        adjustment,
        justification,
        test_id: Some(test.id),
    }
}

fn decide(
    strength: &StrengthEvaluation,
    endurance: &EnduranceEvaluation,
    adjustments: &AdjustmentConfig,
) -> (ProfileType, LoadAdjustment, String) {
    use ScoreLevel::{High, Low, Medium};

    let scores = format!(
        "fuerza {:.1}, resistencia {:.1}",
        strength.score, endurance.score
    );

    match (strength.level, endurance.level) {
        (High, Low) => (
            ProfileType::Veloz,
            LoadAdjustment::new(
                adjustments.fast_volume_percent,
                adjustments.fast_intensity_percent,
                &["tecnicas_explosivas", "ataques_directos", "potencia"],
            ),
            format!(
                "Fuerza alta con resistencia baja ({scores}): sesiones más cortas e intensas \
                 centradas en técnicas explosivas."
            ),
        ),
        (Low, High) => (
            ProfileType::Resistente,
            LoadAdjustment::new(
                adjustments.endurance_volume_percent,
                adjustments.endurance_intensity_percent,
                &["agarres_prolongados", "contraataques", "fuerza_base"],
            ),
            format!(
                "Resistencia alta con fuerza baja ({scores}): más volumen a menor intensidad \
                 con trabajo de agarre prolongado y contraataques."
            ),
        ),
        (High | Medium, High | Medium) => {
            let nudge = adjustments.balanced_nudge_percent;
            let (adjustment, detail) = if strength.score < endurance.score {
                (
                    LoadAdjustment::new(0.0, nudge, &["trabajo_mixto", "fuerza"]),
                    "se refuerza la intensidad para compensar la fuerza",
                )
            } else if endurance.score < strength.score {
                (
                    LoadAdjustment::new(nudge, 0.0, &["trabajo_mixto", "resistencia"]),
                    "se refuerza el volumen para compensar la resistencia",
                )
            } else {
                (
                    LoadAdjustment::new(0.0, 0.0, &["trabajo_mixto"]),
                    "sin ajuste de carga",
                )
            };
            (
                ProfileType::Equilibrado,
                adjustment,
                format!("Capacidades equilibradas ({scores}): {detail}."),
            )
        }
        _ => (
            ProfileType::Equilibrado,
            LoadAdjustment::new(
                0.0,
                0.0,
                &["desarrollo_general", "fuerza_base", "resistencia_base"],
            ),
            format!(
                "Perfil en desarrollo ({scores}): se prioriza la base general sin ajuste de carga."
            ),
        ),
    }
}

fn capacity_tags(
    strength: &StrengthEvaluation,
    endurance: &EnduranceEvaluation,
) -> (Vec<String>, Vec<String>) {
    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();
    for (level, tag) in [(strength.level, "fuerza"), (endurance.level, "resistencia")] {
        match level {
            ScoreLevel::High => strengths.push(tag.to_owned()),
            ScoreLevel::Low => weaknesses.push(tag.to_owned()),
            ScoreLevel::Medium => {}
        }
    }
    (strengths, weaknesses)
}

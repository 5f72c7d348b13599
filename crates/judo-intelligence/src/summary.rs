// ABOUTME: Physical test summaries for reporting
// ABOUTME: Quick and age-adjusted VO2max estimates per test, and per-field history statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Judo Coach

use crate::algorithms::{
    vo2max_from_1500m, vo2max_leger, vo2max_simple, SimpleFitnessLevel, Vo2maxClassification,
};
use crate::config::intelligence::Vo2maxConfig;
use crate::config::IntelligenceConfig;
use crate::statistical_analysis::{
    basic_stats, calculate_improvement, calculate_trend_with, BasicStats, Improvement,
    TrendDirection,
};
use crate::time_format::parse_time_to_seconds;
use chrono::{DateTime, Utc};
use judo_core::models::{PhysicalTestRecord, TestField};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Aerobic summary of one physical test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalTestSummary {
    /// Summarized test
    pub test_id: Uuid,
    /// Test date
    pub test_date: DateTime<Utc>,
    /// Shuttle stage reached
    pub shuttle_stage: Option<f64>,
    /// Quick estimate, `30 + stage x 2`
    pub quick_vo2max: Option<f64>,
    /// Coarse level of the quick estimate
    pub quick_level: Option<SimpleFitnessLevel>,
    /// Display label of `quick_level`
    pub quick_level_label: Option<String>,
    /// Age-adjusted Léger estimate
    pub leger_vo2max: Option<f64>,
    /// Band of the Léger estimate
    pub classification: Option<Vo2maxClassification>,
    /// Display label of `classification`
    pub classification_label: Option<String>,
    /// Estimate from the 1500 m time
    pub run_1500m_vo2max: Option<f64>,
}

/// Summarize one test
#[must_use]
pub fn summarize_test(
    test: &PhysicalTestRecord,
    age: u32,
    config: &Vo2maxConfig,
) -> PhysicalTestSummary {
    let quick_vo2max = test.shuttle_stage.and_then(vo2max_simple);
    let quick_level =
        quick_vo2max.map(|v| SimpleFitnessLevel::from_vo2max(v, &config.simple_bands));
    let leger_vo2max = test.shuttle_stage.and_then(|stage| vo2max_leger(stage, age));
    let classification =
        leger_vo2max.map(|v| Vo2maxClassification::from_vo2max(v, &config.bands));

    PhysicalTestSummary {
        test_id: test.id,
        test_date: test.test_date,
        shuttle_stage: test.shuttle_stage,
        quick_vo2max,
        quick_level,
        quick_level_label: quick_level.map(|level| level.label().to_owned()),
        leger_vo2max,
        classification,
        classification_label: classification.map(|band| band.label().to_owned()),
        run_1500m_vo2max: test
            .run_1500m_time
            .as_deref()
            .and_then(parse_time_to_seconds)
            .and_then(vo2max_from_1500m),
    }
}

/// History of one field across tests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldHistory {
    /// Field
    pub field: TestField,
    /// Display label
    pub label: String,
    /// Statistics over the tests that recorded the field
    pub stats: BasicStats,
    /// Direction of the most recent values
    pub trend: TrendDirection,
    /// Change from the first to the last recorded value
    pub improvement: Option<Improvement>,
}

/// Per-field statistics over a test history, oldest test first
///
/// Fields never recorded are left out.
#[must_use]
pub fn summarize_history(
    tests: &[PhysicalTestRecord],
    config: &IntelligenceConfig,
) -> Vec<FieldHistory> {
    let mut ordered: Vec<&PhysicalTestRecord> = tests.iter().collect();
    ordered.sort_by_key(|test| test.test_date);

    TestField::ALL
        .iter()
        .filter_map(|&field| {
            let values: Vec<Option<f64>> =
                ordered.iter().map(|test| test.measurement(field)).collect();
            let stats = basic_stats(&values)?;
            let present: Vec<f64> = values.iter().flatten().copied().collect();

            Some(FieldHistory {
                field,
                label: field.label().to_owned(),
                stats,
                trend: calculate_trend_with(&present, &config.trend),
                improvement: calculate_improvement(
                    present.first().copied(),
                    present.last().copied(),
                )
                .filter(|_| present.len() > 1),
            })
        })
        .collect()
}

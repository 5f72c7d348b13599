// ABOUTME: Training intelligence for judo athletes
// ABOUTME: Rule-based recommendations, physiological calculators, profiling, and session planning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Judo Coach

#![deny(unsafe_code)]

//! # Judo Intelligence
//!
//! Pure, synchronous computation over an athlete's physical-test and
//! post-training history:
//!
//! - **algorithms**: `VO2max` estimation and 1RM-relative intensity
//! - **statistical_analysis**: improvement deltas, trends, basic statistics
//! - **comparison**: field-by-field deltas between two physical tests
//! - **rules**: the rule trait, the evaluator, and both rule sets
//! - **profile**: training-style classification and load adjustments
//! - **session_generator**: weekly session plans driven by the profile
//! - **summary**: per-test summary used by reporting
//!
//! Persistence and delivery are left to the caller.

/// `VO2max` and 1RM algorithms
pub mod algorithms;
/// Field-by-field comparison between consecutive physical tests
pub mod comparison;
/// Threshold tables and environment overrides
pub mod config;
/// Physiological constants used by the formulas
pub mod physiological_constants;
/// Athlete profile classification
pub mod profile;
/// Rule trait, evaluator, and rule sets
pub mod rules;
/// Weekly session generation
pub mod session_generator;
/// Improvement deltas, trend classification, and basic statistics
pub mod statistical_analysis;
/// Physical test summary
pub mod summary;
/// Time string parsing
pub mod time_format;

pub use comparison::{build_comparisons, ComparisonField};
pub use config::IntelligenceConfig;
pub use profile::{
    classify_athlete_profile, classify_athlete_profile_at, AthleteProfile, LoadAdjustment,
    ProfileType, ScoreLevel,
};
pub use rules::{
    evaluate_physical_test_rules, evaluate_post_training_rules, highest_priority,
    PhysicalTestContext, PostTrainingContext, RecommendationAction, RecommendationPriority,
    RecommendationType, Rule, RuleContext, RuleEngine,
};
pub use session_generator::{
    generate_sessions, GeneratedMicrocycle, GeneratedSession, MicrocycleRequest, MicrocycleType,
    SessionPlan, SessionType,
};
pub use statistical_analysis::{BasicStats, Improvement, TrendDirection};
pub use summary::{summarize_history, summarize_test, FieldHistory, PhysicalTestSummary};

// ABOUTME: Physiological algorithms for aerobic capacity and strength intensity
// ABOUTME: Re-exports the VO2max estimators and the 1RM intensity helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Judo Coach

/// 1RM-relative intensity and personal record detection
pub mod one_rep_max;
/// `VO2max` estimation and classification
pub mod vo2max;

pub use one_rep_max::{calculate_1rm_intensity, is_new_record};
pub use vo2max::{
    stage_to_speed_kmh, vo2max_from_1500m, vo2max_leger, vo2max_simple, SimpleFitnessLevel,
    Vo2maxAlgorithm, Vo2maxClassification,
};

// ABOUTME: Core data models for athletes, physical tests, and post-training logs
// ABOUTME: Re-exports model types so callers import from a single path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Judo Coach

/// Athlete identity, gender, and age helpers
pub mod athlete;
/// Physical test records and the tracked measurement fields
pub mod physical_test;
/// Post-training logs (RPE, duration, lifted weights)
pub mod post_training;

pub use athlete::{Athlete, Gender};
pub use physical_test::{PhysicalTestRecord, TestField};
pub use post_training::{ExerciseLog, PostTrainingRecord};

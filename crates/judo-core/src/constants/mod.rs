// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Field identifiers, display labels, and measurement limits for physical tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Judo Coach

//! Constants module
//!
//! Groups pure data constants by domain. Thresholds that may be tuned per
//! deployment live in the intelligence configuration instead.

/// Stable identifiers of the measurements tracked by a physical test
pub mod test_fields {
    /// Bench press, kg
    pub const BENCH_PRESS: &str = "press_banca";
    /// Prone pull (row), kg
    pub const PULL: &str = "traccion";
    /// Back squat, kg
    pub const SQUAT: &str = "sentadilla";
    /// Pull-ups, repetitions
    pub const PULL_UPS: &str = "dominadas";
    /// Dips, repetitions
    pub const DIPS: &str = "fondos";
    /// Shuttle-run stage reached
    pub const SHUTTLE_STAGE: &str = "navette_palier";
    /// VO2max recorded with the shuttle-run test
    pub const SHUTTLE_VO2MAX: &str = "navette_vo2max";
}

/// Human readable labels used in recommendation messages
pub mod labels {
    /// Bench press
    pub const BENCH_PRESS: &str = "Press banca";
    /// Prone pull
    pub const PULL: &str = "Tracción";
    /// Back squat
    pub const SQUAT: &str = "Sentadilla";
    /// Pull-ups
    pub const PULL_UPS: &str = "Dominadas";
    /// Dips
    pub const DIPS: &str = "Fondos";
    /// Shuttle-run stage
    pub const SHUTTLE_STAGE: &str = "Navette (palier)";
    /// Shuttle-run VO2max
    pub const SHUTTLE_VO2MAX: &str = "VO2max Navette";
}

/// Units attached to the tracked measurements
pub mod units {
    /// Kilograms
    pub const KG: &str = "kg";
    /// Repetitions
    pub const REPS: &str = "reps";
    /// Shuttle-run stage
    pub const STAGE: &str = "palier";
    /// ml/kg/min
    pub const VO2MAX: &str = "ml/kg/min";
}

/// Limits of the self-reported effort scale
pub mod rpe {
    /// Lowest accepted RPE value
    pub const MIN: f64 = 1.0;
    /// Highest accepted RPE value
    pub const MAX: f64 = 10.0;
}

/// Service names used in structured logging
pub mod service_names {
    /// Name of the coach service
    pub const JUDO_COACH: &str = "judo-coach";
}

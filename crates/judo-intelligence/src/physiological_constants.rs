// ABOUTME: Physiological constants for the shuttle-run and running VO2max formulas
// ABOUTME: Fixed coefficients from the published equations, not tunable thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Judo Coach

//! Physiological constants based on sports science research
//!
//! These are the coefficients of published equations. Thresholds that a
//! coach may want to tune live in [`crate::config`].

/// 20 m multi-stage shuttle-run test (Léger et al.)
///
/// References:
/// - Léger, L.A., Mercier, D., Gadoury, C., & Lambert, J. (1988). The multistage
///   20 metre shuttle run test for aerobic fitness. *Journal of Sports Sciences*, 6(2), 93-101.
pub mod leger {
    /// Running speed at stage 1 (km/h)
    pub const STAGE_ONE_SPEED_KMH: f64 = 8.5;
    /// Speed added by each stage (km/h)
    pub const SPEED_INCREMENT_KMH: f64 = 0.5;
    /// Equation intercept
    pub const INTERCEPT: f64 = 31.025;
    /// Speed coefficient
    pub const SPEED_COEF: f64 = 3.238;
    /// Age coefficient
    pub const AGE_COEF: f64 = 3.248;
    /// Age x speed interaction coefficient
    pub const AGE_SPEED_COEF: f64 = 0.1536;
    /// Age at which the equation switches to the adult form
    pub const MAX_AGE: u32 = 18;
}

/// Quick field estimate used by the test summary
pub mod simple_shuttle {
    /// `VO2max` at stage 0
    pub const BASE_VO2MAX: f64 = 30.0;
    /// `VO2max` gained per stage
    pub const VO2MAX_PER_STAGE: f64 = 2.0;
}

/// Oxygen cost of running
///
/// Reference: Léger, L. & Mercier, D. (1984). Gross energy cost of horizontal
/// treadmill and track running. *Sports Medicine*, 1(4), 270-277.
pub mod running {
    /// Distance of the middle-distance field test (km)
    pub const MIDDLE_DISTANCE_KM: f64 = 1.5;
    /// ml/kg/min of oxygen per km/h of running speed
    pub const VO2_PER_KMH: f64 = 3.5;
    /// Seconds in one hour
    pub const SECONDS_PER_HOUR: f64 = 3600.0;
}

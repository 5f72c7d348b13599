// ABOUTME: Strength balance expectations between lower and upper body
// ABOUTME: Expected squat-to-press ratio and the tolerated deviation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Judo Coach

use serde::{Deserialize, Serialize};

/// Squat-to-press balance expectation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrengthBalanceConfig {
    /// Expected squat / press ratio
    pub expected_squat_press_ratio: f64,
    /// Deviation (%) from the expected ratio that triggers an imbalance
    pub max_deviation_percent: f64,
}

impl Default for StrengthBalanceConfig {
    fn default() -> Self {
        Self {
            expected_squat_press_ratio: 1.4,
            max_deviation_percent: 30.0,
        }
    }
}

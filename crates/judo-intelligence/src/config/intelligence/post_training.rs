// ABOUTME: Post-training rule thresholds for fatigue and load monitoring
// ABOUTME: RPE fatigue cutoff, analysis window, and minimum 1RM-relative intensity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Judo Coach

use serde::{Deserialize, Serialize};

/// Post-training monitoring thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostTrainingConfig {
    /// Mean RPE from which accumulated fatigue is flagged
    pub fatigue_rpe_threshold: f64,
    /// Number of most recent sessions considered
    pub window: usize,
    /// Mean intensity (% of 1RM) below which the load is too light
    pub low_intensity_percent: f64,
}

impl Default for PostTrainingConfig {
    fn default() -> Self {
        Self {
            fatigue_rpe_threshold: 8.5,
            window: 3,
            low_intensity_percent: 60.0,
        }
    }
}

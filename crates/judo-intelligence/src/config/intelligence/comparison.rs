// ABOUTME: Comparison thresholds for consecutive physical tests
// ABOUTME: Percentage-change cutoffs that flag a field as significant or critical
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Judo Coach

use serde::{Deserialize, Serialize};

/// Percentage-change cutoffs applied to every compared field
///
/// Both cutoffs are inclusive and apply to the absolute percentage change,
/// so a critical change is always significant as well.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonConfig {
    /// Change (%) from which a field is significant
    pub significant_change_percent: f64,
    /// Change (%) from which a field is critical
    pub critical_change_percent: f64,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            significant_change_percent: 10.0,
            critical_change_percent: 25.0,
        }
    }
}

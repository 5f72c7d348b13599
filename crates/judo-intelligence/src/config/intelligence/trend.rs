// ABOUTME: Trend classification window and stability threshold
// ABOUTME: Shared by the statistical analysis helpers and the post-training rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Judo Coach

use serde::{Deserialize, Serialize};

/// Trend classification parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendConfig {
    /// Number of most recent values considered
    pub window: usize,
    /// Mean consecutive difference beyond which a series is not stable
    pub stable_threshold: f64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            window: 3,
            stable_threshold: 0.5,
        }
    }
}

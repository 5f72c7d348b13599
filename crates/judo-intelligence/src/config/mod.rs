// ABOUTME: Configuration module for the judo-intelligence crate
// ABOUTME: Re-exports the threshold tables consumed by rules, profiling, and planning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Judo Coach

/// Threshold tables grouped by concern
pub mod intelligence;

pub use intelligence::{ConfigError, IntelligenceConfig};

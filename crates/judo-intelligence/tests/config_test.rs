// ABOUTME: Tests for intelligence threshold defaults, validation, and environment overrides
// ABOUTME: Environment-touching tests run serially to avoid cross-test interference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Judo Coach

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use judo_core::errors::{AppError, ErrorCode};
use judo_core::models::Gender;
use judo_intelligence::config::{ConfigError, IntelligenceConfig};
use serial_test::serial;
use std::env;

#[test]
fn test_defaults_are_valid() {
    let config = IntelligenceConfig::default();
    config.validate().unwrap();

    assert!((config.comparison.significant_change_percent - 10.0).abs() < f64::EPSILON);
    assert!((config.comparison.critical_change_percent - 25.0).abs() < f64::EPSILON);
    assert!((config.vo2max.targets.for_gender(Gender::Male) - 60.0).abs() < f64::EPSILON);
    assert!((config.vo2max.targets.for_gender(Gender::Female) - 53.0).abs() < f64::EPSILON);
    assert!((config.vo2max.targets.for_gender(Gender::Unspecified) - 60.0).abs() < f64::EPSILON);
    assert!((config.strength_balance.expected_squat_press_ratio - 1.4).abs() < f64::EPSILON);
    assert_eq!(config.profile.assumed_age, 18);
}

#[test]
fn test_significant_above_critical_is_rejected() {
    let mut config = IntelligenceConfig::default();
    config.comparison.significant_change_percent = 30.0;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_strength_weights_must_sum_to_one() {
    let mut config = IntelligenceConfig::default();
    config.profile.scoring.max_strength_weight = 0.8;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidWeights(_))));
}

#[test]
fn test_target_ratio_must_be_a_fraction() {
    let mut config = IntelligenceConfig::default();
    config.vo2max.alerts.target_ratio = 70.0;
    assert!(matches!(config.validate(), Err(ConfigError::ValueOutOfRange(_))));
}

#[test]
#[serial]
fn test_environment_overrides() {
    env::set_var("JUDO_VO2MAX_TARGET_FEMALE", "55");
    env::set_var("JUDO_COMPARISON_CRITICAL_PERCENT", "30");
    env::set_var("JUDO_DEFAULT_AGE", "21");

    let config = IntelligenceConfig::load().unwrap();

    assert!((config.vo2max.targets.female - 55.0).abs() < f64::EPSILON);
    assert!((config.comparison.critical_change_percent - 30.0).abs() < f64::EPSILON);
    assert_eq!(config.profile.assumed_age, 21);

    env::remove_var("JUDO_VO2MAX_TARGET_FEMALE");
    env::remove_var("JUDO_COMPARISON_CRITICAL_PERCENT");
    env::remove_var("JUDO_DEFAULT_AGE");
}

#[test]
#[serial]
fn test_unparseable_override_is_an_error() {
    env::set_var("JUDO_TREND_THRESHOLD", "half");

    let result = IntelligenceConfig::load();

    env::remove_var("JUDO_TREND_THRESHOLD");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_override_failing_validation_is_an_error() {
    env::set_var("JUDO_PROFILE_MEDIUM_THRESHOLD", "80");

    let result = IntelligenceConfig::load();

    env::remove_var("JUDO_PROFILE_MEDIUM_THRESHOLD");
    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
}

#[cfg(unix)]
#[test]
#[serial]
fn test_non_unicode_override_is_an_error() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    env::set_var("JUDO_DEFAULT_AGE", OsString::from_vec(vec![0x31, 0xff]));

    let result = IntelligenceConfig::load();

    env::remove_var("JUDO_DEFAULT_AGE");
    assert!(matches!(result, Err(ConfigError::EnvVar(_))));
}

#[test]
fn test_config_error_converts_to_app_error() {
    let error: AppError = ConfigError::InvalidRange("vo2max bands out of order").into();

    assert_eq!(error.code, ErrorCode::ConfigError);
    assert!(error.message.contains("vo2max bands out of order"));
    assert!(error.source.is_some());
}

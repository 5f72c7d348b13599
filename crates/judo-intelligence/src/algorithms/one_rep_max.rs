// ABOUTME: 1RM-relative intensity and new personal record detection
// ABOUTME: Missing or non-positive weights yield None/false instead of errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Judo Coach

use crate::statistical_analysis::round2;

/// Intensity of a lift relative to the reference 1RM, capped at 100 %
///
/// A lift above the reference is a new record and reports exactly 100;
/// replacing the reference with the new weight is up to the caller.
///
/// ```rust
/// use judo_intelligence::algorithms::calculate_1rm_intensity;
///
/// assert_eq!(calculate_1rm_intensity(Some(90.0), Some(100.0)), Some(90.0));
/// assert_eq!(calculate_1rm_intensity(Some(110.0), Some(100.0)), Some(100.0));
/// assert_eq!(calculate_1rm_intensity(None, Some(100.0)), None);
/// ```
#[must_use]
pub fn calculate_1rm_intensity(current_kg: Option<f64>, reference_kg: Option<f64>) -> Option<f64> {
    let (current, reference) = positive_pair(current_kg, reference_kg)?;
    Some(round2((current / reference * 100.0).min(100.0)))
}

/// Whether the lift beats the reference 1RM
#[must_use]
pub fn is_new_record(current_kg: Option<f64>, reference_kg: Option<f64>) -> bool {
    positive_pair(current_kg, reference_kg).is_some_and(|(current, reference)| current > reference)
}

fn positive_pair(current: Option<f64>, reference: Option<f64>) -> Option<(f64, f64)> {
    match (current, reference) {
        (Some(current), Some(reference)) if current > 0.0 && reference > 0.0 => {
            Some((current, reference))
        }
        _ => None,
    }
}

// ABOUTME: Field-by-field comparison between a current and a previous physical test
// ABOUTME: Computes differences, percentage change, and significance/critical flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Judo Coach

use crate::config::intelligence::ComparisonConfig;
use judo_core::models::{PhysicalTestRecord, TestField};
use serde::{Deserialize, Serialize};

/// Comparison of one measurement between two tests
///
/// Derived values are `None` and both flags are `false` unless both values
/// are present and the previous value is non-zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonField {
    /// Compared measurement
    pub field: TestField,
    /// Display label
    pub label: String,
    /// Value in the current test
    pub current: Option<f64>,
    /// Value in the previous test
    pub previous: Option<f64>,
    /// `current - previous`
    pub difference: Option<f64>,
    /// Change relative to `previous` (%)
    pub percent_change: Option<f64>,
    /// Whether the value went up
    pub improved: bool,
    /// `|percent_change|` reached the significant cutoff
    pub significant: bool,
    /// `|percent_change|` reached the critical cutoff
    pub critical: bool,
}

impl ComparisonField {
    /// Compare one field between two values
    #[must_use]
    pub fn compute(
        field: TestField,
        current: Option<f64>,
        previous: Option<f64>,
        config: &ComparisonConfig,
    ) -> Self {
        let mut comparison = Self {
            field,
            label: field.label().to_owned(),
            current,
            previous,
            difference: None,
            percent_change: None,
            improved: false,
            significant: false,
            critical: false,
        };

        if let (Some(current), Some(previous)) = (current, previous) {
            if previous != 0.0 {
                let difference = current - previous;
                let percent_change = difference / previous * 100.0;
                comparison.difference = Some(difference);
                comparison.percent_change = Some(percent_change);
                comparison.improved = difference > 0.0;
                comparison.significant =
                    percent_change.abs() >= config.significant_change_percent;
                comparison.critical = percent_change.abs() >= config.critical_change_percent;
            }
        }
        comparison
    }

    /// Whether the measurement went down
    #[must_use]
    pub fn declined(&self) -> bool {
        self.difference.is_some_and(|difference| difference < 0.0)
    }

    /// One message line: `label: before -> after (+x.x%)`
    #[must_use]
    pub fn describe(&self) -> String {
        match (self.previous, self.current, self.percent_change) {
            (Some(previous), Some(current), Some(percent)) => format!(
                "{}: {previous} -> {current} {} ({percent:+.1}%)",
                self.label,
                self.field.unit()
            ),
            _ => format!("{}: sin datos comparables", self.label),
        }
    }
}

/// Compare every tracked field of two tests, in [`TestField::ALL`] order
#[must_use]
pub fn build_comparisons(
    current: &PhysicalTestRecord,
    previous: Option<&PhysicalTestRecord>,
    config: &ComparisonConfig,
) -> Vec<ComparisonField> {
    TestField::ALL
        .iter()
        .map(|&field| {
            ComparisonField::compute(
                field,
                current.measurement(field),
                previous.and_then(|test| test.measurement(field)),
                config,
            )
        })
        .collect()
}

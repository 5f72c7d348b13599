// ABOUTME: Athlete model with gender and age derivation
// ABOUTME: Athlete and Gender definitions shared by the rule engine and the services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Judo Coach

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Athlete gender as recorded by the athlete registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male athlete
    #[serde(alias = "M", alias = "masculino")]
    Male,
    /// Female athlete
    #[serde(alias = "F", alias = "femenino")]
    Female,
    /// Not recorded
    #[default]
    Unspecified,
}

/// Athlete identity as seen by the coach
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Athlete {
    /// Unique identifier
    pub id: Uuid,
    /// Display name used in recommendation messages
    pub full_name: String,
    /// Birth date, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    /// Recorded gender
    #[serde(default)]
    pub gender: Gender,
}

impl Athlete {
    /// Create an athlete with a fresh identifier
    #[must_use]
    pub fn new(full_name: impl Into<String>, gender: Gender) -> Self {
        Self {
            id: Uuid::new_v4(),
            full_name: full_name.into(),
            birth_date: None,
            gender,
        }
    }

    /// Set the birth date
    #[must_use]
    pub const fn with_birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    /// Age in whole years on the given date, `None` without a birth date
    #[must_use]
    pub fn age_on(&self, date: NaiveDate) -> Option<u32> {
        let birth = self.birth_date?;
        let mut years = date.year() - birth.year();
        if (date.month(), date.day()) < (birth.month(), birth.day()) {
            years -= 1;
        }
        u32::try_from(years).ok()
    }
}

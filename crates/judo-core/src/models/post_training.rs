// ABOUTME: Post-training log model recorded by athletes after each session
// ABOUTME: PostTrainingRecord with perceived exertion and per-exercise lifted weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Judo Coach

use crate::constants::rpe;
use crate::errors::{AppError, AppResult, ErrorCode};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

/// Weight lifted for one exercise during a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseLog {
    /// Exercise name, matched against the athlete's reference 1RM table
    pub exercise: String,
    /// Heaviest weight used, kg
    #[serde(default)]
    pub weight_kg: Option<f64>,
    /// Repetitions at that weight
    #[serde(default)]
    pub reps: Option<u32>,
}

/// Athlete's log after a training session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostTrainingRecord {
    /// Unique identifier
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Athlete the log belongs to
    #[serde(default)]
    pub athlete_id: Uuid,
    /// Session date
    pub session_date: NaiveDate,
    /// Rate of perceived exertion (1-10)
    pub rpe: f64,
    /// Session duration in minutes
    #[serde(default)]
    pub duration_minutes: u32,
    /// Lifted weights, empty for mat-only sessions
    #[serde(default)]
    pub exercises: Vec<ExerciseLog>,
    /// Free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PostTrainingRecord {
    /// Log without exercises
    #[must_use]
    pub fn new(session_date: NaiveDate, rpe: f64, duration_minutes: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            athlete_id: Uuid::nil(),
            session_date,
            rpe,
            duration_minutes,
            exercises: Vec::new(),
            notes: None,
        }
    }

    /// Append an exercise log
    #[must_use]
    pub fn with_exercise(mut self, exercise: impl Into<String>, weight_kg: f64) -> Self {
        self.exercises.push(ExerciseLog {
            exercise: exercise.into(),
            weight_kg: Some(weight_kg),
            reps: None,
        });
        self
    }

    /// Check the RPE scale and lifted weights
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange`-coded errors for an RPE outside 1-10 or a negative weight
    pub fn validate(&self) -> AppResult<()> {
        if !(rpe::MIN..=rpe::MAX).contains(&self.rpe) {
            return Err(out_of_range(format!(
                "RPE {} outside {}-{}",
                self.rpe,
                rpe::MIN,
                rpe::MAX
            ))
            .with_details(json!({ "field": "rpe", "value": self.rpe })));
        }
        if let Some(log) = self
            .exercises
            .iter()
            .find(|log| log.weight_kg.is_some_and(|kg| kg < 0.0))
        {
            return Err(out_of_range(format!("Negative weight for {}", log.exercise))
                .with_details(json!({ "field": "weight_kg", "exercise": log.exercise })));
        }
        Ok(())
    }
}

fn out_of_range(message: String) -> AppError {
    AppError::new(ErrorCode::ValueOutOfRange, message)
}

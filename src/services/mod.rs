// ABOUTME: Collaborator traits for persistence plus the coach orchestration service
// ABOUTME: The rule engine stays pure; these seams fetch history and store its outputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Judo Coach

//! Persistence seams around the pure intelligence crate.
//!
//! Each trait is the narrowest view one workflow needs. The in-memory store in
//! [`crate::storage`] implements all of them; a database-backed store would do
//! the same.

/// Workflows run when tests or post-training logs are recorded
pub mod coach;

pub use coach::{CoachService, PostTrainingEvaluation, TestEvaluation};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use judo_core::errors::AppResult;
use judo_core::models::{PhysicalTestRecord, PostTrainingRecord};
use judo_intelligence::{AthleteProfile, GeneratedSession, RecommendationAction};
use std::collections::HashMap;
use uuid::Uuid;

/// Physical test history for one athlete
#[async_trait]
pub trait TestHistory: Send + Sync {
    /// Most recent test strictly before `before`
    async fn previous_test(
        &self,
        athlete_id: Uuid,
        before: DateTime<Utc>,
    ) -> AppResult<Option<PhysicalTestRecord>>;

    /// Most recent test on record
    async fn latest_test(&self, athlete_id: Uuid) -> AppResult<Option<PhysicalTestRecord>>;

    /// Every test, oldest first
    async fn all_tests(&self, athlete_id: Uuid) -> AppResult<Vec<PhysicalTestRecord>>;

    /// Append a test
    async fn record_test(&self, test: PhysicalTestRecord) -> AppResult<()>;
}

/// Destination of rule-engine recommendations
#[async_trait]
pub trait RecommendationSink: Send + Sync {
    /// Persist one evaluation's actions as recommendation rows
    async fn store_recommendations(
        &self,
        athlete_id: Uuid,
        actions: &[RecommendationAction],
    ) -> AppResult<()>;
}

/// Stored athlete profile, one per athlete
#[async_trait]
pub trait AthleteProfileStore: Send + Sync {
    /// Overwrite the stored profile (last write wins)
    async fn save_profile(&self, athlete_id: Uuid, profile: &AthleteProfile) -> AppResult<()>;

    /// Stored profile, if any
    async fn profile(&self, athlete_id: Uuid) -> AppResult<Option<AthleteProfile>>;
}

/// Destination of generated sessions
#[async_trait]
pub trait SessionSink: Send + Sync {
    /// Bulk insert of one micro-cycle's sessions
    async fn store_sessions(&self, athlete_id: Uuid, sessions: &[GeneratedSession])
        -> AppResult<()>;
}

/// Post-training logs and reference lifts
#[async_trait]
pub trait PostTrainingHistory: Send + Sync {
    /// Append a log
    async fn record_session(&self, record: PostTrainingRecord) -> AppResult<()>;

    /// Up to `limit` most recent logs, oldest first
    async fn recent_sessions(
        &self,
        athlete_id: Uuid,
        limit: usize,
    ) -> AppResult<Vec<PostTrainingRecord>>;

    /// Reference 1RM per exercise name
    async fn reference_1rm(&self, athlete_id: Uuid) -> AppResult<HashMap<String, f64>>;

    /// Replace the reference 1RM for one exercise
    async fn update_reference_1rm(
        &self,
        athlete_id: Uuid,
        exercise: &str,
        weight_kg: f64,
    ) -> AppResult<()>;
}

// ABOUTME: In-memory implementation of every coach collaborator
// ABOUTME: Used by the CLI and tests; one RwLock-guarded table set shared behind an Arc
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Judo Coach

use crate::services::{
    AthleteProfileStore, PostTrainingHistory, RecommendationSink, SessionSink, TestHistory,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use judo_core::errors::{AppError, AppResult};
use judo_core::models::{PhysicalTestRecord, PostTrainingRecord};
use judo_intelligence::{AthleteProfile, GeneratedSession, RecommendationAction};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Default)]
struct Tables {
    tests: HashMap<Uuid, Vec<PhysicalTestRecord>>,
    recommendations: HashMap<Uuid, Vec<RecommendationAction>>,
    profiles: HashMap<Uuid, AthleteProfile>,
    sessions: HashMap<Uuid, Vec<GeneratedSession>>,
    post_training: HashMap<Uuid, Vec<PostTrainingRecord>>,
    references: HashMap<Uuid, HashMap<String, f64>>,
}

/// Process-local store
///
/// Tests and post-training logs are kept sorted by date on insert, so reads
/// never sort.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed reference 1RMs for an athlete
    pub async fn set_reference_1rm(&self, athlete_id: Uuid, references: HashMap<String, f64>) {
        self.tables
            .write()
            .await
            .references
            .insert(athlete_id, references);
    }

    /// Every recommendation stored for an athlete, oldest first
    pub async fn recommendations(&self, athlete_id: Uuid) -> Vec<RecommendationAction> {
        self.tables
            .read()
            .await
            .recommendations
            .get(&athlete_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Every session stored for an athlete
    pub async fn sessions(&self, athlete_id: Uuid) -> Vec<GeneratedSession> {
        self.tables
            .read()
            .await
            .sessions
            .get(&athlete_id)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl TestHistory for InMemoryStore {
    async fn previous_test(
        &self,
        athlete_id: Uuid,
        before: DateTime<Utc>,
    ) -> AppResult<Option<PhysicalTestRecord>> {
        let tables = self.tables.read().await;
        Ok(tables.tests.get(&athlete_id).and_then(|tests| {
            tests
                .iter()
                .rev()
                .find(|test| test.test_date < before)
                .cloned()
        }))
    }

    async fn latest_test(&self, athlete_id: Uuid) -> AppResult<Option<PhysicalTestRecord>> {
        let tables = self.tables.read().await;
        Ok(tables
            .tests
            .get(&athlete_id)
            .and_then(|tests| tests.last().cloned()))
    }

    async fn all_tests(&self, athlete_id: Uuid) -> AppResult<Vec<PhysicalTestRecord>> {
        let tables = self.tables.read().await;
        Ok(tables.tests.get(&athlete_id).cloned().unwrap_or_default())
    }

    async fn record_test(&self, test: PhysicalTestRecord) -> AppResult<()> {
        let mut tables = self.tables.write().await;
        let tests = tables.tests.entry(test.athlete_id).or_default();
        if tests.iter().any(|stored| stored.id == test.id) {
            return Err(AppError::invalid_input(format!(
                "Physical test {} is already recorded",
                test.id
            )));
        }
        let position = tests.partition_point(|stored| stored.test_date <= test.test_date);
        tests.insert(position, test);
        Ok(())
    }
}

#[async_trait]
impl RecommendationSink for InMemoryStore {
    async fn store_recommendations(
        &self,
        athlete_id: Uuid,
        actions: &[RecommendationAction],
    ) -> AppResult<()> {
        debug!(%athlete_id, count = actions.len(), "Storing recommendations");
        self.tables
            .write()
            .await
            .recommendations
            .entry(athlete_id)
            .or_default()
            .extend_from_slice(actions);
        Ok(())
    }
}

#[async_trait]
impl AthleteProfileStore for InMemoryStore {
    async fn save_profile(&self, athlete_id: Uuid, profile: &AthleteProfile) -> AppResult<()> {
        self.tables
            .write()
            .await
            .profiles
            .insert(athlete_id, profile.clone());
        Ok(())
    }

    async fn profile(&self, athlete_id: Uuid) -> AppResult<Option<AthleteProfile>> {
        Ok(self.tables.read().await.profiles.get(&athlete_id).cloned())
    }
}

#[async_trait]
impl SessionSink for InMemoryStore {
    async fn store_sessions(
        &self,
        athlete_id: Uuid,
        sessions: &[GeneratedSession],
    ) -> AppResult<()> {
        self.tables
            .write()
            .await
            .sessions
            .entry(athlete_id)
            .or_default()
            .extend_from_slice(sessions);
        Ok(())
    }
}

#[async_trait]
impl PostTrainingHistory for InMemoryStore {
    async fn record_session(&self, record: PostTrainingRecord) -> AppResult<()> {
        let mut tables = self.tables.write().await;
        let logs = tables.post_training.entry(record.athlete_id).or_default();
        let position = logs.partition_point(|stored| stored.session_date <= record.session_date);
        logs.insert(position, record);
        Ok(())
    }

    async fn recent_sessions(
        &self,
        athlete_id: Uuid,
        limit: usize,
    ) -> AppResult<Vec<PostTrainingRecord>> {
        let tables = self.tables.read().await;
        Ok(tables
            .post_training
            .get(&athlete_id)
            .map(|logs| logs[logs.len().saturating_sub(limit)..].to_vec())
            .unwrap_or_default())
    }

    async fn reference_1rm(&self, athlete_id: Uuid) -> AppResult<HashMap<String, f64>> {
        let tables = self.tables.read().await;
        Ok(tables
            .references
            .get(&athlete_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn update_reference_1rm(
        &self,
        athlete_id: Uuid,
        exercise: &str,
        weight_kg: f64,
    ) -> AppResult<()> {
        if weight_kg <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Reference 1RM for {exercise} must be positive, got {weight_kg}"
            )));
        }
        self.tables
            .write()
            .await
            .references
            .entry(athlete_id)
            .or_default()
            .insert(exercise.to_owned(), weight_kg);
        Ok(())
    }
}

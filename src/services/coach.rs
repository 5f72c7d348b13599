// ABOUTME: Coach orchestration: evaluate recorded tests and logs, refresh profiles, plan micro-cycles
// ABOUTME: Sequences collaborator reads and writes around the pure rule engine and planners
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Judo Coach

use super::{AthleteProfileStore, PostTrainingHistory, RecommendationSink, SessionSink, TestHistory};
use chrono::{NaiveDate, Utc};
use judo_core::errors::{AppError, AppResult};
use judo_core::models::{Athlete, PhysicalTestRecord, PostTrainingRecord};
use judo_intelligence::algorithms::is_new_record;
use judo_intelligence::{
    classify_athlete_profile_at, evaluate_physical_test_rules, evaluate_post_training_rules,
    generate_sessions, highest_priority, summarize_history, summarize_test, AthleteProfile,
    FieldHistory, GeneratedMicrocycle, IntelligenceConfig, MicrocycleRequest,
    PhysicalTestContext, PhysicalTestSummary, PostTrainingContext, RecommendationAction,
    RecommendationPriority,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Post-training logs pulled into one evaluation
const POST_TRAINING_HISTORY_LIMIT: usize = 20;

/// Outcome of recording a physical test
#[derive(Debug, Clone, Serialize)]
pub struct TestEvaluation {
    /// Stored test
    pub test_id: Uuid,
    /// Previous test the comparison ran against
    pub previous_test_id: Option<Uuid>,
    /// Triggered recommendations in rule order
    pub actions: Vec<RecommendationAction>,
    /// Highest priority among `actions`
    pub highest_priority: RecommendationPriority,
    /// Recomputed profile, already stored
    pub profile: AthleteProfile,
    /// Quick summary of the stored test
    pub summary: PhysicalTestSummary,
}

/// Outcome of recording a post-training log
#[derive(Debug, Clone, Serialize)]
pub struct PostTrainingEvaluation {
    /// Triggered recommendations in rule order
    pub actions: Vec<RecommendationAction>,
    /// Highest priority among `actions`
    pub highest_priority: RecommendationPriority,
    /// Exercises whose reference 1RM was raised by this log
    pub updated_references: Vec<String>,
}

/// Runs the coach workflows against a set of collaborators
pub struct CoachService {
    tests: Arc<dyn TestHistory>,
    recommendations: Arc<dyn RecommendationSink>,
    profiles: Arc<dyn AthleteProfileStore>,
    sessions: Arc<dyn SessionSink>,
    post_training: Arc<dyn PostTrainingHistory>,
    config: IntelligenceConfig,
    fixed_today: Option<NaiveDate>,
}

impl CoachService {
    /// Service over a store that implements every collaborator
    #[must_use]
    pub fn new<S>(store: &Arc<S>, config: IntelligenceConfig) -> Self
    where
        S: TestHistory
            + RecommendationSink
            + AthleteProfileStore
            + SessionSink
            + PostTrainingHistory
            + 'static,
    {
        Self {
            tests: store.clone(),
            recommendations: store.clone(),
            profiles: store.clone(),
            sessions: store.clone(),
            post_training: store.clone(),
            config,
            fixed_today: None,
        }
    }

    /// Pin "today" for profile recency checks
    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.fixed_today = Some(today);
        self
    }

    /// Thresholds in use
    #[must_use]
    pub const fn config(&self) -> &IntelligenceConfig {
        &self.config
    }

    fn today(&self) -> NaiveDate {
        self.fixed_today.unwrap_or_else(|| Utc::now().date_naive())
    }

    /// Record a physical test, evaluate the rules, and refresh the profile
    ///
    /// The test is attached to `athlete` when it carries no athlete id.
    ///
    /// # Errors
    ///
    /// Returns an error if the test belongs to another athlete or a
    /// collaborator fails
    pub async fn record_physical_test(
        &self,
        athlete: &Athlete,
        mut test: PhysicalTestRecord,
    ) -> AppResult<TestEvaluation> {
        claim_record(&mut test.athlete_id, athlete.id, "physical test")?;

        let previous = self.tests.previous_test(athlete.id, test.test_date).await?;
        self.tests.record_test(test.clone()).await?;

        let context = PhysicalTestContext::new(athlete, test.clone(), previous, &self.config);
        let actions = evaluate_physical_test_rules(&context, &self.config);
        self.recommendations
            .store_recommendations(athlete.id, &actions)
            .await?;

        let age = athlete.age_on(test.test_date.date_naive());
        let profile = classify_athlete_profile_at(Some(&test), age, self.today(), &self.config);
        self.profiles.save_profile(athlete.id, &profile).await?;

        let summary = summarize_test(
            &test,
            age.unwrap_or(self.config.profile.assumed_age),
            &self.config.vo2max,
        );
        let highest_priority = highest_priority(&actions);
        info!(
            athlete_id = %athlete.id,
            test_id = %test.id,
            actions = actions.len(),
            highest_priority = ?highest_priority,
            profile = profile.profile_type.label(),
            "Physical test recorded"
        );

        Ok(TestEvaluation {
            test_id: test.id,
            previous_test_id: context.previous_test_id,
            actions,
            highest_priority,
            profile,
            summary,
        })
    }

    /// Record a post-training log, evaluate the monitoring rules, and raise
    /// reference lifts that were beaten
    ///
    /// # Errors
    ///
    /// Returns an error if the log is out of range, belongs to another
    /// athlete, or a collaborator fails
    pub async fn record_post_training(
        &self,
        athlete: &Athlete,
        mut record: PostTrainingRecord,
    ) -> AppResult<PostTrainingEvaluation> {
        claim_record(&mut record.athlete_id, athlete.id, "post-training log")?;
        record.validate()?;

        // References as they were before this log, so records are detected against them
        let references = self.post_training.reference_1rm(athlete.id).await?;
        self.post_training.record_session(record.clone()).await?;
        let sessions = self
            .post_training
            .recent_sessions(athlete.id, POST_TRAINING_HISTORY_LIMIT)
            .await?;

        let context = PostTrainingContext::new(athlete, sessions, references.clone());
        let actions = evaluate_post_training_rules(&context, &self.config);
        self.recommendations
            .store_recommendations(athlete.id, &actions)
            .await?;

        let mut updated_references = Vec::new();
        for log in &record.exercises {
            let Some(weight_kg) = log.weight_kg else {
                continue;
            };
            if !is_new_record(Some(weight_kg), references.get(&log.exercise).copied()) {
                continue;
            }
            self.post_training
                .update_reference_1rm(athlete.id, &log.exercise, weight_kg)
                .await?;
            debug!(exercise = %log.exercise, weight_kg, "Reference 1RM raised");
            updated_references.push(log.exercise.clone());
        }

        Ok(PostTrainingEvaluation {
            highest_priority: highest_priority(&actions),
            actions,
            updated_references,
        })
    }

    /// Stored profile, classifying from the latest test when none is stored
    ///
    /// # Errors
    ///
    /// Returns an error if a collaborator fails
    pub async fn current_profile(&self, athlete: &Athlete) -> AppResult<AthleteProfile> {
        if let Some(profile) = self.profiles.profile(athlete.id).await? {
            return Ok(profile);
        }
        let latest = self.tests.latest_test(athlete.id).await?;
        let today = self.today();
        let profile = classify_athlete_profile_at(
            latest.as_ref(),
            athlete.age_on(today),
            today,
            &self.config,
        );
        self.profiles.save_profile(athlete.id, &profile).await?;
        Ok(profile)
    }

    /// Generate a micro-cycle for the athlete's current profile and store its sessions
    ///
    /// # Errors
    ///
    /// Returns an error if the date range is inverted or a collaborator fails
    pub async fn generate_microcycle(
        &self,
        athlete: &Athlete,
        request: &MicrocycleRequest,
    ) -> AppResult<GeneratedMicrocycle> {
        let profile = self.current_profile(athlete).await?;
        let microcycle = generate_sessions(request, &profile)?;
        self.sessions
            .store_sessions(athlete.id, &microcycle.sessions)
            .await?;

        info!(
            athlete_id = %athlete.id,
            microcycle = request.microcycle_type.code(),
            sessions = microcycle.sessions.len(),
            "Micro-cycle generated"
        );
        Ok(microcycle)
    }

    /// Statistics and trend of every tracked field over the athlete's tests
    ///
    /// # Errors
    ///
    /// Returns an error if the test history cannot be read
    pub async fn test_history(&self, athlete: &Athlete) -> AppResult<Vec<FieldHistory>> {
        let tests = self.tests.all_tests(athlete.id).await?;
        Ok(summarize_history(&tests, &self.config))
    }
}

fn claim_record(owner: &mut Uuid, athlete_id: Uuid, what: &str) -> AppResult<()> {
    if owner.is_nil() {
        *owner = athlete_id;
        return Ok(());
    }
    if *owner == athlete_id {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!(
            "The {what} belongs to athlete {owner}, not {athlete_id}"
        )))
    }
}

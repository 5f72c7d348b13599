// ABOUTME: Integration tests for the coach workflows over the in-memory store
// ABOUTME: Test recording, profile refresh, micro-cycle planning, and post-training monitoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Judo Coach

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{NaiveDate, TimeZone, Utc};
use judo_coach::services::{AthleteProfileStore, CoachService, PostTrainingHistory};
use judo_coach::storage::InMemoryStore;
use judo_core::errors::ErrorCode;
use judo_core::models::{Athlete, Gender, PhysicalTestRecord, PostTrainingRecord, TestField};
use judo_intelligence::{
    IntelligenceConfig, MicrocycleRequest, MicrocycleType, ProfileType, RecommendationAction,
    RecommendationPriority,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

fn setup() -> (Arc<InMemoryStore>, CoachService) {
    let store = Arc::new(InMemoryStore::new());
    let coach = CoachService::new(&store, IntelligenceConfig::default())
        .with_today(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
    (store, coach)
}

fn test_on(month: u32, day: u32) -> PhysicalTestRecord {
    PhysicalTestRecord {
        test_date: Utc.with_ymd_and_hms(2025, month, day, 10, 0, 0).unwrap(),
        ..PhysicalTestRecord::default()
    }
}

fn rule_ids(actions: &[RecommendationAction]) -> Vec<&str> {
    actions.iter().map(|action| action.rule_id.as_str()).collect()
}

#[tokio::test]
async fn test_first_test_flags_low_aerobic_capacity() {
    let (store, coach) = setup();
    let athlete = Athlete::new("Pablo Sanz", Gender::Male);
    let test = PhysicalTestRecord {
        shuttle_vo2max: Some(40.0),
        ..test_on(6, 1)
    };

    let evaluation = coach.record_physical_test(&athlete, test).await.unwrap();

    assert_eq!(rule_ids(&evaluation.actions), vec!["T3"]);
    assert_eq!(evaluation.highest_priority, RecommendationPriority::High);
    assert_eq!(evaluation.previous_test_id, None);
    assert_eq!(store.recommendations(athlete.id).await.len(), 1);

    let stored = store.profile(athlete.id).await.unwrap();
    assert_eq!(stored, Some(evaluation.profile));
}

#[tokio::test]
async fn test_second_test_is_compared_with_the_previous_one() {
    let (store, coach) = setup();
    let athlete = Athlete::new("Pablo Sanz", Gender::Male);
    let first = PhysicalTestRecord {
        bench_press_kg: Some(100.0),
        squat_kg: Some(140.0),
        shuttle_vo2max: Some(50.0),
        ..test_on(5, 1)
    };
    let second = PhysicalTestRecord {
        bench_press_kg: Some(70.0),
        squat_kg: Some(100.0),
        shuttle_vo2max: Some(50.0),
        ..test_on(6, 1)
    };
    let first_id = first.id;

    coach.record_physical_test(&athlete, first).await.unwrap();
    let evaluation = coach.record_physical_test(&athlete, second).await.unwrap();

    // Both lifts dropped at least 25%: one critical alert, never the significant one
    assert_eq!(rule_ids(&evaluation.actions), vec!["T1"]);
    assert_eq!(evaluation.highest_priority, RecommendationPriority::Critical);
    assert_eq!(evaluation.previous_test_id, Some(first_id));
    assert_eq!(store.recommendations(athlete.id).await.len(), 1);
}

#[tokio::test]
async fn test_backdated_test_compares_against_the_one_before_it() {
    let (_store, coach) = setup();
    let athlete = Athlete::new("Pablo Sanz", Gender::Male);
    let march = test_on(3, 1);
    let march_id = march.id;

    coach.record_physical_test(&athlete, march).await.unwrap();
    coach.record_physical_test(&athlete, test_on(6, 1)).await.unwrap();
    let evaluation = coach
        .record_physical_test(&athlete, test_on(4, 1))
        .await
        .unwrap();

    assert_eq!(evaluation.previous_test_id, Some(march_id));
}

#[tokio::test]
async fn test_test_of_another_athlete_is_rejected() {
    let (store, coach) = setup();
    let athlete = Athlete::new("Pablo Sanz", Gender::Male);
    let test = PhysicalTestRecord {
        athlete_id: Uuid::new_v4(),
        ..test_on(6, 1)
    };

    let error = coach.record_physical_test(&athlete, test).await.unwrap_err();

    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert!(store.recommendations(athlete.id).await.is_empty());
}

#[tokio::test]
async fn test_microcycle_follows_the_recorded_profile() {
    let (store, coach) = setup();
    let athlete = Athlete::new("Irene Gil", Gender::Female);
    let test = PhysicalTestRecord {
        bench_press_kg: Some(150.0),
        pull_kg: Some(140.0),
        squat_kg: Some(200.0),
        pull_ups: Some(25.0),
        dips: Some(30.0),
        shuttle_vo2max: Some(35.0),
        ..test_on(6, 1)
    };
    let evaluation = coach.record_physical_test(&athlete, test).await.unwrap();
    assert_eq!(evaluation.profile.profile_type, ProfileType::Veloz);

    let request = MicrocycleRequest {
        microcycle_type: MicrocycleType::Carga,
        start_date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2025, 6, 8).unwrap(),
        weekly_objective: "Ataques directos".to_owned(),
    };
    let microcycle = coach.generate_microcycle(&athlete, &request).await.unwrap();

    assert_eq!(microcycle.sessions.len(), 7);
    assert_eq!(microcycle.sessions[0].volume, 72);
    assert_eq!(microcycle.sessions[0].intensity, 83);
    assert_eq!(store.sessions(athlete.id).await, microcycle.sessions);
}

#[tokio::test]
async fn test_microcycle_without_history_uses_a_new_profile() {
    let (store, coach) = setup();
    let athlete = Athlete::new("Irene Gil", Gender::Female);
    let request = MicrocycleRequest {
        microcycle_type: MicrocycleType::Descarga,
        start_date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2025, 6, 8).unwrap(),
        weekly_objective: String::new(),
    };

    let microcycle = coach.generate_microcycle(&athlete, &request).await.unwrap();

    assert!(microcycle.justification.contains("sin ajustes de carga"));
    let profile = store.profile(athlete.id).await.unwrap().unwrap();
    assert_eq!(profile.profile_type, ProfileType::Nuevo);
}

#[tokio::test]
async fn test_inverted_range_stores_nothing() {
    let (store, coach) = setup();
    let athlete = Athlete::new("Irene Gil", Gender::Female);
    let request = MicrocycleRequest {
        microcycle_type: MicrocycleType::Carga,
        start_date: NaiveDate::from_ymd_opt(2025, 6, 8).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
        weekly_objective: String::new(),
    };

    assert!(coach.generate_microcycle(&athlete, &request).await.is_err());
    assert!(store.sessions(athlete.id).await.is_empty());
}

#[tokio::test]
async fn test_post_training_record_raises_reference_lift() {
    let (store, coach) = setup();
    let athlete = Athlete::new("Diego Martín", Gender::Male);
    store
        .set_reference_1rm(
            athlete.id,
            HashMap::from([("sentadilla".to_owned(), 100.0)]),
        )
        .await;

    let log = PostTrainingRecord::new(NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(), 7.0, 60)
        .with_exercise("sentadilla", 105.0);
    let evaluation = coach.record_post_training(&athlete, log).await.unwrap();

    assert_eq!(rule_ids(&evaluation.actions), vec!["E4"]);
    assert_eq!(evaluation.highest_priority, RecommendationPriority::Low);
    assert_eq!(evaluation.updated_references, vec!["sentadilla"]);
    let references = store.reference_1rm(athlete.id).await.unwrap();
    assert!((references["sentadilla"] - 105.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_post_training_fatigue_builds_over_sessions() {
    let (_store, coach) = setup();
    let athlete = Athlete::new("Diego Martín", Gender::Male);

    let mut last = None;
    for (day, rpe) in [(2, 8.5), (4, 9.0), (6, 9.0)] {
        let log = PostTrainingRecord::new(NaiveDate::from_ymd_opt(2025, 6, day).unwrap(), rpe, 90);
        last = Some(coach.record_post_training(&athlete, log).await.unwrap());
    }

    let evaluation = last.unwrap();
    assert!(rule_ids(&evaluation.actions).contains(&"E1"));
    assert_eq!(evaluation.highest_priority, RecommendationPriority::High);
}

#[tokio::test]
async fn test_out_of_range_rpe_is_rejected() {
    let (_store, coach) = setup();
    let athlete = Athlete::new("Diego Martín", Gender::Male);
    let log = PostTrainingRecord::new(NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(), 12.0, 60);

    let error = coach.record_post_training(&athlete, log).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
}

#[tokio::test]
async fn test_history_covers_every_recorded_test() {
    let (_store, coach) = setup();
    let athlete = Athlete::new("Pablo Sanz", Gender::Male);
    for (month, bench) in [(3, 80.0), (4, 85.0), (5, 92.0)] {
        let test = PhysicalTestRecord {
            bench_press_kg: Some(bench),
            ..test_on(month, 1)
        };
        coach.record_physical_test(&athlete, test).await.unwrap();
    }

    let history = coach.test_history(&athlete).await.unwrap();
    let bench = history
        .iter()
        .find(|field| field.field == TestField::BenchPress)
        .unwrap();
    assert_eq!(bench.stats.count, 3);
}

// ABOUTME: Integration tests for the physical-test rule set and the rule evaluator
// ABOUTME: End-to-end scenarios, T1/T2 exclusion, previous-test skipping, and failure tolerance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Judo Coach

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use judo_core::errors::{AppError, AppResult};
use judo_core::models::{Athlete, Gender, PhysicalTestRecord, TestField};
use judo_intelligence::config::intelligence::ComparisonConfig;
use judo_intelligence::rules::physical_test_rules;
use judo_intelligence::{
    build_comparisons, evaluate_physical_test_rules, highest_priority, IntelligenceConfig,
    PhysicalTestContext, RecommendationAction, RecommendationPriority, RecommendationType, Rule,
    RuleEngine,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn athlete(gender: Gender) -> Athlete {
    Athlete::new("Lucía Pérez", gender)
}

fn evaluate(
    gender: Gender,
    current: PhysicalTestRecord,
    previous: Option<PhysicalTestRecord>,
) -> Vec<RecommendationAction> {
    let config = IntelligenceConfig::default();
    let context = PhysicalTestContext::new(&athlete(gender), current, previous, &config);
    evaluate_physical_test_rules(&context, &config)
}

fn rule_ids(actions: &[RecommendationAction]) -> Vec<&str> {
    actions.iter().map(|action| action.rule_id.as_str()).collect()
}

fn bench(kg: f64) -> PhysicalTestRecord {
    PhysicalTestRecord {
        bench_press_kg: Some(kg),
        ..PhysicalTestRecord::default()
    }
}

// === Comparison builder ===

#[test]
fn test_comparisons_cover_every_field_in_order() {
    let comparisons = build_comparisons(
        &PhysicalTestRecord::default(),
        None,
        &ComparisonConfig::default(),
    );
    let fields: Vec<TestField> = comparisons.iter().map(|c| c.field).collect();
    assert_eq!(fields, TestField::ALL.to_vec());
}

#[test]
fn test_zero_or_missing_previous_yields_empty_comparison() {
    let config = ComparisonConfig::default();
    let current = PhysicalTestRecord {
        bench_press_kg: Some(100.0),
        squat_kg: Some(120.0),
        ..PhysicalTestRecord::default()
    };
    let previous = PhysicalTestRecord {
        bench_press_kg: Some(0.0),
        squat_kg: None,
        ..PhysicalTestRecord::default()
    };

    for comparison in build_comparisons(&current, Some(&previous), &config) {
        assert_eq!(comparison.difference, None, "{:?}", comparison.field);
        assert_eq!(comparison.percent_change, None, "{:?}", comparison.field);
        assert!(!comparison.improved);
        assert!(!comparison.significant);
        assert!(!comparison.critical);
    }
}

#[test]
fn test_critical_boundary_is_inclusive() {
    let comparisons = build_comparisons(&bench(100.0), Some(&bench(80.0)), &ComparisonConfig::default());
    let press = &comparisons[0];
    assert_eq!(press.field, TestField::BenchPress);
    assert_eq!(press.difference, Some(20.0));
    assert_eq!(press.percent_change, Some(25.0));
    assert!(press.improved);
    assert!(press.significant);
    assert!(press.critical);
}

// === End-to-end scenarios ===

#[test]
fn test_low_vo2max_without_previous_triggers_only_t3() {
    let current = PhysicalTestRecord {
        shuttle_vo2max: Some(40.0),
        ..PhysicalTestRecord::default()
    };
    let actions = evaluate(Gender::Male, current, None);

    assert_eq!(rule_ids(&actions), vec!["T3"]);
    assert_eq!(actions[0].priority, RecommendationPriority::High);
    assert_eq!(
        actions[0].recommendation_type,
        RecommendationType::AerobicCapacity
    );
    assert_eq!(highest_priority(&actions), RecommendationPriority::High);
}

#[test]
fn test_strength_ratio_just_inside_tolerance_does_not_fire() {
    let current = PhysicalTestRecord {
        bench_press_kg: Some(100.0),
        squat_kg: Some(100.0),
        ..PhysicalTestRecord::default()
    };
    assert!(evaluate(Gender::Male, current, None).is_empty());
}

#[test]
fn test_weak_lower_body_triggers_t5() {
    let current = PhysicalTestRecord {
        bench_press_kg: Some(100.0),
        squat_kg: Some(90.0),
        ..PhysicalTestRecord::default()
    };
    let actions = evaluate(Gender::Male, current, None);

    assert_eq!(rule_ids(&actions), vec!["T5"]);
    assert_eq!(actions[0].priority, RecommendationPriority::Medium);
    assert!(actions[0].title.contains("tren inferior débil"));
    assert_eq!(actions[0].analysis_data["tren_debil"], "inferior");
}

#[test]
fn test_weak_upper_body_uses_pull_when_bench_missing() {
    let current = PhysicalTestRecord {
        pull_kg: Some(60.0),
        squat_kg: Some(160.0),
        ..PhysicalTestRecord::default()
    };
    let actions = evaluate(Gender::Male, current, None);

    assert_eq!(rule_ids(&actions), vec!["T5"]);
    assert!(actions[0].title.contains("tren superior débil"));
}

#[test]
fn test_twenty_five_percent_gain_is_progress_not_an_alert() {
    let actions = evaluate(Gender::Male, bench(100.0), Some(bench(80.0)));
    assert_eq!(rule_ids(&actions), vec!["T6"]);
    assert_eq!(actions[0].priority, RecommendationPriority::Low);
}

#[test]
fn test_twenty_five_percent_drop_triggers_t1() {
    let actions = evaluate(Gender::Male, bench(75.0), Some(bench(100.0)));

    assert_eq!(rule_ids(&actions), vec!["T1"]);
    assert_eq!(highest_priority(&actions), RecommendationPriority::Critical);
    assert!(actions[0].message.contains("Press banca: 100 -> 75 kg (-25.0%)"));
    assert_eq!(actions[0].analysis_data["campos"][0]["campo"], "press_banca");
}

#[test]
fn test_significant_drop_triggers_t2() {
    let actions = evaluate(Gender::Male, bench(85.0), Some(bench(100.0)));
    assert_eq!(rule_ids(&actions), vec!["T2"]);
    assert_eq!(actions[0].priority, RecommendationPriority::High);
}

#[test]
fn test_t1_and_t2_are_mutually_exclusive() {
    let previous = PhysicalTestRecord {
        bench_press_kg: Some(100.0),
        squat_kg: Some(140.0),
        ..PhysicalTestRecord::default()
    };
    // Bench -30 % (critical), squat -15 % (significant)
    let current = PhysicalTestRecord {
        bench_press_kg: Some(70.0),
        squat_kg: Some(119.0),
        ..PhysicalTestRecord::default()
    };
    let actions = evaluate(Gender::Male, current, Some(previous));
    let ids = rule_ids(&actions);

    assert!(ids.contains(&"T1"));
    assert!(!ids.contains(&"T2"));
}

#[test]
fn test_vo2max_target_depends_on_gender() {
    let current = PhysicalTestRecord {
        shuttle_vo2max: Some(55.0),
        ..PhysicalTestRecord::default()
    };
    let female = evaluate(Gender::Female, current.clone(), None);
    assert_eq!(rule_ids(&female), vec!["T7"]);
    assert_eq!(female[0].recommendation_type, RecommendationType::GoalAchieved);

    assert!(evaluate(Gender::Male, current.clone(), None).is_empty());
    assert!(evaluate(Gender::Unspecified, current, None).is_empty());
}

#[test]
fn test_aerobic_gap_fires_with_a_stricter_ratio() {
    let mut config = IntelligenceConfig::default();
    config.vo2max.alerts.target_ratio = 0.9;
    let current = PhysicalTestRecord {
        shuttle_vo2max: Some(50.0),
        ..PhysicalTestRecord::default()
    };
    let context = PhysicalTestContext::new(&athlete(Gender::Male), current, None, &config);
    let actions = evaluate_physical_test_rules(&context, &config);

    assert_eq!(rule_ids(&actions), vec!["T4"]);
    assert_eq!(actions[0].priority, RecommendationPriority::Medium);
}

#[test]
fn test_output_follows_declaration_order() {
    let previous = PhysicalTestRecord {
        bench_press_kg: Some(100.0),
        pull_ups: Some(10.0),
        ..PhysicalTestRecord::default()
    };
    let current = PhysicalTestRecord {
        bench_press_kg: Some(70.0),
        squat_kg: Some(60.0),
        pull_ups: Some(14.0),
        shuttle_vo2max: Some(42.0),
        ..PhysicalTestRecord::default()
    };
    let actions = evaluate(Gender::Male, current, Some(previous));

    assert_eq!(rule_ids(&actions), vec!["T1", "T3", "T5", "T6"]);
    assert_eq!(highest_priority(&actions), RecommendationPriority::Critical);
}

// === Evaluator ===

struct SpyRule {
    calls: Arc<AtomicUsize>,
}

impl Rule<PhysicalTestContext> for SpyRule {
    fn id(&self) -> &'static str {
        "SPY"
    }

    fn name(&self) -> &'static str {
        "spy"
    }

    fn priority(&self) -> RecommendationPriority {
        RecommendationPriority::Critical
    }

    fn requires_previous(&self) -> bool {
        true
    }

    fn condition(&self, _context: &PhysicalTestContext) -> AppResult<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(true)
    }

    fn action(&self, _context: &PhysicalTestContext) -> AppResult<RecommendationAction> {
        Ok(RecommendationAction::new(
            RecommendationType::Progress,
            self.priority(),
            "spy",
        ))
    }
}

struct BrokenRule;

impl Rule<PhysicalTestContext> for BrokenRule {
    fn id(&self) -> &'static str {
        "BROKEN"
    }

    fn name(&self) -> &'static str {
        "broken"
    }

    fn priority(&self) -> RecommendationPriority {
        RecommendationPriority::Critical
    }

    fn condition(&self, _context: &PhysicalTestContext) -> AppResult<bool> {
        Err(AppError::internal("condition exploded"))
    }

    fn action(&self, _context: &PhysicalTestContext) -> AppResult<RecommendationAction> {
        Err(AppError::internal("unreachable"))
    }
}

struct ActionFailsRule;

impl Rule<PhysicalTestContext> for ActionFailsRule {
    fn id(&self) -> &'static str {
        "ACTION_FAILS"
    }

    fn name(&self) -> &'static str {
        "action fails"
    }

    fn priority(&self) -> RecommendationPriority {
        RecommendationPriority::Critical
    }

    fn condition(&self, _context: &PhysicalTestContext) -> AppResult<bool> {
        Ok(true)
    }

    fn action(&self, _context: &PhysicalTestContext) -> AppResult<RecommendationAction> {
        Err(AppError::missing_field("bench_press_kg"))
    }
}

struct AlwaysRule;

impl Rule<PhysicalTestContext> for AlwaysRule {
    fn id(&self) -> &'static str {
        "ALWAYS"
    }

    fn name(&self) -> &'static str {
        "always"
    }

    fn priority(&self) -> RecommendationPriority {
        RecommendationPriority::Medium
    }

    fn condition(&self, _context: &PhysicalTestContext) -> AppResult<bool> {
        Ok(true)
    }

    fn action(&self, _context: &PhysicalTestContext) -> AppResult<RecommendationAction> {
        Ok(RecommendationAction::new(
            RecommendationType::Progress,
            self.priority(),
            "always",
        ))
    }
}

fn context_without_previous() -> PhysicalTestContext {
    PhysicalTestContext::new(
        &athlete(Gender::Male),
        PhysicalTestRecord::default(),
        None,
        &IntelligenceConfig::default(),
    )
}

#[test]
fn test_rules_needing_previous_are_never_called_without_one() {
    let calls = Arc::new(AtomicUsize::new(0));
    let engine = RuleEngine::new(vec![Box::new(SpyRule {
        calls: Arc::clone(&calls),
    })]);

    let actions = engine.evaluate(&context_without_previous());

    assert!(actions.is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_rules_needing_previous_run_when_one_exists() {
    let calls = Arc::new(AtomicUsize::new(0));
    let engine = RuleEngine::new(vec![Box::new(SpyRule {
        calls: Arc::clone(&calls),
    })]);
    let config = IntelligenceConfig::default();
    let context = PhysicalTestContext::new(
        &athlete(Gender::Male),
        PhysicalTestRecord::default(),
        Some(PhysicalTestRecord::default()),
        &config,
    );

    let actions = engine.evaluate(&context);

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(rule_ids(&actions), vec!["SPY"]);
}

#[test]
fn test_failing_rule_does_not_abort_the_batch() {
    let engine: RuleEngine<PhysicalTestContext> =
        RuleEngine::new(vec![Box::new(BrokenRule), Box::new(AlwaysRule)]);

    let actions = engine.evaluate(&context_without_previous());

    assert_eq!(rule_ids(&actions), vec!["ALWAYS"]);
}

#[test]
fn test_failing_action_is_skipped() {
    let engine: RuleEngine<PhysicalTestContext> =
        RuleEngine::new(vec![Box::new(ActionFailsRule), Box::new(AlwaysRule)]);

    let actions = engine.evaluate(&context_without_previous());

    assert_eq!(rule_ids(&actions), vec!["ALWAYS"]);
    assert_eq!(highest_priority(&actions), RecommendationPriority::Medium);
}

#[test]
fn test_rule_set_is_priority_ordered() {
    let rules = physical_test_rules(&IntelligenceConfig::default());
    let ids: Vec<&str> = rules.iter().map(|rule| rule.id()).collect();
    assert_eq!(ids, vec!["T1", "T2", "T3", "T4", "T5", "T6", "T7"]);

    let priorities: Vec<RecommendationPriority> = rules.iter().map(|rule| rule.priority()).collect();
    let rank = |p: &RecommendationPriority| {
        RecommendationPriority::DESCENDING
            .iter()
            .position(|q| q == p)
            .unwrap()
    };
    assert!(priorities.windows(2).all(|pair| rank(&pair[0]) <= rank(&pair[1])));
}

#[test]
fn test_highest_priority_defaults_to_low() {
    assert_eq!(highest_priority(&[]), RecommendationPriority::Low);

    let medium = RecommendationAction::new(
        RecommendationType::Progress,
        RecommendationPriority::Medium,
        "m",
    );
    let high = RecommendationAction::new(
        RecommendationType::Progress,
        RecommendationPriority::High,
        "h",
    );
    assert_eq!(
        highest_priority(&[medium, high]),
        RecommendationPriority::High
    );
}

#[test]
fn test_priority_serializes_with_stored_codes() {
    assert_eq!(
        serde_json::to_string(&RecommendationPriority::Critical).unwrap(),
        "\"CRITICA\""
    );
    assert_eq!(
        serde_json::to_string(&RecommendationPriority::Low).unwrap(),
        "\"BAJA\""
    );
}

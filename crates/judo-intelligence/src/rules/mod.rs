// ABOUTME: Declarative IF-THEN rule engine producing prioritized recommendations
// ABOUTME: Rule trait, recommendation payloads, evaluator, and priority resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Judo Coach

//! # Rule Engine
//!
//! A rule set is a fixed list of [`Rule`] objects evaluated in declaration
//! order, which is also priority-descending order. Each rule has a
//! condition and an action over a read-only context. The evaluator:
//!
//! 1. skips rules that need a previous record when the context has none
//!    (the condition is never called),
//! 2. logs and skips a rule whose condition or action fails,
//! 3. collects every triggered action, with no early exit and no cap.

/// Post-training rules (E1-E4) and their context
pub mod post_training;

pub use physical_test::{evaluate_physical_test_rules, physical_test_rules, PhysicalTestContext};
pub use post_training::{evaluate_post_training_rules, post_training_rules, PostTrainingContext};

use judo_core::errors::AppResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// Recommendation priority, highest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecommendationPriority {
    /// Needs attention before the next session
    #[serde(rename = "CRITICA")]
    Critical,
    /// Needs attention this week
    #[serde(rename = "ALTA")]
    High,
    /// Plan for it in the next cycle
    #[serde(rename = "MEDIA")]
    Medium,
    /// Informational
    #[serde(rename = "BAJA")]
    Low,
}

impl RecommendationPriority {
    /// Priorities from highest to lowest
    pub const DESCENDING: [Self; 4] = [Self::Critical, Self::High, Self::Medium, Self::Low];
}

/// Kind of recommendation, used by consumers to group and render them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationType {
    /// A measurement dropped between tests
    PerformanceDrop,
    /// Aerobic capacity below expectations
    AerobicCapacity,
    /// Lower/upper body strength imbalance
    MuscularImbalance,
    /// A measurement improved between tests
    Progress,
    /// A target was reached
    GoalAchieved,
    /// Accumulated fatigue
    Fatigue,
    /// Training load should change
    LoadAdjustment,
    /// A new personal record was set
    PersonalRecord,
}

/// Output of a triggered rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationAction {
    /// Identifier of the rule that produced it, set by the evaluator
    pub rule_id: String,
    /// Kind of recommendation
    pub recommendation_type: RecommendationType,
    /// Short title
    pub title: String,
    /// Multi-line explanation
    pub message: String,
    /// Suggested next step
    pub suggested_action: String,
    /// Priority
    pub priority: RecommendationPriority,
    /// Field-level numbers for display and audit
    pub analysis_data: Value,
}

impl RecommendationAction {
    /// Start an action; the evaluator fills in `rule_id`
    pub fn new(
        recommendation_type: RecommendationType,
        priority: RecommendationPriority,
        title: impl Into<String>,
    ) -> Self {
        Self {
            rule_id: String::new(),
            recommendation_type,
            title: title.into(),
            message: String::new(),
            suggested_action: String::new(),
            priority,
            analysis_data: Value::Null,
        }
    }

    /// Set the message
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set the suggested action
    #[must_use]
    pub fn with_suggested_action(mut self, suggested_action: impl Into<String>) -> Self {
        self.suggested_action = suggested_action.into();
        self
    }

    /// Attach the analysis payload
    #[must_use]
    pub fn with_analysis(mut self, analysis_data: Value) -> Self {
        self.analysis_data = analysis_data;
        self
    }
}

/// Context a rule set is evaluated against
pub trait RuleContext {
    /// Whether the history needed by comparison rules is available
    fn has_previous(&self) -> bool;
}

/// A single IF-THEN rule
pub trait Rule<C: RuleContext>: Send + Sync {
    /// Stable identifier (e.g. `T1`)
    fn id(&self) -> &'static str;

    /// Short descriptive name
    fn name(&self) -> &'static str;

    /// Priority of the produced recommendation
    fn priority(&self) -> RecommendationPriority;

    /// Whether the rule only makes sense with a previous record
    fn requires_previous(&self) -> bool {
        false
    }

    /// Whether the rule fires for this context
    ///
    /// # Errors
    ///
    /// Returns an error if the context lacks data the rule relies on
    fn condition(&self, context: &C) -> AppResult<bool>;

    /// Build the recommendation for a context the rule fired on
    ///
    /// # Errors
    ///
    /// Returns an error if the recommendation cannot be built
    fn action(&self, context: &C) -> AppResult<RecommendationAction>;
}

/// Ordered rule set and its evaluator
pub struct RuleEngine<C: RuleContext> {
    rules: Vec<Box<dyn Rule<C>>>,
}

impl<C: RuleContext> RuleEngine<C> {
    /// Build an engine; evaluation follows the given order
    #[must_use]
    pub fn new(rules: Vec<Box<dyn Rule<C>>>) -> Self {
        Self { rules }
    }

    /// Rules in evaluation order
    #[must_use]
    pub fn rules(&self) -> &[Box<dyn Rule<C>>] {
        &self.rules
    }

    /// Evaluate every rule and collect the triggered actions
    ///
    /// A failing rule is logged and skipped; it never aborts the batch.
    pub fn evaluate(&self, context: &C) -> Vec<RecommendationAction> {
        let mut actions = Vec::new();

        for rule in &self.rules {
            if rule.requires_previous() && !context.has_previous() {
                debug!(rule_id = rule.id(), "Skipping rule: no previous record");
                continue;
            }

            match rule.condition(context) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(e) => {
                    warn!(rule_id = rule.id(), rule = rule.name(), error = %e, "Rule condition failed");
                    continue;
                }
            }

            match rule.action(context) {
                Ok(mut action) => {
                    debug!(rule_id = rule.id(), priority = ?action.priority, "Rule triggered");
                    action.rule_id = rule.id().to_owned();
                    actions.push(action);
                }
                Err(e) => {
                    warn!(rule_id = rule.id(), rule = rule.name(), error = %e, "Rule action failed");
                }
            }
        }

        actions
    }
}

/// Highest priority present in `actions`, `Low` when empty
#[must_use]
pub fn highest_priority(actions: &[RecommendationAction]) -> RecommendationPriority {
    RecommendationPriority::DESCENDING
        .into_iter()
        .find(|priority| actions.iter().any(|action| action.priority == *priority))
        .unwrap_or(RecommendationPriority::Low)
}

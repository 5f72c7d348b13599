// ABOUTME: Post-training monitoring rules E1-E4 over an athlete's session logs
// ABOUTME: Flags accumulated fatigue, rising effort, light loads, and new personal records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Judo Coach
#![allow(clippy::cast_precision_loss)] // Safe: session windows are small

use super::{
    RecommendationAction, RecommendationPriority, RecommendationType, Rule, RuleContext,
    RuleEngine,
};
use crate::algorithms::{calculate_1rm_intensity, is_new_record};
use crate::config::intelligence::{PostTrainingConfig, TrendConfig};
use crate::config::IntelligenceConfig;
use crate::statistical_analysis::{calculate_trend_with, round2, TrendDirection};
use judo_core::errors::{AppError, AppResult};
use judo_core::models::{Athlete, ExerciseLog, PostTrainingRecord};
use serde_json::json;
use std::collections::HashMap;
use tracing::info;
use uuid::Uuid;

/// Session history and reference lifts the post-training rules read
#[derive(Debug, Clone)]
pub struct PostTrainingContext {
    /// Athlete identifier
    pub athlete_id: Uuid,
    /// Athlete display name
    pub athlete_name: String,
    /// Session logs, oldest first
    pub sessions: Vec<PostTrainingRecord>,
    /// Reference 1RM per exercise name, kg
    pub reference_1rm: HashMap<String, f64>,
}

impl PostTrainingContext {
    /// Build the context; sessions are sorted by date
    #[must_use]
    pub fn new(
        athlete: &Athlete,
        mut sessions: Vec<PostTrainingRecord>,
        reference_1rm: HashMap<String, f64>,
    ) -> Self {
        sessions.sort_by_key(|session| session.session_date);
        Self {
            athlete_id: athlete.id,
            athlete_name: athlete.full_name.clone(),
            sessions,
            reference_1rm,
        }
    }

    /// Most recent session
    #[must_use]
    pub fn latest(&self) -> Option<&PostTrainingRecord> {
        self.sessions.last()
    }

    /// The last `window` sessions
    #[must_use]
    pub fn recent(&self, window: usize) -> &[PostTrainingRecord] {
        &self.sessions[self.sessions.len().saturating_sub(window)..]
    }

    fn reference_for(&self, log: &ExerciseLog) -> Option<f64> {
        self.reference_1rm.get(&log.exercise).copied()
    }

    /// Intensity of every lift in the latest session that has a reference
    fn latest_intensities(&self) -> Vec<(&ExerciseLog, f64)> {
        self.latest()
            .map(|session| {
                session
                    .exercises
                    .iter()
                    .filter_map(|log| {
                        calculate_1rm_intensity(log.weight_kg, self.reference_for(log))
                            .map(|intensity| (log, intensity))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn latest_records(&self) -> Vec<&ExerciseLog> {
        self.latest()
            .map(|session| {
                session
                    .exercises
                    .iter()
                    .filter(|log| is_new_record(log.weight_kg, self.reference_for(log)))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl RuleContext for PostTrainingContext {
    /// Reference lifts play the role of the previous record
    fn has_previous(&self) -> bool {
        !self.reference_1rm.is_empty()
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0_usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then_some(sum / count as f64)
}

/// E1: mean RPE over the window at or above the fatigue threshold
struct AccumulatedFatigueRule {
    thresholds: PostTrainingConfig,
}

impl AccumulatedFatigueRule {
    fn mean_rpe(&self, context: &PostTrainingContext) -> Option<f64> {
        mean(
            context
                .recent(self.thresholds.window)
                .iter()
                .map(|session| session.rpe),
        )
    }
}

impl Rule<PostTrainingContext> for AccumulatedFatigueRule {
    fn id(&self) -> &'static str {
        "E1"
    }

    fn name(&self) -> &'static str {
        "Fatiga acumulada"
    }

    fn priority(&self) -> RecommendationPriority {
        RecommendationPriority::High
    }

    fn condition(&self, context: &PostTrainingContext) -> AppResult<bool> {
        Ok(self
            .mean_rpe(context)
            .is_some_and(|rpe| rpe >= self.thresholds.fatigue_rpe_threshold))
    }

    fn action(&self, context: &PostTrainingContext) -> AppResult<RecommendationAction> {
        let mean_rpe = self
            .mean_rpe(context)
            .ok_or_else(|| AppError::missing_field("rpe"))?;
        let recent = context.recent(self.thresholds.window);

        Ok(RecommendationAction::new(
            RecommendationType::Fatigue,
            self.priority(),
            "Fatiga acumulada",
        )
        .with_message(format!(
            "{} reporta un RPE medio de {mean_rpe:.1} en las últimas {} sesiones \
             (umbral {:.1}).",
            context.athlete_name,
            recent.len(),
            self.thresholds.fatigue_rpe_threshold
        ))
        .with_suggested_action("Programar una sesión de descarga o recuperación activa")
        .with_analysis(json!({
            "rpe_medio": round2(mean_rpe),
            "umbral": self.thresholds.fatigue_rpe_threshold,
            "sesiones": recent
                .iter()
                .map(|s| json!({ "fecha": s.session_date, "rpe": s.rpe }))
                .collect::<Vec<_>>(),
        })))
    }
}

/// E2: perceived effort rising across the window
struct RisingEffortRule {
    trend: TrendConfig,
}

impl RisingEffortRule {
    fn rpe_series(context: &PostTrainingContext) -> Vec<f64> {
        context.sessions.iter().map(|session| session.rpe).collect()
    }
}

impl Rule<PostTrainingContext> for RisingEffortRule {
    fn id(&self) -> &'static str {
        "E2"
    }

    fn name(&self) -> &'static str {
        "Esfuerzo percibido en aumento"
    }

    fn priority(&self) -> RecommendationPriority {
        RecommendationPriority::Medium
    }

    fn condition(&self, context: &PostTrainingContext) -> AppResult<bool> {
        Ok(calculate_trend_with(&Self::rpe_series(context), &self.trend)
            == TrendDirection::Improving)
    }

    fn action(&self, context: &PostTrainingContext) -> AppResult<RecommendationAction> {
        let series = Self::rpe_series(context);
        let recent = &series[series.len().saturating_sub(self.trend.window)..];
        let (first, last) = match recent {
            [first, .., last] => (*first, *last),
            _ => return Err(AppError::invalid_input("RPE trend needs two sessions")),
        };

        Ok(RecommendationAction::new(
            RecommendationType::LoadAdjustment,
            self.priority(),
            "Esfuerzo percibido en aumento",
        )
        .with_message(format!(
            "El RPE de {} sube de {first:.1} a {last:.1} en las últimas {} sesiones.",
            context.athlete_name,
            recent.len()
        ))
        .with_suggested_action("Revisar la progresión de cargas y la calidad del descanso")
        .with_analysis(json!({
            "rpe_recientes": recent,
            "variacion": round2(last - first),
        })))
    }
}

/// E3: latest session too light relative to the reference lifts
struct LowIntensityRule {
    low_intensity_percent: f64,
}

impl Rule<PostTrainingContext> for LowIntensityRule {
    fn id(&self) -> &'static str {
        "E3"
    }

    fn name(&self) -> &'static str {
        "Intensidad insuficiente"
    }

    fn priority(&self) -> RecommendationPriority {
        RecommendationPriority::Medium
    }

    fn requires_previous(&self) -> bool {
        true
    }

    fn condition(&self, context: &PostTrainingContext) -> AppResult<bool> {
        let intensities = context.latest_intensities();
        Ok(mean(intensities.iter().map(|(_, intensity)| *intensity))
            .is_some_and(|average| average < self.low_intensity_percent))
    }

    fn action(&self, context: &PostTrainingContext) -> AppResult<RecommendationAction> {
        let intensities = context.latest_intensities();
        let average = mean(intensities.iter().map(|(_, intensity)| *intensity))
            .ok_or_else(|| AppError::missing_field("weight_kg"))?;

        Ok(RecommendationAction::new(
            RecommendationType::LoadAdjustment,
            self.priority(),
            "Carga por debajo del estímulo de fuerza",
        )
        .with_message(format!(
            "{} entrenó al {average:.1}% de su 1RM de referencia en la última sesión \
             (mínimo {:.0}%).",
            context.athlete_name, self.low_intensity_percent
        ))
        .with_suggested_action("Aumentar la carga de los ejercicios básicos en la próxima sesión")
        .with_analysis(json!({
            "intensidad_media": round2(average),
            "umbral": self.low_intensity_percent,
            "ejercicios": intensities
                .iter()
                .map(|(log, intensity)| json!({
                    "ejercicio": log.exercise,
                    "peso_kg": log.weight_kg,
                    "intensidad": intensity,
                }))
                .collect::<Vec<_>>(),
        })))
    }
}

/// E4: a lift in the latest session beats its reference
struct NewRecordRule;

impl Rule<PostTrainingContext> for NewRecordRule {
    fn id(&self) -> &'static str {
        "E4"
    }

    fn name(&self) -> &'static str {
        "Nuevo récord personal"
    }

    fn priority(&self) -> RecommendationPriority {
        RecommendationPriority::Low
    }

    fn requires_previous(&self) -> bool {
        true
    }

    fn condition(&self, context: &PostTrainingContext) -> AppResult<bool> {
        Ok(!context.latest_records().is_empty())
    }

    fn action(&self, context: &PostTrainingContext) -> AppResult<RecommendationAction> {
        let records = context.latest_records();
        let mut message = format!("{} supera su 1RM de referencia en:", context.athlete_name);
        for log in &records {
            message.push_str(&format!(
                "\n- {}: {} kg (referencia {} kg)",
                log.exercise,
                log.weight_kg.unwrap_or_default(),
                context.reference_for(log).unwrap_or_default()
            ));
        }

        Ok(RecommendationAction::new(
            RecommendationType::PersonalRecord,
            self.priority(),
            format!("Nuevo récord en {} ejercicio(s)", records.len()),
        )
        .with_message(message)
        .with_suggested_action("Actualizar el 1RM de referencia con el nuevo peso")
        .with_analysis(json!({
            "records": records
                .iter()
                .map(|log| json!({
                    "ejercicio": log.exercise,
                    "nuevo_kg": log.weight_kg,
                    "referencia_kg": context.reference_for(log),
                }))
                .collect::<Vec<_>>(),
        })))
    }
}

/// Post-training rules in evaluation order
#[must_use]
pub fn post_training_rules(config: &IntelligenceConfig) -> Vec<Box<dyn Rule<PostTrainingContext>>> {
    let thresholds = config.post_training.clone();
    let trend = TrendConfig {
        window: thresholds.window,
        stable_threshold: config.trend.stable_threshold,
    };

    vec![
        Box::new(AccumulatedFatigueRule {
            thresholds: thresholds.clone(),
        }),
        Box::new(RisingEffortRule { trend }),
        Box::new(LowIntensityRule {
            low_intensity_percent: thresholds.low_intensity_percent,
        }),
        Box::new(NewRecordRule),
    ]
}

/// Evaluate the post-training rules against a context
#[must_use]
pub fn evaluate_post_training_rules(
    context: &PostTrainingContext,
    config: &IntelligenceConfig,
) -> Vec<RecommendationAction> {
    let engine = RuleEngine::new(post_training_rules(config));
    let actions = engine.evaluate(context);
    info!(
        athlete_id = %context.athlete_id,
        sessions = context.sessions.len(),
        triggered = actions.len(),
        "Post-training rules evaluated"
    );
    actions
}

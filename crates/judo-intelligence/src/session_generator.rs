// ABOUTME: Template-driven weekly session generation for a micro-cycle
// ABOUTME: Applies the athlete profile's load adjustments and cycles through its content pools
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Judo Coach

//! # Session Generator
//!
//! Each micro-cycle type has a fixed seven-day template. For every slot the
//! generator places the session on the first matching weekday on or after
//! the start date, scales the baseline load by the profile adjustment
//! (`round(baseline x (1 + pct / 100))`), and picks content lines from the
//! profile's pools with `day_index % pool.len()`. Output is deterministic.

use crate::profile::{AthleteProfile, LoadAdjustment, ProfileType};
use chrono::Weekday::{Fri, Mon, Sat, Sun, Thu, Tue, Wed};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use judo_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

use self::SessionType::{Competicion, Descanso, Fisico, Mixto, Recuperacion, Tactico, Tecnico};

/// Micro-cycle type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MicrocycleType {
    /// Load building
    Carga,
    /// Taper
    Descarga,
    /// Shock week, highest load
    Choque,
    /// Recovery week
    Recuperacion,
    /// Competition week
    Competitivo,
}

impl MicrocycleType {
    /// Every micro-cycle type
    pub const ALL: [Self; 5] = [
        Self::Carga,
        Self::Descarga,
        Self::Choque,
        Self::Recuperacion,
        Self::Competitivo,
    ];

    /// Seven-day template, Monday first
    #[must_use]
    pub const fn template(self) -> &'static [SessionPlan; 7] {
        match self {
            Self::Carga => &CARGA,
            Self::Descarga => &DESCARGA,
            Self::Choque => &CHOQUE,
            Self::Recuperacion => &RECUPERACION,
            Self::Competitivo => &COMPETITIVO,
        }
    }

    /// Code as stored by the planning module
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Carga => "CARGA",
            Self::Descarga => "DESCARGA",
            Self::Choque => "CHOQUE",
            Self::Recuperacion => "RECUPERACION",
            Self::Competitivo => "COMPETITIVO",
        }
    }
}

impl FromStr for MicrocycleType {
    type Err = AppError;

    /// Case-insensitive code, e.g. `carga` or `CHOQUE`
    fn from_str(s: &str) -> AppResult<Self> {
        let code = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "Unknown micro-cycle type '{s}', expected one of CARGA, DESCARGA, CHOQUE, RECUPERACION, COMPETITIVO"
                ))
            })
    }
}

/// Kind of session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionType {
    /// Strength and conditioning
    Fisico,
    /// Technique on the mat
    Tecnico,
    /// Tactics and randori strategy
    Tactico,
    /// Combined session
    Mixto,
    /// Active recovery
    Recuperacion,
    /// Rest day
    Descanso,
    /// Competition day
    Competicion,
}

impl SessionType {
    /// Whether the profile adjustment scales this session's load
    #[must_use]
    pub const fn is_adjustable(self) -> bool {
        !matches!(self, Self::Descanso | Self::Competicion)
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fisico => "Físico",
            Self::Tecnico => "Técnico",
            Self::Tactico => "Táctico",
            Self::Mixto => "Mixto",
            Self::Recuperacion => "Recuperación",
            Self::Descanso => "Descanso",
            Self::Competicion => "Competición",
        }
    }
}

/// One day of a weekly template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPlan {
    /// Day of week
    pub weekday: Weekday,
    /// Session kind
    pub session_type: SessionType,
    /// Baseline duration, minutes
    pub duration_minutes: u32,
    /// Baseline volume, 0-100
    pub volume: u32,
    /// Baseline intensity, 0-100
    pub intensity: u32,
}

const fn plan(
    weekday: Weekday,
    session_type: SessionType,
    duration_minutes: u32,
    volume: u32,
    intensity: u32,
) -> SessionPlan {
    SessionPlan {
        weekday,
        session_type,
        duration_minutes,
        volume,
        intensity,
    }
}

const CARGA: [SessionPlan; 7] = [
    plan(Mon, Fisico, 90, 80, 75),
    plan(Tue, Tecnico, 90, 75, 70),
    plan(Wed, Mixto, 100, 85, 80),
    plan(Thu, Tactico, 90, 75, 75),
    plan(Fri, Fisico, 90, 80, 85),
    plan(Sat, Mixto, 75, 70, 70),
    plan(Sun, Descanso, 0, 0, 0),
];

const DESCARGA: [SessionPlan; 7] = [
    plan(Mon, Tecnico, 60, 50, 55),
    plan(Tue, Fisico, 60, 45, 60),
    plan(Wed, Recuperacion, 45, 30, 40),
    plan(Thu, Tactico, 60, 50, 55),
    plan(Fri, Mixto, 60, 50, 60),
    plan(Sat, Recuperacion, 45, 30, 35),
    plan(Sun, Descanso, 0, 0, 0),
];

const CHOQUE: [SessionPlan; 7] = [
    plan(Mon, Fisico, 105, 90, 85),
    plan(Tue, Mixto, 105, 90, 85),
    plan(Wed, Tactico, 90, 80, 85),
    plan(Thu, Fisico, 105, 90, 90),
    plan(Fri, Mixto, 105, 90, 85),
    plan(Sat, Tecnico, 75, 70, 75),
    plan(Sun, Descanso, 0, 0, 0),
];

const RECUPERACION: [SessionPlan; 7] = [
    plan(Mon, Recuperacion, 45, 30, 35),
    plan(Tue, Tecnico, 45, 35, 40),
    plan(Wed, Recuperacion, 45, 30, 35),
    plan(Thu, Tecnico, 45, 35, 40),
    plan(Fri, Recuperacion, 45, 30, 35),
    plan(Sat, Descanso, 0, 0, 0),
    plan(Sun, Descanso, 0, 0, 0),
];

const COMPETITIVO: [SessionPlan; 7] = [
    plan(Mon, Tecnico, 60, 50, 70),
    plan(Tue, Tactico, 60, 50, 75),
    plan(Wed, Mixto, 45, 40, 80),
    plan(Thu, Recuperacion, 30, 25, 35),
    plan(Fri, Descanso, 0, 0, 0),
    plan(Sat, Competicion, 0, 0, 0),
    plan(Sun, Recuperacion, 45, 30, 35),
];

const RECOVERY_CONTENT: &str =
    "Recuperación activa: movilidad articular, estiramientos y trote suave 20 min";
const COMPETITION_CONTENT: &str =
    "Competición: calentamiento específico, control de peso y gestión entre combates";

/// Content lines for one profile
#[derive(Debug, Clone, Copy)]
pub struct ContentPools {
    /// Strength and conditioning lines
    pub physical: &'static [&'static str],
    /// Technique lines
    pub technical: &'static [&'static str],
    /// Tactics lines
    pub tactical: &'static [&'static str],
}

impl ContentPools {
    /// Pools for a profile
    #[must_use]
    pub const fn for_profile(profile: ProfileType) -> Self {
        match profile {
            ProfileType::Veloz => Self {
                physical: &[
                    "Pliometría: saltos al cajón 5x5 y lanzamientos de balón medicinal",
                    "Sprints de 10-20 m con recuperación completa",
                    "Fuerza explosiva: cargadas de potencia 5x3",
                    "Intervalos aeróbicos cortos 6x2 min para mejorar la base",
                ],
                technical: &[
                    "Uchi komi de velocidad: seoi nage y uchi mata",
                    "Entradas explosivas con cambio de dirección",
                    "Combinaciones directas ashi waza a te waza",
                ],
                tactical: &[
                    "Randori de ataques en los primeros 30 s",
                    "Control de agarre rápido y ataque inmediato",
                    "Gestión del ritmo en combates largos",
                ],
            },
            ProfileType::Resistente => Self {
                physical: &[
                    "Fuerza máxima: sentadilla y press 5x5 al 80%",
                    "Trabajo de agarre: dominadas con judogi 4x máx",
                    "Circuito de fuerza general con cargas moderadas",
                    "Rodaje aeróbico continuo 30 min",
                ],
                technical: &[
                    "Kumikata: dominio del agarre prolongado",
                    "Contraataques: kaeshi waza sobre ataques de cadera",
                    "Ne waza: transiciones y control en el suelo",
                ],
                tactical: &[
                    "Randori largo de 6 min con presión constante",
                    "Desgaste del rival y ataque en el tramo final",
                    "Golden score: estrategia de ritmo sostenido",
                ],
            },
            ProfileType::Equilibrado => Self {
                physical: &[
                    "Circuito mixto de fuerza y potencia",
                    "Intervalos 4x4 min a intensidad alta",
                    "Fuerza máxima 4x4 en básicos",
                    "Resistencia específica: uchi komi por tiempo",
                ],
                technical: &[
                    "Tokui waza: perfeccionamiento de la técnica preferida",
                    "Combinaciones y encadenamientos",
                    "Ne waza: inmovilizaciones y salidas",
                ],
                tactical: &[
                    "Randori con objetivos tácticos por ronda",
                    "Adaptación al estilo del rival",
                    "Gestión de ventaja en el marcador",
                ],
            },
            ProfileType::Nuevo => Self {
                physical: &[
                    "Acondicionamiento general y técnica de levantamiento",
                    "Carrera continua suave 20 min",
                    "Circuito de autocargas",
                ],
                technical: &[
                    "Ukemi y desplazamientos básicos",
                    "Técnicas fundamentales del gokyo",
                    "Ne waza básico: osaekomi waza",
                ],
                tactical: &[
                    "Randori suave de aprendizaje",
                    "Reglamento y conducta en combate",
                ],
            },
        }
    }
}

/// Micro-cycle generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MicrocycleRequest {
    /// Micro-cycle type
    pub microcycle_type: MicrocycleType,
    /// First day, inclusive
    pub start_date: NaiveDate,
    /// Last day, inclusive
    pub end_date: NaiveDate,
    /// Coach's weekly objective
    #[serde(default)]
    pub weekly_objective: String,
}

/// Concrete session ready to be stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedSession {
    /// Session date
    pub date: NaiveDate,
    /// Position in the template, Monday = 0
    pub day_index: usize,
    /// Session kind
    pub session_type: SessionType,
    /// Adjusted duration, minutes
    pub duration_minutes: u32,
    /// Adjusted volume, 0-100
    pub volume: u32,
    /// Adjusted intensity, 0-100
    pub intensity: u32,
    /// Strength and conditioning content
    pub physical_content: String,
    /// Technique content
    pub technical_content: String,
    /// Tactics content
    pub tactical_content: String,
    /// Why the session looks the way it does
    pub justification: String,
}

/// Sessions of a micro-cycle and the overall justification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedMicrocycle {
    /// Sessions in date order
    pub sessions: Vec<GeneratedSession>,
    /// Summary of the applied adjustments
    pub justification: String,
}

/// Scale a baseline by a percentage, rounding half away from zero
#[must_use]
pub fn adjust(baseline: u32, percent: f64) -> u32 {
    (f64::from(baseline) * (1.0 + percent / 100.0)).round().max(0.0) as u32
}

/// First date on or after `start` that falls on `weekday`
#[must_use]
pub fn next_weekday(start: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let offset = (7 + weekday.num_days_from_monday() - start.weekday().num_days_from_monday()) % 7;
    start.checked_add_days(Days::new(u64::from(offset)))
}

fn pick(pool: &[&str], day_index: usize) -> String {
    if pool.is_empty() {
        String::new()
    } else {
        pool[day_index % pool.len()].to_owned()
    }
}

fn build_session(
    day_index: usize,
    slot: &SessionPlan,
    date: NaiveDate,
    adjustment: &LoadAdjustment,
    pools: &ContentPools,
) -> GeneratedSession {
    let (duration_minutes, volume, intensity) = if slot.session_type.is_adjustable() {
        (
            adjust(slot.duration_minutes, adjustment.volume_percent),
            adjust(slot.volume, adjustment.volume_percent).min(100),
            adjust(slot.intensity, adjustment.intensity_percent).min(100),
        )
    } else {
        (slot.duration_minutes, slot.volume, slot.intensity)
    };

    let (physical_content, technical_content, tactical_content) = match slot.session_type {
        SessionType::Descanso => (String::new(), String::new(), String::new()),
        SessionType::Competicion => (COMPETITION_CONTENT.to_owned(), String::new(), String::new()),
        SessionType::Recuperacion => (RECOVERY_CONTENT.to_owned(), String::new(), String::new()),
        _ => (
            pick(pools.physical, day_index),
            pick(pools.technical, day_index),
            pick(pools.tactical, day_index),
        ),
    };

    let justification = if slot.session_type.is_adjustable() {
        format!(
            "{}: volumen {} -> {volume}, intensidad {} -> {intensity}",
            slot.session_type.label(),
            slot.volume,
            slot.intensity
        )
    } else {
        format!("{}: sin ajuste de carga", slot.session_type.label())
    };

    GeneratedSession {
        date,
        day_index,
        session_type: slot.session_type,
        duration_minutes,
        volume,
        intensity,
        physical_content,
        technical_content,
        tactical_content,
        justification,
    }
}

fn describe_adjustment(adjustment: &LoadAdjustment) -> String {
    if adjustment.is_neutral() {
        "sin ajustes de carga".to_owned()
    } else {
        format!(
            "volumen {:+.0}%, intensidad {:+.0}%",
            adjustment.volume_percent, adjustment.intensity_percent
        )
    }
}

/// Generate the sessions of a micro-cycle for a profiled athlete
///
/// Template days that fall after `end_date` are left out.
///
/// # Errors
///
/// Returns an error if `end_date` is before `start_date`
pub fn generate_sessions(
    request: &MicrocycleRequest,
    profile: &AthleteProfile,
) -> AppResult<GeneratedMicrocycle> {
    if request.end_date < request.start_date {
        return Err(AppError::invalid_input(format!(
            "Micro-cycle ends ({}) before it starts ({})",
            request.end_date, request.start_date
        )));
    }

    let pools = ContentPools::for_profile(profile.profile_type);
    let mut sessions: Vec<GeneratedSession> = request
        .microcycle_type
        .template()
        .iter()
        .enumerate()
        .filter_map(|(day_index, slot)| {
            let date = next_weekday(request.start_date, slot.weekday)?;
            (date <= request.end_date)
                .then(|| build_session(day_index, slot, date, &profile.adjustment, &pools))
        })
        .collect();
    sessions.sort_by_key(|session| session.date);

    let mut justification = format!(
        "Microciclo {} del {} al {} para perfil {}: {}.",
        request.microcycle_type.code(),
        request.start_date,
        request.end_date,
        profile.profile_type.label(),
        describe_adjustment(&profile.adjustment)
    );
    if !profile.adjustment.emphasis.is_empty() {
        justification.push_str(" Énfasis: ");
        justification.push_str(&profile.adjustment.emphasis.join(", "));
        justification.push('.');
    }
    if !request.weekly_objective.trim().is_empty() {
        justification.push_str(" Objetivo semanal: ");
        justification.push_str(request.weekly_objective.trim());
        justification.push('.');
    }

    debug!(
        microcycle = ?request.microcycle_type,
        profile = ?profile.profile_type,
        sessions = sessions.len(),
        "Micro-cycle sessions generated"
    );

    Ok(GeneratedMicrocycle {
        sessions,
        justification,
    })
}

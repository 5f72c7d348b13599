// ABOUTME: Judo Coach CLI - evaluate tests, classify profiles, and plan micro-cycles from JSON files
// ABOUTME: Reads domain records from disk, runs the intelligence crate, and prints JSON to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Judo Coach
//!
//! Usage:
//! ```bash
//! # Evaluate the rules for a new test against the previous one
//! judo-coach evaluate --current test.json --previous last.json --gender male
//!
//! # Classify the training profile from a test
//! judo-coach profile --test test.json --age 22
//!
//! # Plan a load week for that profile
//! judo-coach sessions --test test.json --type carga --start 2025-03-03 --end 2025-03-09
//!
//! # Summarize a test history (JSON array)
//! judo-coach summary --tests history.json
//!
//! # Monitor post-training logs against reference lifts
//! judo-coach post-training --logs logs.json --references refs.json
//!
//! # Replay a test history through the coach workflow
//! judo-coach replay --athlete athlete.json --tests history.json
//! ```

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use judo_coach::config::ServerConfig;
use judo_coach::input::{read_json, read_optional_json};
use judo_coach::services::CoachService;
use judo_coach::storage::InMemoryStore;
use judo_core::models::{Athlete, Gender, PhysicalTestRecord, PostTrainingRecord};
use judo_intelligence::{
    classify_athlete_profile_at, evaluate_physical_test_rules, evaluate_post_training_rules,
    generate_sessions, highest_priority, summarize_history, summarize_test, IntelligenceConfig,
    MicrocycleRequest, MicrocycleType, PhysicalTestContext, PostTrainingContext,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "judo-coach",
    about = "Judo training coach",
    long_about = "Rule-based recommendations, athlete profiling, and weekly session planning for judo athletes."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Evaluate the physical-test rules for one test
    Evaluate {
        /// Current test (JSON object)
        #[arg(long)]
        current: PathBuf,

        /// Previous test of the same athlete
        #[arg(long)]
        previous: Option<PathBuf>,

        /// Athlete record; overrides --gender
        #[arg(long)]
        athlete: Option<PathBuf>,

        /// Gender used for the `VO2max` target
        #[arg(long, value_enum, default_value = "unspecified")]
        gender: GenderArg,
    },

    /// Classify the athlete's training profile
    Profile {
        /// Latest test; omitted means no test on record
        #[arg(long)]
        test: Option<PathBuf>,

        /// Athlete age in years
        #[arg(long)]
        age: Option<u32>,
    },

    /// Generate the sessions of one micro-cycle
    Sessions {
        /// Latest test, used to classify the profile
        #[arg(long)]
        test: Option<PathBuf>,

        /// Athlete age in years
        #[arg(long)]
        age: Option<u32>,

        /// Micro-cycle type (carga, descarga, choque, recuperacion, competitivo)
        #[arg(long = "type")]
        microcycle_type: MicrocycleType,

        /// First day (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,

        /// Last day (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,

        /// Weekly objective set by the coach
        #[arg(long, default_value = "")]
        objective: String,
    },

    /// Summarize a test history
    Summary {
        /// Tests (JSON array)
        #[arg(long)]
        tests: PathBuf,

        /// Athlete age in years
        #[arg(long)]
        age: Option<u32>,
    },

    /// Evaluate the post-training monitoring rules
    PostTraining {
        /// Post-training logs (JSON array)
        #[arg(long)]
        logs: PathBuf,

        /// Reference 1RM per exercise (JSON object)
        #[arg(long)]
        references: Option<PathBuf>,
    },

    /// Replay a test history through the coach workflow
    Replay {
        /// Athlete record
        #[arg(long)]
        athlete: PathBuf,

        /// Tests (JSON array), replayed oldest first
        #[arg(long)]
        tests: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum GenderArg {
    Male,
    Female,
    Unspecified,
}

impl From<GenderArg> for Gender {
    fn from(value: GenderArg) -> Self {
        match value {
            GenderArg::Male => Self::Male,
            GenderArg::Female => Self::Female,
            GenderArg::Unspecified => Self::Unspecified,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = ServerConfig::from_env()?;

    let logging = if cli.verbose {
        config.logging.clone().with_level("debug")
    } else {
        config.logging.clone()
    };
    logging.init()?;

    let output = run(cli.command, &config).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

async fn run(command: Command, config: &ServerConfig) -> Result<Value> {
    let intelligence = &config.intelligence;
    let today = Utc::now().date_naive();

    match command {
        Command::Evaluate {
            current,
            previous,
            athlete,
            gender,
        } => {
            let athlete = match read_optional_json::<Athlete>(athlete.as_deref()).await? {
                Some(athlete) => athlete,
                None => Athlete::new("Atleta", gender.into()),
            };
            let current: PhysicalTestRecord = read_json(&current).await?;
            let previous = read_optional_json(previous.as_deref()).await?;

            let context = PhysicalTestContext::new(&athlete, current, previous, intelligence);
            let actions = evaluate_physical_test_rules(&context, intelligence);
            Ok(json!({
                "highest_priority": highest_priority(&actions),
                "actions": actions,
            }))
        }
        Command::Profile { test, age } => {
            let test: Option<PhysicalTestRecord> = read_optional_json(test.as_deref()).await?;
            to_json(&classify_athlete_profile_at(
                test.as_ref(),
                age,
                today,
                intelligence,
            ))
        }
        Command::Sessions {
            test,
            age,
            microcycle_type,
            start,
            end,
            objective,
        } => {
            let test: Option<PhysicalTestRecord> = read_optional_json(test.as_deref()).await?;
            let profile = classify_athlete_profile_at(test.as_ref(), age, today, intelligence);
            let request = MicrocycleRequest {
                microcycle_type,
                start_date: start,
                end_date: end,
                weekly_objective: objective,
            };
            let microcycle = generate_sessions(&request, &profile)?;
            Ok(json!({ "profile": profile, "microcycle": microcycle }))
        }
        Command::Summary { tests, age } => {
            let tests: Vec<PhysicalTestRecord> = read_json(&tests).await?;
            let age = age.unwrap_or_else(|| config.default_age());
            let summaries: Vec<_> = tests
                .iter()
                .map(|test| summarize_test(test, age, &intelligence.vo2max))
                .collect();
            Ok(json!({
                "tests": summaries,
                "history": summarize_history(&tests, intelligence),
            }))
        }
        Command::PostTraining { logs, references } => {
            let logs: Vec<PostTrainingRecord> = read_json(&logs).await?;
            for log in &logs {
                log.validate()?;
            }
            let references: HashMap<String, f64> = read_optional_json(references.as_deref())
                .await?
                .unwrap_or_default();

            let athlete = Athlete::new("Atleta", Gender::Unspecified);
            let context = PostTrainingContext::new(&athlete, logs, references);
            let actions = evaluate_post_training_rules(&context, intelligence);
            Ok(json!({
                "highest_priority": highest_priority(&actions),
                "actions": actions,
            }))
        }
        Command::Replay { athlete, tests } => replay(&athlete, &tests, intelligence.clone()).await,
    }
}

async fn replay(athlete: &Path, tests: &Path, config: IntelligenceConfig) -> Result<Value> {
    let athlete: Athlete = read_json(athlete).await?;
    let mut tests: Vec<PhysicalTestRecord> = read_json(tests).await?;
    tests.sort_by_key(|test| test.test_date);

    let store = Arc::new(InMemoryStore::new());
    let coach = CoachService::new(&store, config);

    let mut evaluations = Vec::with_capacity(tests.len());
    for test in tests {
        let evaluation = coach
            .record_physical_test(&athlete, test)
            .await
            .context("Replaying test history")?;
        evaluations.push(evaluation);
    }
    info!(tests = evaluations.len(), "Test history replayed");

    Ok(json!({
        "evaluations": evaluations,
        "history": coach.test_history(&athlete).await?,
    }))
}

fn to_json<T: Serialize>(value: &T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

// ABOUTME: Main library entry point for the judo training coach
// ABOUTME: Wires configuration, logging, persistence seams, and workflows around the rule engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Judo Coach

#![deny(unsafe_code)]

//! # Judo Coach
//!
//! Rule-based training guidance for judo athletes. Physical tests and
//! post-training logs go in; prioritized recommendations, a training profile,
//! and weekly session plans come out.
//!
//! ## Architecture
//!
//! - **`judo_core`**: domain models, errors, constants
//! - **`judo_intelligence`**: calculators, rules, profiling, session planning
//! - **services**: workflows that fetch history and store results through
//!   collaborator traits
//! - **storage**: an in-memory implementation of those traits
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use judo_coach::services::CoachService;
//! use judo_coach::storage::InMemoryStore;
//! use judo_core::models::{Athlete, Gender, PhysicalTestRecord};
//! use judo_intelligence::IntelligenceConfig;
//! use std::sync::Arc;
//!
//! # async fn example() -> judo_core::errors::AppResult<()> {
//! let store = Arc::new(InMemoryStore::new());
//! let coach = CoachService::new(&store, IntelligenceConfig::default());
//! let athlete = Athlete::new("Ana Ruiz", Gender::Female);
//!
//! let test = PhysicalTestRecord {
//!     shuttle_vo2max: Some(40.0),
//!     ..PhysicalTestRecord::default()
//! };
//! let evaluation = coach.record_physical_test(&athlete, test).await?;
//! println!("{} recommendations", evaluation.actions.len());
//! # Ok(())
//! # }
//! ```

/// Environment-driven configuration
pub mod config;
/// JSON input loading
pub mod input;
/// Structured logging setup
pub mod logging;
/// Collaborator traits and workflows
pub mod services;
/// Collaborator implementations
pub mod storage;

pub use judo_core::{constants, errors, models};

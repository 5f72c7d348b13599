// ABOUTME: Environment-driven server configuration for the coach service and CLI
// ABOUTME: Bundles the runtime environment, logging setup, and the intelligence threshold tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Judo Coach

//! Environment-only configuration: there is no config file.
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `JUDO_ENVIRONMENT` | `development`, `testing` or `production` | `development` |
//! | `JUDO_DEFAULT_AGE` | age used by the Léger formula when the athlete age is unknown | `18` |
//! | `JUDO_*` thresholds | see [`IntelligenceConfig`] | compiled-in tables |

use crate::logging::LoggingConfig;
use anyhow::{Context, Result};
use judo_intelligence::IntelligenceConfig;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::info;

/// Runtime environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Complete configuration for one process
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    /// Runtime environment
    pub environment: Environment,
    /// Logging setup
    pub logging: LoggingConfig,
    /// Rule, profile, and planning thresholds
    pub intelligence: IntelligenceConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a `JUDO_*` override cannot be parsed or leaves the
    /// threshold tables inconsistent
    pub fn from_env() -> Result<Self> {
        let environment = env::var("JUDO_ENVIRONMENT")
            .map_or_else(|_| Environment::default(), |v| Environment::from_str_or_default(&v));
        let intelligence =
            IntelligenceConfig::load().context("Invalid intelligence configuration")?;

        let config = Self {
            environment,
            logging: LoggingConfig::from_env(),
            intelligence,
        };
        info!(
            environment = ?config.environment,
            default_age = config.default_age(),
            "Configuration loaded from environment"
        );
        Ok(config)
    }

    /// Age assumed for athletes without a birth date
    #[must_use]
    pub const fn default_age(&self) -> u32 {
        self.intelligence.profile.assumed_age
    }
}

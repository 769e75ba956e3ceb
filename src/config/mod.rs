//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the
//! `TICKET_TRIAGE` prefix and nested sections use double underscores as
//! separators; every knob has a canonical default, so an empty
//! environment yields the standard scoring variant.
//!
//! # Example
//!
//! ```no_run
//! use ticket_triage::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! let scoring = config.scoring.into_policy().expect("Invalid scoring config");
//! ```

mod error;
mod output;
mod scoring;

pub use error::{ConfigError, ConfigValidationError};
pub use output::OutputSettings;
pub use scoring::{PlanScoreSettings, PrioritySettings, ScoringSettings};

use serde::Deserialize;

use crate::domain::catalog::{CatalogError, QuestionCatalog};

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment
/// variables, e.g. `TICKET_TRIAGE__PRIORITY__MEDIUM_THRESHOLD=60` or
/// `TICKET_TRIAGE__SCORING__MULTIPLIER_QUESTION=urgency`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Scoring variant configuration
    #[serde(default)]
    pub scoring: ScoringSettings,

    /// Priority classification configuration
    #[serde(default)]
    pub priority: PrioritySettings,

    /// Output formatting configuration
    #[serde(default)]
    pub output: OutputSettings,

    /// Optional path to a variant question catalog (YAML)
    #[serde(default)]
    pub catalog_path: Option<String>,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` if present (for development), then reads environment
    /// variables with the `TICKET_TRIAGE` prefix, `__` separating nested
    /// values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TICKET_TRIAGE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigValidationError` if any value is out of range or
    /// references an unknown question.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.scoring.clone().into_policy()?;
        self.priority.validate()?;
        Ok(())
    }

    /// Resolves the question catalog: the configured variant file, or the
    /// built-in standard catalog.
    pub fn load_catalog(&self) -> Result<QuestionCatalog, CatalogError> {
        match &self.catalog_path {
            Some(path) => QuestionCatalog::from_yaml_file(path),
            None => Ok(QuestionCatalog::standard().clone()),
        }
    }
}

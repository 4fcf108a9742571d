//! Configuration module for leadcalc.
//!
//! This module provides structured configuration loading from environment variables,
//! organized by concern: Formulas and Presentation.

mod formula_config;
mod ui_config;

pub use formula_config::FormulaEnvConfig;
pub use ui_config::UiEnvConfig;

use crate::domain::formulas::FormulaSet;
use anyhow::{Context, Result};

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    // Formulas (from FormulaEnvConfig)
    pub formulas: FormulaSet,

    // Presentation (from UiEnvConfig)
    pub currency_symbol: String,
    pub live_update: bool,
    pub prefill: bool,
}

impl Default for Config {
    fn default() -> Self {
        let ui = UiEnvConfig::default();
        Self {
            formulas: FormulaSet::default(),
            currency_symbol: ui.currency_symbol,
            live_update: ui.live_update,
            prefill: ui.prefill,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self> {
        let formulas = FormulaEnvConfig::from_env().context("Failed to load formula config")?;
        let ui = UiEnvConfig::from_env();

        Ok(Self {
            formulas: formulas.formula_set(),
            currency_symbol: ui.currency_symbol,
            live_update: ui.live_update,
            prefill: ui.prefill,
        })
    }
}

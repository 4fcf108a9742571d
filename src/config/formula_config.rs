//! Formula selection parsed from environment variables.
//!
//! Each variant family has its own variable; unset variables keep the
//! calculator page's formulas.

use crate::domain::formulas::{ConversionModel, DecayModel, FormulaSet, RiskModel};
use anyhow::{Context, Result};
use std::str::FromStr;

/// Formula environment configuration
#[derive(Debug, Clone, Default)]
pub struct FormulaEnvConfig {
    pub conversion: ConversionModel,
    pub decay: DecayModel,
    pub risk: RiskModel,
}

impl FormulaEnvConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            conversion: Self::parse_model(&lookup, "LEADCALC_CONVERSION_MODEL")?,
            decay: Self::parse_model(&lookup, "LEADCALC_DECAY_MODEL")?,
            risk: Self::parse_model(&lookup, "LEADCALC_RISK_MODEL")?,
        })
    }

    pub fn formula_set(&self) -> FormulaSet {
        FormulaSet {
            conversion: self.conversion,
            decay: self.decay,
            risk: self.risk,
        }
    }

    fn parse_model<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<T>
    where
        T: FromStr<Err = anyhow::Error> + Default,
    {
        match lookup(key) {
            Some(raw) if !raw.trim().is_empty() => {
                T::from_str(&raw).with_context(|| format!("Failed to parse {}", key))
            }
            _ => Ok(T::default()),
        }
    }
}

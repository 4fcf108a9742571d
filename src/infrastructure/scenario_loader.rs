//! Loading of input sets from scenario files.
//!
//! A scenario is a flat TOML or JSON object keyed by the camelCase field
//! names (`totalLeads`, `customerValue`, ...). Keys left out stay unset.

use crate::domain::fields::LeadField;
use crate::domain::inputs::InputSet;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioFormat {
    Toml,
    Json,
}

impl ScenarioFormat {
    /// `.json` files are JSON; everything else is read as TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ScenarioFormat::Json,
            _ => ScenarioFormat::Toml,
        }
    }
}

pub fn load_scenario(path: &Path) -> Result<InputSet> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenario file {:?}", path))?;
    let inputs = parse_scenario(&content, ScenarioFormat::from_path(path))
        .with_context(|| format!("Failed to parse scenario file {:?}", path))?;

    let keys: Vec<&str> = LeadField::ALL
        .into_iter()
        .filter(|f| inputs.is_set(*f))
        .map(LeadField::key)
        .collect();
    info!("Loaded scenario from {:?} ({})", path, keys.join(", "));
    Ok(inputs)
}

/// Parses scenario text and clamps every value into its field's bounds.
pub fn parse_scenario(content: &str, format: ScenarioFormat) -> Result<InputSet> {
    let inputs: InputSet = match format {
        ScenarioFormat::Toml => toml::from_str(content).context("Invalid TOML scenario")?,
        ScenarioFormat::Json => serde_json::from_str(content).context("Invalid JSON scenario")?,
    };
    Ok(inputs.clamped())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toml_scenario() {
        let inputs = parse_scenario(
            "totalLeads = 250\ncustomerValue = 1500.5\ncurrentResponseRate = 120\n",
            ScenarioFormat::Toml,
        )
        .unwrap();

        assert_eq!(inputs.total_leads, Some(250.0));
        assert_eq!(inputs.customer_value, Some(1500.5));
        assert_eq!(inputs.current_response_rate, Some(100.0));
        assert_eq!(inputs.ai_response_rate, None);
    }

    #[test]
    fn test_parse_json_scenario() {
        let inputs = parse_scenario(r#"{"aiResponseRate": 95}"#, ScenarioFormat::Json).unwrap();
        assert_eq!(inputs.ai_response_rate, Some(95.0));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = parse_scenario("totalLead = 10\n", ScenarioFormat::Toml).unwrap_err();
        assert!(format!("{:#}", err).contains("totalLead"));
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ScenarioFormat::from_path(Path::new("a.JSON")), ScenarioFormat::Json);
        assert_eq!(ScenarioFormat::from_path(Path::new("a.toml")), ScenarioFormat::Toml);
        assert_eq!(ScenarioFormat::from_path(Path::new("scenario")), ScenarioFormat::Toml);
    }
}

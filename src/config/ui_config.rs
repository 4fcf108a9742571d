//! Presentation configuration parsed from environment variables.

/// Presentation environment configuration
#[derive(Debug, Clone)]
pub struct UiEnvConfig {
    pub currency_symbol: String,
    pub live_update: bool,
    pub prefill: bool,
}

impl Default for UiEnvConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            live_update: false,
            prefill: true,
        }
    }
}

impl UiEnvConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            currency_symbol: lookup("LEADCALC_CURRENCY_SYMBOL")
                .unwrap_or(defaults.currency_symbol),
            live_update: lookup("LEADCALC_LIVE_UPDATE")
                .and_then(|v| v.trim().parse::<bool>().ok())
                .unwrap_or(defaults.live_update),
            prefill: lookup("LEADCALC_PREFILL")
                .and_then(|v| v.trim().parse::<bool>().ok())
                .unwrap_or(defaults.prefill),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_config_defaults() {
        let config = UiEnvConfig::from_lookup(|_| None);
        assert_eq!(config.currency_symbol, "$");
        assert!(!config.live_update);
        assert!(config.prefill);
    }

    #[test]
    fn test_invalid_booleans_fall_back() {
        let config = UiEnvConfig::from_lookup(|key| match key {
            "LEADCALC_LIVE_UPDATE" => Some("yes please".to_string()),
            "LEADCALC_PREFILL" => Some("false".to_string()),
            "LEADCALC_CURRENCY_SYMBOL" => Some("€".to_string()),
            _ => None,
        });
        assert!(!config.live_update);
        assert!(!config.prefill);
        assert_eq!(config.currency_symbol, "€");
    }
}

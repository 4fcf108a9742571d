use serde::{Deserialize, Serialize};
use std::fmt;

/// Every business metric the estimator accepts as input.
///
/// Declaration order is the order fields are shown in the form and the
/// order missing fields are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LeadField {
    TotalLeads,
    CustomerValue,
    CurrentResponseRate,
    CurrentClosingRate,
    AiResponseRate,
    AverageTimeToFirstTouch,
    ExpectedDecayRate,
}

/// Static description of an input field: how it is labelled and bounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: Option<f64>,
    pub is_percentage: bool,
}

impl FieldSpec {
    /// Effective upper bound. Percentage fields are always capped at 100.
    pub fn upper_bound(&self) -> Option<f64> {
        if self.is_percentage {
            Some(100.0)
        } else {
            self.max
        }
    }

    /// Clamps a value into the field's bounds.
    pub fn clamp(&self, value: f64) -> f64 {
        let floored = value.max(self.min);
        match self.upper_bound() {
            Some(max) => floored.min(max),
            None => floored,
        }
    }

    /// Parses raw text the way the number widget does.
    ///
    /// Empty text means "unset". Anything that is not a finite number is
    /// also treated as unset.
    pub fn parse_raw(&self, raw: &str) -> Option<f64> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        trimmed
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(|v| self.clamp(v))
    }
}

impl LeadField {
    pub const ALL: [LeadField; 7] = [
        LeadField::TotalLeads,
        LeadField::CustomerValue,
        LeadField::CurrentResponseRate,
        LeadField::CurrentClosingRate,
        LeadField::AiResponseRate,
        LeadField::AverageTimeToFirstTouch,
        LeadField::ExpectedDecayRate,
    ];

    pub fn spec(self) -> FieldSpec {
        match self {
            LeadField::TotalLeads => FieldSpec {
                key: "totalLeads",
                label: "Total Leads per Month",
                min: 0.0,
                max: Some(100_000.0),
                is_percentage: false,
            },
            LeadField::CustomerValue => FieldSpec {
                key: "customerValue",
                label: "Average Customer Value ($)",
                min: 0.0,
                max: None,
                is_percentage: false,
            },
            LeadField::CurrentResponseRate => FieldSpec {
                key: "currentResponseRate",
                label: "Current Lead Response Rate (%)",
                min: 0.0,
                max: Some(100.0),
                is_percentage: true,
            },
            LeadField::CurrentClosingRate => FieldSpec {
                key: "currentClosingRate",
                label: "Current Closing Rate (%)",
                min: 0.0,
                max: Some(100.0),
                is_percentage: true,
            },
            LeadField::AiResponseRate => FieldSpec {
                key: "aiResponseRate",
                label: "AI's Response Rate (%)",
                min: 0.0,
                max: Some(100.0),
                is_percentage: true,
            },
            LeadField::AverageTimeToFirstTouch => FieldSpec {
                key: "averageTimeToFirstTouch",
                label: "Average Time to First Touch (hours)",
                min: 0.0,
                max: None,
                is_percentage: false,
            },
            LeadField::ExpectedDecayRate => FieldSpec {
                key: "expectedDecayRate",
                label: "Expected Decay Rate (% per hour)",
                min: 0.0,
                max: Some(100.0),
                is_percentage: true,
            },
        }
    }

    pub fn label(self) -> &'static str {
        self.spec().label
    }

    pub fn key(self) -> &'static str {
        self.spec().key
    }
}

impl fmt::Display for LeadField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_field_clamps_to_hundred() {
        let spec = LeadField::CurrentResponseRate.spec();
        assert_eq!(spec.parse_raw("150"), Some(100.0));
        assert_eq!(spec.parse_raw("-3"), Some(0.0));
        assert_eq!(spec.parse_raw("42.5"), Some(42.5));
    }

    #[test]
    fn test_empty_or_garbage_text_is_unset() {
        let spec = LeadField::TotalLeads.spec();
        assert_eq!(spec.parse_raw(""), None);
        assert_eq!(spec.parse_raw("   "), None);
        assert_eq!(spec.parse_raw("abc"), None);
        assert_eq!(spec.parse_raw("inf"), None);
        assert_eq!(spec.parse_raw("NaN"), None);
    }

    #[test]
    fn test_bounded_non_percentage_field() {
        let leads = LeadField::TotalLeads.spec();
        assert_eq!(leads.parse_raw("250000"), Some(100_000.0));

        let value = LeadField::CustomerValue.spec();
        assert_eq!(value.parse_raw("1e7"), Some(10_000_000.0));
        assert_eq!(value.parse_raw("-10"), Some(0.0));
    }

    #[test]
    fn test_keys_match_serialized_names() {
        for field in LeadField::ALL {
            let json = serde_json::to_value(field).unwrap();
            assert_eq!(json, field.key());
        }
    }

    #[test]
    fn test_catalogue_order_matches_declaration() {
        let mut sorted = LeadField::ALL;
        sorted.sort();
        assert_eq!(sorted, LeadField::ALL);
    }
}

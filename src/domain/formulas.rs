use crate::domain::fields::LeadField;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the improved closing rate is derived from response rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionModel {
    /// `closing + (ai - current) * 0.1`, capped at 100.
    #[default]
    ResponseLift,
    /// `closing + current * ai / 100`, uncapped.
    ResponseProduct,
}

/// Where the per-hour decay rate comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecayModel {
    /// `(100 - current response rate) / hours to first touch`.
    #[default]
    ResponseGap,
    /// The user-supplied expected decay rate.
    Expected,
}

/// How revenue at risk is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskModel {
    /// Improved revenue minus current revenue.
    #[default]
    ImprovementGap,
    /// Revenue lost between the current closing rate and the decay-adjusted rate.
    ResponseDecay,
}

/// The formula variants in force for one estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormulaSet {
    pub conversion: ConversionModel,
    pub decay: DecayModel,
    pub risk: RiskModel,
}

const CORE_FIELDS: [LeadField; 6] = [
    LeadField::TotalLeads,
    LeadField::CustomerValue,
    LeadField::CurrentResponseRate,
    LeadField::CurrentClosingRate,
    LeadField::AiResponseRate,
    LeadField::AverageTimeToFirstTouch,
];

impl FormulaSet {
    /// Fields that must be set before these formulas can run, in catalogue order.
    pub fn required_fields(&self) -> Vec<LeadField> {
        let mut fields = CORE_FIELDS.to_vec();
        if self.decay == DecayModel::Expected {
            fields.push(LeadField::ExpectedDecayRate);
        }
        fields
    }
}

impl FromStr for ConversionModel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "response_lift" | "lift" => Ok(ConversionModel::ResponseLift),
            "response_product" | "product" => Ok(ConversionModel::ResponseProduct),
            _ => anyhow::bail!(
                "Invalid conversion model: {}. Must be 'response_lift' or 'response_product'",
                s
            ),
        }
    }
}

impl FromStr for DecayModel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "response_gap" | "derived" => Ok(DecayModel::ResponseGap),
            "expected" => Ok(DecayModel::Expected),
            _ => anyhow::bail!(
                "Invalid decay model: {}. Must be 'response_gap' or 'expected'",
                s
            ),
        }
    }
}

impl FromStr for RiskModel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "improvement_gap" | "gap" => Ok(RiskModel::ImprovementGap),
            "response_decay" | "decay" => Ok(RiskModel::ResponseDecay),
            _ => anyhow::bail!(
                "Invalid risk model: {}. Must be 'improvement_gap' or 'response_decay'",
                s
            ),
        }
    }
}

impl fmt::Display for ConversionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionModel::ResponseLift => write!(f, "response_lift"),
            ConversionModel::ResponseProduct => write!(f, "response_product"),
        }
    }
}

impl fmt::Display for DecayModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecayModel::ResponseGap => write!(f, "response_gap"),
            DecayModel::Expected => write!(f, "expected"),
        }
    }
}

impl fmt::Display for RiskModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskModel::ImprovementGap => write!(f, "improvement_gap"),
            RiskModel::ResponseDecay => write!(f, "response_decay"),
        }
    }
}

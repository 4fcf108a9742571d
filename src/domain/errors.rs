use crate::domain::fields::LeadField;
use thiserror::Error;

/// Errors raised before any metric is computed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculatorError {
    #[error("Please fill in all required fields: {}", join_labels(.fields))]
    MissingInputs { fields: Vec<LeadField> },
}

impl CalculatorError {
    /// Fields the user still has to fill in.
    pub fn missing_fields(&self) -> &[LeadField] {
        match self {
            CalculatorError::MissingInputs { fields } => fields,
        }
    }
}

fn join_labels(fields: &[LeadField]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_inputs_formatting() {
        let error = CalculatorError::MissingInputs {
            fields: vec![LeadField::TotalLeads, LeadField::AiResponseRate],
        };

        assert_eq!(
            error.to_string(),
            "Please fill in all required fields: Total Leads per Month, AI's Response Rate (%)"
        );
        assert_eq!(error.missing_fields().len(), 2);
    }
}

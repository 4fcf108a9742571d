use crate::domain::errors::CalculatorError;
use crate::domain::fields::LeadField;
use crate::domain::formulas::FormulaSet;
use crate::domain::inputs::InputSet;
use serde::Serialize;

/// A complete input set. Only [`validate`] builds one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedInputs {
    pub total_leads: f64,
    pub customer_value: f64,
    pub current_response_rate: f64,
    pub current_closing_rate: f64,
    pub ai_response_rate: f64,
    pub average_time_to_first_touch: f64,
    pub expected_decay_rate: Option<f64>,
}

/// Returns the required fields that are still unset, in catalogue order.
pub fn missing_fields(inputs: &InputSet, required: &[LeadField]) -> Vec<LeadField> {
    LeadField::ALL
        .into_iter()
        .filter(|field| required.contains(field) && !inputs.is_set(*field))
        .collect()
}

/// Checks that every field the formulas need is present.
///
/// All missing fields are reported together; nothing is computed on failure.
pub fn validate(inputs: &InputSet, formulas: &FormulaSet) -> Result<ValidatedInputs, CalculatorError> {
    let missing = missing_fields(inputs, &formulas.required_fields());
    if !missing.is_empty() {
        return Err(CalculatorError::MissingInputs { fields: missing });
    }

    let required = |field: LeadField| {
        inputs
            .get(field)
            .ok_or_else(|| CalculatorError::MissingInputs {
                fields: vec![field],
            })
    };

    Ok(ValidatedInputs {
        total_leads: required(LeadField::TotalLeads)?,
        customer_value: required(LeadField::CustomerValue)?,
        current_response_rate: required(LeadField::CurrentResponseRate)?,
        current_closing_rate: required(LeadField::CurrentClosingRate)?,
        ai_response_rate: required(LeadField::AiResponseRate)?,
        average_time_to_first_touch: required(LeadField::AverageTimeToFirstTouch)?,
        expected_decay_rate: inputs.expected_decay_rate,
    })
}

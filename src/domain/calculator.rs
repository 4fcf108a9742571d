use crate::domain::formulas::{ConversionModel, DecayModel, FormulaSet, RiskModel};
use crate::domain::validation::ValidatedInputs;
use serde::Serialize;

/// Share of the response-rate gain that turns into extra closings.
pub const RESPONSE_LIFT_FACTOR: f64 = 0.1;

/// Derived lead-conversion metrics. Rates are percentages, revenue is per month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadMetrics {
    pub improved_conversion_rate: f64,
    pub current_revenue: f64,
    pub improved_revenue: f64,
    pub additional_revenue: f64,
    pub revenue_at_risk: f64,
    /// Percentage points of conversion lost per hour of delay.
    pub decay_rate: f64,
    pub adjusted_conversion_rate: f64,
    pub potential_conversions_lost: f64,
}

impl LeadMetrics {
    /// Computes every metric for one validated input set.
    ///
    /// Pure: the same inputs and formulas always give the same metrics.
    /// A zero time to first touch is not guarded and yields IEEE infinities.
    pub fn calculate(inputs: &ValidatedInputs, formulas: &FormulaSet) -> Self {
        let closing = inputs.current_closing_rate;

        let improved_conversion_rate = improved_conversion_rate(
            formulas.conversion,
            closing,
            inputs.current_response_rate,
            inputs.ai_response_rate,
        );

        let decay_rate = match (formulas.decay, inputs.expected_decay_rate) {
            (DecayModel::Expected, Some(expected)) => expected,
            _ => decay_rate(
                inputs.current_response_rate,
                inputs.average_time_to_first_touch,
            ),
        };

        let adjusted_conversion_rate =
            adjusted_conversion_rate(closing, inputs.average_time_to_first_touch, decay_rate);

        let current_revenue = revenue_at_rate(inputs.total_leads, closing, inputs.customer_value);
        let improved_revenue = revenue_at_rate(
            inputs.total_leads,
            improved_conversion_rate,
            inputs.customer_value,
        );
        let additional_revenue = additional_revenue(
            inputs.total_leads,
            closing,
            improved_conversion_rate,
            inputs.customer_value,
        );

        let revenue_at_risk = match formulas.risk {
            RiskModel::ImprovementGap => improved_revenue - current_revenue,
            RiskModel::ResponseDecay => revenue_at_risk(
                inputs.total_leads,
                closing,
                adjusted_conversion_rate,
                inputs.customer_value,
            ),
        };

        let potential_conversions_lost =
            inputs.total_leads * (closing - adjusted_conversion_rate) / 100.0;

        Self {
            improved_conversion_rate,
            current_revenue,
            improved_revenue,
            additional_revenue,
            revenue_at_risk,
            decay_rate,
            adjusted_conversion_rate,
            potential_conversions_lost,
        }
    }
}

/// Closing rate expected once responses are handled at the AI response rate.
pub fn improved_conversion_rate(
    model: ConversionModel,
    closing_rate: f64,
    current_response_rate: f64,
    ai_response_rate: f64,
) -> f64 {
    match model {
        ConversionModel::ResponseLift => {
            (closing_rate + (ai_response_rate - current_response_rate) * RESPONSE_LIFT_FACTOR)
                .min(100.0)
        }
        ConversionModel::ResponseProduct => {
            closing_rate + current_response_rate * ai_response_rate / 100.0
        }
    }
}

pub fn decay_rate(current_response_rate: f64, hours_to_first_touch: f64) -> f64 {
    (100.0 - current_response_rate) / hours_to_first_touch
}

/// Closing rate after `hours` of decay, floored at zero.
pub fn adjusted_conversion_rate(closing_rate: f64, hours: f64, decay_rate: f64) -> f64 {
    (closing_rate - hours * decay_rate).max(0.0)
}

pub fn revenue_at_rate(total_leads: f64, rate: f64, customer_value: f64) -> f64 {
    total_leads * (rate / 100.0) * customer_value
}

pub fn additional_revenue(
    total_leads: f64,
    closing_rate: f64,
    improved_rate: f64,
    customer_value: f64,
) -> f64 {
    total_leads * ((improved_rate - closing_rate) / 100.0) * customer_value
}

/// Revenue lost when the closing rate falls to `adjusted_rate`.
pub fn revenue_at_risk(
    total_leads: f64,
    closing_rate: f64,
    adjusted_rate: f64,
    customer_value: f64,
) -> f64 {
    total_leads * (closing_rate / 100.0 - adjusted_rate / 100.0) * customer_value
}

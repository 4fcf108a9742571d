use crate::application::report::Estimate;
use crate::domain::calculator::LeadMetrics;
use crate::domain::errors::CalculatorError;
use crate::domain::formulas::FormulaSet;
use crate::domain::inputs::InputSet;
use crate::domain::validation::validate;
use tracing::{debug, info};

/// Runs one submit: validate the form, then compute every metric.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeadEstimator {
    formulas: FormulaSet,
}

impl LeadEstimator {
    pub fn new(formulas: FormulaSet) -> Self {
        Self { formulas }
    }

    pub fn formulas(&self) -> FormulaSet {
        self.formulas
    }

    pub fn set_formulas(&mut self, formulas: FormulaSet) {
        self.formulas = formulas;
    }

    pub fn estimate(&self, inputs: &InputSet) -> Result<Estimate, CalculatorError> {
        let validated = validate(inputs, &self.formulas).inspect_err(|e| {
            debug!("Estimate aborted: {}", e);
        })?;

        let metrics = LeadMetrics::calculate(&validated, &self.formulas);

        debug!(
            total_leads = validated.total_leads,
            customer_value = validated.customer_value,
            current_response_rate = validated.current_response_rate,
            current_closing_rate = validated.current_closing_rate,
            ai_response_rate = validated.ai_response_rate,
            average_time_to_first_touch = validated.average_time_to_first_touch,
            improved_conversion_rate = metrics.improved_conversion_rate,
            current_revenue = metrics.current_revenue,
            improved_revenue = metrics.improved_revenue,
            revenue_at_risk = metrics.revenue_at_risk,
            decay_rate = metrics.decay_rate,
            "Calculated results"
        );
        info!(
            "Estimate ready: conversion {:.1}% -> {:.1}% ({} / {} / {})",
            validated.current_closing_rate,
            metrics.improved_conversion_rate,
            self.formulas.conversion,
            self.formulas.decay,
            self.formulas.risk
        );

        Ok(Estimate {
            formulas: self.formulas,
            inputs: validated,
            metrics,
        })
    }
}

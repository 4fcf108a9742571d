use crate::domain::calculator::LeadMetrics;
use crate::domain::formatting::{format_count, format_currency, format_percent, format_rate_per_hour};
use crate::domain::formulas::FormulaSet;
use crate::domain::validation::ValidatedInputs;
use serde::Serialize;
use std::fmt::Write as _;

/// Result of a successful submit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Estimate {
    pub formulas: FormulaSet,
    pub inputs: ValidatedInputs,
    pub metrics: LeadMetrics,
}

/// Which way a card's number should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardTone {
    Neutral,
    Gain,
    Loss,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultCard {
    pub title: &'static str,
    pub value: String,
    pub tone: CardTone,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBar {
    pub label: &'static str,
    pub value: f64,
}

/// Serialized form of an estimate, as printed by `estimate --format json`.
#[derive(Debug, Serialize)]
pub struct EstimateReport<'a> {
    pub formulas: &'a FormulaSet,
    pub inputs: &'a ValidatedInputs,
    pub metrics: &'a LeadMetrics,
    pub cards: Vec<ResultCard>,
}

impl Estimate {
    pub fn result_cards(&self, currency_symbol: &str) -> Vec<ResultCard> {
        let m = &self.metrics;
        vec![
            ResultCard {
                title: "Improved Conversion Rate",
                value: format_percent(m.improved_conversion_rate),
                tone: CardTone::Gain,
            },
            ResultCard {
                title: "Additional Revenue",
                value: format_currency(m.additional_revenue, currency_symbol),
                tone: CardTone::Gain,
            },
            ResultCard {
                title: "Revenue at Risk",
                value: format_currency(m.revenue_at_risk, currency_symbol),
                tone: CardTone::Loss,
            },
            ResultCard {
                title: "Lead Decay Rate",
                value: format_rate_per_hour(m.decay_rate),
                tone: CardTone::Neutral,
            },
            ResultCard {
                title: "Potential Conversions Lost",
                value: format_count(m.potential_conversions_lost),
                tone: CardTone::Loss,
            },
        ]
    }

    pub fn chart_bars(&self) -> Vec<ChartBar> {
        vec![
            ChartBar {
                label: "Current Revenue",
                value: self.metrics.current_revenue,
            },
            ChartBar {
                label: "Improved Revenue",
                value: self.metrics.improved_revenue,
            },
            ChartBar {
                label: "Revenue at Risk",
                value: self.metrics.revenue_at_risk,
            },
        ]
    }

    pub fn report(&self, currency_symbol: &str) -> EstimateReport<'_> {
        EstimateReport {
            formulas: &self.formulas,
            inputs: &self.inputs,
            metrics: &self.metrics,
            cards: self.result_cards(currency_symbol),
        }
    }

    /// Plain-text rendering of the result cards.
    pub fn render_text(&self, currency_symbol: &str) -> String {
        let cards = self.result_cards(currency_symbol);
        let width = cards.iter().map(|c| c.title.len()).max().unwrap_or(0);

        let mut out = String::new();
        for card in &cards {
            let _ = writeln!(out, "{:<width$}  {}", card.title, card.value, width = width);
        }
        let _ = writeln!(
            out,
            "\nFormulas: conversion={} decay={} risk={}",
            self.formulas.conversion, self.formulas.decay, self.formulas.risk
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::estimator::LeadEstimator;
    use crate::domain::inputs::InputSet;

    fn sample_estimate() -> Estimate {
        LeadEstimator::default()
            .estimate(&InputSet::sample())
            .unwrap()
    }

    #[test]
    fn test_result_cards_for_sample() {
        let cards = sample_estimate().result_cards("$");
        let values: Vec<_> = cards.iter().map(|c| (c.title, c.value.as_str())).collect();

        assert_eq!(
            values,
            vec![
                ("Improved Conversion Rate", "24.0%"),
                ("Additional Revenue", "$4,000"),
                ("Revenue at Risk", "$4,000"),
                ("Lead Decay Rate", "12.5% per hour"),
                ("Potential Conversions Lost", "20.0"),
            ]
        );
    }

    #[test]
    fn test_chart_bars_order() {
        let bars = sample_estimate().chart_bars();
        let labels: Vec<_> = bars.iter().map(|b| b.label).collect();
        assert_eq!(labels, ["Current Revenue", "Improved Revenue", "Revenue at Risk"]);
        assert!((bars[0].value - 20_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_render_text_aligns_titles() {
        let text = sample_estimate().render_text("$");
        assert!(text.contains("Improved Conversion Rate    24.0%"));
        assert!(text.contains("conversion=response_lift"));
    }

    #[test]
    fn test_json_report_shape() {
        let estimate = sample_estimate();
        let json = serde_json::to_value(estimate.report("$")).unwrap();

        assert_eq!(json["formulas"]["conversion"], "response_lift");
        assert_eq!(json["inputs"]["totalLeads"], 100.0);
        assert_eq!(json["cards"].as_array().map(|c| c.len()), Some(5));
    }
}

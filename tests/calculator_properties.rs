use leadcalc::domain::calculator::{
    LeadMetrics, additional_revenue, improved_conversion_rate, revenue_at_risk,
};
use leadcalc::domain::fields::LeadField;
use leadcalc::domain::formulas::{ConversionModel, FormulaSet};
use leadcalc::domain::inputs::InputSet;
use leadcalc::domain::validation::{missing_fields, validate};
use proptest::prelude::*;

fn percent() -> impl Strategy<Value = f64> {
    0.0..=100.0f64
}

fn complete_inputs() -> impl Strategy<Value = InputSet> {
    (
        0.0..=100_000.0f64,
        0.0..=1_000_000.0f64,
        percent(),
        percent(),
        percent(),
        0.1..=240.0f64,
    )
        .prop_map(|(leads, value, response, closing, ai, hours)| InputSet {
            total_leads: Some(leads),
            customer_value: Some(value),
            current_response_rate: Some(response),
            current_closing_rate: Some(closing),
            ai_response_rate: Some(ai),
            average_time_to_first_touch: Some(hours),
            expected_decay_rate: None,
        })
}

proptest! {
    #[test]
    fn missing_list_matches_unset_required_fields(
        values in proptest::collection::vec(proptest::option::of(0.0..=100.0f64), 7)
    ) {
        let mut inputs = InputSet::default();
        for (field, value) in LeadField::ALL.into_iter().zip(values.iter()) {
            inputs.set(field, *value);
        }

        let formulas = FormulaSet::default();
        let required = formulas.required_fields();
        let expected: Vec<LeadField> = required
            .iter()
            .copied()
            .filter(|f| !inputs.is_set(*f))
            .collect();

        prop_assert_eq!(missing_fields(&inputs, &required), expected.clone());

        match validate(&inputs, &formulas) {
            Ok(_) => prop_assert!(expected.is_empty()),
            Err(e) => prop_assert_eq!(e.missing_fields(), expected.as_slice()),
        }
    }

    #[test]
    fn response_lift_never_exceeds_hundred(
        closing in percent(),
        response in percent(),
        ai in percent(),
    ) {
        let rate = improved_conversion_rate(ConversionModel::ResponseLift, closing, response, ai);
        prop_assert!(rate <= 100.0);
    }

    #[test]
    fn risk_and_additional_revenue_are_symmetric(
        leads in 0.0..=100_000.0f64,
        value in 0.0..=1_000_000.0f64,
        closing in percent(),
        improved in 0.0..=200.0f64,
    ) {
        let gain = additional_revenue(leads, closing, improved, value);
        let risk = revenue_at_risk(leads, closing, improved, value);
        // Rounding error scales with leads * value, not with the result
        let tolerance = (leads * value).max(1.0) * 1e-12;
        prop_assert!((risk + gain).abs() <= tolerance, "risk {} vs gain {}", risk, gain);
    }

    #[test]
    fn computation_is_idempotent(inputs in complete_inputs()) {
        let formulas = FormulaSet::default();
        let validated = validate(&inputs, &formulas).unwrap();

        let first = LeadMetrics::calculate(&validated, &formulas);
        let second = LeadMetrics::calculate(&validated, &formulas);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn percentage_text_above_hundred_is_clamped(raw in 100.0..1e9f64) {
        let mut inputs = InputSet::default();
        let kept = inputs.set_raw(LeadField::CurrentResponseRate, &raw.to_string());
        prop_assert_eq!(kept, Some(100.0));
    }
}

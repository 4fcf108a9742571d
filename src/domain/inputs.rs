use crate::domain::fields::LeadField;
use serde::{Deserialize, Serialize};

/// The values the user has entered so far. Every field starts unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct InputSet {
    pub total_leads: Option<f64>,
    pub customer_value: Option<f64>,
    pub current_response_rate: Option<f64>,
    pub current_closing_rate: Option<f64>,
    pub ai_response_rate: Option<f64>,
    pub average_time_to_first_touch: Option<f64>,
    pub expected_decay_rate: Option<f64>,
}

impl InputSet {
    /// The figures the calculator page opens with.
    pub fn sample() -> Self {
        Self {
            total_leads: Some(100.0),
            customer_value: Some(1000.0),
            current_response_rate: Some(50.0),
            current_closing_rate: Some(20.0),
            ai_response_rate: Some(90.0),
            average_time_to_first_touch: Some(4.0),
            expected_decay_rate: None,
        }
    }

    pub fn get(&self, field: LeadField) -> Option<f64> {
        *self.slot(field)
    }

    pub fn is_set(&self, field: LeadField) -> bool {
        self.get(field).is_some()
    }

    /// Stores a value, clamped into the field's bounds. Non-finite values unset the field.
    pub fn set(&mut self, field: LeadField, value: Option<f64>) {
        let spec = field.spec();
        *self.slot_mut(field) = value.filter(|v| v.is_finite()).map(|v| spec.clamp(v));
    }

    /// Stores raw widget text and returns what was kept.
    pub fn set_raw(&mut self, field: LeadField, raw: &str) -> Option<f64> {
        let parsed = field.spec().parse_raw(raw);
        *self.slot_mut(field) = parsed;
        parsed
    }

    pub fn clear(&mut self, field: LeadField) {
        *self.slot_mut(field) = None;
    }

    /// Overlays every set value of `other` onto `self`.
    pub fn overlay(&mut self, other: &InputSet) {
        for field in LeadField::ALL {
            if let Some(value) = other.get(field) {
                self.set(field, Some(value));
            }
        }
    }

    /// Re-applies field bounds, for sets that were deserialized rather than typed in.
    pub fn clamped(mut self) -> Self {
        for field in LeadField::ALL {
            let value = self.get(field);
            self.set(field, value);
        }
        self
    }

    fn slot(&self, field: LeadField) -> &Option<f64> {
        match field {
            LeadField::TotalLeads => &self.total_leads,
            LeadField::CustomerValue => &self.customer_value,
            LeadField::CurrentResponseRate => &self.current_response_rate,
            LeadField::CurrentClosingRate => &self.current_closing_rate,
            LeadField::AiResponseRate => &self.ai_response_rate,
            LeadField::AverageTimeToFirstTouch => &self.average_time_to_first_touch,
            LeadField::ExpectedDecayRate => &self.expected_decay_rate,
        }
    }

    fn slot_mut(&mut self, field: LeadField) -> &mut Option<f64> {
        match field {
            LeadField::TotalLeads => &mut self.total_leads,
            LeadField::CustomerValue => &mut self.customer_value,
            LeadField::CurrentResponseRate => &mut self.current_response_rate,
            LeadField::CurrentClosingRate => &mut self.current_closing_rate,
            LeadField::AiResponseRate => &mut self.ai_response_rate,
            LeadField::AverageTimeToFirstTouch => &mut self.average_time_to_first_touch,
            LeadField::ExpectedDecayRate => &mut self.expected_decay_rate,
        }
    }
}

use crate::domain::fields::LeadField;
use crate::domain::inputs::InputSet;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Text to show in an input box for a stored value.
pub fn display_value(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Pushes the edited text into `inputs` and echoes clamping back into the text.
///
/// Returns true when the text was rewritten (e.g. `150` became `100`).
/// Partial text that does not parse yet, like `-` or `1e`, is left as typed.
pub fn apply_edit(field: LeadField, buffer: &mut String, inputs: &mut InputSet) -> bool {
    let kept = inputs.set_raw(field, buffer);
    let typed = buffer.trim().parse::<f64>().ok();

    match (kept, typed) {
        (Some(kept), Some(typed)) if kept != typed => {
            *buffer = display_value(Some(kept));
            true
        }
        _ => false,
    }
}

fn bounds_hint(field: LeadField) -> String {
    let spec = field.spec();
    match spec.upper_bound() {
        Some(max) => format!("{} – {}", spec.min, max),
        None => format!("≥ {}", spec.min),
    }
}

/// Renders one labelled numeric field. Returns true when the stored value changed.
pub fn render_input_field(
    ui: &mut egui::Ui,
    field: LeadField,
    buffer: &mut String,
    inputs: &mut InputSet,
    flag_missing: bool,
) -> bool {
    let before = inputs.get(field);

    ui.label(
        egui::RichText::new(field.label())
            .size(14.0)
            .color(DesignSystem::TEXT_SECONDARY),
    );

    let mut edit = egui::TextEdit::singleline(buffer)
        .hint_text(bounds_hint(field))
        .desired_width(f32::INFINITY);
    if flag_missing {
        edit = edit.background_color(DesignSystem::DANGER_BG);
    }

    let response = ui.add(edit);
    if response.changed() {
        apply_edit(field, buffer, inputs);
    }

    ui.add_space(DesignSystem::SPACING_SMALL);
    inputs.get(field) != before
}

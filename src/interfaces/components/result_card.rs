use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::results_view_model::ResultCardView;
use eframe::egui;

const RESULT_CARD_MIN_HEIGHT: f32 = 80.0;

/// One computed metric: muted title over the value in its tone colour.
/// The headline card gets an accent border.
pub fn render_result_card(ui: &mut egui::Ui, card: &ResultCardView) {
    let border = if card.highlighted {
        egui::Stroke::new(1.5, DesignSystem::ACCENT_PRIMARY)
    } else {
        egui::Stroke::new(1.0, DesignSystem::BORDER_SUBTLE)
    };

    DesignSystem::card_frame().stroke(border).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.set_min_height(RESULT_CARD_MIN_HEIGHT);

        ui.label(
            egui::RichText::new(card.title)
                .size(15.0)
                .color(DesignSystem::TEXT_SECONDARY),
        );
        ui.add_space(DesignSystem::SPACING_SMALL / 2.0);
        ui.label(
            egui::RichText::new(&card.value)
                .size(24.0)
                .strong()
                .color(card.color),
        );
    });
    ui.add_space(DesignSystem::SPACING_SMALL);
}

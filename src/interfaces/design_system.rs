use eframe::egui;

/// Light calculator theme: gray page, white panels, sky-blue accent.
pub struct DesignSystem;

impl DesignSystem {
    // --- Colors ---

    // Backgrounds
    pub const BG_WINDOW: egui::Color32 = egui::Color32::from_rgb(249, 250, 251); // #F9FAFB
    pub const BG_PANEL: egui::Color32 = egui::Color32::WHITE;
    pub const BG_CARD: egui::Color32 = egui::Color32::WHITE;
    pub const BG_INPUT: egui::Color32 = egui::Color32::from_rgb(243, 244, 246);

    // Accents
    pub const ACCENT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(2, 132, 199); // #0284C7

    // Status
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(220, 38, 38);
    pub const DANGER_BG: egui::Color32 = egui::Color32::from_rgb(254, 242, 242);

    // Text
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(17, 24, 39); // gray-900
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(55, 65, 81); // gray-700
    pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(107, 114, 128); // gray-500

    // Borders
    pub const BORDER_SUBTLE: egui::Color32 = egui::Color32::from_rgb(229, 231, 235);

    // --- Metrics ---

    pub const ROUNDING_MEDIUM: u8 = 8;

    pub const SPACING_SMALL: f32 = 8.0;
    pub const SPACING_MEDIUM: f32 = 16.0;
    pub const SPACING_LARGE: f32 = 24.0;

    // --- Styles ---

    pub fn theme() -> egui::Visuals {
        let mut visuals = egui::Visuals::light();

        visuals.window_fill = Self::BG_WINDOW;
        visuals.panel_fill = Self::BG_WINDOW;
        visuals.extreme_bg_color = Self::BG_INPUT;

        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, Self::BORDER_SUBTLE);
        visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_PRIMARY);
        visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_SECONDARY);

        visuals.selection.bg_fill = Self::ACCENT_PRIMARY.linear_multiply(0.3);
        visuals.selection.stroke = egui::Stroke::new(1.0, Self::ACCENT_PRIMARY);

        visuals
    }

    /// White rounded panel used for the input and results columns
    pub fn panel_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_PANEL)
            .corner_radius(Self::ROUNDING_MEDIUM)
            .stroke(egui::Stroke::new(1.0, Self::BORDER_SUBTLE))
            .inner_margin(Self::SPACING_LARGE as i8)
    }

    /// Standard Card Styling
    pub fn card_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_CARD)
            .corner_radius(Self::ROUNDING_MEDIUM)
            .stroke(egui::Stroke::new(1.0, Self::BORDER_SUBTLE))
            .inner_margin(Self::SPACING_MEDIUM as i8)
    }

    /// Application Main Layout Frame
    pub fn main_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_WINDOW)
            .inner_margin(egui::Margin::same(Self::SPACING_LARGE as i8))
    }
}

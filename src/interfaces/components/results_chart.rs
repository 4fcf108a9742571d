use crate::application::report::ChartBar;
use crate::domain::formatting::format_currency;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;
use egui_plot::{Bar, BarChart, Legend, Plot};

/// Bar chart of current revenue, improved revenue and revenue at risk.
///
/// Each bar is its own series so the legend names it.
pub fn render_results_chart(ui: &mut egui::Ui, bars: &[ChartBar], currency_symbol: &str) {
    let palette = [
        DesignSystem::TEXT_MUTED,
        DesignSystem::ACCENT_PRIMARY,
        DesignSystem::DANGER,
    ];

    let charts: Vec<BarChart> = bars
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            let color = palette[i % palette.len()];
            let hover = format!("{}: {}", bar.label, format_currency(bar.value, currency_symbol));
            BarChart::new(
                bar.label,
                vec![Bar::new(i as f64, bar.value).width(0.6).name(hover)],
            )
            .color(color)
        })
        .collect();

    Plot::new("results_chart")
        .height(300.0)
        .legend(Legend::default())
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .show_x(false)
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}

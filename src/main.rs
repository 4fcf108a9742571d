use leadcalc::config::Config;
use leadcalc::infrastructure::logging::init_ui_logging;
use leadcalc::interfaces::CalculatorApp;
use leadcalc::interfaces::design_system::DesignSystem;

use tracing::info;

fn main() -> anyhow::Result<()> {
    // 0. Load Env (before starting anything)
    dotenvy::dotenv().ok(); // Load .env file

    // 1. Setup Logging (Stdout + UI)
    let log_rx = init_ui_logging();

    info!("Starting Speed-to-Lead calculator...");

    // 2. Load Config
    let config = Config::from_env()?;
    info!(
        "Formulas: conversion={} decay={} risk={} (live update: {})",
        config.formulas.conversion,
        config.formulas.decay,
        config.formulas.risk,
        config.live_update
    );

    let app = CalculatorApp::new(&config, Some(log_rx));

    // 3. Run UI (Blocks Main Thread)
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 860.0])
            .with_title("Speed-to-Lead AI Calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "Speed-to-Lead AI Calculator",
        native_options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(DesignSystem::theme());
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}

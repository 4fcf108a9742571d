use crate::application::estimator::LeadEstimator;
use crate::config::Config;
use crate::domain::errors::CalculatorError;
use crate::domain::fields::LeadField;
use crate::domain::formulas::{ConversionModel, DecayModel, FormulaSet, RiskModel};
use crate::domain::inputs::InputSet;
use crate::infrastructure::log_channel::drain_into;
use crate::interfaces::components::input_field::{apply_edit, display_value, render_input_field};
use crate::interfaces::components::result_card::render_result_card;
use crate::interfaces::components::results_chart::render_results_chart;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::results_view_model::ResultsViewModel;
use crossbeam_channel::Receiver;
use eframe::egui;
use std::collections::BTreeMap;
use tracing::info;

const LOG_LINES_KEPT: usize = 200;

pub struct CalculatorApp {
    estimator: LeadEstimator,
    currency_symbol: String,
    live_update: bool,

    // Form state
    inputs: InputSet,
    buffers: BTreeMap<LeadField, String>,
    results: Option<ResultsViewModel>,
    notification: Option<CalculatorError>,

    // Activity log
    log_rx: Option<Receiver<String>>,
    log_lines: Vec<String>,
}

impl CalculatorApp {
    pub fn new(config: &Config, log_rx: Option<Receiver<String>>) -> Self {
        let inputs = if config.prefill {
            InputSet::sample()
        } else {
            InputSet::default()
        };
        let buffers = LeadField::ALL
            .into_iter()
            .map(|field| (field, display_value(inputs.get(field))))
            .collect();

        let mut app = Self {
            estimator: LeadEstimator::new(config.formulas),
            currency_symbol: config.currency_symbol.clone(),
            live_update: config.live_update,
            inputs,
            buffers,
            results: None,
            notification: None,
            log_rx,
            log_lines: Vec::new(),
        };
        if app.live_update {
            app.recompute_live();
        }
        app
    }

    pub fn inputs(&self) -> &InputSet {
        &self.inputs
    }

    pub fn results(&self) -> Option<&ResultsViewModel> {
        self.results.as_ref()
    }

    pub fn notification(&self) -> Option<&CalculatorError> {
        self.notification.as_ref()
    }

    /// The expected decay field only matters when the formulas read it.
    pub fn visible_fields(&self) -> Vec<LeadField> {
        let show_decay = self.estimator.formulas().decay == DecayModel::Expected;
        LeadField::ALL
            .into_iter()
            .filter(|f| *f != LeadField::ExpectedDecayRate || show_decay)
            .collect()
    }

    /// Applies typed text to one field, as the input widget does.
    pub fn edit_field(&mut self, field: LeadField, text: &str) {
        let buffer = self.buffers.entry(field).or_default();
        *buffer = text.to_string();
        apply_edit(field, buffer, &mut self.inputs);
        self.after_edit();
    }

    /// Explicit submit: either results or one notification naming every missing field.
    pub fn submit(&mut self) {
        match self.estimator.estimate(&self.inputs) {
            Ok(estimate) => {
                self.results = Some(ResultsViewModel::from_estimate(
                    &estimate,
                    &self.currency_symbol,
                ));
                self.notification = None;
            }
            Err(e) => {
                self.results = None;
                self.notification = Some(e);
            }
        }
    }

    pub fn set_formulas(&mut self, formulas: FormulaSet) {
        if formulas == self.estimator.formulas() {
            return;
        }
        info!(
            "Formulas changed: conversion={} decay={} risk={}",
            formulas.conversion, formulas.decay, formulas.risk
        );
        self.estimator.set_formulas(formulas);
        if self.live_update {
            self.recompute_live();
        } else if self.results.is_some() || self.notification.is_some() {
            self.submit();
        }
    }

    /// In submit mode any edit invalidates the shown results until the next Calculate.
    fn after_edit(&mut self) {
        if self.live_update {
            self.recompute_live();
        } else {
            self.results = None;
        }
    }

    /// Live mode shows results as soon as the form is complete and stays quiet until then.
    fn recompute_live(&mut self) {
        self.results = self
            .estimator
            .estimate(&self.inputs)
            .ok()
            .map(|estimate| ResultsViewModel::from_estimate(&estimate, &self.currency_symbol));
        self.notification = None;
    }

    fn render_inputs(&mut self, ui: &mut egui::Ui) {
        let missing: Vec<LeadField> = self
            .notification
            .as_ref()
            .map(|e| e.missing_fields().to_vec())
            .unwrap_or_default();

        DesignSystem::panel_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new("Input Your Data")
                    .size(22.0)
                    .strong()
                    .color(DesignSystem::TEXT_PRIMARY),
            );
            ui.add_space(DesignSystem::SPACING_MEDIUM);

            let mut edited = false;
            for field in self.visible_fields() {
                let buffer = self.buffers.entry(field).or_default();
                edited |= render_input_field(
                    ui,
                    field,
                    buffer,
                    &mut self.inputs,
                    missing.contains(&field),
                );
            }
            if edited {
                self.after_edit();
            }

            ui.add_space(DesignSystem::SPACING_SMALL);
            self.render_formula_selectors(ui);
            ui.add_space(DesignSystem::SPACING_MEDIUM);

            if !self.live_update {
                let button = egui::Button::new(
                    egui::RichText::new("Calculate")
                        .size(16.0)
                        .strong()
                        .color(egui::Color32::WHITE),
                )
                .fill(DesignSystem::ACCENT_PRIMARY)
                .min_size(egui::vec2(ui.available_width(), 36.0));

                if ui.add(button).clicked() {
                    self.submit();
                }
            }

            if let Some(error) = &self.notification {
                ui.add_space(DesignSystem::SPACING_SMALL);
                egui::Frame::NONE
                    .fill(DesignSystem::DANGER_BG)
                    .corner_radius(DesignSystem::ROUNDING_MEDIUM)
                    .inner_margin(egui::Margin::symmetric(12, 8))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(error.to_string()).color(DesignSystem::DANGER));
                    });
            }
        });
    }

    fn render_formula_selectors(&mut self, ui: &mut egui::Ui) {
        let mut formulas = self.estimator.formulas();

        egui::CollapsingHeader::new("Formulas")
            .default_open(false)
            .show(ui, |ui| {
                egui::ComboBox::from_label("Improved conversion")
                    .selected_text(formulas.conversion.to_string())
                    .show_ui(ui, |ui| {
                        for model in [ConversionModel::ResponseLift, ConversionModel::ResponseProduct] {
                            ui.selectable_value(&mut formulas.conversion, model, model.to_string());
                        }
                    });
                egui::ComboBox::from_label("Decay rate")
                    .selected_text(formulas.decay.to_string())
                    .show_ui(ui, |ui| {
                        for model in [DecayModel::ResponseGap, DecayModel::Expected] {
                            ui.selectable_value(&mut formulas.decay, model, model.to_string());
                        }
                    });
                egui::ComboBox::from_label("Revenue at risk")
                    .selected_text(formulas.risk.to_string())
                    .show_ui(ui, |ui| {
                        for model in [RiskModel::ImprovementGap, RiskModel::ResponseDecay] {
                            ui.selectable_value(&mut formulas.risk, model, model.to_string());
                        }
                    });
            });

        self.set_formulas(formulas);
    }

    fn render_results(&self, ui: &mut egui::Ui) {
        DesignSystem::panel_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new("Results")
                    .size(22.0)
                    .strong()
                    .color(DesignSystem::TEXT_PRIMARY),
            );
            ui.add_space(DesignSystem::SPACING_MEDIUM);

            match &self.results {
                Some(vm) => {
                    for card in &vm.cards {
                        render_result_card(ui, card);
                    }
                    ui.add_space(DesignSystem::SPACING_MEDIUM);
                    render_results_chart(ui, &vm.bars, &self.currency_symbol);
                }
                None => {
                    let hint = if self.live_update {
                        "Results appear once every field is filled in."
                    } else {
                        "Fill in the form and press Calculate."
                    };
                    ui.label(
                        egui::RichText::new(hint)
                            .italics()
                            .color(DesignSystem::TEXT_MUTED),
                    );
                }
            }
        });
    }

    fn render_log_panel(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("activity_log")
            .resizable(true)
            .show(ctx, |ui| {
                egui::CollapsingHeader::new("Activity log")
                    .default_open(false)
                    .show(ui, |ui| {
                        egui::ScrollArea::vertical()
                            .max_height(160.0)
                            .stick_to_bottom(true)
                            .show(ui, |ui| {
                                for line in &self.log_lines {
                                    ui.label(
                                        egui::RichText::new(line)
                                            .monospace()
                                            .size(11.0)
                                            .color(DesignSystem::TEXT_MUTED),
                                    );
                                }
                            });
                    });
            });
    }
}

impl eframe::App for CalculatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(DesignSystem::theme());

        if let Some(rx) = &self.log_rx {
            drain_into(rx, &mut self.log_lines, LOG_LINES_KEPT);
        }

        self.render_log_panel(ctx);

        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new("Speed-to-Lead AI Calculator")
                                .size(32.0)
                                .strong()
                                .color(DesignSystem::TEXT_PRIMARY),
                        );
                        ui.label(
                            egui::RichText::new(
                                "Calculate the potential impact of AI on your lead conversion rates",
                            )
                            .size(16.0)
                            .color(DesignSystem::TEXT_MUTED),
                        );
                    });
                    ui.add_space(DesignSystem::SPACING_LARGE);

                    ui.columns(2, |cols| {
                        self.render_inputs(&mut cols[0]);
                        self.render_results(&mut cols[1]);
                    });
                });
            });
    }
}

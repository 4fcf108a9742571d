pub mod calculator_app;
pub mod components;
pub mod design_system;
pub mod view_models;

pub use calculator_app::CalculatorApp;

pub mod input_field;
pub mod result_card;
pub mod results_chart;

pub mod results_view_model;

pub mod log_channel;
pub mod logging;
pub mod scenario_loader;

pub use scenario_loader::{ScenarioFormat, load_scenario, parse_scenario};

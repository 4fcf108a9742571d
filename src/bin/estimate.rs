use anyhow::Context;
use clap::{Parser, ValueEnum};
use leadcalc::application::estimator::LeadEstimator;
use leadcalc::config::Config;
use leadcalc::domain::fields::LeadField;
use leadcalc::domain::inputs::InputSet;
use leadcalc::infrastructure::load_scenario;
use leadcalc::infrastructure::logging::init_cli_logging;
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit status when required inputs are missing.
const EXIT_MISSING_INPUTS: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Estimate the revenue impact of answering leads faster.
///
/// Field values may come from a scenario file, from flags, or both. A flag
/// holding a number replaces the scenario's value.
#[derive(Parser)]
#[command(author, version, about, long_about = None, allow_negative_numbers = true)]
struct Cli {
    /// TOML or JSON scenario file keyed by field name (totalLeads, customerValue, ...)
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Total leads per month
    #[arg(long)]
    total_leads: Option<String>,

    /// Average customer value
    #[arg(long)]
    customer_value: Option<String>,

    /// Current lead response rate (%)
    #[arg(long)]
    current_response_rate: Option<String>,

    /// Current closing rate (%)
    #[arg(long)]
    current_closing_rate: Option<String>,

    /// AI response rate (%)
    #[arg(long)]
    ai_response_rate: Option<String>,

    /// Average time to first touch (hours)
    #[arg(long)]
    average_time_to_first_touch: Option<String>,

    /// Expected decay rate (% per hour), used by the "expected" decay model
    #[arg(long)]
    expected_decay_rate: Option<String>,

    /// Improved conversion formula: response_lift or response_product
    #[arg(long)]
    conversion_model: Option<String>,

    /// Revenue at risk formula: improvement_gap or response_decay
    #[arg(long)]
    risk_model: Option<String>,

    /// Decay source: response_gap or expected
    #[arg(long)]
    decay_model: Option<String>,

    /// Currency symbol for amounts
    #[arg(long)]
    currency: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Log calculation details to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn field_flags(&self) -> [(LeadField, Option<&String>); 7] {
        [
            (LeadField::TotalLeads, self.total_leads.as_ref()),
            (LeadField::CustomerValue, self.customer_value.as_ref()),
            (LeadField::CurrentResponseRate, self.current_response_rate.as_ref()),
            (LeadField::CurrentClosingRate, self.current_closing_rate.as_ref()),
            (LeadField::AiResponseRate, self.ai_response_rate.as_ref()),
            (
                LeadField::AverageTimeToFirstTouch,
                self.average_time_to_first_touch.as_ref(),
            ),
            (LeadField::ExpectedDecayRate, self.expected_decay_rate.as_ref()),
        ]
    }

    /// Field flags as an input set; flags that are absent or not a number stay unset.
    fn field_overrides(&self) -> InputSet {
        let mut overrides = InputSet::default();
        for (field, raw) in self.field_flags() {
            if let Some(raw) = raw {
                overrides.set_raw(field, raw);
            }
        }
        overrides
    }

    fn apply_overrides(&self, config: &mut Config) -> anyhow::Result<()> {
        if let Some(model) = &self.conversion_model {
            config.formulas.conversion = model.parse().context("Invalid --conversion-model")?;
        }
        if let Some(model) = &self.risk_model {
            config.formulas.risk = model.parse().context("Invalid --risk-model")?;
        }
        if let Some(model) = &self.decay_model {
            config.formulas.decay = model.parse().context("Invalid --decay-model")?;
        }
        if let Some(symbol) = &self.currency {
            config.currency_symbol = symbol.clone();
        }
        Ok(())
    }
}

fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_cli_logging(cli.verbose);

    let mut config = Config::from_env()?;
    cli.apply_overrides(&mut config)?;

    let mut inputs = match &cli.scenario {
        Some(path) => load_scenario(path)?,
        None => InputSet::default(),
    };
    inputs.overlay(&cli.field_overrides());

    let estimator = LeadEstimator::new(config.formulas);
    let estimate = match estimator.estimate(&inputs) {
        Ok(estimate) => estimate,
        Err(e) => {
            eprintln!("{}", e);
            return Ok(ExitCode::from(EXIT_MISSING_INPUTS));
        }
    };

    match cli.format {
        OutputFormat::Text => print!("{}", estimate.render_text(&config.currency_symbol)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&estimate.report(&config.currency_symbol))
                .context("Failed to serialize report")?;
            println!("{}", json);
        }
    }

    Ok(ExitCode::SUCCESS)
}

use assert_cmd::Command;
use std::fs;
use tempfile::tempdir;

fn estimate() -> Command {
    let mut cmd = Command::cargo_bin("estimate").expect("estimate binary");
    for key in [
        "LEADCALC_CONVERSION_MODEL",
        "LEADCALC_RISK_MODEL",
        "LEADCALC_DECAY_MODEL",
        "LEADCALC_CURRENCY_SYMBOL",
        "RUST_LOG",
    ] {
        cmd.env_remove(key);
    }
    cmd
}

const SAMPLE_ARGS: [&str; 12] = [
    "--total-leads",
    "100",
    "--customer-value",
    "1000",
    "--current-response-rate",
    "50",
    "--current-closing-rate",
    "20",
    "--ai-response-rate",
    "90",
    "--average-time-to-first-touch",
    "4",
];

#[test]
fn test_text_report() {
    let output = estimate().args(SAMPLE_ARGS).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Improved Conversion Rate"));
    assert!(stdout.contains("24.0%"));
    assert!(stdout.contains("$4,000"));
}

#[test]
fn test_json_report_with_currency_override() {
    let output = estimate()
        .args(SAMPLE_ARGS)
        .args(["--format", "json", "--currency", "€"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["cards"][1]["value"], "€4,000");
    assert_eq!(json["formulas"]["risk"], "improvement_gap");
}

#[test]
fn test_percentage_flag_is_clamped() {
    let mut args = SAMPLE_ARGS.to_vec();
    args[9] = "150";

    let output = estimate()
        .args(&args)
        .args(["--format", "json"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["inputs"]["aiResponseRate"], 100.0);
}

#[test]
fn test_missing_inputs_exit_code() {
    let output = estimate().args(["--total-leads", "100"]).output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains(
        "Please fill in all required fields: Average Customer Value ($), \
         Current Lead Response Rate (%), Current Closing Rate (%), AI's Response Rate (%), \
         Average Time to First Touch (hours)"
    ));
}

#[test]
fn test_missing_inputs_message_printed_once() {
    let output = estimate().args(["--total-leads", "100"]).output().unwrap();

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.matches("Please fill in all required fields").count(), 1);
}

#[test]
fn test_flags_overlay_scenario_values() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scenario.toml");
    fs::write(
        &path,
        "totalLeads = 100\ncustomerValue = 1000\ncurrentResponseRate = 50\n\
         currentClosingRate = 20\naiResponseRate = 90\naverageTimeToFirstTouch = 4\n",
    )
    .unwrap();

    let output = estimate()
        .arg("--scenario")
        .arg(&path)
        .args(["--customer-value", "2000", "--ai-response-rate", "oops"])
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["inputs"]["customerValue"], 2000.0);
    assert_eq!(json["inputs"]["totalLeads"], 100.0);
    assert_eq!(json["inputs"]["aiResponseRate"], 90.0);
    assert_eq!(json["cards"][1]["value"], "$8,000");
}

#[test]
fn test_unknown_model_fails() {
    estimate()
        .args(SAMPLE_ARGS)
        .args(["--risk-model", "bogus"])
        .assert()
        .failure();
}

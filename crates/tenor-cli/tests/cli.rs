//! End-to-end tests for the `tenor` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::Builder;

fn tenor() -> Command {
    let mut cmd = Command::cargo_bin("tenor").unwrap();
    cmd.env_remove("TENOR_CONFIG").env_remove("RUST_LOG");
    cmd
}

fn explicit_schedule() -> [&'static str; 4] {
    ["--times", "1,2,3", "--amounts", "10,10,110"]
}

#[test]
fn price_minimal() {
    tenor()
        .args(["-f", "minimal", "price"])
        .args(explicit_schedule())
        .args(["--rate", "9"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("102.53"));
}

#[test]
fn price_continuous() {
    tenor()
        .args(["-f", "minimal", "--compounding", "continuous", "price"])
        .args(explicit_schedule())
        .args(["--rate", "8"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("104.28"));
}

#[test]
fn price_table_has_header() {
    tenor()
        .arg("price")
        .args(explicit_schedule())
        .args(["--rate", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pricing Results"))
        .stdout(predicate::str::contains("102.531"));
}

#[test]
fn yield_minimal() {
    tenor()
        .args(["-f", "minimal", "yield"])
        .args(explicit_schedule())
        .args(["--price", "102.5313"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("0.0900"));
}

#[test]
fn analyze_json() {
    tenor()
        .args(["-f", "json", "analyze"])
        .args(explicit_schedule())
        .args(["--rate", "9", "--shift", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"macaulay_duration\": 2.738"))
        .stdout(predicate::str::contains("estimated_change"));
}

#[test]
fn analyze_requires_quote() {
    tenor()
        .arg("analyze")
        .args(explicit_schedule())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--price or --rate"));
}

#[test]
fn schedule_from_bond_terms_csv() {
    tenor()
        .args(["-f", "csv", "schedule", "--coupon", "10", "--maturity", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("110"));
}

#[test]
fn schedule_with_rate_shows_price() {
    tenor()
        .args(["schedule", "--coupon", "10", "--maturity", "3", "--rate", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Price: 102.531"));
}

#[test]
fn unsorted_times_rejected() {
    tenor()
        .args(["price", "--times", "2,1", "--amounts", "10,110", "--rate", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("strictly increasing"));
}

#[test]
fn out_of_range_rate_rejected() {
    tenor()
        .arg("price")
        .args(explicit_schedule())
        .args(["--rate", "250"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid rate"));
}

#[test]
fn strict_mode_reports_non_convergence() {
    let mut config = Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(config, "[solver]\ntolerance = 1e-12\nmax_iterations = 3").unwrap();

    tenor()
        .args(["--strict", "--config"])
        .arg(config.path())
        .arg("yield")
        .args(explicit_schedule())
        .args(["--price", "102.5313"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("did not converge"));
}

#[test]
fn invalid_config_file_fails() {
    let mut config = Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(config, "compounding = \"monthly\"").unwrap();

    tenor()
        .arg("--config")
        .arg(config.path())
        .arg("price")
        .args(explicit_schedule())
        .args(["--rate", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("loading config"));
}

#[test]
fn batch_from_json_file() {
    let mut input = Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        input,
        r#"[
            {{"id": "A", "schedule": [{{"time": 1.0, "amount": 10.0}}, {{"time": 2.0, "amount": 10.0}}, {{"time": 3.0, "amount": 110.0}}], "quote": {{"rate": 0.09}}}},
            {{"id": "B", "schedule": [], "quote": {{"rate": 0.05}}}}
        ]"#
    )
    .unwrap();

    tenor()
        .args(["-f", "csv", "batch", "--input"])
        .arg(input.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("A,0.090000,102.531"))
        .stdout(predicate::str::contains("division by zero"));
}

#[test]
fn oversized_bond_terms_rejected() {
    for maturity in ["4000000000", "79228162514264337593543950335"] {
        tenor()
            .args(["schedule", "--coupon", "5", "--maturity", maturity, "--frequency", "2"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid bond terms"));
    }
}

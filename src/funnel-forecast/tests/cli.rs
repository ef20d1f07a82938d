//! End-to-end runs of the funnel-forecast binary.

use assert_cmd::Command;
use serde_json::Value;

fn bin() -> Command {
    let mut cmd = Command::cargo_bin("funnel-forecast").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn json_output(cmd: &mut Command) -> Value {
    let out = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&out).unwrap()
}

const FUNNEL: [&str; 10] = [
    "--budget", "10000", "--cpm", "8", "--ctr", "2.5", "--cr", "3", "--avg-check", "150",
];

#[test]
fn calculate_prints_metrics_as_json() {
    let v = json_output(bin().arg("--json").arg("calculate").args(FUNNEL));
    assert!((v["impressions"].as_f64().unwrap() - 1_250_000.0).abs() < 1e-6);
    assert!((v["roas"].as_f64().unwrap() - 14.0625).abs() < 1e-9);
}

#[test]
fn unparsable_input_gives_zero_metrics() {
    let v = json_output(bin().args([
        "--json", "calculate", "--budget", "abc", "--cpm", "8", "--ctr", "2.5", "--cr", "3",
        "--avg-check", "150",
    ]));
    assert_eq!(v["revenue"].as_f64(), Some(0.0));
    assert_eq!(v["profit"].as_f64(), Some(0.0));
}

#[test]
fn reverse_reports_unachievable_target() {
    let v = json_output(bin().args([
        "--json", "reverse", "--profit", "1000", "--cpm", "100", "--ctr", "0.1", "--cr", "0.1",
        "--avg-check", "10",
    ]));
    assert_eq!(v["is_achievable"], Value::Bool(false));
    assert!(v["reason"].as_str().unwrap().starts_with("Not achievable"));
}

#[test]
fn sensitivity_defaults_to_eleven_points() {
    let v = json_output(bin().arg("--json").arg("sensitivity").args(FUNNEL));
    assert_eq!(v.as_array().unwrap().len(), 11);
}

#[test]
fn saved_campaigns_survive_between_runs() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("campaigns.json");
    let store = store.to_str().unwrap();

    let saved = json_output(
        bin()
            .args(["--json", "--store", store, "campaign", "save", "--name", "Search Q3"])
            .args(FUNNEL),
    );
    let id = saved["id"].as_str().unwrap().to_string();

    let list = json_output(bin().args(["--json", "--store", store, "campaign", "list"]));
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["name"], "Search Q3");

    let report = bin()
        .args(["--store", store, "report", "--id", &id[..8], "--format", "csv"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let report = String::from_utf8(report).unwrap();
    assert!(report.starts_with("section,name,value"));

    bin()
        .args(["--store", store, "campaign", "delete", &id])
        .assert()
        .success();
    let list = json_output(bin().args(["--json", "--store", store, "campaign", "list"]));
    assert!(list.as_array().unwrap().is_empty());
}

#[test]
fn report_without_inputs_fails() {
    bin().args(["report"]).assert().failure();
}

#[test]
fn report_rejects_id_with_funnel_flags() {
    bin()
        .args(["report", "--id", "ab12", "--budget", "10000"])
        .assert()
        .failure();
}

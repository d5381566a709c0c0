//! CLI integration tests
//!
//! Run the built `assayx` binary against the store's sample fixtures.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../assayx-store/tests/fixtures")
        .join(name)
}

fn assayx(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_assayx"))
        .args(args)
        .output()
        .unwrap()
}

fn path_str(path: &std::path::Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_vocab_check_prints_counts_and_digest() {
    let vocab = fixture("vocab_bioassay.yaml");
    let output = assayx(&["vocab", "check", path_str(&vocab)]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("bioassay sample axioms is valid"));
    assert!(stdout.contains("Rules: 4 (limit 3, exclude 1, exclusive 1, keyword 1)"));
    assert!(stdout.contains("Digest: "));
    let loaded_at = stdout
        .lines()
        .find_map(|l| l.strip_prefix("Loaded at: "))
        .unwrap();
    assert!(loaded_at.ends_with('Z'), "not a UTC timestamp: {}", loaded_at);
}

#[test]
fn test_vocab_check_reports_error_and_exits_1() {
    let vocab = fixture("vocab_literal_subject.yaml");
    let output = assayx(&["vocab", "check", path_str(&vocab)]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error: [ERR_INVALID_TERM]"));
    assert!(stderr.contains("(rule: 1)"));
}

#[test]
fn test_vocab_convert_round_trips_digest() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("converted.json");

    let convert = assayx(&[
        "vocab",
        "convert",
        path_str(&fixture("vocab_bioassay.yaml")),
        path_str(&out),
    ]);
    assert!(convert.status.success());

    let check_converted = assayx(&["vocab", "check", path_str(&out)]);
    let check_original = assayx(&["vocab", "check", path_str(&fixture("vocab_bioassay.yaml"))]);
    let digest = |o: &Output| {
        String::from_utf8_lossy(&o.stdout)
            .lines()
            .find(|l| l.starts_with("Digest: "))
            .map(str::to_string)
    };
    assert!(digest(&check_converted).is_some());
    assert_eq!(digest(&check_converted), digest(&check_original));
}

#[test]
fn test_assess_prints_report_json() {
    let output = assayx(&[
        "assess",
        "--vocab",
        path_str(&fixture("vocab_bioassay.yaml")),
        "--schema",
        path_str(&fixture("schema_bioassay.yaml")),
        "--record",
        path_str(&fixture("record_ic50.yaml")),
    ]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["recordId"], "AID1234");
    assert_eq!(report["justifications"].as_array().unwrap().len(), 0);
    assert_eq!(report["additional"].as_array().unwrap().len(), 0);

    let violations = report["violations"].as_array().unwrap();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0]["propURI"], "bao:unit");
    assert_eq!(violations[0]["valueURI"], "bao:percent");
    assert_eq!(violations[0]["cause"], "outside_restriction");
    assert_eq!(violations[0]["triggers"][0], "bao:IC50");
}

#[test]
fn test_assess_reads_paths_from_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("assayx.toml");
    fs::write(
        &config,
        format!(
            "vocabulary = {:?}\nschema = {:?}\nlog_profile = \"production\"\n",
            path_str(&fixture("vocab_bioassay.json")),
            path_str(&fixture("schema_bioassay.yaml")),
        ),
    )
    .unwrap();

    let output = assayx(&[
        "--config",
        path_str(&config),
        "assess",
        "--record",
        path_str(&fixture("record_ic50.yaml")),
    ]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["violations"].as_array().unwrap().len(), 1);
}

#[test]
fn test_assess_without_vocab_fails() {
    let output = assayx(&[
        "assess",
        "--schema",
        path_str(&fixture("schema_bioassay.yaml")),
        "--record",
        path_str(&fixture("record_ic50.yaml")),
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("no vocab given"));
}

//! E2E tests for `ctope classify`.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn ctope_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("ctope"));
    cmd.current_dir(dir.path());
    cmd.env("CLIQUETOPE_LOG", "error");
    cmd
}

#[test]
fn classify_prints_descriptor_and_stage() {
    let dir = TempDir::new().expect("tempdir");
    ctope_cmd(&dir)
        .args(["classify", "Dhc", "C~"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dhc\t\\(S^{1}\\)\t("))
        .stdout(predicate::str::contains("C~\tContractible\t(simplify)"));
}

#[test]
fn classify_clique_graph_json() {
    let dir = TempDir::new().expect("tempdir");
    let output = ctope_cmd(&dir)
        .args(["classify", "Cl", "--clique-graph", "--json"])
        .output()
        .expect("classify should not crash");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["graph6"], "Cl");
    assert_eq!(json["order"], 4);
    assert_eq!(json["graph"]["homotopy"]["kind"], "spheres");
    assert_eq!(json["graph"]["stage"], "join_complement");
    assert_eq!(json["clique_graph"]["status"], "classified");
    assert_eq!(json["clique_graph"]["order"], 4);
    assert_eq!(json["clique_graph"]["homotopy"]["dimension"], 1);
}

#[test]
fn clique_graph_over_the_limit() {
    let dir = TempDir::new().expect("tempdir");
    std::fs::write(dir.path().join("cliquetope.toml"), "[engine]\nclique_graph_limit = 3\n")
        .expect("write settings");
    ctope_cmd(&dir)
        .args(["classify", "Dhc", "--clique-graph"])
        .assert()
        .success()
        .stdout(predicate::str::contains("clique graph exceeds 3 vertices"));
}

#[test]
fn invalid_record_fails() {
    let dir = TempDir::new().expect("tempdir");
    ctope_cmd(&dir)
        .args(["classify", "C !"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to decode C !"));
}

#[test]
fn classify_requires_a_graph() {
    let dir = TempDir::new().expect("tempdir");
    ctope_cmd(&dir).arg("classify").assert().failure();
}

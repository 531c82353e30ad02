use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn repo_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("expected crates/<name> layout")
        .to_path_buf()
}

fn fixture(name: &str) -> String {
    let path = repo_root().join("fixtures").join(name);
    assert!(path.exists(), "fixture missing: {}", path.display());
    path.to_string_lossy().into_owned()
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8 stdout")
}

#[test]
fn cli_prints_the_network_arborescence_as_dot() {
    let exe = assert_cmd::cargo_bin!("spanwood-cli");
    let output = Command::new(exe)
        .args(["a", fixture("network.txt").as_str()])
        .assert()
        .success()
        .get_output()
        .clone();

    let text = stdout_of(&output);
    assert!(text.starts_with("digraph span {\n"), "unexpected output: {text}");
    assert!(text.contains("  \"a\" -> \"b\" [label=\"16\"];\n"));
    assert!(text.contains("  \"b\" -> \"d\" [label=\"17\"];\n"));
    assert!(text.contains("  \"f\" -> \"c\" [label=\"31\"];\n"));
    assert_eq!(text.matches(" -> ").count(), 6);
    assert!(text.ends_with("}\n"));
}

#[test]
fn cli_prints_json_reports() {
    let exe = assert_cmd::cargo_bin!("spanwood-cli");
    let output = Command::new(exe)
        .args([
            "edmonds",
            "--format",
            "json",
            "a",
            fixture("network.txt").as_str(),
        ])
        .assert()
        .success()
        .get_output()
        .clone();

    let value: serde_json::Value = serde_json::from_str(&stdout_of(&output)).expect("json");
    assert_eq!(value["algorithm"], "edmonds");
    assert_eq!(value["root"], "a");
    assert_eq!(value["total_weight"], 122.0);
    assert_eq!(value["synthetic"], 0);
    assert_eq!(value["edges"].as_array().map(Vec::len), Some(6));
}

#[test]
fn cli_runs_kruskal_undirected() {
    let exe = assert_cmd::cargo_bin!("spanwood-cli");
    let output = Command::new(exe)
        .args(["kruskal", fixture("network.txt").as_str()])
        .assert()
        .success()
        .get_output()
        .clone();

    let text = stdout_of(&output);
    assert!(text.starts_with("graph span {\n"));
    assert!(text.contains("  \"e\" -- \"g\" [label=\"11\"];\n"));
    assert_eq!(text.matches(" -- ").count(), 6);
    assert!(!text.contains("->"));
}

#[test]
fn cli_concatenates_inputs_and_reads_stdin() {
    let exe = assert_cmd::cargo_bin!("spanwood-cli");
    let output = assert_cmd::Command::new(exe)
        .args([
            "kruskal",
            "--format",
            "json",
            fixture("network.txt").as_str(),
            "-",
        ])
        .write_stdin("a z 1\n")
        .assert()
        .success()
        .get_output()
        .clone();

    let value: serde_json::Value = serde_json::from_str(&stdout_of(&output)).expect("json");
    assert_eq!(value["total_weight"], 94.0);
    assert_eq!(value["edges"].as_array().map(Vec::len), Some(7));
}

#[test]
fn cli_writes_to_out_path_without_weights() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let out = tmp.path().join("tree.dot");

    let exe = assert_cmd::cargo_bin!("spanwood-cli");
    let output = Command::new(exe)
        .args([
            "--no-weights",
            "--out",
            out.to_string_lossy().as_ref(),
            "a",
            fixture("network.txt").as_str(),
        ])
        .assert()
        .success()
        .get_output()
        .clone();

    assert!(output.stdout.is_empty());
    let text = fs::read_to_string(&out).expect("read out");
    assert!(text.contains("  \"a\" -> \"b\";\n"));
    assert!(!text.contains("label"));
}

#[test]
fn cli_fills_unreachable_vertices_with_synthetic_edges() {
    let exe = assert_cmd::cargo_bin!("spanwood-cli");
    let output = Command::new(exe)
        .args([
            "--format",
            "json",
            "--verify",
            "a",
            fixture("unreachable.txt").as_str(),
        ])
        .assert()
        .success()
        .get_output()
        .clone();

    let value: serde_json::Value = serde_json::from_str(&stdout_of(&output)).expect("json");
    assert_eq!(value["total_weight"], 2.0);
    assert_eq!(value["synthetic"], 1);
}

#[test]
fn cli_strict_fails_when_the_root_cannot_reach_everything() {
    let exe = assert_cmd::cargo_bin!("spanwood-cli");
    let output = Command::new(exe)
        .args(["--strict", "a", fixture("unreachable.txt").as_str()])
        .assert()
        .code(3)
        .get_output()
        .clone();

    // The tree is still printed before failing.
    assert!(stdout_of(&output).starts_with("digraph span {"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("2 vertices are unreachable"), "stderr: {stderr}");
}

#[test]
fn cli_rejects_bad_weights() {
    let exe = assert_cmd::cargo_bin!("spanwood-cli");
    let output = Command::new(exe)
        .args(["a", fixture("bad_weight.txt").as_str()])
        .assert()
        .code(1)
        .get_output()
        .clone();

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(":2: invalid weight `heavy`"), "stderr: {stderr}");
}

#[test]
fn cli_rejects_unknown_roots() {
    let exe = assert_cmd::cargo_bin!("spanwood-cli");
    Command::new(exe)
        .args(["nowhere", fixture("network.txt").as_str()])
        .assert()
        .code(1);
}

#[test]
fn cli_reports_usage_errors() {
    let exe = assert_cmd::cargo_bin!("spanwood-cli");
    let output = Command::new(exe)
        .args(["a"])
        .assert()
        .code(2)
        .get_output()
        .clone();

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Need at least the root name and one file"));
}

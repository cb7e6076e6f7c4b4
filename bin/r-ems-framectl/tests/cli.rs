//! ---
//! ems_section: "05-networking-external-interfaces"
//! ems_subsection: "integration-tests"
//! ems_type: "source"
//! ems_scope: "code"
//! ems_description: "CLI for encoding and inspecting data frame capture files."
//! ems_version: "v0.0.0-prealpha"
//! ems_owner: "tbd"
//! ---
use std::path::Path;

use assert_cmd::Command;
use serde_json::Value;
use tempfile::tempdir;

fn framectl(workdir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("r-ems-framectl").expect("binary built");
    cmd.current_dir(workdir)
        .env_remove("R_EMS_FRAMECTL_CONFIG")
        .env("R_EMS_LOG", "warn");
    cmd
}

fn inspect_json(workdir: &Path, capture: &Path) -> Vec<Value> {
    let output = framectl(workdir)
        .arg("inspect")
        .arg(capture)
        .args(["--format", "json"])
        .output()
        .expect("run inspect");
    assert!(output.status.success(), "inspect failed: {output:?}");
    String::from_utf8(output.stdout)
        .expect("utf8 stdout")
        .lines()
        .map(|line| serde_json::from_str(line).expect("json line"))
        .collect()
}

#[test]
fn encode_then_inspect_round_trip() {
    let dir = tempdir().expect("tempdir");
    let capture = dir.path().join("capture.bin");

    framectl(dir.path())
        .arg("encode")
        .arg("--output")
        .arg(&capture)
        .args(["--number", "-12", "--source", "meter=m1", "--source", "site=north"])
        .assert()
        .success();
    framectl(dir.path())
        .arg("encode")
        .arg("--output")
        .arg(&capture)
        .args(["--append", "--blob-hex", "beef", "--source", "site=south"])
        .assert()
        .success();
    framectl(dir.path())
        .arg("encode")
        .arg("--output")
        .arg(&capture)
        .arg("--append")
        .assert()
        .success();

    let docs = inspect_json(dir.path(), &capture);
    assert_eq!(docs.len(), 3);
    assert_eq!(docs[0]["kind"], "number");
    assert_eq!(docs[0]["value"], -12);
    assert_eq!(docs[0]["sources"]["meter"], "m1");
    assert_eq!(docs[0]["sources"]["site"], "north");
    assert_eq!(docs[1]["kind"], "binary");
    assert_eq!(docs[1]["value"], "beef");
    assert_eq!(docs[2]["kind"], "empty");
    assert!(docs[2]["value"].is_null());
}

#[test]
fn encode_without_append_replaces_capture() {
    let dir = tempdir().expect("tempdir");
    let capture = dir.path().join("capture.bin");

    for text in ["first", "second"] {
        framectl(dir.path())
            .arg("encode")
            .arg("-o")
            .arg(&capture)
            .args(["--text", text])
            .assert()
            .success();
    }

    let docs = inspect_json(dir.path(), &capture);
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0]["value"], "second");
}

#[test]
fn conflicting_value_flags_are_rejected() {
    let dir = tempdir().expect("tempdir");
    framectl(dir.path())
        .arg("encode")
        .arg("-o")
        .arg(dir.path().join("capture.bin"))
        .args(["--number", "1", "--text", "x"])
        .assert()
        .failure();
}

#[test]
fn corrupt_capture_fails_inspect() {
    let dir = tempdir().expect("tempdir");
    let capture = dir.path().join("corrupt.bin");
    std::fs::write(&capture, [0x0a, 0x08]).expect("write capture");
    framectl(dir.path())
        .arg("inspect")
        .arg(&capture)
        .assert()
        .failure();
}

#[test]
fn config_file_selects_text_output() {
    let dir = tempdir().expect("tempdir");
    let capture = dir.path().join("capture.bin");
    let config = dir.path().join("framectl.toml");
    std::fs::write(&config, "[output]\nformat = \"text\"\n").expect("write config");

    framectl(dir.path())
        .arg("encode")
        .arg("-o")
        .arg(&capture)
        .args(["--real", "49.95", "--source", "bay=b1"])
        .assert()
        .success();

    let output = framectl(dir.path())
        .arg("--config")
        .arg(&config)
        .arg("inspect")
        .arg(&capture)
        .output()
        .expect("run inspect");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).expect("utf8"),
        "#0 real 49.95 [bay=b1]\n"
    );
}

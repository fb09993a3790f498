use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn binary_scripted_run_writes_default_archetype() {
    let dir = tempdir().expect("tempdir");
    let out_dir = dir.path().join("workflows");
    let log_path = dir.path().join("wizard.log");

    let output = Command::new(env!("CARGO_BIN_EXE_aw-create"))
        .arg("--output-dir")
        .arg(&out_dir)
        .arg("--log-file")
        .arg(&log_path)
        .arg("--script")
        .arg("enter,enter,enter,w,q")
        .output()
        .expect("run binary");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let written = out_dir.join("issue-triage.md");
    let document = fs::read_to_string(&written).expect("read written document");
    assert!(document.starts_with("---\n"));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("archetype=issue-triage"));
    assert!(stdout.contains(&format!("written={}", written.display())));
    let log = fs::read_to_string(&log_path).expect("read log");
    assert!(log.lines().next().expect("first line").contains("\"catalog_loaded\""));
}

#[test]
fn binary_exits_non_zero_when_catalog_is_missing() {
    let dir = tempdir().expect("tempdir");
    let output = Command::new(env!("CARGO_BIN_EXE_aw-create"))
        .arg("--catalog")
        .arg(dir.path().join("missing.yaml"))
        .arg("--script")
        .arg("ctrl-c")
        .output()
        .expect("run binary");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load pattern catalog"), "{stderr}");
}

#[test]
fn binary_prints_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_aw-create"))
        .arg("--help")
        .output()
        .expect("run binary");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Usage: aw-create"));
}

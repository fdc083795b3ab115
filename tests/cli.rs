//! Startup failures must stop the process before it binds a port.

use std::{fs, process::Command};

use tempfile::TempDir;

fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_subcache"))
        .args(args)
        .env_remove("SUBCACHE__URL")
        .output()
        .expect("Failed to execute subcache")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--config"), "Help should mention --config");
}

#[test]
fn test_missing_config_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    let output = run_cli(&["-c", path.to_str().unwrap(), "--listen", "127.0.0.1:0"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("failed to load config"),
        "Should report the config failure: {}",
        stderr
    );
}

#[test]
fn test_config_without_url_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "listen: 127.0.0.1:0\n").unwrap();
    let output = run_cli(&["-c", path.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("failed to load config"),
        "Should report the config failure: {}",
        stderr
    );
}

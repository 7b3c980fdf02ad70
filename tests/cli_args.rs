//! Tests for CLI behaviour, run against the built binary.

mod common;

use common::mock_backend::{MockBackend, MockResponse};
use common::{temp_config, unreachable_base_url};
use std::process::Command;

fn sellerscope_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sellerscope"))
}

#[test]
fn test_help_shows_link_option() {
    let output = sellerscope_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--link"));
    assert!(stdout.contains("--base-url"));
    assert!(stdout.contains("--check"));
}

#[test]
fn test_blank_link_exits_with_usage_error() {
    let (_dir, config) = temp_config(&unreachable_base_url());
    let output = sellerscope_cmd()
        .arg("--config")
        .arg(&config)
        .args(["--link", "   "])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--link must not be empty"), "stderr: {stderr}");
}

#[test]
fn test_check_conflicts_with_link() {
    let output = sellerscope_cmd()
        .args(["--check", "--link", "https://www.ebay.com/itm/1"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot be used with"), "stderr: {stderr}");
}

#[test]
fn test_unreachable_service_prints_fallback_message() {
    let (_dir, config) = temp_config(&unreachable_base_url());
    let output = sellerscope_cmd()
        .arg("--config")
        .arg(&config)
        .args(["--link", "https://www.ebay.com/itm/1"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "Failed to connect to the analysis service.");
}

#[test]
fn test_invalid_config_exits_with_error() {
    let (_dir, config) = temp_config("ftp://nowhere");
    let output = sellerscope_cmd()
        .arg("--config")
        .arg(&config)
        .args(["--link", "https://www.ebay.com/itm/1"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "stderr: {stderr}");
}

#[tokio::test]
async fn test_one_shot_prints_report() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(
            r#"{
                "total_feedback": 42,
                "positive_percent": 97.6,
                "recent_feedbacks": [{"rating_type": "negative", "comment": "late"}]
            }"#,
        ))
        .await;
    let (_dir, config) = temp_config("http://127.0.0.1:1");
    let base_url = backend.base_url();

    let output = tokio::task::spawn_blocking(move || {
        sellerscope_cmd()
            .arg("--config")
            .arg(&config)
            .args(["--base-url", &base_url])
            .args(["--link", "https://www.ebay.com/itm/1"])
            .output()
            .expect("Failed to execute command")
    })
    .await
    .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Seller Info",
            "Total Feedback: 42",
            "Positive Feedback %: 97.6",
            "",
            "Recent Feedbacks",
            "  - negative: late",
        ]
    );
}

#[tokio::test]
async fn test_check_reports_healthy_service() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(r#"{"status": "ok"}"#))
        .await;
    let (_dir, config) = temp_config(&backend.base_url());
    let base_url = backend.base_url();

    let output = tokio::task::spawn_blocking(move || {
        sellerscope_cmd()
            .arg("--config")
            .arg(&config)
            .arg("--check")
            .output()
            .expect("Failed to execute command")
    })
    .await
    .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), format!("{base_url}: ok"));
}

//! Integration tests for the `wifisnap` binary: argument parsing, the
//! wire-format commands, extraction, and PNG export. The `join` command
//! is not exercised here -- it hands a URI to the OS.
#![allow(clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Build a command for the binary with env isolation so tests never see
/// the user's real config file.
fn wifisnap_cmd() -> Command {
    let mut cmd = Command::cargo_bin("wifisnap").unwrap();
    cmd.env("HOME", "/tmp/wifisnap-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/wifisnap-cli-test-nonexistent")
        .env_remove("WIFISNAP_CONFIRM_DELAY_SECS")
        .env_remove("WIFISNAP_RASTER__WIDTH_PX")
        .env_remove("WIFISNAP_RASTER__MARGIN_MODULES");
    cmd
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn no_args_shows_help() {
    let output = wifisnap_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    let text = String::from_utf8_lossy(&output.stderr);
    assert!(text.contains("Usage"), "expected usage text:\n{text}");
}

#[test]
fn help_lists_subcommands() {
    wifisnap_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("scan")
            .and(predicate::str::contains("join"))
            .and(predicate::str::contains("qr")),
    );
}

// ── Wire formats ────────────────────────────────────────────────────

#[test]
fn uri_prints_percent_encoded_scheme() {
    wifisnap_cmd()
        .args(["uri", "--ssid", "My Net", "--password", "p@ss"])
        .assert()
        .success()
        .stdout("wifi:ssid=My%20Net;password=p%40ss;\n");
}

#[test]
fn uri_with_open_network_keeps_empty_password_field() {
    wifisnap_cmd()
        .args(["uri", "--ssid", "Open"])
        .assert()
        .success()
        .stdout("wifi:ssid=Open;password=;\n");
}

#[test]
fn payload_prints_escaped_grammar() {
    wifisnap_cmd()
        .args(["payload", "--ssid", "a;b", "--password", "c:d"])
        .assert()
        .success()
        .stdout("WIFI:S:a\\;b;T:WPA;P:c\\:d;;\n");
}

#[test]
fn empty_ssid_fails_with_encoding_exit_code() {
    wifisnap_cmd()
        .args(["uri", "--ssid", ""])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Network name is required"));
}

// ── Extraction ──────────────────────────────────────────────────────

#[test]
fn scan_extracts_from_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("card.txt");
    std::fs::write(&path, "Welcome!\nNetwork: Cafe Guest\nPassword: latte123\n").unwrap();

    wifisnap_cmd()
        .arg("scan")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Cafe Guest").and(predicate::str::contains("latte123")));
}

#[test]
fn scan_json_output_parses() {
    let output = wifisnap_cmd()
        .args(["scan", "--json"])
        .write_stdin("SSID: Home\nPassword: secret1\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["ssid"], "Home");
    assert_eq!(value["password"], "secret1");
}

#[test]
fn scan_with_nothing_recognizable_fails() {
    wifisnap_cmd()
        .arg("scan")
        .write_stdin("Opening hours: 9-17\n")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("No WiFi credentials found"));
}

// ── QR export ───────────────────────────────────────────────────────

#[test]
fn qr_writes_a_png_under_the_derived_filename() {
    let dir = tempfile::tempdir().unwrap();

    wifisnap_cmd()
        .current_dir(dir.path())
        .args(["qr", "--ssid", "Home", "--password", "secret1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wifi-Home.png"));

    let png = std::fs::read(dir.path().join("wifi-Home.png")).unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn qr_respects_explicit_output_path() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("code.png");

    wifisnap_cmd()
        .args(["qr", "--ssid", "Home", "-o"])
        .arg(&out)
        .assert()
        .success();

    assert!(out.exists());
}

#[test]
fn qr_with_empty_ssid_fails() {
    wifisnap_cmd()
        .args(["qr", "--ssid", ""])
        .assert()
        .failure()
        .code(3);
}

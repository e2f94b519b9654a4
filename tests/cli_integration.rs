//! Integration tests for the keyratchet CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.
//! The passphrase is supplied through `KEYRATCHET_PASSPHRASE` so no
//! interactive prompt is needed.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

const PASSPHRASE: &str = "correct horse battery";

/// Helper: get a Command pointing at the keyratchet binary.
fn keyratchet() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("keyratchet").expect("binary should exist");
    cmd.env_remove("KEYRATCHET_PASSPHRASE")
        .env_remove("KEYRATCHET_LOG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_flag_shows_usage() {
    keyratchet()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Passphrase key wrapping"))
        .stdout(predicate::str::contains("wrap"))
        .stdout(predicate::str::contains("unwrap"))
        .stdout(predicate::str::contains("derive"))
        .stdout(predicate::str::contains("index"))
        .stdout(predicate::str::contains("forward"));
}

#[test]
fn version_flag_shows_version() {
    keyratchet()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("keyratchet"));
}

#[test]
fn no_args_shows_help() {
    keyratchet()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn derive_prints_hkdf_key() {
    let tmp = TempDir::new().unwrap();
    keyratchet()
        .args(["derive", "storage-encryption:alice"])
        .current_dir(tmp.path())
        .env("KEYRATCHET_PASSPHRASE", PASSPHRASE)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "nTMI8lW6AMaT/RgmP2KxJI45lIS2i6lBbILBR2crILE=",
        ));
}

#[test]
fn derive_rejects_unknown_tag_type() {
    keyratchet()
        .args(["derive", "signing:alice"])
        .env("KEYRATCHET_PASSPHRASE", PASSPHRASE)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid usage tag"));
}

#[test]
fn derive_rejects_short_passphrase() {
    let tmp = TempDir::new().unwrap();
    keyratchet()
        .args(["derive", "server-login:example.com"])
        .current_dir(tmp.path())
        .env("KEYRATCHET_PASSPHRASE", "too short")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 12 characters"));
}

#[test]
fn wrap_then_unwrap_roundtrip() {
    let tmp = TempDir::new().unwrap();
    let record = tmp.child("alice.json");
    // 32 zero bytes.
    let secret = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=";

    keyratchet()
        .args(["wrap", "--subject", "alice", "--secret", secret, "-o"])
        .arg(record.path())
        .current_dir(tmp.path())
        .env("KEYRATCHET_PASSPHRASE", PASSPHRASE)
        .assert()
        .success();

    record.assert(predicate::str::contains("\"hashAlgo\": \"scrypt-N16-R8-P1\""));
    record.assert(predicate::str::contains("\"aeadAlgo\": \"aes-256-gcm-siv\""));

    keyratchet()
        .arg("unwrap")
        .arg(record.path())
        .args(["--subject", "alice"])
        .current_dir(tmp.path())
        .env("KEYRATCHET_PASSPHRASE", PASSPHRASE)
        .assert()
        .success()
        .stdout(predicate::str::contains(secret));
}

#[test]
fn unwrap_with_wrong_passphrase_fails() {
    let tmp = TempDir::new().unwrap();
    let record = tmp.child("bob.json");

    keyratchet()
        .args(["wrap", "--subject", "bob", "-o"])
        .arg(record.path())
        .current_dir(tmp.path())
        .env("KEYRATCHET_PASSPHRASE", PASSPHRASE)
        .assert()
        .success();

    keyratchet()
        .arg("unwrap")
        .arg(record.path())
        .args(["--subject", "bob"])
        .current_dir(tmp.path())
        .env("KEYRATCHET_PASSPHRASE", "a different passphrase")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Authentication failed"));
}

#[test]
fn unwrap_refuses_unknown_algorithm() {
    let tmp = TempDir::new().unwrap();
    tmp.child(".keyratchet.toml")
        .write_str("default_subject = \"alice\"\n")
        .unwrap();
    let record = tmp.child("record.json");
    record
        .write_str(
            r#"{"hashAlgo":"pbkdf2-sha256","salt":"AAAAAAAAAAAAAAAAAAAAAA==","aeadAlgo":"aes-256-gcm-siv","wrappedKey":"AAAA"}"#,
        )
        .unwrap();

    keyratchet()
        .arg("unwrap")
        .arg(record.path())
        .current_dir(tmp.path())
        .env("KEYRATCHET_PASSPHRASE", PASSPHRASE)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported algorithm"));
}

#[test]
fn wrap_without_subject_fails() {
    let tmp = TempDir::new().unwrap();
    keyratchet()
        .arg("wrap")
        .current_dir(tmp.path())
        .env("KEYRATCHET_PASSPHRASE", PASSPHRASE)
        .assert()
        .failure()
        .stderr(predicate::str::contains("subject"));
}

#[test]
fn index_at_hour_boundary() {
    let tmp = TempDir::new().unwrap();
    keyratchet()
        .args(["index", "--at-ms", "3600000"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1970-01-01T01:00:00+00:00"));
}

#[test]
fn index_respects_configured_tick() {
    let tmp = TempDir::new().unwrap();
    tmp.child(".keyratchet.toml")
        .write_str("tick_ms = 0\n")
        .unwrap();

    keyratchet()
        .args(["index", "--at-ms", "0"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("tick_ms"));
}

#[test]
fn forward_advances_key() {
    keyratchet()
        .args([
            "forward",
            "--from",
            "100",
            "--key",
            "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=",
            "--to",
            "103",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "EncTVeRs1Hxx7Rch/VMZs4PMo6H5/OOqHIzTvTevINc=",
        ));
}

#[test]
fn forward_refuses_to_go_back() {
    keyratchet()
        .args([
            "forward",
            "--from",
            "100",
            "--key",
            "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=",
            "--to",
            "99",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("previous time index"));
}

#[test]
fn forward_rejects_short_key() {
    keyratchet()
        .args(["forward", "--from", "0", "--key", "AQID", "--to", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("32 bytes"));
}

#[test]
fn completions_for_bash() {
    keyratchet()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("keyratchet"));
}

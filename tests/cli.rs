//! Runs the built binary in situations that do not need a secret service daemon.

use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ensure-default-collection"))
        .args(args)
        .env("DBUS_SESSION_BUS_ADDRESS", "unix:path=/nonexistent/ensure-default-collection/bus")
        .env_remove("RUST_LOG")
        .output()
        .expect("binary should run")
}

#[test]
fn fails_when_daemon_unreachable() {
    let output = run(&[]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "nothing may be reported as created");
    assert!(!output.stderr.is_empty(), "a diagnostic is expected on stderr");
}

#[test]
fn dry_run_still_fails_when_daemon_unreachable() {
    let output = run(&["--dry-run"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn rejects_unknown_flags() {
    let output = run(&["--no-such-flag"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn prints_help() {
    let output = run(&["--help"]);
    assert!(output.status.success());
    let help = String::from_utf8_lossy(&output.stdout);
    assert!(help.contains("--alias"));
    assert!(help.contains("--dry-run"));
}

#[test]
fn rejects_empty_alias_without_contacting_daemon() {
    let output = run(&["--alias", ""]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

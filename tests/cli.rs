//! CLI surface tests (--version, --help, rejected arguments)

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;
use std::process::Command;

#[test]
fn test_version_flag() {
    let output = Command::new(get_binary_path())
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert!(stdout_of(&output).contains(PKG_VERSION));
}

#[test]
fn test_help_flag() {
    let output = Command::new(get_binary_path())
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert!(stdout_of(&output).contains("whatsapp-webhook"));
}

#[test]
fn test_extra_arguments_rejected_without_deploying() {
    let bin = create_temp_dir();
    let cwd = create_temp_dir();

    let output = test_command(bin.path(), cwd.path())
        .arg("some-other-function")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert!(!stdout_of(&output).contains("Preparing to deploy"));
}

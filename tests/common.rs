// tests/common.rs

use assert_cmd::prelude::*;
use std::process::Command;

/// Returns a `Command` for the built `repomix` binary.
pub fn repomix_cmd() -> Command {
    Command::cargo_bin("repomix").expect("failed to find repomix binary")
}

// tests/integration_test.rs

//! Integration tests for Codestrap
//!
//! These tests drive the full interactive flow through the public API with
//! fake environment, runner, and prompter implementations, so no package
//! manager is ever touched.

use codestrap::installer::Installer;
use codestrap::prompt::Prompter;
use codestrap::runner::CommandRunner;
use codestrap::steps::{INSTALL_STEPS, UNINSTALL_STEPS};
use codestrap::system::Environment;
use std::collections::VecDeque;

struct FakeEnv {
    os: &'static str,
    executables: Vec<&'static str>,
}

impl Environment for FakeEnv {
    fn os(&self) -> &str {
        self.os
    }

    fn is_root(&self) -> bool {
        false
    }

    fn has_executable(&self, name: &str) -> bool {
        self.executables.contains(&name)
    }
}

/// Runner that records commands and fails at one configurable index
struct FakeRunner {
    commands: Vec<String>,
    fail_at: Option<usize>,
}

impl CommandRunner for FakeRunner {
    fn run_step(&mut self, command: &str, _elevate: bool) -> i32 {
        let index = self.commands.len();
        self.commands.push(command.to_string());
        if self.fail_at == Some(index) {
            100
        } else {
            0
        }
    }
}

struct FakePrompter {
    answers: VecDeque<bool>,
    questions: Vec<String>,
}

impl Prompter for FakePrompter {
    fn confirm(&mut self, question: &str) -> codestrap::Result<bool> {
        self.questions.push(question.to_string());
        Ok(self.answers.pop_front().expect("flow asked an unscripted question"))
    }
}

fn installer_for(
    os: &'static str,
    executables: Vec<&'static str>,
    answers: &[bool],
    fail_at: Option<usize>,
) -> Installer<FakeEnv, FakeRunner, FakePrompter> {
    Installer::new(
        FakeEnv { os, executables },
        FakeRunner {
            commands: Vec::new(),
            fail_at,
        },
        FakePrompter {
            answers: answers.iter().copied().collect(),
            questions: Vec::new(),
        },
    )
}

#[test]
fn test_full_install_session() {
    let mut installer = installer_for("linux", vec!["wget", "gpg", "apt"], &[true], None);

    let code = installer.run().unwrap();
    assert_eq!(code, 0, "All-green install should exit 0");

    let expected: Vec<&str> = INSTALL_STEPS.iter().map(|s| s.command).collect();
    assert_eq!(installer.runner().commands, expected, "Install steps run in declared order");
    assert_eq!(installer.prompter().questions.len(), 1);
    assert!(installer.prompter().questions[0].contains("install VS Code"));
}

#[test]
fn test_full_uninstall_session() {
    let mut installer =
        installer_for("linux", vec!["wget", "gpg", "apt", "code"], &[true], None);

    let code = installer.run().unwrap();
    assert_eq!(code, 0, "All-green uninstall should exit 0");

    let expected: Vec<&str> = UNINSTALL_STEPS.iter().map(|s| s.command).collect();
    assert_eq!(installer.runner().commands, expected);
    assert!(installer.prompter().questions[0].contains("uninstall VS Code"));
}

#[test]
fn test_non_linux_platform_is_rejected_before_any_step() {
    let mut installer = installer_for("windows", vec!["wget", "gpg", "apt"], &[], None);

    let code = installer.run().unwrap();
    assert_eq!(code, 1, "Incompatible platform should exit 1");
    assert!(
        installer.runner().commands.is_empty(),
        "No steps may run on an incompatible platform"
    );
    assert!(
        installer.prompter().questions.is_empty(),
        "No prompt should be offered on an incompatible platform"
    );
}

#[test]
fn test_installed_host_never_runs_install_sequence() {
    // Target executable present: the flow must offer uninstall, and even
    // when accepted, only uninstall commands may run
    let mut installer =
        installer_for("linux", vec!["wget", "gpg", "apt", "code"], &[true], None);

    installer.run().unwrap();
    for command in &installer.runner().commands {
        assert!(
            !command.contains("packages.microsoft.com/keys"),
            "Install-only command ran during an uninstall session: {}",
            command
        );
    }
    assert_eq!(installer.runner().commands.len(), UNINSTALL_STEPS.len());
}

#[test]
fn test_declining_install_exits_zero_with_no_commands() {
    let mut installer = installer_for("linux", vec!["wget", "gpg", "apt"], &[false], None);

    let code = installer.run().unwrap();
    assert_eq!(code, 0, "Declining is not a failure");
    assert!(installer.runner().commands.is_empty());
}

#[test]
fn test_declining_uninstall_exits_zero_with_no_commands() {
    let mut installer =
        installer_for("linux", vec!["wget", "gpg", "apt", "code"], &[false], None);

    let code = installer.run().unwrap();
    assert_eq!(code, 0);
    assert!(installer.runner().commands.is_empty());
}

#[test]
fn test_key_installation_failure_cuts_off_remaining_steps() {
    // Fourth install step fails: steps 5-7 are never reached
    let mut installer = installer_for("linux", vec!["wget", "gpg", "apt"], &[true], Some(3));

    let code = installer.run().unwrap();
    assert_eq!(code, 1, "A failed sequence should exit 1");
    assert_eq!(installer.runner().commands.len(), 4);
    assert_eq!(
        installer.runner().commands.last().unwrap(),
        INSTALL_STEPS[3].command
    );
}

#[test]
fn test_missing_tools_warn_then_proceed_on_yes() {
    // wget and gpg absent: the advisory prompt fires first, then the
    // install confirmation
    let mut installer = installer_for("linux", vec!["apt"], &[true, true], None);

    let code = installer.run().unwrap();
    assert_eq!(code, 0);
    assert_eq!(installer.prompter().questions.len(), 2);
    assert!(installer.prompter().questions[0].contains("missing dependencies"));
    assert!(installer.prompter().questions[1].contains("install VS Code"));
    // The sequence itself is what installs prerequisites
    assert_eq!(installer.runner().commands.len(), INSTALL_STEPS.len());
}

#[test]
fn test_missing_tools_decline_aborts_run() {
    let mut installer = installer_for("linux", vec![], &[false], None);

    let code = installer.run().unwrap();
    assert_eq!(code, 1);
    assert!(installer.runner().commands.is_empty());
}

// src/runner.rs

//! Shell command execution
//!
//! Steps run through `sh -c` so pipes and redirection embedded in a step
//! string work as written. Stdout streams to the console line by line;
//! stderr is captured and only surfaced when the command fails. A failing
//! command is reported through its exit code, never as an error value.

use crate::error::Result;
use crate::ui;
use std::borrow::Cow;
use std::io::{BufRead, BufReader, Read};
use std::process::{Command, Stdio};
use tracing::{error, info};

/// Capability seam for executing one step command
pub trait CommandRunner {
    /// Run a command, returning its exit code (1 for execution failures)
    fn run_step(&mut self, command: &str, elevate: bool) -> i32;
}

/// Runner backed by the host shell
pub struct ShellRunner {
    elevated: bool,
}

impl ShellRunner {
    /// Create a runner; `elevated` reflects whether the process is root
    pub fn new(elevated: bool) -> Self {
        Self { elevated }
    }

    fn execute(&self, command: &str) -> Result<i32> {
        info!("Executing command: {}", command);
        ui::print_command(command);

        let mut child = Command::new("sh")
            .arg("-c")
            .arg(command)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        // Stream stdout as it arrives; one command runs to completion
        // before the next begins
        if let Some(stdout) = child.stdout.take() {
            for line in BufReader::new(stdout).lines() {
                println!("{}", line?);
            }
        }

        let mut stderr_text = String::new();
        if let Some(mut stderr) = child.stderr.take() {
            stderr.read_to_string(&mut stderr_text)?;
        }

        let status = child.wait()?;
        // Signal-killed children have no code; treat as generic failure
        let code = status.code().unwrap_or(1);

        if code != 0 {
            error!("Command failed with error: {}", stderr_text.trim_end());
            ui::print_command_error(&stderr_text);
        }

        Ok(code)
    }
}

impl CommandRunner for ShellRunner {
    fn run_step(&mut self, command: &str, elevate: bool) -> i32 {
        let command = elevate_command(command, elevate, self.elevated);

        match self.execute(&command) {
            Ok(code) => code,
            Err(e) => {
                error!("Exception occurred: {}", e);
                ui::print_command_error(&e.to_string());
                1
            }
        }
    }
}

/// Prefix `sudo` when elevation is requested but not already in effect
fn elevate_command<'a>(command: &'a str, elevate: bool, already_root: bool) -> Cow<'a, str> {
    if elevate && !already_root && !command.starts_with("sudo") {
        Cow::Owned(format!("sudo {}", command))
    } else {
        Cow::Borrowed(command)
    }
}

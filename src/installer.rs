// src/installer.rs

//! Top-level install/uninstall flow
//!
//! The orchestrator owns the three capability seams (environment probes,
//! command runner, prompter) and walks the linear flow: compatibility
//! check, install-state detection, confirmation, sequence execution,
//! report. Everything is synchronous and runs in declared order.

use crate::prompt::Prompter;
use crate::runner::CommandRunner;
use crate::steps::{Step, INSTALL_STEPS, REQUIRED_TOOLS, TARGET_EXECUTABLE, UNINSTALL_STEPS};
use crate::system::Environment;
use crate::ui::{self, Status};
use crate::Result;
use tracing::{error, info, warn};

/// The single supported platform identity
const SUPPORTED_OS: &str = "linux";

/// Orchestrator for the interactive install/uninstall session
pub struct Installer<E, R, P> {
    env: E,
    runner: R,
    prompter: P,
}

impl<E, R, P> Installer<E, R, P>
where
    E: Environment,
    R: CommandRunner,
    P: Prompter,
{
    pub fn new(env: E, runner: R, prompter: P) -> Self {
        Self {
            env,
            runner,
            prompter,
        }
    }

    /// Access the command runner (useful for inspecting fakes in tests)
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Access the prompter (useful for inspecting fakes in tests)
    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Pre-flight platform and dependency check
    ///
    /// Non-Linux hosts fail outright. Missing tools only produce a warning
    /// plus an advisory prompt: the install sequence installs prerequisites
    /// unconditionally, so a "yes" performs no separate action, while a
    /// "no" aborts the run.
    pub fn check_compatibility(&mut self) -> Result<bool> {
        let os = self.env.os();
        if os != SUPPORTED_OS {
            ui::print_status(
                &format!("This installer only supports Linux (detected: {})", os),
                Status::Error,
            );
            return Ok(false);
        }

        let missing: Vec<&str> = REQUIRED_TOOLS
            .iter()
            .copied()
            .filter(|tool| !self.env.has_executable(tool))
            .collect();

        if !missing.is_empty() {
            let list = missing.join(", ");
            warn!("Missing required dependencies: {}", list);
            ui::print_status(
                &format!("Missing required dependencies: {}", list),
                Status::Warning,
            );
            return self
                .prompter
                .confirm("Would you like to install missing dependencies?");
        }

        Ok(true)
    }

    /// True iff the target executable resolves on the search path
    pub fn is_installed(&self) -> bool {
        self.env.has_executable(TARGET_EXECUTABLE)
    }

    /// Run steps in order, halting at the first non-zero exit code
    pub fn run_sequence(&mut self, steps: &[Step]) -> bool {
        for step in steps {
            ui::print_step_header(step.name);
            let code = self.runner.run_step(step.command, true);
            if code != 0 {
                error!("Sequence halted at step '{}' (exit code {})", step.name, code);
                ui::print_status(&format!("Failed during: {}", step.name), Status::Error);
                return false;
            }
        }
        true
    }

    /// Execute the install sequence
    pub fn install(&mut self) -> bool {
        info!("Starting install sequence");
        ui::print_title("Starting VS Code installation...");
        self.run_sequence(INSTALL_STEPS)
    }

    /// Execute the uninstall sequence
    pub fn uninstall(&mut self) -> bool {
        info!("Starting uninstall sequence");
        ui::print_title("Uninstalling VS Code...");
        self.run_sequence(UNINSTALL_STEPS)
    }

    /// Walk the whole interactive flow, returning the process exit code
    ///
    /// 0 means success or a declined action; 1 means an incompatible
    /// platform or a failed sequence. Unexpected errors propagate to the
    /// caller for the generic top-level handler.
    pub fn run(&mut self) -> Result<i32> {
        ui::print_banner();

        if !self.check_compatibility()? {
            return Ok(1);
        }

        if self.is_installed() {
            ui::print_status(
                "Visual Studio Code is already installed on this system.",
                Status::Info,
            );
            if self.prompter.confirm("Would you like to uninstall VS Code?")? {
                if self.uninstall() {
                    ui::print_status("VS Code has been successfully uninstalled!", Status::Success);
                } else {
                    ui::print_status("Failed to uninstall VS Code.", Status::Error);
                    return Ok(1);
                }
            }
            // Declining leaves the installation untouched; nothing to report
        } else {
            ui::print_status("Visual Studio Code is not installed.", Status::Info);
            if self.prompter.confirm("Would you like to install VS Code?")? {
                if self.install() {
                    ui::print_status("VS Code has been successfully installed!", Status::Success);
                    ui::print_status("\nYou can launch VS Code by:", Status::Plain);
                    ui::print_status("   1. Typing 'code' in the terminal", Status::Plain);
                    ui::print_status("   2. Finding it in your application menu", Status::Plain);
                } else {
                    ui::print_status("Failed to install VS Code.", Status::Error);
                    return Ok(1);
                }
            } else {
                ui::print_status("Installation cancelled by user.", Status::Info);
            }
        }

        Ok(0)
    }
}

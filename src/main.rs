// src/main.rs

use anyhow::Result;
use clap::Parser;
use codestrap::installer::Installer;
use codestrap::log::SessionLog;
use codestrap::prompt::StdinPrompter;
use codestrap::runner::ShellRunner;
use codestrap::system::{Environment, HostEnvironment};
use codestrap::ui::{self, Status};
use std::process::ExitCode;
use tracing::error;

#[derive(Parser)]
#[command(name = "codestrap")]
#[command(author, version, about = "Interactive installer and uninstaller for Visual Studio Code", long_about = None)]
struct Cli {}

fn main() -> ExitCode {
    // No flags or arguments; parsing still provides --help and --version
    let _cli = Cli::parse();

    // SIGINT anywhere in the run maps to a deliberate cancellation
    if ctrlc::set_handler(|| {
        println!("\nOperation cancelled by user.");
        std::process::exit(1);
    })
    .is_err()
    {
        ui::print_status("Failed to install the interrupt handler.", Status::Error);
        return ExitCode::FAILURE;
    }

    // One timestamp-named log file per run, created before anything else
    let session_log = match SessionLog::init() {
        Ok(log) => log,
        Err(e) => {
            ui::print_status(&e.to_string(), Status::Error);
            return ExitCode::FAILURE;
        }
    };

    match run() {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            // Full detail goes to the log; the console gets a generic line
            error!("Unexpected error: {:#}", e);
            ui::print_status(
                &format!(
                    "An unexpected error occurred. Check {} for details.",
                    session_log.path().display()
                ),
                Status::Error,
            );
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<i32> {
    let env = HostEnvironment;
    let runner = ShellRunner::new(env.is_root());
    let mut installer = Installer::new(env, runner, StdinPrompter);
    Ok(installer.run()?)
}

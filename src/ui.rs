// src/ui.rs

//! Console output styling
//!
//! All user-facing console text goes through this module so color handling
//! stays at the output boundary. Detailed diagnostics never print here;
//! those belong in the session log.

use colored::Colorize;

/// Visual style for a console status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Info,
    Success,
    Warning,
    Error,
    Plain,
}

impl Status {
    /// The bracketed tag text for this status, without styling
    pub fn tag(&self) -> &'static str {
        match self {
            Status::Info => "INFO",
            Status::Success => "SUCCESS",
            Status::Warning => "WARNING",
            Status::Error => "ERROR",
            Status::Plain => "",
        }
    }

    fn styled_tag(&self) -> String {
        let bracketed = format!("[{}]", self.tag());
        match self {
            Status::Info => bracketed.green().to_string(),
            Status::Success => bracketed.green().bold().to_string(),
            Status::Warning => bracketed.yellow().to_string(),
            Status::Error => bracketed.red().to_string(),
            Status::Plain => String::new(),
        }
    }
}

/// Print a tagged status line, e.g. `[INFO] message`
pub fn print_status(message: &str, status: Status) {
    if status == Status::Plain {
        println!("{}", message);
    } else {
        println!("{} {}", status.styled_tag(), message);
    }
}

/// Print the startup banner
pub fn print_banner() {
    let banner = "\n\
        ╔═══════════════════════════════════════════╗\n\
        ║     Visual Studio Code Installer Tool     ║\n\
        ╚═══════════════════════════════════════════╝\n";
    println!("{}", banner.blue().bold());
}

/// Print the per-step header shown before a step executes
pub fn print_step_header(name: &str) {
    println!("\n{}", format!("► {}...", name).blue());
}

/// Echo a command line as it is about to run
pub fn print_command(command: &str) {
    println!("{}", format!("Running: {}", command).blue());
}

/// Print a section title, e.g. "Starting VS Code installation..."
pub fn print_title(text: &str) {
    println!("\n{}", text.bold());
}

/// Print captured stderr from a failed command
pub fn print_command_error(stderr: &str) {
    println!("{}", format!("Error: {}", stderr.trim_end()).red());
}

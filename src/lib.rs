// src/lib.rs

//! Codestrap
//!
//! Interactive installer and uninstaller for Visual Studio Code on
//! Debian-based Linux. Drives the host package manager through a fixed,
//! strictly sequential list of shell steps.
//!
//! # Architecture
//!
//! - Capability seams: OS probing, command execution, and user prompting
//!   sit behind traits so the top-level flow is testable without apt
//! - Step sequences: hardcoded ordered command lists, halted at the first
//!   non-zero exit code, never rolled back
//! - Session log: one timestamped append-only file per run; detailed
//!   diagnostics go there, status tags go to the console

mod error;
pub mod installer;
pub mod log;
pub mod prompt;
pub mod runner;
pub mod steps;
pub mod system;
pub mod ui;

pub use error::{Error, Result};

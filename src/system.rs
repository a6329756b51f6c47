// src/system.rs

//! Host environment probes
//!
//! OS identity, privilege level, and executable lookup sit behind the
//! `Environment` trait so the top-level flow can be exercised with fakes.

/// Read-only view of the process environment
pub trait Environment {
    /// OS identity, e.g. "linux", "macos", "windows"
    fn os(&self) -> &str;

    /// True when the process runs with an effective uid of 0
    fn is_root(&self) -> bool;

    /// True when `name` resolves to an executable on the search path
    fn has_executable(&self, name: &str) -> bool;
}

/// Environment backed by the real host
pub struct HostEnvironment;

impl Environment for HostEnvironment {
    fn os(&self) -> &str {
        std::env::consts::OS
    }

    fn is_root(&self) -> bool {
        nix::unistd::geteuid().is_root()
    }

    fn has_executable(&self, name: &str) -> bool {
        which::which(name).is_ok()
    }
}

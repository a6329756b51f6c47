// src/steps.rs

//! The hardcoded install and uninstall sequences
//!
//! Steps run in declared order through the host shell; embedded pipes and
//! redirection in a command string are deliberate. A sequence halts at the
//! first non-zero exit code and nothing is rolled back.

/// One named shell command within a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub name: &'static str,
    pub command: &'static str,
}

/// Install sequence: register the Microsoft repository and install `code`
pub const INSTALL_STEPS: &[Step] = &[
    Step {
        name: "Updating package lists",
        command: "apt update",
    },
    Step {
        name: "Installing prerequisites",
        command: "apt install -y software-properties-common apt-transport-https wget gpg",
    },
    Step {
        name: "Downloading Microsoft GPG key",
        command: "wget -qO- https://packages.microsoft.com/keys/microsoft.asc | gpg --dearmor > packages.microsoft.gpg",
    },
    Step {
        name: "Installing GPG key",
        command: "install -D -o root -g root -m 644 packages.microsoft.gpg /etc/apt/keyrings/packages.microsoft.gpg",
    },
    Step {
        name: "Adding VS Code repository",
        command: r#"sh -c 'echo "deb [arch=amd64 signed-by=/etc/apt/keyrings/packages.microsoft.gpg] https://packages.microsoft.com/repos/vscode stable main" > /etc/apt/sources.list.d/vscode.list'"#,
    },
    Step {
        name: "Updating package lists",
        command: "apt update",
    },
    Step {
        name: "Installing VS Code",
        command: "apt install -y code",
    },
];

/// Uninstall sequence: purge `code` and remove the repository artifacts
pub const UNINSTALL_STEPS: &[Step] = &[
    Step {
        name: "Removing VS Code package",
        command: "apt remove --purge -y code",
    },
    Step {
        name: "Removing VS Code repository",
        command: "rm -f /etc/apt/sources.list.d/vscode.list",
    },
    Step {
        name: "Removing GPG key",
        command: "rm -f /etc/apt/keyrings/packages.microsoft.gpg",
    },
    Step {
        name: "Cleaning up",
        command: "apt autoremove -y",
    },
];

/// The executable whose presence on PATH means VS Code is installed
pub const TARGET_EXECUTABLE: &str = "code";

/// External tools the sequences rely on
pub const REQUIRED_TOOLS: &[&str] = &["wget", "gpg", "apt"];

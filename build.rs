// build.rs

use clap::Command;
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

fn build_cli() -> Command {
    Command::new("codestrap")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Codestrap Contributors")
        .about("Interactive installer and uninstaller for Visual Studio Code on Debian-based Linux")
        .after_help(
            "codestrap takes no arguments; it detects whether VS Code is \
             installed and interactively offers to install or uninstall it.",
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Create man directory
    let out_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).expect("Failed to create man directory");

    // Generate main man page
    let cmd = build_cli();
    let man = Man::new(cmd);
    let mut buffer = Vec::new();
    man.render(&mut buffer).expect("Failed to render man page");

    let man_path = man_dir.join("codestrap.1");
    fs::write(&man_path, buffer).expect("Failed to write man page");

    println!("cargo:warning=Man page generated at {}", man_path.display());
}

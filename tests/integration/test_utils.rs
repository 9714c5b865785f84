//! Shared test utilities for integration tests
//!
//! Builds file trees from `(relative path, content)` pairs and runs the binary
//! with an isolated configuration environment.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Write each `(relative path, content)` pair under `root`, creating parent directories
pub fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (relative, content) in files {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
}

pub fn read(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative)).unwrap()
}

/// Run the licensify binary with HOME and XDG_CONFIG_HOME pointed into `env_dir`
/// so no real global config is picked up.
pub fn run_licensify(env_dir: &TempDir, args: &[&str]) -> Output {
    let home = env_dir.path().join("home");
    let config_home = env_dir.path().join("config");
    fs::create_dir_all(&home).unwrap();
    fs::create_dir_all(&config_home).unwrap();

    Command::new(env!("CARGO_BIN_EXE_licensify"))
        .env("HOME", home.as_os_str())
        .env("XDG_CONFIG_HOME", config_home.as_os_str())
        .env_remove("LICENSIFY_LOG")
        .env_remove("LICENSIFY_LOG_FORMAT")
        .env_remove("LICENSIFY_LOG_OUTPUT")
        .args(args)
        .output()
        .unwrap()
}

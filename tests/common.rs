use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

pub fn logbook() -> Command {
    cargo_bin_cmd!("logbook")
}

/// Write a minimal config file pointing at `journal_dir` and return its
/// path. The journal directory itself is created lazily by the commands.
pub fn write_config(dir: &Path, journal_dir: &Path) -> PathBuf {
    let config_path = dir.join("config.toml");
    let content = format!("journal_dir = {:?}\n", journal_dir.display().to_string());
    fs::write(&config_path, content).expect("failed to write test config");
    config_path
}

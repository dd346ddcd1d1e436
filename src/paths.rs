// ABOUTME: XDG Base Directory paths for locating the sitepulse config file
// ABOUTME: Falls back to the current directory when no home directory is available

use directories::ProjectDirs;
use std::path::PathBuf;

/// Application identifier for XDG directories
const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "sitepulse";
const APPLICATION: &str = "sitepulse";

/// Name of the config file, both in the working directory and the XDG config dir
pub const CONFIG_FILE_NAME: &str = "sitepulse.toml";

pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the config directory path (e.g., ~/.config/sitepulse/)
pub fn config_dir() -> PathBuf {
    project_dirs()
        .map(|p| p.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// e.g., ~/.config/sitepulse/sitepulse.toml
pub fn config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}

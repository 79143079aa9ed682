use std::path::{Path, PathBuf};

use directories_next::{ProjectDirs, UserDirs};

const SETTINGS_FILE: &str = "settings.toml";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("io", "ImageStudio", "image-studio")
}

/// Per-user configuration directory (holds `settings.toml`).
pub fn project_config_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().to_path_buf())
}

/// Per-user cache directory (holds the log files).
pub fn user_cache_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.cache_dir().to_path_buf())
}

pub fn settings_path() -> Option<PathBuf> {
    project_config_dir().map(|d| d.join(SETTINGS_FILE))
}

/// Where downloads land when the settings do not say otherwise: the user's
/// download folder, else the current directory.
pub fn default_download_dir() -> PathBuf {
    UserDirs::new()
        .and_then(|u| u.download_dir().map(Path::to_path_buf))
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

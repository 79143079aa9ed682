pub mod config_dirs;
pub mod keybinds;
pub mod read_settings;
pub mod runtime_keybinds;
pub mod write_settings;

use thiserror::Error;

// Re-export commonly used types/functions for convenience
pub use config_dirs::{default_download_dir, project_config_dir, settings_path, user_cache_dir};
pub use keybinds::*;
pub use read_settings::{load_settings, load_settings_from, parse_settings};
pub use write_settings::{save_settings, save_settings_to, to_toml_string, BackendKind, Settings};

/// Errors raised while loading, saving or validating settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("cannot serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("no configuration directory available on this system")]
    NoConfigDir,

    #[error("invalid settings: {0}")]
    Invalid(String),
}

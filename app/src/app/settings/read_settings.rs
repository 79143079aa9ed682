use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use super::config_dirs::settings_path;
use super::write_settings::Settings;
use super::SettingsError;

/// Parse settings from TOML text. Missing fields take their defaults.
pub fn parse_settings(text: &str) -> Result<Settings, SettingsError> {
    Ok(toml::from_str(text)?)
}

/// Load settings from `path`. A missing file yields the defaults.
pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    match fs::read_to_string(path) {
        Ok(text) => {
            debug!(path = %path.display(), "loading settings");
            parse_settings(&text)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no settings file, using defaults");
            Ok(Settings::default())
        }
        Err(e) => Err(e.into()),
    }
}

/// Load settings from the per-user config directory.
pub fn load_settings() -> Result<Settings, SettingsError> {
    let path = settings_path().ok_or(SettingsError::NoConfigDir)?;
    load_settings_from(&path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::settings::BackendKind;
    use assert_fs::prelude::*;

    #[test]
    fn empty_text_is_all_defaults() {
        assert_eq!(parse_settings("").unwrap(), Settings::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let s = parse_settings("generation_delay_ms = 10\nbackend = \"http\"\nendpoint = \"http://x\"\n").unwrap();
        assert_eq!(s.generation_delay_ms, 10);
        assert_eq!(s.backend, BackendKind::Http);
        assert_eq!(s.theme, "dark");
        assert_eq!(s.candidates.len(), 5);
    }

    #[test]
    fn keybind_table_is_read() {
        let s = parse_settings("[keybinds]\ndownload = [\"F9\", \"Ctrl-s\"]\n").unwrap();
        assert_eq!(s.keybinds.get("download").unwrap(), &vec!["F9".to_string(), "Ctrl-s".to_string()]);
    }

    #[test]
    fn garbage_is_a_parse_error() {
        assert!(matches!(parse_settings("delay = ["), Err(SettingsError::Parse(_))));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let temp = assert_fs::TempDir::new().unwrap();
        let s = load_settings_from(&temp.child("nope.toml").path()).unwrap();
        assert_eq!(s, Settings::default());
    }
}

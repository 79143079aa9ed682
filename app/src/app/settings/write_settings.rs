use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::config_dirs::{default_download_dir, settings_path};
use super::SettingsError;
use crate::fs_op::helpers::atomic_write;
use crate::generation::catalog::DEFAULT_CANDIDATES;

/// Which `ImageBackend` the studio talks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Simulated,
    Http,
}

/// User settings persisted as `settings.toml`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Wait of the simulated backend, in milliseconds.
    pub generation_delay_ms: u64,
    pub backend: BackendKind,
    /// URL the HTTP backend posts prompts to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    pub request_timeout_secs: u64,
    /// Pool the simulated backend picks from.
    pub candidates: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_dir: Option<PathBuf>,
    pub theme: String,
    /// Fixed seed for the simulated backend's random pick.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Action name -> keys, overriding the built-in bindings.
    pub keybinds: BTreeMap<String, Vec<String>>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            generation_delay_ms: 3000,
            backend: BackendKind::Simulated,
            endpoint: None,
            request_timeout_secs: 60,
            candidates: DEFAULT_CANDIDATES.iter().map(|s| s.to_string()).collect(),
            download_dir: None,
            theme: "dark".to_string(),
            seed: None,
            keybinds: BTreeMap::new(),
        }
    }
}

impl Settings {
    pub fn generation_delay(&self) -> Duration {
        Duration::from_millis(self.generation_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn resolved_download_dir(&self) -> PathBuf {
        self.download_dir.clone().unwrap_or_else(default_download_dir)
    }
}

pub fn to_toml_string(settings: &Settings) -> Result<String, SettingsError> {
    Ok(toml::to_string_pretty(settings)?)
}

/// Write settings to `path` atomically.
pub fn save_settings_to(settings: &Settings, path: &Path) -> Result<(), SettingsError> {
    let text = to_toml_string(settings)?;
    atomic_write(path, text.as_bytes())?;
    info!(path = %path.display(), "settings saved");
    Ok(())
}

/// Write settings to the per-user config directory.
pub fn save_settings(settings: &Settings) -> Result<(), SettingsError> {
    let path = settings_path().ok_or(SettingsError::NoConfigDir)?;
    save_settings_to(settings, &path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::settings::load_settings_from;
    use assert_fs::prelude::*;

    #[test]
    fn saved_file_loads_back_equal() {
        let temp = assert_fs::TempDir::new().unwrap();
        let path = temp.child("nested/settings.toml");
        let mut s = Settings::default();
        s.generation_delay_ms = 250;
        s.seed = Some(9);
        s.download_dir = Some(PathBuf::from("/tmp/imgs"));
        s.keybinds.insert("quit".to_string(), vec!["F10".to_string()]);

        save_settings_to(&s, path.path()).unwrap();
        path.assert(predicates::str::contains("generation_delay_ms = 250"));
        assert_eq!(load_settings_from(path.path()).unwrap(), s);
    }

    #[test]
    fn durations_and_dirs() {
        let mut s = Settings::default();
        s.request_timeout_secs = 0;
        assert_eq!(s.request_timeout(), Duration::from_secs(1));
        assert_eq!(s.generation_delay(), Duration::from_millis(3000));
        s.download_dir = Some(PathBuf::from("/x"));
        assert_eq!(s.resolved_download_dir(), PathBuf::from("/x"));
    }
}

use std::path::PathBuf;

use clap::Parser;

use crate::app::settings::{
    load_settings, load_settings_from, save_settings, save_settings_to, settings_path, BackendKind, Settings,
    SettingsError,
};

/// Command line of the `image-studio` binary. Every option overrides the
/// matching field of `settings.toml`.
#[derive(Parser, Debug)]
#[command(name = "image-studio", version, about = "Terminal AI image studio: type a prompt, generate an image, keep your recent prompts.")]
pub struct Cli {
    /// Settings file to use instead of the per-user one.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Delay of the simulated backend in milliseconds.
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Seed for the simulated backend's random pick.
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Directory downloaded images are written to.
    #[arg(long, value_name = "DIR")]
    pub download_dir: Option<PathBuf>,

    /// Use the HTTP backend at this URL.
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    #[arg(long, value_parser = ["dark", "light"])]
    pub theme: Option<String>,

    /// Log filter, e.g. `debug` or `image_studio=trace` (RUST_LOG wins).
    #[arg(long, value_name = "FILTER", default_value = "info")]
    pub log_level: String,

    /// Print the effective settings as TOML and exit.
    #[arg(long)]
    pub print_config: bool,

    /// Save the effective settings to the settings file and exit.
    #[arg(long, conflicts_with = "print_config")]
    pub write_config: bool,
}

impl Cli {
    /// Load the settings file named by `--config`, or the per-user one.
    /// A system without a config directory just gets the defaults.
    pub fn load_settings(&self) -> Result<Settings, SettingsError> {
        match &self.config {
            Some(path) => load_settings_from(path),
            None => match load_settings() {
                Err(SettingsError::NoConfigDir) => Ok(Settings::default()),
                other => other,
            },
        }
    }

    /// Write `settings` where `load_settings` would read them from and
    /// return that path.
    pub fn save_settings(&self, settings: &Settings) -> Result<PathBuf, SettingsError> {
        match &self.config {
            Some(path) => {
                save_settings_to(settings, path)?;
                Ok(path.clone())
            }
            None => {
                save_settings(settings)?;
                settings_path().ok_or(SettingsError::NoConfigDir)
            }
        }
    }

    /// Layer the command-line overrides on top of `settings`.
    pub fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(ms) = self.delay_ms {
            settings.generation_delay_ms = ms;
        }
        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
        if let Some(dir) = &self.download_dir {
            settings.download_dir = Some(dir.clone());
        }
        if let Some(endpoint) = &self.endpoint {
            settings.backend = BackendKind::Http;
            settings.endpoint = Some(endpoint.clone());
        }
        if let Some(theme) = &self.theme {
            settings.theme = theme.clone();
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_win_over_file_values() {
        let cli = Cli::parse_from([
            "image-studio",
            "--delay-ms",
            "5",
            "--seed",
            "3",
            "--endpoint",
            "http://localhost:8080/gen",
            "--theme",
            "light",
        ]);
        let s = cli.apply(Settings::default());
        assert_eq!(s.generation_delay_ms, 5);
        assert_eq!(s.seed, Some(3));
        assert_eq!(s.backend, BackendKind::Http);
        assert_eq!(s.endpoint.as_deref(), Some("http://localhost:8080/gen"));
        assert_eq!(s.theme, "light");
    }

    #[test]
    fn no_flags_keeps_settings() {
        let cli = Cli::parse_from(["image-studio"]);
        assert_eq!(cli.log_level, "info");
        assert_eq!(cli.apply(Settings::default()), Settings::default());
    }

    #[test]
    fn write_config_goes_to_config_path() {
        let temp = assert_fs::TempDir::new().unwrap();
        let path = temp.path().join("conf/settings.toml");
        let cli = Cli::parse_from(["image-studio", "--write-config", "--delay-ms", "40", "--config", path.to_str().unwrap()]);
        let settings = cli.apply(cli.load_settings().unwrap());
        assert_eq!(cli.save_settings(&settings).unwrap(), path);
        assert_eq!(load_settings_from(&path).unwrap().generation_delay_ms, 40);
    }

    #[test]
    fn print_and_write_are_exclusive() {
        assert!(Cli::try_parse_from(["image-studio", "--print-config", "--write-config"]).is_err());
    }

    #[test]
    fn unknown_theme_is_rejected() {
        assert!(Cli::try_parse_from(["image-studio", "--theme", "neon"]).is_err());
    }
}

//! AIstylist Library
//!
//! A terminal client for the AIstylist fashion assistant: outfit
//! recommendations, stylist chat and a personal closet, backed by the
//! AIstylist web service.

use std::path::PathBuf;

use stylist_app::config::{self, CliOverrides};
use stylist_backend::HttpBackend;
use stylist_core::prelude::*;

pub use stylist_app::config::Settings;

/// What the command line asked for
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Config file to read instead of the default location
    pub config_path: Option<PathBuf>,
    pub overrides: CliOverrides,
}

/// Main application entry point
pub async fn run(options: LaunchOptions) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since TUI owns stdout)
    stylist_core::logging::init()?;

    let settings = load_settings(&options);
    info!("Server: {}", settings.server.base_url);

    let backend = HttpBackend::new(settings.backend_config())?;
    let result = stylist_tui::run(settings, backend).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }
    result
}

/// Settings from the config file with command-line overrides applied
pub fn load_settings(options: &LaunchOptions) -> Settings {
    let path = options
        .config_path
        .clone()
        .or_else(config::default_config_path);

    let mut settings = match path {
        Some(path) => {
            info!("Config file: {}", path.display());
            config::load_settings(&path)
        }
        None => Settings::default(),
    };
    settings.apply_overrides(&options.overrides);
    settings
}

/// Write a default config file, returning where it went
pub fn init_config(config_path: Option<PathBuf>) -> Result<PathBuf> {
    let path = config_path
        .or_else(config::default_config_path)
        .ok_or_else(|| Error::config("No config directory on this platform"))?;
    config::init_config_file(&path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_overrides_win_over_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nbase_url = \"http://stylist.local:5000\"\n").unwrap();

        let options = LaunchOptions {
            config_path: Some(path),
            overrides: CliOverrides {
                server: Some("http://127.0.0.1:9000".to_string()),
                cookie: Some("abc123".to_string()),
            },
        };
        let settings = load_settings(&options);

        assert_eq!(settings.server.base_url, "http://127.0.0.1:9000");
        assert_eq!(settings.server.session_cookie.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_init_config_writes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("aistylist").join("config.toml");

        let written = init_config(Some(path.clone())).unwrap();

        assert_eq!(written, path);
        let settings = config::load_settings(&path);
        assert_eq!(settings, Settings::default());
    }
}

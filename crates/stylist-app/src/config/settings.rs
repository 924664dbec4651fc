//! Loading `config.toml` and applying command-line overrides

use std::path::{Path, PathBuf};

use stylist_backend::HttpBackendConfig;
use stylist_core::prelude::*;

use super::types::Settings;

const APP_DIR: &str = "aistylist";
const CONFIG_FILENAME: &str = "config.toml";

/// `<config_dir>/aistylist/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`
///
/// A missing file yields defaults. An unreadable or unparsable file is logged
/// and also yields defaults; a broken config never stops the app.
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config if none exists yet
pub fn init_config_file(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", dir, e)))?;
    }

    let default_content = r#"# AIstylist Configuration

[server]
base_url = "http://localhost:5000"
# session_cookie = "paste the value of the 'session' cookie after signing in"
timeout_secs = 60

[profile]
name = ""

[behavior]
default_occasion = "casual"
location = "Vancouver"
toast_duration_ms = 3000
notify_background_failures = true   # toast when background loads or chat sends fail
guard_duplicate_requests = true     # ignore repeat Generate/Upload while one is running

[ui]
swipe_threshold = 50
"#;

    std::fs::write(path, default_content)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", path, e)))?;
    info!("Created default config at {:?}", path);
    Ok(())
}

/// Values given on the command line, which win over the file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub server: Option<String>,
    pub cookie: Option<String>,
}

impl Settings {
    pub fn apply_overrides(&mut self, overrides: &CliOverrides) {
        if let Some(server) = &overrides.server {
            self.server.base_url = server.clone();
        }
        if let Some(cookie) = &overrides.cookie {
            self.server.session_cookie = Some(cookie.clone());
        }
    }

    /// Connection settings for the HTTP backend
    pub fn backend_config(&self) -> HttpBackendConfig {
        HttpBackendConfig {
            base_url: self.server.base_url.clone(),
            session_cookie: self.server.session_cookie.clone(),
            timeout: self.server.timeout(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let settings = load_settings(&dir.path().join("config.toml"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[profile]
name = "Ada Lovelace"

[behavior]
location = "Tokyo"
"#,
        )
        .unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings.profile.name, "Ada Lovelace");
        assert_eq!(settings.behavior.location, "Tokyo");
        assert_eq!(settings.behavior.default_occasion, "casual");
    }

    #[test]
    fn test_invalid_toml_gives_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server\nbase_url = ").unwrap();
        assert_eq!(load_settings(&path), Settings::default());
    }

    #[test]
    fn test_init_config_file_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        init_config_file(&path).unwrap();
        assert!(path.exists());
        assert_eq!(load_settings(&path), Settings::default());
    }

    #[test]
    fn test_init_config_file_keeps_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[profile]\nname = \"Kai\"\n").unwrap();

        init_config_file(&path).unwrap();
        assert_eq!(load_settings(&path).profile.name, "Kai");
    }

    #[test]
    fn test_cli_overrides_win() {
        let mut settings = Settings::default();
        settings.apply_overrides(&CliOverrides {
            server: Some("https://stylist.example.com".into()),
            cookie: Some("abc123".into()),
        });

        let backend = settings.backend_config();
        assert_eq!(backend.base_url, "https://stylist.example.com");
        assert_eq!(backend.session_cookie.as_deref(), Some("abc123"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    #[serial_test::serial]
    fn test_default_path_follows_xdg_config_home() {
        let dir = tempdir().unwrap();
        let previous = std::env::var_os("XDG_CONFIG_HOME");
        std::env::set_var("XDG_CONFIG_HOME", dir.path());

        let path = default_config_path();

        match previous {
            Some(value) => std::env::set_var("XDG_CONFIG_HOME", value),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
        assert_eq!(path, Some(dir.path().join("aistylist").join("config.toml")));
    }
}

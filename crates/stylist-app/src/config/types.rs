//! Configuration types

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::carousel::DEFAULT_SWIPE_THRESHOLD;

/// Application settings (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub profile: ProfileSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Where the AIstylist server lives and how to talk to it
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Value of the `session` cookie issued after sign-in
    #[serde(default)]
    pub session_cookie: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            session_cookie: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ServerSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

/// The signed-in user as shown in the header
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ProfileSettings {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub picture_url: Option<String>,
}

/// Behavior settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Occasion sent with chat messages and outfit requests
    #[serde(default = "default_occasion")]
    pub default_occasion: String,

    /// Location used for the weather lookup
    #[serde(default = "default_location")]
    pub location: String,

    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,

    /// Show a toast when a background load or a chat send fails
    #[serde(default = "default_true")]
    pub notify_background_failures: bool,

    /// Ignore repeat submissions while the same request is in flight
    #[serde(default = "default_true")]
    pub guard_duplicate_requests: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            default_occasion: default_occasion(),
            location: default_location(),
            toast_duration_ms: default_toast_duration_ms(),
            notify_background_failures: true,
            guard_duplicate_requests: true,
        }
    }
}

impl BehaviorSettings {
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Minimum horizontal drag, in pixels, that counts as a swipe
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: i32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            swipe_threshold: default_swipe_threshold(),
        }
    }
}

fn default_base_url() -> String {
    stylist_backend::DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    stylist_backend::DEFAULT_TIMEOUT.as_secs()
}

fn default_occasion() -> String {
    "casual".to_string()
}

fn default_location() -> String {
    "Vancouver".to_string()
}

fn default_toast_duration_ms() -> u64 {
    3000
}

fn default_swipe_threshold() -> i32 {
    DEFAULT_SWIPE_THRESHOLD
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server.base_url, "http://localhost:5000");
        assert_eq!(settings.server.timeout_secs, 60);
        assert_eq!(settings.behavior.default_occasion, "casual");
        assert_eq!(settings.behavior.location, "Vancouver");
        assert_eq!(settings.behavior.toast_duration(), Duration::from_secs(3));
        assert!(settings.behavior.notify_background_failures);
        assert!(settings.behavior.guard_duplicate_requests);
        assert_eq!(settings.ui.swipe_threshold, 50);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[server]
base_url = "https://stylist.example.com"

[behavior]
notify_background_failures = false
"#,
        )
        .unwrap();

        assert_eq!(settings.server.base_url, "https://stylist.example.com");
        assert_eq!(settings.server.timeout_secs, 60);
        assert!(!settings.behavior.notify_background_failures);
        assert!(settings.behavior.guard_duplicate_requests);
        assert_eq!(settings.profile, ProfileSettings::default());
    }

    #[test]
    fn test_zero_timeout_is_clamped() {
        let server = ServerSettings {
            timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(server.timeout(), Duration::from_secs(1));
    }
}

//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Backend Errors
    // ─────────────────────────────────────────────────────────────
    /// The request never produced a usable payload: connection failure,
    /// timeout, non-2xx status without an error body, or an unparsable body.
    #[error("{message}")]
    Transport { message: String },

    /// The server answered `success: false` with an explanation.
    #[error("{message}")]
    Server { message: String },

    /// Input was rejected before any request was issued.
    #[error("{message}")]
    Validation { message: String },

    /// The feature is locked behind an expired trial.
    #[error("Your free trial has ended. Subscribe to continue using AIstylist.")]
    TrialExpired,

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid configuration in {path}: {message}")]
    ConfigInvalid { path: PathBuf, message: String },

    // ─────────────────────────────────────────────────────────────
    // Channel/Communication Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Channel send error: {message}")]
    ChannelSend { message: String },

    #[error("Channel closed unexpectedly")]
    ChannelClosed,
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::Server {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn config_invalid(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn channel_send(message: impl Into<String>) -> Self {
        Self::ChannelSend {
            message: message.into(),
        }
    }

    /// Text shown to the user for a failed flow.
    ///
    /// Server-reported errors carry their own wording and are shown as
    /// `Error: <message>`. Everything else is prefixed with the flow's
    /// fallback, e.g. `"Upload failed"` → `"Upload failed: connection refused"`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Error::Server { message } => format!("Error: {}", message),
            Error::Validation { message } => message.clone(),
            Error::TrialExpired => self.to_string(),
            other => format!("{}: {}", fallback, other),
        }
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Transport { .. }
                | Error::Server { .. }
                | Error::Validation { .. }
                | Error::TrialExpired
                | Error::ChannelSend { .. }
                | Error::Config { .. }
                | Error::ConfigInvalid { .. }
        )
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::TerminalInit(_) | Error::ChannelClosed)
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions (for use with color-eyre)
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::server("unsupported format");
        assert_eq!(err.to_string(), "unsupported format");

        let err = Error::config("bad base url");
        assert_eq!(err.to_string(), "Configuration error: bad base url");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_user_message_server_error_uses_payload() {
        let err = Error::server("unsupported format");
        assert_eq!(err.user_message("Upload failed"), "Error: unsupported format");
    }

    #[test]
    fn test_user_message_transport_error_uses_fallback() {
        let err = Error::transport("connection refused");
        assert_eq!(
            err.user_message("Upload failed"),
            "Upload failed: connection refused"
        );
    }

    #[test]
    fn test_user_message_validation_is_verbatim() {
        let err = Error::validation("Please select a file");
        assert_eq!(err.user_message("Upload failed"), "Please select a file");
    }

    #[test]
    fn test_backend_errors_are_recoverable() {
        assert!(Error::transport("timeout").is_recoverable());
        assert!(Error::server("nope").is_recoverable());
        assert!(Error::TrialExpired.is_recoverable());
        assert!(!Error::transport("timeout").is_fatal());
    }

    #[test]
    fn test_error_is_fatal() {
        assert!(Error::TerminalInit("no tty".into()).is_fatal());
        assert!(Error::ChannelClosed.is_fatal());
        assert!(!Error::server("x").is_fatal());
    }

    #[test]
    fn test_config_invalid_mentions_path() {
        let err = Error::config_invalid("/tmp/config.toml", "expected table");
        assert!(err.to_string().contains("/tmp/config.toml"));
        assert!(err.to_string().contains("expected table"));
    }
}

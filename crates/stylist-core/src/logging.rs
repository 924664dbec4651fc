//! File logging for the terminal client
//!
//! The TUI owns stdout, so everything goes to a daily-rotated file under the
//! platform data directory. Set `AISTYLIST_LOG` to change the filter, for
//! example `AISTYLIST_LOG=stylist_backend=trace`.

use std::path::{Path, PathBuf};

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

pub const LOG_ENV_VAR: &str = "AISTYLIST_LOG";

/// Used when `AISTYLIST_LOG` is unset or unparsable
pub const DEFAULT_FILTER: &str = "aistylist=info,stylist_app=info,stylist_backend=info,warn";

const LOG_FILE_PREFIX: &str = "aistylist.log";

/// Where log files are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLocation {
    pub dir: PathBuf,
}

impl LogLocation {
    /// `<data_local_dir>/aistylist/logs`, or `./aistylist/logs` without one
    pub fn resolve() -> Self {
        let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::under(&base)
    }

    pub fn under(base: &Path) -> Self {
        Self {
            dir: base.join("aistylist").join("logs"),
        }
    }

    /// Today's file; the appender adds a date suffix to this prefix
    pub fn current_file(&self) -> PathBuf {
        self.dir.join(LOG_FILE_PREFIX)
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Call once, before the terminal is taken over.
pub fn init() -> Result<()> {
    let location = LogLocation::resolve();
    std::fs::create_dir_all(&location.dir)?;

    let appender = RollingFileAppender::new(Rotation::DAILY, &location.dir, LOG_FILE_PREFIX);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new("%H:%M:%S%.3f".to_string())),
        )
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        dir = %location.dir.display(),
        "AIstylist session started"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_under_base() {
        let location = LogLocation::under(Path::new("/data"));
        assert_eq!(location.dir, PathBuf::from("/data/aistylist/logs"));
        assert_eq!(
            location.current_file(),
            PathBuf::from("/data/aistylist/logs/aistylist.log")
        );
    }

    #[test]
    fn test_default_filter_parses() {
        assert!(DEFAULT_FILTER.parse::<EnvFilter>().is_ok());
    }
}

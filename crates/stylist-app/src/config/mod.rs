//! Configuration file parsing for AIstylist
//!
//! Settings live in `<config_dir>/aistylist/config.toml`. Command-line flags
//! override individual values.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings, CliOverrides};
pub use types::*;

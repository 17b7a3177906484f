//! Display configuration
//!
//! Board-agnostic settings applied by the driver at init, either built in
//! code or read from a `display.toml` file.

pub mod parse;
pub mod types;

pub use parse::{parse_display_config, ConfigError};
pub use types::*;

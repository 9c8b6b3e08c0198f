//! Application configuration: TOML file with typed defaults.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, DemoConfig, UiTimings};

pub mod config;
pub mod env;
pub mod error;
pub mod setting;

pub use config::{parse_notifications, Config, ConfigSummary};
pub use env::{defaults, vars, Environment, ProcessEnv};
pub use error::ConfigError;

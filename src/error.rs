use thiserror::Error;

/// Errors raised while resolving a setting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required variable is unset and has no default.
    #[error("can't find environment variable '{name}'")]
    MissingVariable { name: &'static str },
}

impl ConfigError {
    /// Name of the environment variable the error is about.
    pub fn variable(&self) -> &'static str {
        match self {
            ConfigError::MissingVariable { name } => name,
        }
    }
}

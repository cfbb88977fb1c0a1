//! Configuration loading for logsweep services.
//!
//! Configuration is read from a TOML file once at process startup and
//! validated before anything else runs. There is no hot reload: a loaded
//! configuration is immutable for the process lifetime.

use std::path::Path;

use serde::de::DeserializeOwned;

/// Errors produced while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML or does not match the schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The parsed configuration violates a constraint.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// A configuration type that can be loaded from TOML and validated.
pub trait Config: DeserializeOwned {
    /// Check constraints the type system cannot express.
    fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }
}

/// Parse a configuration from a TOML string and validate it.
pub fn from_toml_str<T: Config>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load a configuration from a TOML file and validate it.
pub fn load_file<T: Config>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    let content = std::fs::read_to_string(path.as_ref())?;
    from_toml_str(&content)
}

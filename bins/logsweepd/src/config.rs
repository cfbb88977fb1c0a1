//! Daemon configuration file schema.

use logsweep_config::{Config, ConfigError};
use logsweep_logging::LoggingConfig;
use logsweep_purge::{AccessLogConfig, PurgeConfig};
use serde::{Deserialize, Serialize};

/// Top-level configuration for `logsweepd`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DaemonConfig {
    pub logging: LoggingConfig,

    /// Retention settings shared by every access log.
    pub purge: PurgeConfig,

    /// One `[[access_log]]` table per access log the host writes.
    #[serde(rename = "access_log")]
    pub access_logs: Vec<AccessLogConfig>,
}

impl Config for DaemonConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.purge.validate()
    }
}

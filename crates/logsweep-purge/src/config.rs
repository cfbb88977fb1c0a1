//! Purge configuration and its boot-time validation.

use std::path::PathBuf;
use std::time::Duration;

use logsweep_config::ConfigError;
use serde::{Deserialize, Serialize};

/// Time units a purge configuration may reference.
///
/// The full set mirrors what host configuration systems can express;
/// purge settings only accept the subset in [`TimeUnit::ALLOWED`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    /// Units a purge configuration may use.
    pub const ALLOWED: [TimeUnit; 4] = [
        TimeUnit::Seconds,
        TimeUnit::Minutes,
        TimeUnit::Hours,
        TimeUnit::Days,
    ];

    pub fn is_allowed(self) -> bool {
        Self::ALLOWED.contains(&self)
    }

    /// Truncating conversion of an epoch-milliseconds timestamp into this
    /// unit. Sub-unit remainders are discarded, not rounded.
    pub fn convert_from_millis(self, millis: i64) -> i64 {
        match self {
            TimeUnit::Nanoseconds => millis.saturating_mul(1_000_000),
            TimeUnit::Microseconds => millis.saturating_mul(1_000),
            TimeUnit::Milliseconds => millis,
            TimeUnit::Seconds => millis / 1_000,
            TimeUnit::Minutes => millis / 60_000,
            TimeUnit::Hours => millis / 3_600_000,
            TimeUnit::Days => millis / 86_400_000,
        }
    }

    /// `n` of this unit as a `Duration`.
    pub fn to_duration(self, n: u64) -> Duration {
        match self {
            TimeUnit::Nanoseconds => Duration::from_nanos(n),
            TimeUnit::Microseconds => Duration::from_micros(n),
            TimeUnit::Milliseconds => Duration::from_millis(n),
            TimeUnit::Seconds => Duration::from_secs(n),
            TimeUnit::Minutes => Duration::from_secs(n * 60),
            TimeUnit::Hours => Duration::from_secs(n * 3_600),
            TimeUnit::Days => Duration::from_secs(n * 86_400),
        }
    }
}

/// Retention and scheduling settings for access log purging.
///
/// Validated once at startup and immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PurgeConfig {
    /// Master switch for the purge subsystem.
    pub enabled: bool,

    /// Run the first cycle immediately instead of at the next midnight.
    pub execute_on_startup: bool,

    /// Delay between the end of one cycle and the start of the next.
    pub execution_interval: u64,
    pub execution_interval_unit: TimeUnit,

    /// Rotated files older than this are deleted.
    pub max_history: u64,
    pub max_history_unit: TimeUnit,
}

impl Default for PurgeConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            execute_on_startup: false,
            execution_interval: 24,
            execution_interval_unit: TimeUnit::Hours,
            max_history: 30,
            max_history_unit: TimeUnit::Days,
        }
    }
}

impl PurgeConfig {
    /// Check boot-time constraints. A violation must keep the host
    /// process from starting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.execution_interval == 0 {
            return Err(ConfigError::Invalid(
                "'execution_interval' must be greater than 0".into(),
            ));
        }
        if self.max_history == 0 {
            return Err(ConfigError::Invalid(
                "'max_history' must be greater than 0".into(),
            ));
        }
        if !self.execution_interval_unit.is_allowed() {
            return Err(ConfigError::Invalid(
                "'execution_interval_unit' must be one of the following units: \
                 SECONDS, MINUTES, HOURS, DAYS"
                    .into(),
            ));
        }
        if !self.max_history_unit.is_allowed() {
            return Err(ConfigError::Invalid(
                "'max_history_unit' must be one of the following units: \
                 SECONDS, MINUTES, HOURS, DAYS"
                    .into(),
            ));
        }
        Ok(())
    }

    /// The fixed delay between cycles.
    pub fn interval(&self) -> Duration {
        self.execution_interval_unit.to_duration(self.execution_interval)
    }
}

/// Describes one access log written by the host service.
///
/// The purge subsystem only reads these fields; writing and rotating the
/// log is the host's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessLogConfig {
    /// Whether this access log is written (and therefore purged) at all.
    pub enabled: bool,

    /// Directory the log files live in.
    pub directory: PathBuf,

    /// Filename prefix of the active log file.
    pub prefix: String,

    /// Filename suffix of the active log file.
    pub suffix: String,
}

impl Default for AccessLogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            directory: PathBuf::new(),
            prefix: "access_log.".into(),
            suffix: "log".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PurgeConfig::default();
        assert!(!config.enabled);
        assert!(!config.execute_on_startup);
        assert_eq!(config.execution_interval, 24);
        assert_eq!(config.execution_interval_unit, TimeUnit::Hours);
        assert_eq!(config.max_history, 30);
        assert_eq!(config.max_history_unit, TimeUnit::Days);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let config = PurgeConfig { execution_interval: 0, ..Default::default() };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("'execution_interval'"));
    }

    #[test]
    fn test_validate_rejects_zero_history() {
        let config = PurgeConfig { max_history: 0, ..Default::default() };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("'max_history'"));
    }

    #[test]
    fn test_validate_rejects_disallowed_units() {
        let config = PurgeConfig {
            execution_interval_unit: TimeUnit::Milliseconds,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("'execution_interval_unit'"));

        let config = PurgeConfig {
            max_history_unit: TimeUnit::Nanoseconds,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("'max_history_unit'"));
    }

    #[test]
    fn test_validate_checks_values_before_units() {
        // Both a zero value and a bad unit: the value check reports first.
        let config = PurgeConfig {
            execution_interval: 0,
            execution_interval_unit: TimeUnit::Milliseconds,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("'execution_interval' must be greater than 0"));
    }

    #[test]
    fn test_convert_from_millis_truncates() {
        assert_eq!(TimeUnit::Seconds.convert_from_millis(1_999), 1);
        assert_eq!(TimeUnit::Seconds.convert_from_millis(2_000), 2);
        assert_eq!(TimeUnit::Minutes.convert_from_millis(119_999), 1);
        assert_eq!(TimeUnit::Hours.convert_from_millis(3_599_999), 0);
        assert_eq!(TimeUnit::Days.convert_from_millis(86_400_000), 1);
        assert_eq!(TimeUnit::Milliseconds.convert_from_millis(42), 42);
    }

    #[test]
    fn test_interval_duration() {
        let config = PurgeConfig {
            execution_interval: 2,
            execution_interval_unit: TimeUnit::Minutes,
            ..Default::default()
        };
        assert_eq!(config.interval(), Duration::from_secs(120));
    }

    #[test]
    fn test_unit_names_parse_uppercase() {
        let unit: TimeUnit = serde_json::from_str("\"HOURS\"").unwrap();
        assert_eq!(unit, TimeUnit::Hours);
        let unit: TimeUnit = serde_json::from_str("\"DAYS\"").unwrap();
        assert_eq!(unit, TimeUnit::Days);
        assert!(serde_json::from_str::<TimeUnit>("\"hours\"").is_err());
    }

    #[test]
    fn test_purge_config_toml_roundtrip() {
        let config = PurgeConfig { enabled: true, ..Default::default() };
        let text = toml::to_string(&config).unwrap();
        let back: PurgeConfig = toml::from_str(&text).unwrap();
        assert!(back.enabled);
        assert_eq!(back.execution_interval_unit, TimeUnit::Hours);
        assert_eq!(back.max_history_unit, TimeUnit::Days);
    }

    #[test]
    fn test_access_log_defaults() {
        let access_log = AccessLogConfig::default();
        assert!(!access_log.enabled);
        assert_eq!(access_log.prefix, "access_log.");
        assert_eq!(access_log.suffix, "log");
    }
}

//! Filename classification for rotated access logs.

use regex::Regex;

use crate::error::PurgeError;

/// Matching rule derived from an access log's filename prefix and suffix.
///
/// Rotation schemes append date or sequence text, and often another
/// extension, after the original suffix. The rule therefore accepts any
/// whole name of the shape `<prefix>…<suffix>…`: prefix `access` with
/// suffix `.log` matches `access.2024-05-01.log.gz` but not `other.log`.
/// The one name never eligible for purging is the active file,
/// `<prefix><suffix>`.
#[derive(Debug, Clone)]
pub struct LogFilePattern {
    current_file_name: String,
    matcher: Regex,
}

impl LogFilePattern {
    /// Build the pattern. Compiled once and reused for every cycle.
    pub fn new(prefix: &str, suffix: &str) -> Result<Self, PurgeError> {
        let matcher = Regex::new(&format!(
            "^{}.*{}.*$",
            regex::escape(prefix),
            regex::escape(suffix)
        ))?;
        Ok(Self {
            current_file_name: format!("{prefix}{suffix}"),
            matcher,
        })
    }

    /// Name of the file the host is currently writing to.
    pub fn current_file_name(&self) -> &str {
        &self.current_file_name
    }

    /// Whole-name match against `<prefix>…<suffix>…`.
    pub fn matches(&self, file_name: &str) -> bool {
        self.matcher.is_match(file_name)
    }

    /// A rotated file: matches the pattern and is not the active file.
    pub fn is_rotated(&self, file_name: &str) -> bool {
        file_name != self.current_file_name && self.matches(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_rotated_names() {
        let pattern = LogFilePattern::new("access", ".log").unwrap();
        assert!(pattern.matches("access.2024-01-02.log.gz"));
        assert!(pattern.matches("access.2024-01-02.log"));
        assert!(pattern.matches("access-01.log"));
        assert!(pattern.matches("access.log"));
    }

    #[test]
    fn test_rejects_foreign_names() {
        let pattern = LogFilePattern::new("access", ".log").unwrap();
        assert!(!pattern.matches("other.log"));
        assert!(!pattern.matches("ccess.2024-01-02.log"));
        assert!(!pattern.matches("xaccess.2024-01-02.log"));
        assert!(!pattern.matches("access.2024-01-02.txt"));
    }

    #[test]
    fn test_match_is_whole_name_not_substring() {
        // The prefix must start the name; a dot in the suffix is literal.
        let pattern = LogFilePattern::new("access_log.", "log").unwrap();
        assert!(pattern.matches("access_log.2024-05-01.log"));
        assert!(!pattern.matches("old-access_log.2024-05-01.log"));
        assert!(!pattern.matches("access_logX2024-05-01.log"));
    }

    #[test]
    fn test_current_file_name() {
        let pattern = LogFilePattern::new("access_log.", "log").unwrap();
        assert_eq!(pattern.current_file_name(), "access_log.log");
    }

    #[test]
    fn test_is_rotated_excludes_active_file() {
        let pattern = LogFilePattern::new("access", ".log").unwrap();
        // The active file satisfies the pattern but is never rotated.
        assert!(pattern.matches("access.log"));
        assert!(!pattern.is_rotated("access.log"));
        assert!(pattern.is_rotated("access.2024-01-02.log.gz"));
        assert!(!pattern.is_rotated("other.log"));
    }
}

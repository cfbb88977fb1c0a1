//! Purge subsystem errors.

/// Errors raised while constructing or registering a purge task.
///
/// A running task never returns errors; failures inside a cycle are
/// logged and the next scheduled cycle retries naturally.
#[derive(Debug, thiserror::Error)]
pub enum PurgeError {
    /// The filename pattern derived from prefix/suffix failed to compile.
    #[error("invalid access log name pattern: {0}")]
    Pattern(#[from] regex::Error),
}

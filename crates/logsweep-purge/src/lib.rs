//! Purging of rotated access log files.
//!
//! A host service keeps appending to `<prefix><suffix>` and renames
//! finished files to names like `<prefix><date>…<suffix>[.<ext>]`. This
//! crate scans the access log directory on a fixed-delay schedule and
//! deletes rotated files whose age exceeds the configured retention,
//! leaving the active file alone.
//!
//! The host validates a [`PurgeConfig`] at startup and calls
//! [`scheduler::schedule`] once per access log; everything after that is
//! driven by the shared `BackgroundRunner`.

pub mod config;
pub mod error;
pub mod pattern;
pub mod scheduler;
pub mod task;

pub use config::{AccessLogConfig, PurgeConfig, TimeUnit};
pub use error::PurgeError;
pub use pattern::LogFilePattern;
pub use scheduler::schedule;
pub use task::PurgeTask;

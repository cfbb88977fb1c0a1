//! Registration of purge tasks onto the shared background runner.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Days, Local, NaiveTime};

use logsweep_utils::BackgroundRunner;

use crate::config::{AccessLogConfig, PurgeConfig};
use crate::error::PurgeError;
use crate::task::PurgeTask;

/// Register a fixed-delay purge schedule for one access log.
///
/// The first cycle runs immediately when `execute_on_startup` is set and
/// at the next local midnight otherwise; thereafter the delay between the
/// end of one cycle and the start of the next is the configured execution
/// interval. The schedule lives until the runner is shut down.
pub fn schedule(
    runner: &mut BackgroundRunner,
    config: &PurgeConfig,
    access_log: &AccessLogConfig,
) -> Result<(), PurgeError> {
    let task = Arc::new(PurgeTask::new(config, access_log)?);
    let initial_delay = initial_delay(config, Local::now());

    tracing::info!(
        directory = %access_log.directory.display(),
        initial_delay_secs = initial_delay.as_secs(),
        interval_secs = config.interval().as_secs(),
        "scheduling access log purge"
    );

    runner.spawn_with_fixed_delay(initial_delay, config.interval(), move || {
        let task = Arc::clone(&task);
        async move { task.run() }
    });

    Ok(())
}

/// Delay before the first cycle, relative to `now`.
pub fn initial_delay(config: &PurgeConfig, now: DateTime<Local>) -> Duration {
    if config.execute_on_startup {
        Duration::ZERO
    } else {
        delay_until_next_midnight(now)
    }
}

/// Wall-clock time from `now` until the next local midnight (00:00:00.000).
///
/// A midnight made nonexistent by a DST transition resolves to the
/// earliest valid instant after it; an ambiguous midnight resolves to the
/// earlier of the two.
pub fn delay_until_next_midnight(now: DateTime<Local>) -> Duration {
    let tomorrow = now.date_naive() + Days::new(1);
    let midnight = tomorrow.and_time(NaiveTime::MIN);

    let next = match midnight.and_local_timezone(now.timezone()) {
        chrono::LocalResult::Single(dt) => dt,
        chrono::LocalResult::Ambiguous(earlier, _) => earlier,
        chrono::LocalResult::None => {
            let mut candidate = midnight;
            loop {
                candidate = candidate + chrono::Duration::minutes(30);
                if let Some(dt) = candidate.and_local_timezone(now.timezone()).earliest() {
                    break dt;
                }
            }
        }
    };

    (next - now).to_std().unwrap_or(Duration::ZERO)
}

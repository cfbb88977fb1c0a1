//! Process-scoped scheduling context for background tasks.

use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Owns every recurring background task of the process.
///
/// One runner is created at startup and shared by all scheduled tasks;
/// `shutdown` stops them together and waits for their loops to return.
/// Tasks run on the tokio runtime, so the worker pool stays bounded no
/// matter how many schedules are registered.
pub struct BackgroundRunner {
    shutdown_tx: watch::Sender<bool>,
    handles: Vec<JoinHandle<()>>,
}

impl BackgroundRunner {
    pub fn new() -> Self {
        let (shutdown_tx, _) = watch::channel(false);
        Self { shutdown_tx, handles: Vec::new() }
    }

    /// Run `f` repeatedly with fixed-delay semantics.
    ///
    /// Waits `initial_delay` once, then alternates between awaiting `f`
    /// to completion and sleeping `delay`. The delay is measured from the
    /// end of one run to the start of the next, so a long run postpones
    /// the schedule instead of overlapping it.
    pub fn spawn_with_fixed_delay<F, Fut>(&mut self, initial_delay: Duration, delay: Duration, f: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let mut rx = self.shutdown_tx.subscribe();
        self.handles.push(tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(initial_delay) => {}
                _ = rx.changed() => return,
            }
            loop {
                f().await;
                tokio::select! {
                    _ = tokio::time::sleep(delay) => {}
                    _ = rx.changed() => break,
                }
            }
        }));
    }

    /// Signal every spawned loop to stop and wait for them to finish.
    /// A run that is already in progress completes before its loop exits.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(true);
        for handle in self.handles {
            let _ = handle.await;
        }
    }
}

impl Default for BackgroundRunner {
    fn default() -> Self {
        Self::new()
    }
}

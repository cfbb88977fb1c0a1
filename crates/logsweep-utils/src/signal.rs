//! Process shutdown signal handling.

/// Wait until the process is asked to stop.
///
/// Resolves on CTRL+C, or on SIGTERM where the platform has it.
pub async fn wait_for_shutdown_signal() {
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received CTRL+C");
        }
        _ = terminate() => {
            tracing::info!("Received SIGTERM");
        }
    }
}

#[cfg(unix)]
async fn terminate() {
    let mut sigterm = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
        .expect("failed to register SIGTERM handler");
    sigterm.recv().await;
}

#[cfg(not(unix))]
async fn terminate() {
    std::future::pending::<()>().await;
}

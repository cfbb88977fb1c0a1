use anyhow::Context;
use clap::Parser;

use logsweep_utils::BackgroundRunner;

mod config;

use config::DaemonConfig;

/// Access log purge daemon.
#[derive(Parser, Debug)]
#[command(name = "logsweepd", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "logsweepd.toml")]
    config: String,

    /// Dump default configuration and exit
    #[arg(long)]
    dump_default_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.dump_default_config {
        print!("{}", toml::to_string_pretty(&DaemonConfig::default())?);
        return Ok(());
    }

    let config: DaemonConfig = logsweep_config::load_file(&args.config)
        .with_context(|| format!("loading configuration from {}", args.config))?;

    let _guard = logsweep_logging::init(&config.logging);

    tracing::info!(config = %args.config, "starting logsweepd");

    let mut runner = BackgroundRunner::new();
    let mut scheduled = 0usize;

    if config.purge.enabled {
        for access_log in &config.access_logs {
            if access_log.enabled {
                logsweep_purge::schedule(&mut runner, &config.purge, access_log)
                    .with_context(|| {
                        format!("scheduling purge for {}", access_log.directory.display())
                    })?;
                scheduled += 1;
            }
        }
    }

    if scheduled == 0 {
        tracing::warn!("no access log purge schedules are enabled");
    } else {
        tracing::info!(scheduled, "access log purge schedules registered");
    }

    logsweep_utils::wait_for_shutdown_signal().await;

    tracing::info!("shutting down");
    runner.shutdown().await;

    Ok(())
}

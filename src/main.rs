use anyhow::Result;
use hostsnap::config::{OutputFormat, SnapshotConfig};
use hostsnap::counter_source::ProcfsSource;
use hostsnap::render::{RenderOptions, render_report};
use hostsnap::sampler::TokioClock;
use hostsnap::snapshot::{AssemblerOptions, SnapshotAssembler};
use std::io::Write;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the report.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = SnapshotConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "config rejected, using defaults");
        SnapshotConfig::default()
    });
    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        proc_root = %config.proc_root.display(),
        "starting snapshot"
    );

    let source = ProcfsSource::new(config.proc_root.clone());
    let clock = TokioClock;
    let snapshot = SnapshotAssembler::new(
        &source,
        &clock,
        AssemblerOptions {
            sample_interval: config.sample_interval(),
            disk_path: config.disk_path.clone(),
        },
    )
    .assemble()
    .await;

    let rendered = match config.format {
        OutputFormat::Text => render_report(&snapshot, &RenderOptions::from(&config)),
        OutputFormat::Json => serde_json::to_string_pretty(&snapshot)? + "\n",
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = stdout.write_all(rendered.as_bytes()).and_then(|_| stdout.flush()) {
        tracing::warn!(error = %e, "failed to write report");
    }
    Ok(())
}

use anyhow::{Context, Result};
use richest_stats::FilterConfig;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Paths and the row count are fixed
    let config = FilterConfig::default();

    let report = richest_stats::run(&config).with_context(|| {
        format!(
            "Failed to filter {} into {}",
            config.input.display(),
            config.output.display()
        )
    })?;

    info!("Done: {}", report);
    Ok(())
}

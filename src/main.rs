use anyhow::{Context, Result};
use std::io;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bot_config_gen::{config::Config, generator};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    info!(
        "Generating {} bot configs in {}",
        config.bot_count,
        config.config_dir.display()
    );

    let mut stdout = io::stdout().lock();
    let report = generator::generate_all(&config, &mut stdout)
        .context("Bot config generation failed")?;
    generator::write_summary(&mut stdout)?;

    info!(
        generated = report.count(),
        elapsed_ms = report.elapsed_ms(),
        "Generation finished"
    );

    Ok(())
}

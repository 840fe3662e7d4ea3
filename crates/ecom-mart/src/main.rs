mod bootstrap;
mod pipeline;

use anyhow::Result;
use clap::Parser;
use mart_core::settings::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::parse();
    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("ecom-mart v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Data dir: {}, output dir: {}, store: {}:{}/{}",
        settings.data_dir.display(),
        settings.output_dir.display(),
        settings.db_host,
        settings.db_port,
        settings.db_name
    );

    pipeline::run(&settings).await?;

    Ok(())
}

//! The sequential extract → transform → load → report pipeline.

use mart_core::settings::Settings;
use mart_core::Result;
use mart_data::extract::{extract_data, DatasetPaths};
use mart_store::{loader, reports};
use tracing::info;

/// Run the full pipeline described by `settings`.
///
/// Stages run strictly in order and any failure is terminal for the run.
/// The store connection is opened only for the load/report span; the pool
/// is closed before returning and released on drop on the failure paths.
pub async fn run(settings: &Settings) -> Result<()> {
    info!("Extracting datasets from {}", settings.data_dir.display());
    let paths = DatasetPaths::from_data_dir(&settings.data_dir);
    let raw = extract_data(&paths)?;

    info!("Transforming into star schema");
    let schema = mart_data::transform_data(&raw)?;

    info!("Loading star schema into the store");
    let pool = loader::connect(&settings.database_url()).await?;
    loader::load_star_schema(&pool, &schema).await?;

    info!("Running analytics reports into {}", settings.output_dir.display());
    reports::run_reports(&pool, &settings.output_dir).await?;

    pool.close().await;
    info!("Pipeline complete");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

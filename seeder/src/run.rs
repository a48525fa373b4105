use crate::import::{self, load_records, ImportSummary, PackRecord, PluginRecord};
use anyhow::Context;
use common::db;
use common::settings::{ImportSettings, Settings};
use sea_orm::DatabaseConnection;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Summaries of the pipelines that actually ran.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub plugins: Option<ImportSummary>,
    pub packs: Option<ImportSummary>,
}

pub async fn run(settings: &Settings) -> anyhow::Result<RunReport> {
    let url = settings.database.connection_url()?;
    let db = db::establish_connection(&url)
        .await
        .context("Failed to connect to database")?;

    if settings.database.name.is_empty() {
        tracing::info!("Connected to database");
    } else {
        tracing::info!("Connected to database: {}", settings.database.name);
    }

    run_with(&db, settings).await
}

/// Runs the configured pipelines against an open connection: plugins first,
/// then packs. The first failure stops the run.
pub async fn run_with(db: &DatabaseConnection, settings: &Settings) -> anyhow::Result<RunReport> {
    let import = &settings.import;

    if import.dry_run {
        preview(import).await;
        return Ok(RunReport::default());
    }

    if import.create_tables {
        db::ensure_tables(db)
            .await
            .context("Failed to create tables")?;
    }

    let mut report = RunReport::default();

    if let Some(path) = import.plugin_path() {
        tracing::info!("Importing plugin metadata from: {}", path.display());
        let summary = import::import_plugins_file(db, path)
            .await
            .context("Failed to import plugin metadata")?;
        tracing::info!(
            "Plugin metadata import completed successfully ({} created, {} skipped)",
            summary.created,
            summary.skipped
        );
        report.plugins = Some(summary);
    }

    if let Some(path) = import.pack_path() {
        tracing::info!("Importing plugin packs from: {}", path.display());
        let summary = import::import_packs_file(db, path)
            .await
            .context("Failed to import plugin packs")?;
        tracing::info!(
            "Plugin packs import completed successfully ({} created, {} updated)",
            summary.created,
            summary.updated
        );
        report.packs = Some(summary);
    }

    if report.plugins.is_none() && report.packs.is_none() {
        tracing::info!("No files specified. Use --plugin-file or --pack-file flags");
    }

    Ok(report)
}

async fn preview(import: &ImportSettings) {
    tracing::info!("DRY RUN MODE - No changes will be made");

    if let Some(path) = import.plugin_path() {
        tracing::info!("Would import plugin metadata from: {}", path.display());
        report_records::<PluginRecord>(path, "plugin").await;
    }

    if let Some(path) = import.pack_path() {
        tracing::info!("Would import plugin packs from: {}", path.display());
        report_records::<PackRecord>(path, "pack").await;
    }
}

async fn report_records<T>(path: &Path, kind: &str)
where
    T: DeserializeOwned,
{
    match load_records::<T>(path).await {
        Ok(records) => tracing::info!("{} holds {} {} records", path.display(), records.len(), kind),
        Err(e) => tracing::warn!("{}", e),
    }
}

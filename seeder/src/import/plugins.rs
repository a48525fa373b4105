use super::records::PluginRecord;
use super::{finish, load_records, ImportSummary, RecordOutcome};
use crate::error::{ImportError, WriteOp};
use common::domain::json::encode_values;
use common::entities::{plugin_config_options, plugin_metadata, plugin_price_details, prelude::*};
use sea_orm::*;
use std::path::Path;

pub async fn import_plugins_file<C>(db: &C, path: &Path) -> Result<ImportSummary, ImportError>
where
    C: TransactionTrait<Transaction = DatabaseTransaction>,
{
    let records: Vec<PluginRecord> = load_records(path).await?;
    tracing::debug!("decoded {} plugin records from {}", records.len(), path.display());
    import_plugins(db, &records).await
}

/// Inserts every plugin whose name is not in the catalog yet, all in one
/// transaction. Plugins that already exist are left untouched.
pub async fn import_plugins<C>(db: &C, records: &[PluginRecord]) -> Result<ImportSummary, ImportError>
where
    C: TransactionTrait<Transaction = DatabaseTransaction>,
{
    let txn = db.begin().await.map_err(ImportError::Begin)?;
    let outcome = import_all(&txn, records).await;
    finish(txn, outcome).await
}

async fn import_all(
    txn: &DatabaseTransaction,
    records: &[PluginRecord],
) -> Result<ImportSummary, ImportError> {
    let mut summary = ImportSummary::default();
    for record in records {
        summary.record(import_plugin(txn, record).await?);
    }
    Ok(summary)
}

async fn import_plugin(
    txn: &DatabaseTransaction,
    record: &PluginRecord,
) -> Result<RecordOutcome, ImportError> {
    tracing::debug!("finding plugin: {}", record.name);
    let existing = PluginMetadata::find()
        .filter(plugin_metadata::Column::Name.eq(&record.name))
        .one(txn)
        .await
        .map_err(ImportError::lookup("plugin", &record.name))?;

    if existing.is_some() {
        tracing::debug!("plugin already exists: {}", record.name);
        return Ok(RecordOutcome::Skipped);
    }

    let plugin = plugin_metadata::ActiveModel {
        name: Set(record.name.clone()),
        title: Set(record.title.clone()),
        description: Set(record.description.clone()),
        image_url: Set(record.image_url.clone()),
        video_url: Set(record.video_url.clone()),
        top_pick: Set(record.top_pick),
        tier: Set(record.tier),
        ..Default::default()
    }
    .insert(txn)
    .await
    .map_err(ImportError::write(WriteOp::Create, "plugin metadata", &record.name))?;

    plugin_price_details::ActiveModel {
        month: Set(record.price_details.month),
        three_month: Set(record.price_details.three_month),
        year: Set(record.price_details.year),
        plugin_metadata_id: Set(plugin.id),
        ..Default::default()
    }
    .insert(txn)
    .await
    .map_err(ImportError::write(WriteOp::Create, "price details", &record.name))?;

    for option in &record.configuration_options {
        let values = encode_values(&option.values).map_err(|source| ImportError::EncodeValues {
            plugin: record.name.clone(),
            option: option.name.clone(),
            source,
        })?;

        plugin_config_options::ActiveModel {
            name: Set(option.name.clone()),
            section: Set(option.section.clone()),
            description: Set(option.description.clone()),
            kind: Set(option.kind.clone()),
            is_bool: Set(option.is_bool),
            values: Set(values),
            plugin_metadata_id: Set(plugin.id),
            ..Default::default()
        }
        .insert(txn)
        .await
        .map_err(ImportError::write(WriteOp::Create, "config option", &record.name))?;
    }

    tracing::debug!(
        "created plugin {} (id {}) with {} config options",
        record.name,
        plugin.id,
        record.configuration_options.len()
    );
    Ok(RecordOutcome::Created)
}

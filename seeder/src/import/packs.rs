use super::records::PackRecord;
use super::{finish, load_records, ImportSummary, RecordOutcome};
use crate::error::{ImportError, WriteOp};
use common::entities::{
    plugin_metadata, plugin_pack_items, plugin_pack_price_details, plugin_packs, prelude::*,
};
use sea_orm::sea_query::Expr;
use sea_orm::*;
use std::path::Path;

pub async fn import_packs_file<C>(db: &C, path: &Path) -> Result<ImportSummary, ImportError>
where
    C: TransactionTrait<Transaction = DatabaseTransaction>,
{
    let records: Vec<PackRecord> = load_records(path).await?;
    tracing::debug!("decoded {} pack records from {}", records.len(), path.display());
    import_packs(db, &records).await
}

/// Creates missing packs and overwrites existing ones, all in one transaction.
/// Membership is always rebuilt from the record's plugin list.
pub async fn import_packs<C>(db: &C, records: &[PackRecord]) -> Result<ImportSummary, ImportError>
where
    C: TransactionTrait<Transaction = DatabaseTransaction>,
{
    let txn = db.begin().await.map_err(ImportError::Begin)?;
    let outcome = import_all(&txn, records).await;
    finish(txn, outcome).await
}

async fn import_all(
    txn: &DatabaseTransaction,
    records: &[PackRecord],
) -> Result<ImportSummary, ImportError> {
    let mut summary = ImportSummary::default();
    for record in records {
        summary.record(import_pack(txn, record).await?);
    }
    Ok(summary)
}

async fn import_pack(
    txn: &DatabaseTransaction,
    record: &PackRecord,
) -> Result<RecordOutcome, ImportError> {
    tracing::debug!("finding pack: {}", record.name);
    let existing = PluginPacks::find()
        .filter(plugin_packs::Column::Name.eq(&record.name))
        .one(txn)
        .await
        .map_err(ImportError::lookup("plugin pack", &record.name))?;

    match existing {
        Some(pack) => {
            update_pack(txn, pack, record).await?;
            Ok(RecordOutcome::Updated)
        }
        None => {
            create_pack(txn, record).await?;
            Ok(RecordOutcome::Created)
        }
    }
}

async fn create_pack(txn: &DatabaseTransaction, record: &PackRecord) -> Result<(), ImportError> {
    let pack = plugin_packs::ActiveModel {
        name: Set(record.name.clone()),
        title: Set(record.title.clone()),
        description: Set(record.description.clone()),
        image_url: Set(record.image_url.clone()),
        discount: Set(record.discount),
        active: Set(record.active),
        ..Default::default()
    }
    .insert(txn)
    .await
    .map_err(ImportError::write(WriteOp::Create, "plugin pack", &record.name))?;

    insert_price_details(txn, pack.id, record).await?;
    link_plugins(txn, pack.id, record).await?;

    tracing::debug!("created pack {} (id {})", record.name, pack.id);
    Ok(())
}

async fn update_pack(
    txn: &DatabaseTransaction,
    pack: plugin_packs::Model,
    record: &PackRecord,
) -> Result<(), ImportError> {
    let pack_id = pack.id;

    let mut active: plugin_packs::ActiveModel = pack.into();
    active.title = Set(record.title.clone());
    active.description = Set(record.description.clone());
    active.image_url = Set(record.image_url.clone());
    active.discount = Set(record.discount);
    active.active = Set(record.active);
    active
        .update(txn)
        .await
        .map_err(ImportError::write(WriteOp::Update, "plugin pack", &record.name))?;

    let price_details = PluginPackPriceDetails::find()
        .filter(plugin_pack_price_details::Column::PluginPackId.eq(pack_id))
        .one(txn)
        .await
        .map_err(ImportError::lookup("pack price details", &record.name))?;

    if price_details.is_some() {
        // In place, by owner. The plugin linkage column is never touched.
        let updated = PluginPackPriceDetails::update_many()
            .col_expr(
                plugin_pack_price_details::Column::Month,
                Expr::value(record.price_details.month),
            )
            .col_expr(
                plugin_pack_price_details::Column::ThreeMonth,
                Expr::value(record.price_details.three_month),
            )
            .col_expr(
                plugin_pack_price_details::Column::Year,
                Expr::value(record.price_details.year),
            )
            .filter(plugin_pack_price_details::Column::PluginPackId.eq(pack_id))
            .exec(txn)
            .await
            .map_err(ImportError::write(WriteOp::Update, "price details", &record.name))?;
        tracing::debug!(
            "updated {} price details rows for pack {}",
            updated.rows_affected,
            record.name
        );
    } else {
        tracing::warn!("pack {} had no price details, creating them", record.name);
        insert_price_details(txn, pack_id, record).await?;
    }

    let removed = PluginPackItems::delete_many()
        .filter(plugin_pack_items::Column::PackId.eq(pack_id))
        .exec(txn)
        .await
        .map_err(ImportError::write(WriteOp::Delete, "plugin pack items", &record.name))?;

    link_plugins(txn, pack_id, record).await?;

    tracing::debug!(
        "updated pack {} (id {}), replaced {} membership rows",
        record.name,
        pack_id,
        removed.rows_affected
    );
    Ok(())
}

async fn insert_price_details(
    txn: &DatabaseTransaction,
    pack_id: i32,
    record: &PackRecord,
) -> Result<(), ImportError> {
    // plugin_metadata_id stays NotSet so it is left out of the INSERT.
    plugin_pack_price_details::ActiveModel {
        month: Set(record.price_details.month),
        three_month: Set(record.price_details.three_month),
        year: Set(record.price_details.year),
        plugin_pack_id: Set(pack_id),
        ..Default::default()
    }
    .insert(txn)
    .await
    .map_err(ImportError::write(WriteOp::Create, "price details", &record.name))?;
    Ok(())
}

/// Resolves every listed plugin name and inserts one membership row per plugin.
async fn link_plugins(
    txn: &DatabaseTransaction,
    pack_id: i32,
    record: &PackRecord,
) -> Result<(), ImportError> {
    let mut items = Vec::new();

    for plugin_name in &record.plugins {
        let plugin = PluginMetadata::find()
            .filter(plugin_metadata::Column::Name.eq(plugin_name))
            .one(txn)
            .await
            .map_err(ImportError::lookup("plugin", plugin_name))?
            .ok_or_else(|| ImportError::UnknownPlugin {
                pack: record.name.clone(),
                plugin: plugin_name.clone(),
            })?;

        items.push(plugin_pack_items::ActiveModel {
            pack_id: Set(pack_id),
            plugin_metadata_id: Set(plugin.id),
            ..Default::default()
        });
    }

    if !items.is_empty() {
        let count = items.len();
        PluginPackItems::insert_many(items)
            .exec(txn)
            .await
            .map_err(ImportError::write(WriteOp::Create, "plugin pack items", &record.name))?;
        tracing::debug!("linked {} plugins to pack {}", count, record.name);
    }

    Ok(())
}

pub mod packs;
pub mod plugins;
pub mod records;

use crate::error::ImportError;
use sea_orm::DatabaseTransaction;
use serde::de::DeserializeOwned;
use std::path::Path;

pub use packs::{import_packs, import_packs_file};
pub use plugins::{import_plugins, import_plugins_file};
pub use records::{ConfigOptionRecord, PackRecord, PluginRecord, PriceDetailsRecord};

/// What a single record ended up as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    Created,
    Updated,
    Skipped,
}

/// Per-file tally, reported once the transaction has committed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub created: usize,
    pub updated: usize,
    pub skipped: usize,
}

impl ImportSummary {
    pub fn record(&mut self, outcome: RecordOutcome) {
        match outcome {
            RecordOutcome::Created => self.created += 1,
            RecordOutcome::Updated => self.updated += 1,
            RecordOutcome::Skipped => self.skipped += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.created + self.updated + self.skipped
    }
}

pub async fn load_records<T>(path: &Path) -> Result<Vec<T>, ImportError>
where
    T: DeserializeOwned,
{
    let data = tokio::fs::read(path)
        .await
        .map_err(|source| ImportError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    serde_json::from_slice(&data).map_err(|source| ImportError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Commits on success; on failure rolls back explicitly and hands the error back.
pub(crate) async fn finish<T>(
    txn: DatabaseTransaction,
    outcome: Result<T, ImportError>,
) -> Result<T, ImportError> {
    match outcome {
        Ok(value) => {
            txn.commit().await.map_err(ImportError::Commit)?;
            Ok(value)
        }
        Err(err) => {
            tracing::debug!("rolling back transaction: {}", err);
            if let Err(rollback_err) = txn.rollback().await {
                tracing::error!("Failed to roll back transaction: {}", rollback_err);
            }
            Err(err)
        }
    }
}

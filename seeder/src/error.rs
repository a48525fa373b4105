use sea_orm::DbErr;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOp {
    Create,
    Update,
    Delete,
}

impl fmt::Display for WriteOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteOp::Create => f.write_str("create"),
            WriteOp::Update => f.write_str("update"),
            WriteOp::Delete => f.write_str("delete"),
        }
    }
}

/// Everything that can abort an import. Any of these rolls back the whole file.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read JSON file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to unmarshal JSON data from {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to begin transaction: {0}")]
    Begin(#[source] DbErr),
    #[error("error checking for existing {entity} '{name}': {source}")]
    Lookup {
        entity: &'static str,
        name: String,
        #[source]
        source: DbErr,
    },
    #[error("failed to {op} {entity} for '{name}': {source}")]
    Write {
        op: WriteOp,
        entity: &'static str,
        name: String,
        #[source]
        source: DbErr,
    },
    #[error("failed to marshal values of config option '{option}' on plugin '{plugin}': {source}")]
    EncodeValues {
        plugin: String,
        option: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("pack '{pack}' references unknown plugin '{plugin}'")]
    UnknownPlugin { pack: String, plugin: String },
    #[error("failed to commit transaction: {0}")]
    Commit(#[source] DbErr),
}

impl ImportError {
    pub(crate) fn lookup(entity: &'static str, name: &str) -> impl FnOnce(DbErr) -> Self {
        let name = name.to_string();
        move |source| ImportError::Lookup {
            entity,
            name,
            source,
        }
    }

    pub(crate) fn write(op: WriteOp, entity: &'static str, name: &str) -> impl FnOnce(DbErr) -> Self {
        let name = name.to_string();
        move |source| ImportError::Write {
            op,
            entity,
            name,
            source,
        }
    }
}

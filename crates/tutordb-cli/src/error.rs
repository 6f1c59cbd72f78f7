use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] tutordb::Error),

    #[error(transparent)]
    Alter(#[from] tutordb_sql::AlterError),

    #[error("column `{column}` already exists on `{table}`")]
    ColumnExists { table: String, column: String },

    #[error("column `{column}` does not exist on `{table}`")]
    ColumnMissing { table: String, column: String },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot {} is out of date (run `tutordb snapshot`)", .0.display())]
    SnapshotDrift(PathBuf),

    #[error("failed to serialize JSON: {0}")]
    Json(String),

    #[error("invalid JSON record: {0}")]
    InvalidRecord(String),

    #[error("unknown payload kind `{0}` (expected insert or update)")]
    UnknownPayload(String),

    #[error("record does not match the table ({0} issue(s))")]
    RecordMismatch(usize),
}

use thiserror::Error;

use crate::config::ServerConfig;

pub const DB_TYPE_MEMORY: &str = "memory";
pub const DB_TYPE_FILE: &str = "embedded-file";
pub const DB_TYPE_SQL: &str = "sql";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("unknown storage backend {0:?}, supported types: memory, embedded-file, sql")]
    UnknownBackend(String),
}

/// Baskets storage backend selected by the `db` argument.
///
/// The configuration record keeps the raw argument so that unrecognized
/// values surface here, when the service starts, rather than during
/// argument parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Memory,
    EmbeddedFile,
    Sql,
}

impl StorageKind {
    /// Resolve a backend from its configured name.
    pub fn resolve(db_type: &str) -> Result<Self, StorageError> {
        match db_type {
            DB_TYPE_MEMORY => Ok(Self::Memory),
            DB_TYPE_FILE => Ok(Self::EmbeddedFile),
            DB_TYPE_SQL => Ok(Self::Sql),
            unknown => Err(StorageError::UnknownBackend(unknown.to_string())),
        }
    }

    /// Location the backend persists to, `None` for in-memory storage.
    ///
    /// SQL backends use the connection string and fall back to the
    /// database file when no connection string is configured.
    pub fn location<'a>(&self, config: &'a ServerConfig) -> Option<&'a str> {
        match self {
            Self::Memory => None,
            Self::EmbeddedFile => Some(&config.db_file),
            Self::Sql => {
                if config.db_connection.is_empty() {
                    Some(&config.db_file)
                } else {
                    Some(&config.db_connection)
                }
            }
        }
    }
}

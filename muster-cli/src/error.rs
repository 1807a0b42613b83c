use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Static dataset could not be loaded or failed validation
    #[error("Dataset error: {0}")]
    Dataset(#[from] muster_data::DatasetError),

    /// Collection database failure
    #[error("Database error: {0}")]
    Database(String),

    /// Collection entry id does not exist
    #[error("No collection entry with id {0}")]
    UnknownEntry(i64),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

impl From<muster_db::OperationError> for CliError {
    fn from(e: muster_db::OperationError) -> Self {
        match e {
            muster_db::OperationError::NotFound(id) => Self::UnknownEntry(id),
            other => Self::Database(other.to_string()),
        }
    }
}

impl From<muster_db::SchemaError> for CliError {
    fn from(e: muster_db::SchemaError) -> Self {
        Self::Database(e.to_string())
    }
}

//! Demo error type.

use std::path::PathBuf;

use tabula::RowError;

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error(transparent)]
    Row(#[from] RowError),

    #[error("Failed to encode selection: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

impl DemoError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

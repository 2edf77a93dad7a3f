//! Icon loading error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while resolving or loading an icon collection.
///
/// Loaders make a single attempt; nothing here is retried locally.
#[derive(Debug, Error)]
pub enum IconError {
    #[error("unknown icon collection `{0}`")]
    UnknownCollection(String),

    #[error("failed to read `{}`", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse `{}`", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("icon directory not found: `{}`", .0.display())]
    DirectoryNotFound(PathBuf),
}

impl IconError {
    /// Short kind label, used as the log prefix detail.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UnknownCollection(_) => "unknown collection",
            Self::FileRead { .. } => "read error",
            Self::Parse { .. } => "parse error",
            Self::DirectoryNotFound(_) => "directory not found",
        }
    }
}

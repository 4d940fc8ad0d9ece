use std::path::PathBuf;

use redux_store::StoreError;
use thiserror::Error;

/// Errors of the todo-goals application
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid action script {}", .path.display())]
    Script {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config file {}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to install logger")]
    Logger(#[from] log::SetLoggerError),

    #[error("failed to render state")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, Error>;

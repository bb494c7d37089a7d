//! Errores de persistencia.
//! Mapea errores de IO / serde a variantes semánticas del registro en disco.

use std::path::PathBuf;

use deploy_core::DeployError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("corrupt record {path}: {reason}")]
    Corrupt { path: PathBuf, reason: String },
    #[error("invalid path component '{0}'")]
    InvalidName(String),
}

impl PersistenceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

impl From<PersistenceError> for DeployError {
    fn from(err: PersistenceError) -> Self {
        DeployError::Registry(err.to_string())
    }
}

//! Errores del motor de despliegue.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::AmountError;

/// Error único que atraviesa el motor.
///
/// Es `Clone + PartialEq` para que el camino fail-fast devuelva exactamente
/// el mismo valor que produjo la primitiva de despliegue.
#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum DeployError {
    #[error("unresolved constructor argument: no deployment named '{reference}'")]
    UnresolvedArgument { reference: String },
    #[error("no compiled artifact for contract '{0}'")]
    UnknownArtifact(String),
    #[error("named account '{0}' is not configured")]
    NamedAccountMissing(String),
    #[error("fixtures only run on development networks (network '{0}')")]
    FixtureOnLiveNetwork(String),
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("backend: {0}")]
    Backend(String),
    #[error("registry: {0}")]
    Registry(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl From<AmountError> for DeployError {
    fn from(err: AmountError) -> Self {
        Self::InvalidAmount(err.to_string())
    }
}

//! Artifacts compilados disponibles para desplegar.
//!
//! El compilador es externo; aquí sólo se conserva la identidad del bytecode
//! (`bytecode_hash`) para detectar cambios entre ejecuciones.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::errors::DeployError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractArtifact {
    pub contract: String,
    pub bytecode_hash: String,
}

impl ContractArtifact {
    pub fn new(contract: impl Into<String>, bytecode_hash: impl Into<String>) -> Self {
        Self { contract: contract.into(),
               bytecode_hash: bytecode_hash.into() }
    }
}

/// Catálogo ordenado `contract -> artifact`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactCatalog {
    artifacts: IndexMap<String, ContractArtifact>,
}

impl ArtifactCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, artifact: ContractArtifact) -> Self {
        self.insert(artifact);
        self
    }

    /// Inserta o reemplaza (un recompilado cambia el `bytecode_hash`).
    pub fn insert(&mut self, artifact: ContractArtifact) {
        self.artifacts.insert(artifact.contract.clone(), artifact);
    }

    pub fn get(&self, contract: &str) -> Result<&ContractArtifact, DeployError> {
        self.artifacts
            .get(contract)
            .ok_or_else(|| DeployError::UnknownArtifact(contract.to_string()))
    }

    pub fn contracts(&self) -> impl Iterator<Item = &str> {
        self.artifacts.keys().map(String::as_str)
    }
}

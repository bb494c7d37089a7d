//! Primitiva de despliegue (cadena externa).
//!
//! El motor no conoce la VM ni el transporte: sólo pide "despliega este
//! contrato con estos argumentos" y recibe una dirección. Los errores del
//! backend se propagan sin modificar.

use alloy_primitives::{Address, B256};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::DeployError;
use crate::model::{ArgValue, ContractArtifact};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployRequest {
    pub network: String,
    pub artifact: ContractArtifact,
    pub from: Address,
    /// Siempre resueltos (sin `DeploymentRef`).
    pub args: Vec<ArgValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployReceipt {
    pub address: Address,
    pub tx_hash: B256,
    pub block_number: u64,
}

#[async_trait]
pub trait ChainBackend: Send + Sync {
    async fn deploy_contract(&self, request: &DeployRequest) -> Result<DeployReceipt, DeployError>;

    /// `true` si hay código en `address` (un registro viejo contra una cadena
    /// efímera reiniciada apunta a una dirección vacía).
    async fn has_code(&self, address: Address) -> Result<bool, DeployError>;
}

//! Registro persistido de un despliegue.
//!
//! Es el único estado durable del sistema: una entrada por `(network, name)`.

use alloy_primitives::{Address, B256};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ArgValue;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRecord {
    pub id: Uuid,
    pub network: String,
    /// Nombre lógico del despliegue (clave en el registro).
    pub name: String,
    /// Contrato compilado que se desplegó bajo `name`.
    pub contract: String,
    pub address: Address,
    pub deployer: Address,
    /// Argumentos ya resueltos con los que se construyó.
    pub args: Vec<ArgValue>,
    pub fingerprint: String,
    pub tx_hash: B256,
    pub block_number: u64,
    pub deployed_at: DateTime<Utc>, // metadato (no entra en fingerprint)
}

impl DeploymentRecord {
    pub fn key(&self) -> (&str, &str) {
        (&self.network, &self.name)
    }
}

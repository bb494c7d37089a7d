//! Cadena simulada en memoria para redes de desarrollo.
//!
//! Direcciones estilo CREATE derivadas de `(red, deployer, nonce)` con
//! sha256, bloques crecientes y un registro de qué dirección tiene código.

use std::collections::HashMap;
use std::sync::Mutex;

use alloy_primitives::{Address, B256};
use async_trait::async_trait;
use deploy_core::{ChainBackend, DeployError, DeployReceipt, DeployRequest};
use indexmap::IndexMap;
use log::debug;
use sha2::{Digest, Sha256};

#[derive(Debug, Default)]
struct ChainState {
    block: u64,
    nonces: HashMap<(String, Address), u64>,
    code: IndexMap<Address, String>,
    history: Vec<DeployRequest>,
    failures: HashMap<String, String>,
}

#[derive(Debug, Default)]
pub struct SimulatedChain {
    state: Mutex<ChainState>,
}

impl SimulatedChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hace fallar cada despliegue de `contract` con `message`.
    pub fn fail_on(self, contract: impl Into<String>, message: impl Into<String>) -> Self {
        self.lock().failures.insert(contract.into(), message.into());
        self
    }

    pub fn clear_failures(&self) {
        self.lock().failures.clear();
    }

    /// Requests aceptados, en orden.
    pub fn history(&self) -> Vec<DeployRequest> {
        self.lock().history.clone()
    }

    pub fn block_number(&self) -> u64 {
        self.lock().block
    }

    /// Contrato desplegado en `address`, si hay código.
    pub fn code_at(&self, address: Address) -> Option<String> {
        self.lock().code.get(&address).cloned()
    }

    /// Borra el código en `address` (simula un reinicio del nodo local).
    pub fn wipe(&self, address: Address) {
        self.lock().code.shift_remove(&address);
    }

    pub fn reset(&self) {
        let mut state = self.lock();
        let failures = std::mem::take(&mut state.failures);
        *state = ChainState { failures, ..ChainState::default() };
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ChainState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn contract_address(network: &str, deployer: Address, nonce: u64) -> Address {
    let mut hasher = Sha256::new();
    hasher.update(network.as_bytes());
    hasher.update(deployer.as_slice());
    hasher.update(nonce.to_be_bytes());
    let digest: [u8; 32] = hasher.finalize().into();
    Address::from_slice(&digest[12..])
}

fn tx_hash(request: &DeployRequest, address: Address, block: u64) -> Result<B256, DeployError> {
    let args = serde_json::to_vec(&request.args).map_err(|e| DeployError::Internal(format!("args serialize: {e}")))?;
    let mut hasher = Sha256::new();
    hasher.update(address.as_slice());
    hasher.update(request.artifact.bytecode_hash.as_bytes());
    hasher.update(&args);
    hasher.update(block.to_be_bytes());
    let digest: [u8; 32] = hasher.finalize().into();
    Ok(B256::from(digest))
}

#[async_trait]
impl ChainBackend for SimulatedChain {
    async fn deploy_contract(&self, request: &DeployRequest) -> Result<DeployReceipt, DeployError> {
        let mut state = self.lock();
        if let Some(message) = state.failures.get(&request.artifact.contract) {
            return Err(DeployError::Backend(message.clone()));
        }

        let nonce_key = (request.network.clone(), request.from);
        let nonce = state.nonces.get(&nonce_key).copied().unwrap_or(0);
        let address = contract_address(&request.network, request.from, nonce);
        state.nonces.insert(nonce_key, nonce + 1);
        state.block += 1;
        let block_number = state.block;
        let tx_hash = tx_hash(request, address, block_number)?;

        state.code.insert(address, request.artifact.contract.clone());
        state.history.push(request.clone());
        debug!("[sim] {} {} -> {} (block {})", request.network, request.artifact.contract, address, block_number);
        Ok(DeployReceipt { address, tx_hash, block_number })
    }

    async fn has_code(&self, address: Address) -> Result<bool, DeployError> {
        Ok(self.lock().code.contains_key(&address))
    }
}

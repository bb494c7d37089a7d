//! Contexto entregado a cada step.
//!
//! Expone la red activa, las cuentas nombradas, la salida legible y la
//! primitiva `deploy` con semántica "redeplegar sólo si cambió".

use alloy_primitives::Address;
use chrono::Utc;
use log::debug;
use serde_json::json;
use uuid::Uuid;

use crate::backend::{ChainBackend, DeployRequest};
use crate::constants::ENGINE_VERSION;
use crate::errors::DeployError;
use crate::event::{DeployEventKind, EventStore};
use crate::hashing::hash_value;
use crate::output::DeployLog;
use crate::model::{resolve_args, ArgValue, ArtifactCatalog, ContractArtifact, DeploymentRecord, NamedAccounts,
                   NetworkContext};
use crate::registry::DeploymentRegistry;

/// Opciones de un despliegue puntual.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOptions {
    /// Contrato compilado; por defecto igual al nombre del despliegue.
    pub contract: Option<String>,
    pub from: Address,
    pub args: Vec<ArgValue>,
    /// Escribir progreso en la salida legible.
    pub log: bool,
}

impl DeployOptions {
    pub fn new(from: Address) -> Self {
        Self { contract: None,
               from,
               args: Vec::new(),
               log: false }
    }

    pub fn contract(mut self, contract: impl Into<String>) -> Self {
        self.contract = Some(contract.into());
        self
    }

    pub fn args(mut self, args: Vec<ArgValue>) -> Self {
        self.args = args;
        self
    }

    pub fn log(mut self, log: bool) -> Self {
        self.log = log;
        self
    }
}

pub struct DeployCtx<'a> {
    network: &'a NetworkContext,
    step_id: &'a str,
    run_id: Uuid,
    backend: &'a dyn ChainBackend,
    registry: &'a mut dyn DeploymentRegistry,
    events: &'a mut dyn EventStore,
    catalog: &'a ArtifactCatalog,
    accounts: &'a NamedAccounts,
    out: &'a dyn DeployLog,
    fingerprints: Vec<String>,
}

impl<'a> DeployCtx<'a> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(network: &'a NetworkContext,
                      step_id: &'a str,
                      run_id: Uuid,
                      backend: &'a dyn ChainBackend,
                      registry: &'a mut dyn DeploymentRegistry,
                      events: &'a mut dyn EventStore,
                      catalog: &'a ArtifactCatalog,
                      accounts: &'a NamedAccounts,
                      out: &'a dyn DeployLog)
                      -> Self {
        Self { network,
               step_id,
               run_id,
               backend,
               registry,
               events,
               catalog,
               accounts,
               out,
               fingerprints: Vec::new() }
    }

    pub fn network(&self) -> &NetworkContext {
        self.network
    }

    pub fn step_id(&self) -> &str {
        self.step_id
    }

    pub fn named_account(&self, name: &str) -> Result<Address, DeployError> {
        self.accounts.get(name)
    }

    /// Escribe una línea en la salida legible.
    pub fn log(&self, line: &str) {
        self.out.log(line);
    }

    /// Registro existente para `name` en la red activa.
    pub fn get(&self, name: &str) -> Result<Option<DeploymentRecord>, DeployError> {
        self.registry.get(&self.network.name, name)
    }

    /// Fingerprints de los despliegues hechos (o reutilizados) en este step.
    pub(crate) fn into_fingerprints(self) -> Vec<String> {
        self.fingerprints
    }

    /// Despliega `name` o reutiliza el registro existente si nada cambió.
    ///
    /// Los argumentos se resuelven antes de cualquier llamada al backend; un
    /// `DeploymentRef` sin registro aborta sin efectos. Errores del backend se
    /// devuelven tal cual.
    pub async fn deploy(&mut self, name: &str, options: DeployOptions) -> Result<DeploymentRecord, DeployError> {
        let contract = options.contract.as_deref().unwrap_or(name);
        let artifact = self.catalog.get(contract)?.clone();
        let network = self.network.name.clone();

        let registry = &*self.registry;
        let args = resolve_args(&options.args, |reference| {
            Ok(registry.get(&network, reference)?.map(|r| r.address))
        })?;
        let fingerprint = deployment_fingerprint(&artifact, options.from, &args)?;

        if let Some(existing) = self.registry.get(&network, name)? {
            if existing.fingerprint == fingerprint && self.backend.has_code(existing.address).await? {
                if options.log {
                    self.out.log(&format!("reusing \"{}\" at {}", name, existing.address));
                }
                debug!("[deploy] reuse {}@{} fp={}", name, network, fingerprint);
                self.events.append_kind(self.run_id,
                                        DeployEventKind::ContractReused { step_id: self.step_id.to_string(),
                                                                          name: name.to_string(),
                                                                          address: existing.address,
                                                                          fingerprint: fingerprint.clone() });
                self.fingerprints.push(fingerprint);
                return Ok(existing);
            }
        }

        let request = DeployRequest { network: network.clone(),
                                      artifact,
                                      from: options.from,
                                      args };
        let receipt = self.backend.deploy_contract(&request).await?;

        let record = DeploymentRecord { id: Uuid::new_v4(),
                                        network,
                                        name: name.to_string(),
                                        contract: request.artifact.contract.clone(),
                                        address: receipt.address,
                                        deployer: request.from,
                                        args: request.args,
                                        fingerprint: fingerprint.clone(),
                                        tx_hash: receipt.tx_hash,
                                        block_number: receipt.block_number,
                                        deployed_at: Utc::now() };
        self.registry.save(record.clone())?;

        if options.log {
            self.out.log(&format!("deploying \"{}\" (tx: {})...: deployed at {}",
                                  name, record.tx_hash, record.address));
        }
        debug!("[deploy] {}@{} -> {} fp={}", name, record.network, record.address, fingerprint);
        self.events.append_kind(self.run_id,
                                DeployEventKind::ContractDeployed { step_id: self.step_id.to_string(),
                                                                    name: name.to_string(),
                                                                    address: record.address,
                                                                    fingerprint: fingerprint.clone() });
        self.fingerprints.push(fingerprint);
        Ok(record)
    }
}

/// Identidad de un despliegue: mismo bytecode, mismo deployer y mismos
/// argumentos resueltos producen el mismo fingerprint.
pub fn deployment_fingerprint(artifact: &ContractArtifact,
                              from: Address,
                              args: &[ArgValue])
                              -> Result<String, DeployError> {
    let args_json = serde_json::to_value(args).map_err(|e| DeployError::Internal(format!("args serialize: {e}")))?;
    Ok(hash_value(&json!({
        "engine_version": ENGINE_VERSION,
        "contract": artifact.contract,
        "bytecode_hash": artifact.bytecode_hash,
        "deployer": from.to_string(),
        "args": args_json,
    })))
}

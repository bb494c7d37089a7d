//! Núcleo de `DeployEngine`.

use std::sync::Arc;

use log::{debug, warn};
use serde_json::json;
use uuid::Uuid;

use crate::backend::ChainBackend;
use crate::constants::ENGINE_VERSION;
use crate::engine::{DeployCtx, EngineBuilder};
use crate::errors::DeployError;
use crate::event::{DeployEvent, DeployEventKind, EventStore, InMemoryEventStore};
use crate::hashing::hash_value;
use crate::output::{DeployLog, StdoutLog};
use crate::model::{ArtifactCatalog, DeploymentRecord, NamedAccounts, NetworkContext};
use crate::registry::DeploymentRegistry;
use crate::step::{definition_hash, select_steps, DeployStep};

/// Runner de scripts de despliegue.
///
/// Ejecuta los steps seleccionados uno tras otro, en orden de declaración;
/// el primer error detiene la ejecución y se devuelve sin modificar. Lo ya
/// registrado por steps anteriores permanece en el registro (no hay
/// rollback).
pub struct DeployEngine<B, R, E = InMemoryEventStore> {
    backend: B,
    registry: R,
    event_store: E,
    catalog: ArtifactCatalog,
    accounts: NamedAccounts,
    log: Arc<dyn DeployLog>,
    steps: Vec<Box<dyn DeployStep>>,
}

impl<B, R> DeployEngine<B, R, InMemoryEventStore>
    where B: ChainBackend,
          R: DeploymentRegistry
{
    /// Crea un builder con store de eventos en memoria y salida a stdout.
    pub fn builder(backend: B, registry: R) -> EngineBuilder<B, R, InMemoryEventStore> {
        EngineBuilder { backend,
                        registry,
                        event_store: InMemoryEventStore::default(),
                        catalog: ArtifactCatalog::new(),
                        accounts: NamedAccounts::default(),
                        log: Arc::new(StdoutLog),
                        steps: Vec::new() }
    }
}

impl<B, R, E> DeployEngine<B, R, E>
    where B: ChainBackend,
          R: DeploymentRegistry,
          E: EventStore
{
    pub(crate) fn from_builder(b: EngineBuilder<B, R, E>) -> Self {
        Self { backend: b.backend,
               registry: b.registry,
               event_store: b.event_store,
               catalog: b.catalog,
               accounts: b.accounts,
               log: b.log,
               steps: b.steps }
    }

    /// Ejecuta los steps cuyas etiquetas coinciden con `tags` y devuelve el
    /// id de la ejecución.
    pub async fn run(&mut self, network: &NetworkContext, tags: &[&str]) -> Result<Uuid, DeployError> {
        let run_id = Uuid::new_v4();
        let selected = select_steps(&self.steps, tags);
        let ids: Vec<&str> = selected.iter().map(|i| self.steps[*i].id()).collect();
        let def_hash = definition_hash(&ids);
        debug!("[run {}] network={} tags={:?} steps={:?}", run_id, network.name, tags, ids);

        self.event_store
            .append_kind(run_id,
                         DeployEventKind::RunInitialized { network: network.name.clone(),
                                                           tags: tags.iter().map(|t| t.to_string()).collect(),
                                                           step_count: selected.len(),
                                                           definition_hash: def_hash.clone() });

        let mut step_fps: Vec<String> = Vec::with_capacity(selected.len());
        for index in selected {
            let step = &self.steps[index];
            let step_id = step.id().to_string();

            if step.skip(network) {
                self.event_store
                    .append_kind(run_id,
                                 DeployEventKind::StepSkipped { step_index: index,
                                                                step_id,
                                                                reason: format!("not applicable on '{}'", network.name) });
                continue;
            }

            self.event_store
                .append_kind(run_id, DeployEventKind::StepStarted { step_index: index, step_id: step_id.clone() });

            let mut ctx = DeployCtx::new(network,
                                         &step_id,
                                         run_id,
                                         &self.backend,
                                         &mut self.registry,
                                         &mut self.event_store,
                                         &self.catalog,
                                         &self.accounts,
                                         self.log.as_ref());
            let outcome = step.run(&mut ctx).await;
            let deployments = ctx.into_fingerprints();

            match outcome {
                Ok(()) => {
                    let fp = hash_value(&json!({
                        "engine_version": ENGINE_VERSION,
                        "definition_hash": def_hash,
                        "step_id": step_id,
                        "deployments": deployments,
                    }));
                    self.event_store.append_kind(run_id,
                                                 DeployEventKind::StepFinished { step_index: index,
                                                                                 step_id,
                                                                                 fingerprint: fp.clone() });
                    step_fps.push(fp);
                }
                Err(error) => {
                    warn!("[run {}] step '{}' failed: {}", run_id, step_id, error);
                    self.event_store.append_kind(run_id,
                                                 DeployEventKind::StepFailed { step_index: index,
                                                                               step_id,
                                                                               error: error.to_string() });
                    return Err(error);
                }
            }
        }

        let run_fp = hash_value(&json!({
            "engine_version": ENGINE_VERSION,
            "definition_hash": def_hash,
            "network": network.name,
            "step_fingerprints": step_fps,
        }));
        self.event_store
            .append_kind(run_id, DeployEventKind::RunCompleted { run_fingerprint: run_fp });
        Ok(run_id)
    }

    /// Igual que `run` pero restringido a redes de desarrollo; pensado para
    /// preparar el estado de tests.
    pub async fn fixture(&mut self, network: &NetworkContext, tags: &[&str]) -> Result<Uuid, DeployError> {
        if !network.is_development() {
            return Err(DeployError::FixtureOnLiveNetwork(network.name.clone()));
        }
        self.run(network, tags).await
    }

    /// Registro de `name` en `network`.
    pub fn deployment(&self, network: &str, name: &str) -> Result<Option<DeploymentRecord>, DeployError> {
        self.registry.get(network, name)
    }

    pub fn deployments(&self, network: &str) -> Result<Vec<DeploymentRecord>, DeployError> {
        self.registry.list(network)
    }

    pub fn events_for(&self, run_id: Uuid) -> Vec<DeployEvent> {
        self.event_store.list(run_id)
    }

    /// Secuencia compacta de eventos (ver `DeployEvent::code`).
    pub fn event_codes(&self, run_id: Uuid) -> String {
        self.events_for(run_id).iter().map(DeployEvent::code).collect()
    }

    /// Fingerprint agregado si la ejecución completó.
    pub fn run_fingerprint(&self, run_id: Uuid) -> Option<String> {
        self.events_for(run_id).iter().rev().find_map(|e| match &e.kind {
            DeployEventKind::RunCompleted { run_fingerprint } => Some(run_fingerprint.clone()),
            _ => None,
        })
    }

    pub fn step_ids(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.id()).collect()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut R {
        &mut self.registry
    }

    pub fn catalog_mut(&mut self) -> &mut ArtifactCatalog {
        &mut self.catalog
    }

    pub fn event_store(&self) -> &E {
        &self.event_store
    }
}

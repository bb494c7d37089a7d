//! Builder para `DeployEngine`.
//!
//! Backend y registro son obligatorios; el resto tiene defaults razonables
//! para una red local (store de eventos en memoria, cuentas del simulador,
//! salida a stdout). Los steps se agregan en el orden en que deben correr.
//!
//! ```ignore
//! let engine = DeployEngine::builder(SimulatedChain::new(), InMemoryDeploymentRegistry::new())
//!     .with_catalog(catalog)
//!     .add_step(MocksScript::new(config))
//!     .add_step(BasicNftScript::new())
//!     .build();
//! ```

use std::sync::Arc;

use crate::backend::ChainBackend;
use crate::engine::DeployEngine;
use crate::event::EventStore;
use crate::output::DeployLog;
use crate::model::{ArtifactCatalog, NamedAccounts};
use crate::registry::DeploymentRegistry;
use crate::step::DeployStep;

pub struct EngineBuilder<B, R, E> {
    pub(crate) backend: B,
    pub(crate) registry: R,
    pub(crate) event_store: E,
    pub(crate) catalog: ArtifactCatalog,
    pub(crate) accounts: NamedAccounts,
    pub(crate) log: Arc<dyn DeployLog>,
    pub(crate) steps: Vec<Box<dyn DeployStep>>,
}

impl<B, R, E> EngineBuilder<B, R, E>
    where B: ChainBackend,
          R: DeploymentRegistry,
          E: EventStore
{
    /// Reemplaza el store de eventos (cambia el tipo del builder).
    pub fn with_event_store<E2: EventStore>(self, event_store: E2) -> EngineBuilder<B, R, E2> {
        EngineBuilder { backend: self.backend,
                        registry: self.registry,
                        event_store,
                        catalog: self.catalog,
                        accounts: self.accounts,
                        log: self.log,
                        steps: self.steps }
    }

    pub fn with_catalog(mut self, catalog: ArtifactCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_accounts(mut self, accounts: NamedAccounts) -> Self {
        self.accounts = accounts;
        self
    }

    pub fn with_log(mut self, log: impl DeployLog + 'static) -> Self {
        self.log = Arc::new(log);
        self
    }

    pub fn with_shared_log(mut self, log: Arc<dyn DeployLog>) -> Self {
        self.log = log;
        self
    }

    pub fn add_step(mut self, step: impl DeployStep + 'static) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    pub fn add_steps(mut self, steps: impl IntoIterator<Item = Box<dyn DeployStep>>) -> Self {
        self.steps.extend(steps);
        self
    }

    pub fn build(self) -> DeployEngine<B, R, E> {
        DeployEngine::from_builder(self)
    }
}

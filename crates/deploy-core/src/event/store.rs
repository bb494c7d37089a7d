use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use super::{DeployEvent, DeployEventKind};

/// Almacenamiento de eventos append-only.
pub trait EventStore: Send + Sync {
    /// Agrega un evento a partir de su kind y devuelve el evento completo (con seq y ts).
    fn append_kind(&mut self, run_id: Uuid, kind: DeployEventKind) -> DeployEvent;
    /// Lista eventos de una ejecución (orden ascendente por seq).
    fn list(&self, run_id: Uuid) -> Vec<DeployEvent>;
}

#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    pub inner: HashMap<Uuid, Vec<DeployEvent>>,
}

impl EventStore for InMemoryEventStore {
    fn append_kind(&mut self, run_id: Uuid, kind: DeployEventKind) -> DeployEvent {
        let events = self.inner.entry(run_id).or_default();
        let ev = DeployEvent { seq: events.len() as u64,
                               run_id,
                               kind,
                               ts: Utc::now() };
        events.push(ev.clone());
        ev
    }

    fn list(&self, run_id: Uuid) -> Vec<DeployEvent> {
        self.inner.get(&run_id).cloned().unwrap_or_default()
    }
}

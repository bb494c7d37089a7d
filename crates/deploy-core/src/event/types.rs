//! Tipos de evento de una ejecución de despliegue.
//!
//! Cada `DeployEngine::run` emite eventos a un `EventStore` append-only. El
//! registro guarda el estado; el journal guarda cómo se llegó a él (qué steps
//! corrieron, cuáles se saltaron, qué se reutilizó y dónde se detuvo).
use alloy_primitives::Address;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DeployEventKind {
    /// Primer evento de un `run_id`.
    RunInitialized {
        network: String,
        tags: Vec<String>,
        step_count: usize,
        definition_hash: String,
    },
    StepStarted { step_index: usize, step_id: String },
    /// El step declaró que no aplica a la red activa.
    StepSkipped { step_index: usize, step_id: String, reason: String },
    ContractDeployed {
        step_id: String,
        name: String,
        address: Address,
        fingerprint: String,
    },
    /// Fingerprint sin cambios y código presente: no se redepliega.
    ContractReused {
        step_id: String,
        name: String,
        address: Address,
        fingerprint: String,
    },
    StepFinished { step_index: usize, step_id: String, fingerprint: String },
    /// Error terminal; la ejecución no continúa (fail-fast).
    StepFailed { step_index: usize, step_id: String, error: String },
    /// Cierre con fingerprint agregado de los steps terminados.
    RunCompleted { run_fingerprint: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeployEvent {
    pub seq: u64, // asignado por el store (orden append)
    pub run_id: Uuid,
    pub kind: DeployEventKind,
    pub ts: DateTime<Utc>, // metadato (no entra en fingerprint)
}

impl DeployEvent {
    /// Código de una letra, útil para comparar secuencias en tests.
    pub fn code(&self) -> &'static str {
        match self.kind {
            DeployEventKind::RunInitialized { .. } => "I",
            DeployEventKind::StepStarted { .. } => "S",
            DeployEventKind::StepSkipped { .. } => "K",
            DeployEventKind::ContractDeployed { .. } => "D",
            DeployEventKind::ContractReused { .. } => "R",
            DeployEventKind::StepFinished { .. } => "F",
            DeployEventKind::StepFailed { .. } => "X",
            DeployEventKind::RunCompleted { .. } => "C",
        }
    }
}

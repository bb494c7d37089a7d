//! deploy-core: runner determinista de scripts de despliegue.
//!
//! El core no sabe qué contratos existen ni cómo habla la cadena: recibe
//! steps etiquetados, un backend (`ChainBackend`) y un registro
//! (`DeploymentRegistry`), y garantiza orden de ejecución, resolución de
//! argumentos, reutilización de despliegues sin cambios y un journal
//! append-only de cada ejecución.
pub mod backend;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod event;
pub mod hashing;
pub mod output;
pub mod model;
pub mod registry;
pub mod step;

pub use backend::{ChainBackend, DeployReceipt, DeployRequest};
pub use engine::{DeployCtx, DeployEngine, DeployOptions, EngineBuilder};
pub use errors::DeployError;
pub use event::{DeployEvent, DeployEventKind, EventStore, InMemoryEventStore};
pub use output::{DeployLog, MemoryLog, SilentLog, StdoutLog};
pub use model::{Amount, AmountError, ArgValue, ArtifactCatalog, ContractArtifact, DeploymentRecord, DevelopmentChains,
                NamedAccounts, NetworkContext};
pub use registry::{DeploymentRegistry, InMemoryDeploymentRegistry};
pub use step::DeployStep;

// Re-export para que los crates que implementan steps no dependan de la
// versión exacta de alloy.
pub use alloy_primitives::{Address, B256, U256};
pub use async_trait::async_trait;

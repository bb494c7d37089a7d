//! Modelos neutrales (argumentos, montos, red, registros, artifacts).

pub mod accounts;
pub mod amount;
pub mod args;
pub mod artifact;
pub mod network;
pub mod record;

pub use accounts::{NamedAccounts, LOCAL_DEPLOYER};
pub use amount::{parse_fixed, Amount, AmountError};
pub use args::{args_resolved, resolve_args, ArgValue};
pub use artifact::{ArtifactCatalog, ContractArtifact};
pub use network::{DevelopmentChains, NetworkContext};
pub use record::DeploymentRecord;

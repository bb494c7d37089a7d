//! deployflow
//!
//! Fachada del workspace: re-exporta los crates `deploy-*` y arma el motor
//! tal como lo usa un proyecto en una red de desarrollo.
//!
//! - `core`: motor, steps, registro y journal.
//! - `policies`: mocks condicionales y clasificación de fallos de verificación.
//! - `adapters`: verificador, cadena simulada, catálogo y scripts del proyecto.
//! - `persistence`: configuración y registro en disco.

pub use deploy_adapters as adapters;
pub use deploy_core as core;
pub use deploy_persistence as persistence;
pub use deploy_policies as policies;

use deploy_adapters::{builtin_catalog, project_scripts, SimulatedChain, Verifier};
use deploy_core::{AmountError, DeployEngine, DeployLog, DevelopmentChains, InMemoryDeploymentRegistry};
use deploy_policies::MockConfig;

/// Motor en memoria sobre la cadena simulada con los scripts del proyecto.
pub type LocalEngine = DeployEngine<SimulatedChain, InMemoryDeploymentRegistry>;

/// Motor listo para `run` / `fixture` sin tocar disco.
pub fn local_engine(config: &MockConfig,
                    verifier: Option<Verifier>,
                    log: impl DeployLog + 'static)
                    -> Result<LocalEngine, AmountError> {
    let scripts = project_scripts(config, DevelopmentChains::default(), verifier)?;
    Ok(DeployEngine::builder(SimulatedChain::new(), InMemoryDeploymentRegistry::new()).with_catalog(builtin_catalog())
                                                                                       .with_log(log)
                                                                                       .add_steps(scripts)
                                                                                       .build())
}
